#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use core::array;
use core::fmt;
use core::ops::Range;

////////////////////////////////////////////////////////////////////////////////////////////////////
// free functions
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Validates the half-open range `[start, end)` against a sequence of length
/// `len` and returns it as a [`Range`].
///
/// # Errors
///
/// Fails with [`SliceError::OutOfRange`] if `start >= len` or `end > len` and
/// with [`SliceError::InvalidRange`] if `start >= end`.
/// Note that empty ranges (`start == end`) are rejected as well.
///
/// # Examples
///
/// ```
/// use conquer_prim::{check_bounds, SliceError};
///
/// assert_eq!(check_bounds(10, 2, 5), Ok(2..5));
/// assert_eq!(check_bounds(10, 4, 4), Err(SliceError::InvalidRange { start: 4, end: 4 }));
/// ```
#[inline]
pub fn check_bounds(len: usize, start: usize, end: usize) -> Result<Range<usize>, SliceError> {
    if start >= len || end > len {
        return Err(SliceError::OutOfRange { start, end, len });
    }

    if start >= end {
        return Err(SliceError::InvalidRange { start, end });
    }

    Ok(start..end)
}

/// Copies the elements in `[start, end)` of the array `src` into a new array
/// of length `M`.
///
/// The input is never modified and the returned array does not alias it.
///
/// # Errors
///
/// Fails with [`SliceError::OutOfRange`] or [`SliceError::InvalidRange`] as
/// described for [`check_bounds`] and with [`SliceError::LengthMismatch`] if
/// `end - start` differs from `M`.
///
/// # Examples
///
/// ```
/// use conquer_prim::{slice_array, SliceError};
///
/// let arr = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
///
/// let slice: [i32; 3] = slice_array(&arr, 2, 5)?;
/// assert_eq!(slice, [3, 4, 5]);
///
/// let res: Result<[i32; 3], _> = slice_array(&arr, 14, 16);
/// assert_eq!(res, Err(SliceError::OutOfRange { start: 14, end: 16, len: 10 }));
/// # Ok::<(), SliceError>(())
/// ```
#[inline]
pub fn slice_array<T: Clone, const N: usize, const M: usize>(
    src: &[T; N],
    start: usize,
    end: usize,
) -> Result<[T; M], SliceError> {
    slice_from(&src[..], start, end)
}

/// Copies the elements in `[start, end)` of the slice `src` into a new array
/// of length `M`.
///
/// This behaves exactly like [`slice_array`], except that the length of the
/// input is only known at runtime.
///
/// # Errors
///
/// See [`slice_array`].
#[inline]
pub fn slice_from<T: Clone, const M: usize>(
    src: &[T],
    start: usize,
    end: usize,
) -> Result<[T; M], SliceError> {
    let range = check_bounds(src.len(), start, end)?;
    let actual = range.end - range.start;
    if actual != M {
        return Err(SliceError::LengthMismatch { expected: M, actual });
    }

    let sub = &src[range];
    Ok(array::from_fn(|idx| sub[idx].clone()))
}

/// Copies the elements in `[start, end)` of the slice `src` into a new
/// [`Vec`].
///
/// # Errors
///
/// See [`check_bounds`].
///
/// # Examples
///
/// ```
/// use conquer_prim::slice_to_vec;
///
/// let src = ["a", "b", "c", "d"];
/// assert_eq!(slice_to_vec(&src, 1, 3), Ok(vec!["b", "c"]));
/// assert!(slice_to_vec(&src, 3, 3).is_err());
/// ```
#[cfg(any(feature = "alloc", feature = "std"))]
#[inline]
pub fn slice_to_vec<T: Clone>(src: &[T], start: usize, end: usize) -> Result<Vec<T>, SliceError> {
    let range = check_bounds(src.len(), start, end)?;
    Ok(src[range].to_vec())
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// SliceArray
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Method syntax for [`slice_from`] on arrays and slices.
///
/// # Examples
///
/// ```
/// use conquer_prim::SliceArray;
///
/// let arr = [1u8, 2, 3, 4, 5];
/// let head = arr.slice_array::<2>(0, 2).unwrap();
/// let tail = arr[1..].slice_array::<2>(2, 4).unwrap();
/// assert_eq!(head, [1, 2]);
/// assert_eq!(tail, [4, 5]);
/// ```
pub trait SliceArray<T> {
    /// Copies the elements in `[start, end)` into a new array of length `M`.
    ///
    /// # Errors
    ///
    /// See [`slice_array`].
    fn slice_array<const M: usize>(&self, start: usize, end: usize) -> Result<[T; M], SliceError>;
}

/********** impl SliceArray ***********************************************************************/

impl<T: Clone, const N: usize> SliceArray<T> for [T; N] {
    #[inline]
    fn slice_array<const M: usize>(&self, start: usize, end: usize) -> Result<[T; M], SliceError> {
        slice_from(&self[..], start, end)
    }
}

impl<T: Clone> SliceArray<T> for [T] {
    #[inline]
    fn slice_array<const M: usize>(&self, start: usize, end: usize) -> Result<[T; M], SliceError> {
        slice_from(self, start, end)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// SliceError
////////////////////////////////////////////////////////////////////////////////////////////////////

/// An error for signalling an invalid sub-range request.
#[derive(Copy, Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum SliceError {
    /// The range exceeds the bounds of the source sequence.
    OutOfRange {
        /// The requested (inclusive) start index.
        start: usize,
        /// The requested (exclusive) end index.
        end: usize,
        /// The length of the source sequence.
        len: usize,
    },
    /// The range is empty or reversed, i.e. `start >= end`.
    InvalidRange {
        /// The requested (inclusive) start index.
        start: usize,
        /// The requested (exclusive) end index.
        end: usize,
    },
    /// The range length does not match the length of the output array.
    LengthMismatch {
        /// The length of the output array.
        expected: usize,
        /// The length of the requested range.
        actual: usize,
    },
}

/********** impl Display **************************************************************************/

impl fmt::Display for SliceError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SliceError::OutOfRange { start, end, len } => {
                write!(f, "range [{}, {}) out of bounds for length {}", start, end, len)
            }
            SliceError::InvalidRange { start, end } => {
                write!(f, "invalid range [{}, {}) (start must be less than end)", start, end)
            }
            SliceError::LengthMismatch { expected, actual } => {
                write!(f, "range length {} does not match output length {}", actual, expected)
            }
        }
    }
}

/********** impl Error ****************************************************************************/

#[cfg(feature = "std")]
impl std::error::Error for SliceError {}
