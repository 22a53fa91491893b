use core::cell::UnsafeCell;
use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::spin::SpinLock;

////////////////////////////////////////////////////////////////////////////////////////////////////
// SpinMutex
////////////////////////////////////////////////////////////////////////////////////////////////////

/// A value of type `T` protected by a [`SpinLock`].
///
/// The value is only accessible through a [`SpinMutexGuard`], which holds the
/// lock for as long as it lives.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
///
/// use conquer_prim::SpinMutex;
///
/// const THREADS: usize = 4;
/// let counter = Arc::new(SpinMutex::new(0usize));
///
/// let handles: Vec<_> = (0..THREADS)
///     .map(|_| {
///         let counter = Arc::clone(&counter);
///         thread::spawn(move || {
///             for _ in 0..1_000 {
///                 *counter.lock() += 1;
///             }
///         })
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// let counter = Arc::try_unwrap(counter).unwrap();
/// assert_eq!(counter.into_inner(), THREADS * 1_000);
/// ```
#[derive(Default)]
pub struct SpinMutex<T> {
    lock: SpinLock,
    value: UnsafeCell<T>,
}

/********** impl Send + Sync **********************************************************************/

unsafe impl<T: Send> Send for SpinMutex<T> {}
unsafe impl<T: Send> Sync for SpinMutex<T> {}

/********** impl inherent *************************************************************************/

impl<T> SpinMutex<T> {
    /// Creates a new unlocked [`SpinMutex`] wrapping `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { lock: SpinLock::new(), value: UnsafeCell::new(value) }
    }

    /// Acquires the lock, spinning until it becomes available.
    #[inline]
    pub fn lock(&self) -> SpinMutexGuard<'_, T> {
        self.lock.lock();
        SpinMutexGuard { mutex: self }
    }

    /// Attempts to acquire the lock without waiting.
    #[inline]
    pub fn try_lock(&self) -> Option<SpinMutexGuard<'_, T>> {
        if self.lock.try_lock() {
            Some(SpinMutexGuard { mutex: self })
        } else {
            None
        }
    }

    /// Returns `true` if the lock is currently held.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Returns a mutable reference to the wrapped value.
    ///
    /// No locking is required, since the exclusive borrow guarantees that no
    /// guard can be alive.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }

    /// Consumes the [`SpinMutex`] and returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

/********** impl From *****************************************************************************/

impl<T> From<T> for SpinMutex<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/********** impl Debug ****************************************************************************/

impl<T: fmt::Debug> fmt::Debug for SpinMutex<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.try_lock() {
            Some(guard) => f.debug_struct("SpinMutex").field("value", &&*guard).finish(),
            None => {
                struct Locked;
                impl fmt::Debug for Locked {
                    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        f.write_str("<locked>")
                    }
                }

                f.debug_struct("SpinMutex").field("value", &Locked).finish()
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// SpinMutexGuard
////////////////////////////////////////////////////////////////////////////////////////////////////

/// An RAII guard granting exclusive access to the value inside a
/// [`SpinMutex`].
///
/// The lock is released when the guard is dropped.
#[must_use = "if unused the lock will be released immediately"]
pub struct SpinMutexGuard<'a, T> {
    mutex: &'a SpinMutex<T>,
}

/********** impl Send + Sync **********************************************************************/

unsafe impl<T: Sync> Sync for SpinMutexGuard<'_, T> {}

/********** impl Deref ****************************************************************************/

impl<T> Deref for SpinMutexGuard<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        // the guard holds the lock, so no other reference to the value exists
        unsafe { &*self.mutex.value.get() }
    }
}

/********** impl DerefMut *************************************************************************/

impl<T> DerefMut for SpinMutexGuard<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *self.mutex.value.get() }
    }
}

/********** impl Debug ****************************************************************************/

impl<T: fmt::Debug> fmt::Debug for SpinMutexGuard<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SpinMutexGuard").field("value", &**self).finish()
    }
}

/********** impl Display **************************************************************************/

impl<T: fmt::Display> fmt::Display for SpinMutexGuard<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

/********** impl Drop *****************************************************************************/

impl<T> Drop for SpinMutexGuard<'_, T> {
    #[inline]
    fn drop(&mut self) {
        self.mutex.lock.unlock();
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::format;
    use std::sync::Arc;
    use std::thread;
    use std::vec::Vec;

    use super::SpinMutex;

    #[test]
    fn guard_grants_exclusive_access() {
        let mutex = SpinMutex::new(Vec::new());
        {
            let mut guard = mutex.lock();
            guard.push(1);
            assert!(mutex.is_locked());
            assert!(mutex.try_lock().is_none());
        }

        assert!(!mutex.is_locked());
        mutex.try_lock().unwrap().push(2);
        assert_eq!(mutex.into_inner(), [1, 2]);
    }

    #[test]
    fn get_mut_without_locking() {
        let mut mutex = SpinMutex::from(1);
        *mutex.get_mut() += 1;
        assert_eq!(*mutex.lock(), 2);
    }

    #[test]
    fn debug_does_not_spin() {
        let mutex = SpinMutex::new(7);
        assert_eq!(format!("{:?}", mutex), "SpinMutex { value: 7 }");

        let guard = mutex.lock();
        assert_eq!(format!("{:?}", mutex), "SpinMutex { value: <locked> }");
        assert_eq!(format!("{}", guard), "7");
    }

    #[test]
    fn contended_counter() {
        const THREADS: usize = 2;
        const ITERATIONS: usize = 1_000_000;

        let counter = Arc::new(SpinMutex::new(0usize));
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    for _ in 0..ITERATIONS {
                        *counter.lock() += 1;
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let counter = Arc::try_unwrap(counter).unwrap();
        assert_eq!(counter.into_inner(), THREADS * ITERATIONS);
    }
}
