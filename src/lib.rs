//! Minimal primitives for bounds-checked array slicing and busy-waiting
//! mutual exclusion.
//!
//! This crate provides fine-grained control over its contents through cargo
//! feature flags:
//!
//! # `#![no_std]` Compatibility
//!
//! By default, `conquer-prim` enables the `std` feature, which links against
//! the standard library.
//! Disabling this feature allows this crate to be used in `#![no_std]`
//! environments.
//! If the targeted environment does not allow using `std` features but provides
//! the means for dynamic memory allocation, the `alloc` feature can be used to
//! enable additional functionality.
//! Note that the `std` feature implicitly activates all `alloc` features as
//! well.
//!
//! # Features
//!
//! The following utilities are provided when compiling this crate with the
//! appropriate feature flags:
//!
//! ## Slice
//!
//! When the `slice` feature is enabled (it is by default), the
//! [`slice_array`][crate::slice_array] function and its relatives copy a
//! contiguous sub-range `[start, end)` out of a fixed-size array into a new
//! fixed-size array.
//! Bounds are validated at call time and violations are reported as a
//! [`SliceError`][crate::SliceError] instead of panicking.
//! With `alloc` (or `std`), [`slice_to_vec`][crate::slice_to_vec] offers the
//! same checks for outputs whose length is only known at runtime.
//!
//! ## Spin
//!
//! When the `spin` feature is enabled (it is by default), the
//! [`SpinLock`][crate::SpinLock] type provides a mutual exclusion primitive
//! built on a single atomic flag, which busy-waits instead of blocking in the
//! OS.
//! The [`SpinMutex`][crate::SpinMutex] type wraps a value behind a
//! [`SpinLock`][crate::SpinLock] and only grants access through an RAII guard.
//! Both types can be used in their entirety in a `#![no_std]` environment.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(feature = "spin")]
mod mutex;
#[cfg(feature = "slice")]
mod slice;
#[cfg(feature = "spin")]
mod spin;

#[cfg(feature = "spin")]
pub use crate::mutex::{SpinMutex, SpinMutexGuard};
#[cfg(all(feature = "slice", any(feature = "alloc", feature = "std")))]
pub use crate::slice::slice_to_vec;
#[cfg(feature = "slice")]
pub use crate::slice::{check_bounds, slice_array, slice_from, SliceArray, SliceError};
#[cfg(feature = "spin")]
pub use crate::spin::{SpinGuard, SpinLock};
