use core::fmt;
use core::hint;
use core::sync::atomic::{AtomicBool, Ordering};

////////////////////////////////////////////////////////////////////////////////////////////////////
// SpinLock
////////////////////////////////////////////////////////////////////////////////////////////////////

/// A mutual exclusion primitive based on a single atomic flag, which
/// busy-waits until it can be acquired.
///
/// A [`SpinLock`] never parks or yields the waiting thread and grants no
/// fairness, so it is only suitable for very short critical sections.
/// It does not protect any data by itself, see [`SpinMutex`][crate::SpinMutex]
/// for a lock that does.
///
/// A lock must be shared by reference and can not be cloned:
///
/// ```compile_fail
/// use conquer_prim::SpinLock;
///
/// let lock = SpinLock::new();
/// let copy = lock.clone();
/// ```
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::thread;
///
/// use conquer_prim::SpinLock;
///
/// static LOCK: SpinLock = SpinLock::new();
/// static COUNT: AtomicUsize = AtomicUsize::new(0);
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         thread::spawn(|| {
///             let _guard = LOCK.guard();
///             let curr = COUNT.load(Ordering::Relaxed);
///             COUNT.store(curr + 1, Ordering::Relaxed);
///         })
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(COUNT.load(Ordering::Relaxed), 4);
/// ```
#[derive(Default)]
pub struct SpinLock {
    locked: AtomicBool,
}

/********** impl inherent *************************************************************************/

impl SpinLock {
    /// Creates a new unlocked [`SpinLock`].
    #[inline]
    pub const fn new() -> Self {
        Self { locked: AtomicBool::new(false) }
    }

    /// Acquires the lock, spinning until it becomes available.
    ///
    /// Locking a [`SpinLock`] that is already held by the calling thread
    /// spins forever.
    #[inline]
    pub fn lock(&self) {
        while self.locked.swap(true, Ordering::Acquire) {
            hint::spin_loop();
        }
    }

    /// Attempts to acquire the lock without waiting and returns `true` on
    /// success.
    #[inline]
    pub fn try_lock(&self) -> bool {
        !self.locked.swap(true, Ordering::Acquire)
    }

    /// Releases the lock.
    ///
    /// The lock is released unconditionally, regardless of which thread (if
    /// any) currently holds it.
    #[inline]
    pub fn unlock(&self) {
        self.locked.store(false, Ordering::Release);
    }

    /// Returns `true` if the lock is currently held.
    ///
    /// The result is a snapshot and may already be outdated when it is
    /// returned.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }

    /// Acquires the lock and returns a [`SpinGuard`] that releases it when
    /// dropped.
    #[inline]
    pub fn guard(&self) -> SpinGuard<'_> {
        self.lock();
        SpinGuard { lock: self }
    }

    /// Attempts to acquire the lock without waiting and returns a
    /// [`SpinGuard`] on success.
    #[inline]
    pub fn try_guard(&self) -> Option<SpinGuard<'_>> {
        if self.try_lock() {
            Some(SpinGuard { lock: self })
        } else {
            None
        }
    }
}

/********** impl Debug ****************************************************************************/

impl fmt::Debug for SpinLock {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SpinLock").field("locked", &self.is_locked()).finish()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// SpinGuard
////////////////////////////////////////////////////////////////////////////////////////////////////

/// An RAII guard that releases the [`SpinLock`] it was created from when it
/// is dropped.
#[must_use = "if unused the lock will be released immediately"]
pub struct SpinGuard<'a> {
    lock: &'a SpinLock,
}

/********** impl Debug ****************************************************************************/

impl fmt::Debug for SpinGuard<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SpinGuard").finish()
    }
}

/********** impl Drop *****************************************************************************/

impl Drop for SpinGuard<'_> {
    #[inline]
    fn drop(&mut self) {
        self.lock.unlock();
    }
}
