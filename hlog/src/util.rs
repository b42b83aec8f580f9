use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a mutex even if a previous holder panicked.
///
/// A custom handler that panics mid-write poisons the logger's guard; the
/// guarded state (handler, buffer, file sink) stays usable, so logging carries
/// on instead of failing every later call.
pub trait LockOrRecover<T> {
    fn lock_or_recover(&self) -> MutexGuard<'_, T>;
}

impl<T> LockOrRecover<T> for Mutex<T> {
    fn lock_or_recover(&self) -> MutexGuard<'_, T> {
        self.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
