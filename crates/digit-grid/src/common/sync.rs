use std::sync::Mutex;
use std::sync::MutexGuard;
use tracing::error;

/// Locks the page, recovering it if a refresh panicked mid-apply. The grid
/// may then hold a mix of two digits until the next refresh lands.
pub fn mutex_lock_or_recover<T>(lock: &Mutex<T>) -> MutexGuard<'_, T> {
    lock.lock().unwrap_or_else(|poisoned| {
        error!("Page lock poisoned by a panicking refresh; recovering last written state");
        poisoned.into_inner()
    })
}
