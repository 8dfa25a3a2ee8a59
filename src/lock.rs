//! Convenience for callers that already share a map behind a lock.
//!
//! The caller owns the lock and chooses when to share it; these helpers only
//! keep it held across lookup, removal and the callback.

use parking_lot::{Mutex, MutexGuard, RwLock, RwLockWriteGuard};

use crate::error::Result;
use crate::extract::RemoveAndProcess;
use crate::map::SequentialMap;

/// Lock `lock`, extract `key` and run `callback`, then return the held guard.
///
/// On error the guard is released before returning.
pub fn extract_and_remove_locked<'a, K, V, M, F, R>(
    lock: &'a Mutex<M>,
    key: &K,
    callback: F,
) -> Result<MutexGuard<'a, M>>
where
    M: SequentialMap<K, V>,
    F: FnOnce(V) -> R,
{
    let mut guard = lock.lock();
    (*guard).remove_and_process(key, callback)?;

    Ok(guard)
}

/// [`extract_and_remove_locked`] for a map behind a `RwLock`; takes the write lock.
pub fn extract_and_remove_write<'a, K, V, M, F, R>(
    lock: &'a RwLock<M>,
    key: &K,
    callback: F,
) -> Result<RwLockWriteGuard<'a, M>>
where
    M: SequentialMap<K, V>,
    F: FnOnce(V) -> R,
{
    let mut guard = lock.write();
    (*guard).remove_and_process(key, callback)?;

    Ok(guard)
}
