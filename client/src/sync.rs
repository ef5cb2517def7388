use std::sync::{Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::warn;

// A listener that panicked must not take the whole client down with it.

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        warn!("Recovering client lock poisoned by a panicking listener");
        PoisonError::into_inner(poisoned)
    })
}

pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| {
        warn!("Recovering client index lock poisoned by a panicking listener");
        PoisonError::into_inner(poisoned)
    })
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| {
        warn!("Recovering client index lock poisoned by a panicking listener");
        PoisonError::into_inner(poisoned)
    })
}
