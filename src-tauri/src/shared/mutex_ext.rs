//! Usage: Mutex helpers for Tauri-managed state containers.

use std::sync::{Mutex, MutexGuard};

pub(crate) trait MutexExt<T> {
    /// Locks the mutex, recovering the inner value if a previous holder
    /// panicked. Registry and snapshot state stay usable after a poisoned
    /// lock instead of taking the whole app down.
    fn lock_or_recover(&self) -> MutexGuard<'_, T>;
}

impl<T> MutexExt<T> for Mutex<T> {
    fn lock_or_recover(&self) -> MutexGuard<'_, T> {
        match self.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("mutex poisoned; recovering inner value");
                poisoned.into_inner()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_or_recover_returns_value_after_poison() {
        let mutex = std::sync::Arc::new(Mutex::new(7_u32));

        let for_panic = mutex.clone();
        let _ = std::thread::spawn(move || {
            let _guard = for_panic.lock().expect("first lock");
            panic!("poison the mutex");
        })
        .join();

        assert!(mutex.is_poisoned());
        assert_eq!(*mutex.lock_or_recover(), 7);
    }
}
