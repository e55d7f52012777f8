use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The key/value map itself. Only reachable through a [`Store`] guard, so
/// every lookup happens under the shared lock and every upsert under the
/// exclusive one.
#[derive(Debug, Default)]
pub struct Entries {
    map: HashMap<String, String>,
}

impl Entries {
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    pub fn upsert(&mut self, key: String, value: String) {
        self.map.insert(key, value);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// In-memory string store guarded by a single reader/writer lock.
///
/// Entries are never removed and live as long as the store does.
#[derive(Debug, Default)]
pub struct Store {
    inner: RwLock<Entries>,
}

impl Store {
    pub fn new() -> Store {
        Store {
            inner: RwLock::new(Entries::default()),
        }
    }

    /// Shared access. Any number of readers may hold this at once.
    ///
    /// A writer that panicked cannot leave `Entries` half-updated (a single
    /// `HashMap::insert`), so a poisoned lock is recovered rather than
    /// propagated.
    pub fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Exclusive access. Blocks until all readers and writers have released.
    pub fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
