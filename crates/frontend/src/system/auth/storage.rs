//! Key/value persistence for the session.

use web_sys::window;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// Browser `localStorage`. Writes are visible to other tabs through the
/// `storage` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("localStorage is not available")?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("Failed to write {}: {:?}", key, e))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    use super::KeyValueStore;

    /// In-memory store; clones share the same map, like tabs share
    /// `localStorage`.
    #[derive(Clone, Default)]
    pub struct MemoryStore {
        map: Rc<RefCell<BTreeMap<String, String>>>,
        pub fail_writes: Rc<RefCell<bool>>,
    }

    impl MemoryStore {
        pub fn contains(&self, key: &str) -> bool {
            self.map.borrow().contains_key(key)
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.map.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            if *self.fail_writes.borrow() {
                return Err("quota exceeded".to_string());
            }
            self.map.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) {
            self.map.borrow_mut().remove(key);
        }
    }
}
