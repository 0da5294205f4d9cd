use super::backend::SessionStorage;
use crate::error::{RegbookError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory session storage for testing.
///
/// Uses `RefCell` since everything runs on one thread, which keeps the
/// `SessionStorage` methods on `&self`.
#[derive(Default)]
pub struct MemSessionStorage {
    items: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemSessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to plant an arbitrary blob, bypassing any serialization.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn raw_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Number of successful `set_item` calls so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl SessionStorage for MemSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(RegbookError::Store("Simulated write error".to_string()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
