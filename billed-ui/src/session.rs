use std::cell::RefCell;
use std::collections::HashMap;

use billed_types::Session;

/// Synchronous key-value storage holding the session record
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Read and decode the session stored under `key`
pub fn read_session(store: &dyn SessionStore, key: &str) -> Option<Session> {
    let raw = store.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            dioxus_logger::tracing::warn!("Ignoring malformed session under '{}': {}", key, e);
            None
        }
    }
}

pub fn write_session(store: &dyn SessionStore, key: &str, session: &Session) {
    match serde_json::to_string(session) {
        Ok(raw) => store.set_item(key, &raw),
        Err(e) => dioxus_logger::tracing::error!("Failed to serialize session: {}", e),
    }
}

/// In-memory storage for hosts without `localStorage`
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
