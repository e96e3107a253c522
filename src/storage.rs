use paint_core::{ConfigError, MemoryStorage, Storage};
use web_sys as web;

/// [`Storage`] backed by `window.localStorage`.
pub struct LocalStorage {
    inner: web::Storage,
}

impl LocalStorage {
    pub fn open(window: &web::Window) -> Option<Self> {
        window
            .local_storage()
            .ok()
            .flatten()
            .map(|inner| Self { inner })
    }
}

fn js_err(op: &str, e: wasm_bindgen::JsValue) -> ConfigError {
    ConfigError::Storage(format!("{}: {:?}", op, e))
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        self.inner.get_item(key).map_err(|e| js_err("getItem", e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.inner.set_item(key, value).map_err(|e| js_err("setItem", e))
    }

    fn remove(&mut self, key: &str) -> Result<(), ConfigError> {
        self.inner.remove_item(key).map_err(|e| js_err("removeItem", e))
    }
}

/// `localStorage` when the browser allows it, otherwise a session-only store.
pub fn open(window: &web::Window) -> Box<dyn Storage> {
    match LocalStorage::open(window) {
        Some(s) => Box::new(s),
        None => {
            log::warn!("[storage] localStorage unavailable; saves last for this tab only");
            Box::new(MemoryStorage::new())
        }
    }
}
