//! Persistent key-value access for the product cache and favorite ids.
//!
//! Both entries are JSON strings under fixed keys. Anything missing or
//! undecodable reads as "not there": a cache miss for products and an empty
//! set for favorites. The store is only ever touched from the UI thread, so
//! every call is synchronous and atomic with respect to the widget.

use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::model::{FavoriteSet, ProductId, ProductList};
use log::{debug, warn};
use std::cell::RefCell;
use std::collections::HashMap;

/// Minimal string key-value store, the shape of `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), CarouselError>;
}

/// Browser `localStorage` for the current origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CarouselError> {
        let storage = Self::storage()
            .ok_or_else(|| CarouselError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| CarouselError::Storage(format!("set_item({}) failed: {:?}", key, e)))
    }
}

/// In-memory store used off-browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CarouselError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The widget's two persisted entries on top of some [`KeyValueStore`].
#[derive(Debug)]
pub struct CarouselStorage<S: KeyValueStore> {
    store: S,
    products_key: String,
    favorites_key: String,
}

impl<S: KeyValueStore> CarouselStorage<S> {
    pub fn new(store: S, config: &CarouselConfig) -> Self {
        Self {
            store,
            products_key: config.products_key.clone(),
            favorites_key: config.favorites_key.clone(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Cached product list, or `None` when absent or corrupted.
    pub fn read_products(&self) -> Option<ProductList> {
        let raw = self.store.get(&self.products_key)?;
        match serde_json::from_str(&raw) {
            Ok(products) => Some(products),
            Err(e) => {
                warn!("Ignoring unreadable product cache: {}", e);
                None
            }
        }
    }

    pub fn write_products(&self, products: &ProductList) -> Result<(), CarouselError> {
        let raw = serde_json::to_string(products)?;
        self.store.set(&self.products_key, &raw)
    }

    pub fn read_favorites(&self) -> FavoriteSet {
        let Some(raw) = self.store.get(&self.favorites_key) else {
            return FavoriteSet::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            debug!("Favorites entry unreadable ({}), starting empty", e);
            FavoriteSet::new()
        })
    }

    pub fn write_favorites(&self, favorites: &FavoriteSet) -> Result<(), CarouselError> {
        let raw = serde_json::to_string(favorites)?;
        self.store.set(&self.favorites_key, &raw)
    }

    /// Apply one favorite change to the stored set. The set is re-read first,
    /// so ids saved by other pages since this one loaded are kept.
    pub fn save_favorite(&self, id: &ProductId, active: bool) -> Result<(), CarouselError> {
        let mut favorites = self.read_favorites();
        let changed = if active {
            favorites.insert(id.clone())
        } else {
            favorites.remove(id)
        };
        if !changed {
            debug!("Favorite {} already {}", id, if active { "set" } else { "cleared" });
        }
        self.write_favorites(&favorites)
    }
}
