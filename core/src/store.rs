//! Client-side application state: search box text and favorites.
//!
//! Owned by the `Controller`; nothing here is global or persisted.

use std::collections::HashMap;

use crate::types::Character;

#[derive(Debug, Clone, Default)]
pub struct AppStore {
    query: String,
    favorites: HashMap<u32, Character>,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Add a snapshot of `character` if it is not a favorite, remove it
    /// otherwise. Returns the new membership.
    pub fn toggle_favorite(&mut self, character: &Character) -> bool {
        let added = if self.favorites.remove(&character.id).is_some() {
            false
        } else {
            self.favorites.insert(character.id, character.clone());
            true
        };
        tracing::debug!(id = character.id, added, "favorite toggled");
        added
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains_key(&id)
    }

    pub fn favorite(&self, id: u32) -> Option<&Character> {
        self.favorites.get(&id)
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::character;

    #[test]
    fn set_query_replaces_previous_value() {
        let mut store = AppStore::new();
        store.set_query("Rick");
        store.set_query("Morty");
        assert_eq!(store.query(), "Morty");
    }

    #[test]
    fn toggling_twice_leaves_favorites_empty() {
        let mut store = AppStore::new();
        let jerry = character(5, "Jerry Smith");
        assert!(store.toggle_favorite(&jerry));
        assert!(store.is_favorite(5));
        assert!(!store.toggle_favorite(&jerry));
        assert!(!store.is_favorite(5));
        assert!(store.is_empty());
    }

    #[test]
    fn membership_follows_toggle_parity() {
        let rick = character(1, "Rick Sanchez");
        for toggles in 0..8 {
            let mut store = AppStore::new();
            for _ in 0..toggles {
                store.toggle_favorite(&rick);
            }
            assert_eq!(store.is_favorite(1), toggles % 2 == 1, "{toggles} toggles");
        }
    }

    #[test]
    fn favorites_are_keyed_by_id() {
        let mut store = AppStore::new();
        store.toggle_favorite(&character(1, "Rick Sanchez"));
        store.toggle_favorite(&character(2, "Morty Smith"));
        assert_eq!(store.len(), 2);
        store.toggle_favorite(&character(1, "renamed"));
        assert!(!store.is_favorite(1));
        assert!(store.is_favorite(2));
    }

    #[test]
    fn favorite_keeps_snapshot_at_toggle_time() {
        let mut store = AppStore::new();
        let mut morty = character(2, "Morty Smith");
        store.toggle_favorite(&morty);
        morty.name = "Evil Morty".to_string();
        assert_eq!(store.favorite(2).map(|c| c.name.as_str()), Some("Morty Smith"));
    }
}
