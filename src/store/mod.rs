//! # Store Module
//!
//! Persistence seam for generated maps.
//!
//! The generator never touches storage itself; callers hand finished
//! [`MapDocument`]s to a [`MapStore`]. Two implementations ship with the
//! crate: an in-memory store and a JSON-file store.

pub mod json_file;

pub use json_file::*;

use crate::{MapDocument, TowerforgeResult};

/// Trait for map collections.
///
/// Map ids are not guaranteed unique; [`MapStore::get_by_id`] returns the
/// first stored map with a matching id.
pub trait MapStore {
    /// Adds a map to the end of the collection.
    fn append(&mut self, map: MapDocument) -> TowerforgeResult<()>;

    /// Lists every stored map, oldest first.
    fn list(&self) -> TowerforgeResult<Vec<MapDocument>>;

    /// Finds a map by id.
    fn get_by_id(&self, id: u32) -> TowerforgeResult<Option<MapDocument>> {
        Ok(self.list()?.into_iter().find(|map| map.id == id))
    }
}

/// A map store held in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMapStore {
    maps: Vec<MapDocument>,
}

impl InMemoryMapStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the number of stored maps.
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Checks if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

impl MapStore for InMemoryMapStore {
    fn append(&mut self, map: MapDocument) -> TowerforgeResult<()> {
        self.maps.push(map);
        Ok(())
    }

    fn list(&self) -> TowerforgeResult<Vec<MapDocument>> {
        Ok(self.maps.clone())
    }

    fn get_by_id(&self, id: u32) -> TowerforgeResult<Option<MapDocument>> {
        Ok(self.maps.iter().find(|map| map.id == id).cloned())
    }
}
