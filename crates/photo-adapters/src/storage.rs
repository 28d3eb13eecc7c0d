//! Adaptador de mapa → `Storage`.

use dashmap::DashMap;
use photo_core::{Storage, StorageError};

/// Almacenamiento en memoria respaldado por un `DashMap`.
#[derive(Debug, Default)]
pub struct MapStorage {
    data: DashMap<String, Vec<u8>>,
}

impl MapStorage {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Ids almacenados, ordenados.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.data.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }
}

impl Storage for MapStorage {
    fn save(&self, id: &str, data: Vec<u8>) -> Result<(), StorageError> {
        if id.is_empty() {
            return Err(StorageError::EmptyId);
        }
        self.data.insert(id.to_string(), data);
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Vec<u8>, StorageError> {
        self.data
            .get(id)
            .map(|v| v.value().clone())
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    fn contains(&self, id: &str) -> bool { self.data.contains_key(id) }
}
