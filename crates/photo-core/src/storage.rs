//! Contrato de persistencia clave-valor usado por el pipeline.
//!
//! La implementación concreta (`MapStorage`) vive en `photo-adapters`.

use crate::errors::StorageError;

pub trait Storage: Send + Sync {
    /// Guarda `data` bajo `id`. Falla con `EmptyId` si `id` está vacío.
    fn save(&self, id: &str, data: Vec<u8>) -> Result<(), StorageError>;

    /// Recupera los bytes guardados bajo `id` o `NotFound`.
    fn load(&self, id: &str) -> Result<Vec<u8>, StorageError>;

    fn contains(&self, id: &str) -> bool { self.load(id).is_ok() }
}
