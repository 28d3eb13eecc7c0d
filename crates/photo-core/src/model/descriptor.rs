//! Descriptor estructurado de un artifact.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_RATING, MIN_RATING};
use crate::errors::ModelError;

/// Valoración entera en `[1, 5]`. Sólo se construye validada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Result<Self, ModelError> {
        if (MIN_RATING..=MAX_RATING).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ModelError::RatingOutOfRange(value))
        }
    }

    /// Proyecta un byte arbitrario al rango válido (usado por la fábrica).
    pub fn from_seed(seed: u8) -> Self {
        Self(seed % MAX_RATING + MIN_RATING)
    }

    pub fn value(self) -> u8 { self.0 }
}

impl Default for Rating {
    fn default() -> Self { Self(MIN_RATING) }
}

impl TryFrom<u8> for Rating {
    type Error = ModelError;
    fn try_from(value: u8) -> Result<Self, Self::Error> { Self::new(value) }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> Self { r.0 }
}

/// Metadatos de un artifact: dimensiones, instante de captura, rating,
/// historial ordenado de transformaciones, etiqueta de formato y descripción.
///
/// Se entrega siempre por valor: cada lectura produce una copia propia del
/// historial, de modo que ninguna vista puede observar lo que otra añade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    pub width: u32,
    pub height: u32,
    pub captured_at: DateTime<Utc>,
    pub rating: Rating,
    pub transforms: Vec<String>,
    pub format: String,
    pub description: String,
}

impl Descriptor {
    /// Descriptor mínimo con historial vacío y rating por defecto.
    pub fn new(width: u32, height: u32, format: impl Into<String>) -> Self {
        Self { width,
               height,
               captured_at: Utc::now(),
               rating: Rating::default(),
               transforms: Vec::new(),
               format: format.into(),
               description: String::new() }
    }
}
