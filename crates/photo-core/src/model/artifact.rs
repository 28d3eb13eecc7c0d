//! Artifact: la unidad que recorre el pipeline.
//!
//! Un artifact expone identidad, payload opaco y un `Descriptor`. La identidad
//! se asigna al crearlo y no cambia al envolverlo con transformaciones.
use std::fmt;

use super::Descriptor;

/// Vista de sólo lectura sobre una foto (base o envuelta).
///
/// `descriptor` devuelve una copia propia en cada llamada.
pub trait Artifact: fmt::Debug + Send + Sync {
    fn id(&self) -> &str;
    fn payload(&self) -> &[u8];
    fn descriptor(&self) -> Descriptor;
}

/// Artifact base producido por la fábrica o por un decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    id: String,
    payload: Vec<u8>,
    descriptor: Descriptor,
}

impl Photo {
    pub fn new(id: impl Into<String>, payload: Vec<u8>, descriptor: Descriptor) -> Self {
        Self { id: id.into(),
               payload,
               descriptor }
    }
}

impl Artifact for Photo {
    fn id(&self) -> &str { &self.id }

    fn payload(&self) -> &[u8] { &self.payload }

    fn descriptor(&self) -> Descriptor { self.descriptor.clone() }
}
