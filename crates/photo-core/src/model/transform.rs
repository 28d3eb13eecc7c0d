//! Cadena de transformaciones (decorator).
//!
//! Cada nodo `Transformed` envuelve exactamente una vista upstream y un nombre
//! de transformación. El payload y la identidad se delegan sin cambios al
//! artifact más interno; el descriptor se lee del upstream y se le añade el
//! nombre del nodo en el momento de la lectura.
//!
//! Los nodos son inmutables y se comparten por `Arc`: un nodo sólo puede
//! envolver vistas que ya existían al construirlo, así que no hay ciclos y la
//! profundidad es exactamente el número de nombres aplicados.
use std::sync::Arc;

use super::{Artifact, Descriptor};
use crate::errors::ModelError;

#[derive(Debug, Clone)]
pub struct Transformed {
    upstream: Arc<dyn Artifact>,
    name: String,
}

impl Transformed {
    /// Envuelve `upstream` con la transformación `name`.
    ///
    /// # Panics
    /// Si `name` está vacío o sólo tiene espacios. Es un error de
    /// programación: los nombres que vienen de datos externos deben pasar por
    /// [`apply_chain`].
    pub fn new(upstream: Arc<dyn Artifact>, name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.trim().is_empty(), "transform name cannot be empty");
        Self { upstream, name }
    }
}

impl Artifact for Transformed {
    fn id(&self) -> &str { self.upstream.id() }

    fn payload(&self) -> &[u8] { self.upstream.payload() }

    fn descriptor(&self) -> Descriptor {
        let mut d = self.upstream.descriptor();
        d.transforms.push(self.name.clone());
        d
    }
}

/// Primer nombre vacío o en blanco, como error con su posición.
pub fn check_names<S: AsRef<str>>(names: &[S]) -> Result<(), ModelError> {
    match names.iter().position(|n| n.as_ref().trim().is_empty()) {
        Some(index) => Err(ModelError::EmptyTransformName { index }),
        None => Ok(()),
    }
}

/// Pliega `names` de izquierda a derecha: el primero envuelve a `base`, cada
/// siguiente envuelve al anterior. Sin nombres, devuelve `base` tal cual.
/// Los nombres se validan todos antes de construir ningún nodo.
pub fn apply_chain<S: AsRef<str>>(base: Arc<dyn Artifact>, names: &[S]) -> Result<Arc<dyn Artifact>, ModelError> {
    check_names(names)?;
    Ok(names.iter().fold(base, |view, name| {
                       Arc::new(Transformed::new(view, name.as_ref())) as Arc<dyn Artifact>
                   }))
}
