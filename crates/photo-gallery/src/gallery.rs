use std::sync::Arc;

use log::debug;
use photo_core::Artifact;

use crate::SortStrategy;

/// Contexto de la estrategia: guarda las fotos y la estrategia activa.
#[derive(Default)]
pub struct Gallery {
    images: Vec<Arc<dyn Artifact>>,
    sorter: Option<Box<dyn SortStrategy>>,
}

impl Gallery {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, image: Arc<dyn Artifact>) { self.images.push(image); }

    pub fn images(&self) -> &[Arc<dyn Artifact>] { &self.images }

    pub fn len(&self) -> usize { self.images.len() }

    pub fn is_empty(&self) -> bool { self.images.is_empty() }

    pub fn set_sorter<S>(&mut self, sorter: S)
        where S: SortStrategy + 'static
    {
        self.sorter = Some(Box::new(sorter));
    }

    pub fn sorter_name(&self) -> Option<&'static str> { self.sorter.as_ref().map(|s| s.name()) }

    /// Reordena con la estrategia activa; sin estrategia no hace nada.
    /// Devuelve el nombre de la estrategia aplicada.
    pub fn sort(&mut self) -> Option<&'static str> {
        let sorter = self.sorter.as_ref()?;
        self.images = sorter.sort(&self.images);
        debug!("gallery: sorted {} images by {}", self.images.len(), sorter.name());
        Some(sorter.name())
    }
}
