//! Builder para `CapturePipeline`.
//!
//! El bus y el storage son obligatorios y se fijan al crear el builder; la
//! fábrica y el registro de encoders tienen defaults (`DefaultPhotoFactory`,
//! JPEG + PNG simulados).
//!
//! ```ignore
//! let pipeline = CapturePipeline::builder(bus, storage)
//!     .factory(DefaultPhotoFactory::from_config(&config))
//!     .build();
//! ```

use std::sync::Arc;

use super::CapturePipeline;
use crate::codec::{Encoder, EncoderRegistry};
use crate::event::EventBus;
use crate::factory::{DefaultPhotoFactory, PhotoFactory};
use crate::storage::Storage;

pub struct PipelineBuilder {
    bus: Arc<EventBus>,
    storage: Arc<dyn Storage>,
    factory: Option<Box<dyn PhotoFactory>>,
    encoders: Option<EncoderRegistry>,
}

impl PipelineBuilder {
    pub(crate) fn new(bus: Arc<EventBus>, storage: Arc<dyn Storage>) -> Self {
        Self { bus,
               storage,
               factory: None,
               encoders: None }
    }

    /// Reemplaza la fábrica de fotos.
    pub fn factory<F>(mut self, factory: F) -> Self
        where F: PhotoFactory + 'static
    {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Reemplaza el registro completo de encoders.
    pub fn encoders(mut self, registry: EncoderRegistry) -> Self {
        self.encoders = Some(registry);
        self
    }

    /// Registra un encoder sobre el registro actual (defaults si no había).
    pub fn encoder<E>(mut self, encoder: E) -> Self
        where E: Encoder + 'static
    {
        let mut registry = self.encoders.take().unwrap_or_default();
        registry.insert(Box::new(encoder));
        self.encoders = Some(registry);
        self
    }

    pub fn build(self) -> CapturePipeline {
        let factory = self.factory.unwrap_or_else(|| Box::new(DefaultPhotoFactory::default()));
        CapturePipeline::new(factory, self.bus, self.storage, self.encoders.unwrap_or_default())
    }
}
