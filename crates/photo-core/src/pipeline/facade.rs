//! Implementación del facade de captura.
use std::sync::Arc;

use log::{debug, info};

use super::PipelineBuilder;
use crate::codec::{EncoderRegistry, ImageFormat};
use crate::errors::{CodecError, PipelineError};
use crate::event::{Event, EventBus, EventKind};
use crate::factory::PhotoFactory;
use crate::hashing::hash_bytes;
use crate::model::{apply_chain, check_names, Artifact};
use crate::storage::Storage;

/// Resultado completo de una captura procesada.
#[derive(Debug, Clone)]
pub struct Captured {
    /// Vista final (con todas las transformaciones aplicadas).
    pub artifact: Arc<dyn Artifact>,
    pub encoded: Vec<u8>,
    pub format: ImageFormat,
}

/// Facade que secuencia las etapas del pipeline.
///
/// No tiene sincronización interna: se espera un único llamador lógico a la
/// vez. El único estado compartido es el `EventBus`.
pub struct CapturePipeline {
    factory: Box<dyn PhotoFactory>,
    bus: Arc<EventBus>,
    storage: Arc<dyn Storage>,
    encoders: EncoderRegistry,
}

impl CapturePipeline {
    #[inline]
    pub fn builder(bus: Arc<EventBus>, storage: Arc<dyn Storage>) -> PipelineBuilder {
        PipelineBuilder::new(bus, storage)
    }

    pub fn new(factory: Box<dyn PhotoFactory>,
               bus: Arc<EventBus>,
               storage: Arc<dyn Storage>,
               encoders: EncoderRegistry)
               -> Self {
        Self { factory,
               bus,
               storage,
               encoders }
    }

    /// Crea, transforma, codifica y persiste una foto; devuelve los bytes.
    ///
    /// # Ejemplo
    /// ```ignore
    /// let bytes = pipeline.run("portrait", &["grayscale", "sepia"], "png")?;
    /// ```
    pub fn run<S: AsRef<str>>(&self, kind: &str, transforms: &[S], format: &str) -> Result<Vec<u8>, PipelineError> {
        self.capture(kind, transforms, format).map(|c| c.encoded)
    }

    /// Igual que `run` pero devuelve también la vista final del artifact.
    ///
    /// Orden de etapas: validar nombres, crear (publica `Created`), envolver,
    /// codificar, persistir, publicar `Processed`. La primera etapa que falla
    /// corta el resto; lo ya publicado no se compensa.
    pub fn capture<S: AsRef<str>>(&self, kind: &str, transforms: &[S], format: &str) -> Result<Captured, PipelineError> {
        check_names(transforms)?;

        let base = self.create(kind);
        let artifact = self.apply_transforms(base, transforms)?;

        let format = ImageFormat::select(format);
        let encoded = self.encode(artifact.as_ref(), format)?;
        debug!("pipeline: encoded {} as {} ({} bytes)", artifact.id(), format, encoded.len());

        self.storage
            .save(artifact.id(), encoded.clone())
            .map_err(|source| PipelineError::Persist { id: artifact.id().to_string(),
                                                        source })?;
        debug!("pipeline: persisted {}", artifact.id());

        let transforms = artifact.descriptor().transforms;
        let event = Event::new(EventKind::Processed, Some(artifact.clone()), "Processed")
            .with_metadata("format", format.label())
            .with_metadata("bytes", encoded.len())
            .with_metadata("transforms", transforms.clone())
            .with_metadata("checksum", hash_bytes(&encoded));
        self.bus.notify(&event);
        info!("pipeline: processed {} [{}] as {}", artifact.id(), transforms.join(", "), format);

        Ok(Captured { artifact,
                      encoded,
                      format })
    }

    /// Sólo creación + evento `Created`; sin transformar, codificar ni guardar.
    pub fn quick_capture(&self, kind: &str) -> Arc<dyn Artifact> { self.create(kind) }

    /// Pliega `names` alrededor de `base`, de izquierda a derecha.
    pub fn apply_transforms<S: AsRef<str>>(&self,
                                           base: Arc<dyn Artifact>,
                                           names: &[S])
                                           -> Result<Arc<dyn Artifact>, PipelineError> {
        Ok(apply_chain(base, names)?)
    }

    fn create(&self, kind: &str) -> Arc<dyn Artifact> {
        let photo: Arc<dyn Artifact> = Arc::new(self.factory.create_photo(kind));
        let description = photo.descriptor().description;
        debug!("pipeline: created {} ({description})", photo.id());
        let event = Event::new(EventKind::Created, Some(photo.clone()), "Photo created")
            .with_metadata("kind", kind)
            .with_metadata("description", description);
        self.bus.notify(&event);
        photo
    }

    fn encode(&self, artifact: &dyn Artifact, format: ImageFormat) -> Result<Vec<u8>, PipelineError> {
        let encoder = self.encoders
                          .get(format)
                          .ok_or(PipelineError::Encode { format: format.label(),
                                                         source: CodecError::MissingEncoder(format.label()) })?;
        encoder.encode(artifact)
               .map_err(|source| PipelineError::Encode { format: format.label(),
                                                         source })
    }
}
