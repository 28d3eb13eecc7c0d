//! Composición de la aplicación.
//!
//! `App` es dueño de todas las instancias (bus, suscriptores, storage,
//! pipeline, galería); no hay estado global salvo la configuración.
use std::sync::Arc;

use log::info;
use photo_adapters::{LoggingSubscriber, MapStorage, StatisticsSubscriber, ThumbnailSubscriber};
use photo_core::codec::{decode_any, ImageFormat};
use photo_core::{Artifact, CapturePipeline, Captured, CodecError, DefaultPhotoFactory, EncoderRegistry, Event, EventBus,
                 EventKind, PhotoConfig, PipelineError, Storage};
use photo_gallery::{Gallery, SortStrategy};

const DEMO_FILTERS: [&str; 3] = ["Grayscale", "Sepia", "Blur"];

/// Resultado del recorrido encode → decode por formato.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecReport {
    pub format: ImageFormat,
    pub encoded_len: usize,
    pub decoded_id: String,
    pub payload_matches: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratorReport {
    pub original: Vec<String>,
    pub decorated: Vec<String>,
    pub payload_len: usize,
}

pub struct App {
    config: PhotoConfig,
    bus: Arc<EventBus>,
    storage: Arc<MapStorage>,
    pipeline: CapturePipeline,
    gallery: Gallery,
    thumbnails: Arc<ThumbnailSubscriber>,
    stats: Arc<StatisticsSubscriber>,
}

impl App {
    pub fn new(config: PhotoConfig) -> Self {
        let bus = Arc::new(EventBus::with_policy(config.failure_policy));
        let thumbnails = Arc::new(ThumbnailSubscriber::new("ThumbnailGen", config.thumbnail_size));
        let stats = Arc::new(StatisticsSubscriber::new("StatsTracker"));
        bus.register(Arc::new(LoggingSubscriber::new("SystemLogger")));
        bus.register(thumbnails.clone());
        bus.register(stats.clone());

        let storage = Arc::new(MapStorage::new());
        let pipeline = CapturePipeline::builder(bus.clone(), storage.clone())
            .factory(DefaultPhotoFactory::from_config(&config))
            .build();

        Self { config,
               bus,
               storage,
               pipeline,
               gallery: Gallery::new(),
               thumbnails,
               stats }
    }

    pub fn config(&self) -> &PhotoConfig { &self.config }

    pub fn bus(&self) -> &Arc<EventBus> { &self.bus }

    pub fn storage(&self) -> &MapStorage { &self.storage }

    pub fn gallery(&self) -> &Gallery { &self.gallery }

    pub fn statistics(&self) -> &StatisticsSubscriber { &self.stats }

    /// Procesa una foto y añade a la galería la misma vista que se guardó.
    /// Un formato vacío usa el de la configuración.
    pub fn capture<S: AsRef<str>>(&mut self, kind: &str, filters: &[S], format: &str) -> Result<Captured, PipelineError> {
        let format = if format.trim().is_empty() { self.config.default_format.label() } else { format };
        let captured = self.pipeline.capture(kind, filters, format)?;
        self.gallery.add(captured.artifact.clone());
        Ok(captured)
    }

    /// Ordena la galería y publica `Sorted`.
    pub fn sort_gallery<S>(&mut self, sorter: S) -> &'static str
        where S: SortStrategy + 'static
    {
        let name = sorter.name();
        self.gallery.set_sorter(sorter);
        self.gallery.sort();
        let event = Event::new(EventKind::Sorted, None, format!("Gallery sorted by: {name}")).with_metadata("strategy", name);
        self.bus.notify(&event);
        info!("gallery sorted by {name}");
        name
    }

    /// Codifica una foto nueva con cada encoder registrado y la decodifica de
    /// vuelta; publica `Encoded` por formato.
    pub fn codec_demo(&self) -> Result<Vec<CodecReport>, CodecError> {
        let photo = self.pipeline.quick_capture("portrait");
        let registry = EncoderRegistry::with_defaults();
        let mut reports = Vec::new();
        for format in registry.formats() {
            let encoder = registry.get(format).ok_or(CodecError::MissingEncoder(format.label()))?;
            let encoded = encoder.encode(photo.as_ref())?;
            let decoded = decode_any(&encoded)?;
            let event = Event::new(EventKind::Encoded, Some(photo.clone()), format!("Encoded as {format}"))
                .with_metadata("format", format.label())
                .with_metadata("bytes", encoded.len());
            self.bus.notify(&event);
            reports.push(CodecReport { format,
                                       encoded_len: encoded.len(),
                                       decoded_id: decoded.id().to_string(),
                                       payload_matches: decoded.payload() == photo.payload() });
        }
        Ok(reports)
    }

    /// Apila Grayscale → Sepia → Blur sobre una foto base.
    pub fn decorator_demo(&self) -> Result<DecoratorReport, PipelineError> {
        let base = self.pipeline.quick_capture("portrait");
        let decorated = self.pipeline.apply_transforms(base.clone(), &DEMO_FILTERS)?;
        Ok(DecoratorReport { original: base.descriptor().transforms,
                             decorated: decorated.descriptor().transforms,
                             payload_len: decorated.payload().len() })
    }

    /// Thumbnails disponibles para las fotos de la galería: (id, bytes).
    pub fn thumbnails(&self) -> Vec<(String, usize)> {
        self.gallery
            .images()
            .iter()
            .filter_map(|img| self.thumbnails.thumbnail(img.id()).map(|t| (img.id().to_string(), t.len())))
            .collect()
    }

    pub fn stored(&self, id: &str) -> bool { self.storage.contains(id) }
}
