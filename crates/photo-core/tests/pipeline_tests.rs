use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use photo_core::codec::ImageFormat;
use photo_core::{Artifact, CapturePipeline, CodecError, Descriptor, Encoder, Event, EventBus, EventKind, ModelError, Photo,
                 PhotoFactory, PipelineError, Stage,
                 Storage, StorageError, Subscriber};

#[derive(Default)]
struct MemoryStorage {
    inner: Mutex<HashMap<String, Vec<u8>>>,
}

impl Storage for MemoryStorage {
    fn save(&self, id: &str, data: Vec<u8>) -> Result<(), StorageError> {
        if id.is_empty() {
            return Err(StorageError::EmptyId);
        }
        self.inner.lock().expect("storage lock").insert(id.to_string(), data);
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Vec<u8>, StorageError> {
        self.inner
            .lock()
            .expect("storage lock")
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }
}

struct BrokenStorage;

impl Storage for BrokenStorage {
    fn save(&self, _id: &str, _data: Vec<u8>) -> Result<(), StorageError> { Err(StorageError::Backend("read-only".into())) }
    fn load(&self, id: &str) -> Result<Vec<u8>, StorageError> { Err(StorageError::NotFound(id.to_string())) }
}

struct BrokenEncoder;

impl Encoder for BrokenEncoder {
    fn encode(&self, _artifact: &dyn Artifact) -> Result<Vec<u8>, CodecError> { Err(CodecError::Encode("no codec".into())) }
    fn format(&self) -> ImageFormat { ImageFormat::Png }
}

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<(EventKind, Option<String>, Vec<String>)>>,
}

impl Recorder {
    fn kinds(&self) -> Vec<EventKind> { self.events.lock().expect("recorder lock").iter().map(|e| e.0).collect() }
}

impl Subscriber for Recorder {
    fn on_event(&self, event: &Event) {
        let subject = event.subject().map(|a| a.id().to_string());
        let transforms = event.subject().map(|a| a.descriptor().transforms).unwrap_or_default();
        self.events.lock().expect("recorder lock").push((event.kind(), subject, transforms));
    }
    fn name(&self) -> &str { "recorder" }
}

fn setup(storage: Arc<dyn Storage>) -> (CapturePipeline, Arc<Recorder>) {
    let bus = Arc::new(EventBus::new());
    let recorder = Arc::new(Recorder::default());
    bus.register(recorder.clone());
    (CapturePipeline::builder(bus, storage).build(), recorder)
}

#[test]
fn run_end_to_end_png() {
    let storage = Arc::new(MemoryStorage::default());
    let (pipeline, recorder) = setup(storage.clone());

    let captured = pipeline.capture("portrait", &["grayscale", "sepia"], "png").expect("pipeline run");
    assert!(captured.encoded.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]));
    assert_eq!(captured.format, ImageFormat::Png);
    assert_eq!(captured.artifact.descriptor().transforms, ["grayscale", "sepia"]);
    assert_eq!(captured.artifact.descriptor().description, "Portrait photo");

    let stored = storage.load(captured.artifact.id()).expect("persisted under artifact id");
    assert_eq!(stored, captured.encoded);

    assert_eq!(recorder.kinds(), [EventKind::Created, EventKind::Processed]);
    let events = recorder.events.lock().expect("recorder lock");
    assert_eq!(events[0].1.as_deref(), Some(captured.artifact.id()));
    assert!(events[0].2.is_empty(), "created refers to the unwrapped base");
    assert_eq!(events[1].2, ["grayscale", "sepia"]);
}

#[test]
fn run_returns_only_the_bytes() {
    let (pipeline, _) = setup(Arc::new(MemoryStorage::default()));
    let bytes = pipeline.run("landscape", &[] as &[&str], "JPEG").expect("pipeline run");
    assert!(bytes.starts_with(&[0xFF, 0xD8, 0xFF, 0xE0]));
    assert_eq!(bytes.len(), 4 + 1024);
}

#[test]
fn unknown_format_defaults_to_jpeg() {
    let (pipeline, _) = setup(Arc::new(MemoryStorage::default()));
    for fmt in ["", "tiff", "bmp"] {
        let c = pipeline.capture("landscape", &["blur"], fmt).expect("pipeline run");
        assert_eq!(c.format, ImageFormat::Jpeg);
        assert_eq!(ImageFormat::detect(&c.encoded), Some(ImageFormat::Jpeg));
    }
}

#[test]
fn storage_failure_short_circuits_before_processed() {
    let (pipeline, recorder) = setup(Arc::new(BrokenStorage));
    let err = pipeline.run("portrait", &["sepia"], "png").unwrap_err();
    assert_eq!(err.stage(), Stage::Persist);
    assert!(matches!(err, PipelineError::Persist { source: StorageError::Backend(_), .. }));
    assert_eq!(recorder.kinds(), [EventKind::Created]);
}

#[test]
fn encode_failure_persists_nothing() {
    let storage = Arc::new(MemoryStorage::default());
    let bus = Arc::new(EventBus::new());
    let recorder = Arc::new(Recorder::default());
    bus.register(recorder.clone());
    let pipeline = CapturePipeline::builder(bus, storage.clone()).encoder(BrokenEncoder).build();

    let err = pipeline.run("portrait", &["sepia"], "png").unwrap_err();
    assert_eq!(err.stage(), Stage::Encode);
    assert!(matches!(err, PipelineError::Encode { format: "PNG", .. }));
    assert!(storage.inner.lock().expect("storage lock").is_empty());
    assert_eq!(recorder.kinds(), [EventKind::Created]);

    // JPEG sigue registrado con el encoder por defecto.
    assert!(pipeline.run("portrait", &["sepia"], "jpeg").is_ok());
}

#[test]
fn empty_transform_name_is_rejected_before_creation() {
    let storage = Arc::new(MemoryStorage::default());
    let (pipeline, recorder) = setup(storage.clone());
    let err = pipeline.run("portrait", &["grayscale", " "], "png").unwrap_err();
    assert_eq!(err, PipelineError::InvalidTransform(ModelError::EmptyTransformName { index: 1 }));
    assert_eq!(err.stage(), Stage::Validate);
    assert!(recorder.kinds().is_empty());
    assert!(storage.inner.lock().expect("storage lock").is_empty());
}

#[test]
fn quick_capture_only_creates() {
    let storage = Arc::new(MemoryStorage::default());
    let (pipeline, recorder) = setup(storage.clone());
    let photo = pipeline.quick_capture("mystery");
    assert_eq!(photo.descriptor().description, "Standard photo");
    assert!(photo.descriptor().transforms.is_empty());
    assert_eq!(recorder.kinds(), [EventKind::Created]);
    assert!(!storage.contains(photo.id()));
}

#[test]
fn processed_event_carries_metadata() {
    struct MetaCapture(Mutex<Option<serde_json::Value>>);
    impl Subscriber for MetaCapture {
        fn on_event(&self, event: &Event) {
            if event.kind() == EventKind::Processed {
                *self.0.lock().expect("capture lock") = Some(event.to_json());
            }
        }
        fn name(&self) -> &str { "meta" }
    }

    let bus = Arc::new(EventBus::new());
    let meta = Arc::new(MetaCapture(Mutex::new(None)));
    bus.register(meta.clone());
    let pipeline = CapturePipeline::builder(bus, Arc::new(MemoryStorage::default())).build();
    let c = pipeline.capture("portrait", &["blur"], "png").expect("pipeline run");

    let json = meta.0.lock().expect("capture lock").clone().expect("processed event seen");
    assert_eq!(json["metadata"]["format"], "PNG");
    assert_eq!(json["metadata"]["bytes"], c.encoded.len());
    assert_eq!(json["metadata"]["transforms"], serde_json::json!(["blur"]));
    assert_eq!(json["metadata"]["checksum"].as_str().map(str::len), Some(64));
}

#[test]
fn apply_transforms_rejects_blank_names_like_capture() {
    let (pipeline, recorder) = setup(Arc::new(MemoryStorage::default()));
    let base = pipeline.quick_capture("portrait");

    let err = pipeline.apply_transforms(base.clone(), &["sepia", " "]).unwrap_err();
    assert_eq!(err, PipelineError::InvalidTransform(ModelError::EmptyTransformName { index: 1 }));
    assert_eq!(pipeline.run("portrait", &[" "], "png").unwrap_err().stage(), Stage::Validate);

    let view = pipeline.apply_transforms(base, &["sepia"]).expect("valid names");
    assert_eq!(view.descriptor().transforms, ["sepia"]);
    // Sólo el quick_capture publicó.
    assert_eq!(recorder.kinds(), [EventKind::Created]);
}

#[test]
fn created_event_describes_the_photo_the_factory_returned() {
    struct FixedFactory;
    impl PhotoFactory for FixedFactory {
        fn create_photo(&self, _kind: &str) -> Photo {
            let mut d = Descriptor::new(64, 64, "JPEG");
            d.description = "Studio shot".into();
            Photo::new("photo-fixed", vec![7; 8], d)
        }
    }

    struct Descriptions(Mutex<Vec<serde_json::Value>>);
    impl Subscriber for Descriptions {
        fn on_event(&self, event: &Event) {
            if let Some(v) = event.metadata_value("description") {
                self.0.lock().expect("descriptions lock").push(v.clone());
            }
        }
        fn name(&self) -> &str { "descriptions" }
    }

    let bus = Arc::new(EventBus::new());
    let seen = Arc::new(Descriptions(Mutex::new(Vec::new())));
    bus.register(seen.clone());
    let pipeline = CapturePipeline::builder(bus, Arc::new(MemoryStorage::default())).factory(FixedFactory).build();
    pipeline.run("landscape", &["blur"], "jpeg").expect("pipeline run");

    assert_eq!(*seen.0.lock().expect("descriptions lock"), [serde_json::json!("Studio shot")]);
}
