//! photo-core: núcleo del simulador de captura.
//!
//! - `event`: `EventBus` concurrente con entrega por snapshot.
//! - `model`: `Artifact`, `Descriptor` y la cadena de transformaciones.
//! - `pipeline`: `CapturePipeline`, el facade creación → transformación →
//!   codificación → persistencia → notificación.
//! - `codec`, `storage`, `factory`: contratos de los colaboradores (más los
//!   codecs simulados y la fábrica por defecto).
pub mod codec;
pub mod config;
pub mod constants;
pub mod errors;
pub mod event;
pub mod factory;
pub mod hashing;
pub mod model;
pub mod pipeline;
pub mod storage;

pub use codec::{Decoder, Encoder, EncoderRegistry, ImageFormat};
pub use config::{PhotoConfig, CONFIG};
pub use errors::{CodecError, ConfigError, ModelError, PipelineError, Stage, StorageError};
pub use event::{Delivery, Event, EventBus, EventKind, FailurePolicy, Subscriber};
pub use factory::{DefaultPhotoFactory, PhotoFactory, PhotoKind};
pub use model::{apply_chain, check_names, Artifact, Descriptor, Photo, Rating, Transformed};
pub use pipeline::{CapturePipeline, Captured, PipelineBuilder};
pub use storage::Storage;
