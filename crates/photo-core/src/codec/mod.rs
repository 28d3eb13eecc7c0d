//! Codecs simulados y selección de formato.
//!
//! Los encoders no comprimen nada: anteponen los bytes mágicos del formato al
//! payload. Los decoders verifican la cabecera y la retiran.

mod format;
mod registry;
mod simulated;

use crate::errors::CodecError;
use crate::model::{Artifact, Photo};

pub use format::ImageFormat;
pub use registry::EncoderRegistry;
pub use simulated::{decode_any, decoder_for, JpegDecoder, JpegEncoder, PngDecoder, PngEncoder};

/// Serializa un artifact a bytes.
pub trait Encoder: Send + Sync {
    fn encode(&self, artifact: &dyn Artifact) -> Result<Vec<u8>, CodecError>;
    fn format(&self) -> ImageFormat;
}

/// Reconstruye un artifact a partir de bytes codificados.
pub trait Decoder: Send + Sync {
    fn decode(&self, data: &[u8]) -> Result<Photo, CodecError>;
    fn format(&self) -> ImageFormat;
}
