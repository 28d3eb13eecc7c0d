//! JPEG/PNG simulados.
use super::{Decoder, Encoder, ImageFormat};
use crate::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::errors::CodecError;
use crate::model::{Artifact, Descriptor, Photo};

fn prefix_payload(format: ImageFormat, artifact: &dyn Artifact) -> Vec<u8> {
    let magic = format.magic();
    let payload = artifact.payload();
    let mut out = Vec::with_capacity(magic.len() + payload.len());
    out.extend_from_slice(magic);
    out.extend_from_slice(payload);
    out
}

// Sólo se comprueban la longitud mínima y los dos primeros bytes mágicos.
fn strip_header(format: ImageFormat, data: &[u8]) -> Result<Photo, CodecError> {
    let header_len = format.header_len();
    if data.len() < header_len {
        return Err(CodecError::InvalidFormat { format: format.label(),
                                               reason: format!("expected at least {header_len} bytes, got {}", data.len()) });
    }
    if data[..2] != format.magic()[..2] {
        return Err(CodecError::InvalidFormat { format: format.label(),
                                               reason: "missing magic prefix".into() });
    }
    let descriptor = Descriptor::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, format.label());
    let id = format!("decoded-{}", format.label().to_ascii_lowercase());
    Ok(Photo::new(id, data[header_len..].to_vec(), descriptor))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JpegEncoder;

impl Encoder for JpegEncoder {
    fn encode(&self, artifact: &dyn Artifact) -> Result<Vec<u8>, CodecError> {
        Ok(prefix_payload(ImageFormat::Jpeg, artifact))
    }

    fn format(&self) -> ImageFormat { ImageFormat::Jpeg }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

impl Encoder for PngEncoder {
    fn encode(&self, artifact: &dyn Artifact) -> Result<Vec<u8>, CodecError> {
        Ok(prefix_payload(ImageFormat::Png, artifact))
    }

    fn format(&self) -> ImageFormat { ImageFormat::Png }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JpegDecoder;

impl Decoder for JpegDecoder {
    fn decode(&self, data: &[u8]) -> Result<Photo, CodecError> { strip_header(ImageFormat::Jpeg, data) }

    fn format(&self) -> ImageFormat { ImageFormat::Jpeg }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PngDecoder;

impl Decoder for PngDecoder {
    fn decode(&self, data: &[u8]) -> Result<Photo, CodecError> { strip_header(ImageFormat::Png, data) }

    fn format(&self) -> ImageFormat { ImageFormat::Png }
}

pub fn decoder_for(format: ImageFormat) -> Box<dyn Decoder> {
    match format {
        ImageFormat::Jpeg => Box::new(JpegDecoder),
        ImageFormat::Png => Box::new(PngDecoder),
    }
}

/// Detecta el formato por su prefijo y decodifica.
pub fn decode_any(data: &[u8]) -> Result<Photo, CodecError> {
    let format = ImageFormat::detect(data).ok_or_else(|| CodecError::UnknownFormat("unrecognized magic prefix".into()))?;
    decoder_for(format).decode(data)
}
