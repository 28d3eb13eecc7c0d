use indexmap::IndexMap;

use super::{Encoder, ImageFormat, JpegEncoder, PngEncoder};

/// Encoders disponibles por formato, en orden de registro.
pub struct EncoderRegistry {
    encoders: IndexMap<ImageFormat, Box<dyn Encoder>>,
}

impl EncoderRegistry {
    pub fn empty() -> Self { Self { encoders: IndexMap::new() } }

    /// JPEG y PNG simulados.
    pub fn with_defaults() -> Self {
        let mut r = Self::empty();
        r.insert(Box::new(JpegEncoder));
        r.insert(Box::new(PngEncoder));
        r
    }

    /// Registra (o reemplaza) el encoder de `encoder.format()`.
    pub fn insert(&mut self, encoder: Box<dyn Encoder>) -> Option<Box<dyn Encoder>> {
        self.encoders.insert(encoder.format(), encoder)
    }

    pub fn get(&self, format: ImageFormat) -> Option<&dyn Encoder> {
        self.encoders.get(&format).map(|e| &**e)
    }

    pub fn formats(&self) -> Vec<ImageFormat> { self.encoders.keys().copied().collect() }
}

impl Default for EncoderRegistry {
    fn default() -> Self { Self::with_defaults() }
}
