//! Creación de fotos sintéticas.
//!
//! `create_photo` es total: un tipo desconocido produce una foto estándar.
use chrono::Utc;
use uuid::Uuid;

use crate::config::PhotoConfig;
use crate::constants::PHOTO_ID_PREFIX;
use crate::hashing::{fill_from_seed, seed_byte};
use crate::codec::ImageFormat;
use crate::model::{Descriptor, Photo, Rating};

/// Tipos de foto reconocidos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhotoKind {
    Landscape,
    Portrait,
    #[default]
    Standard,
}

impl PhotoKind {
    /// Desconocido → `Standard`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "landscape" => Self::Landscape,
            "portrait" => Self::Portrait,
            _ => Self::Standard,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Landscape => "Beautiful landscape photo",
            Self::Portrait => "Portrait photo",
            Self::Standard => "Standard photo",
        }
    }
}

pub trait PhotoFactory: Send + Sync {
    fn create_photo(&self, kind: &str) -> Photo;
}

/// Fábrica por defecto: id `photo-<uuid>`, payload y rating derivados del id.
#[derive(Debug, Clone)]
pub struct DefaultPhotoFactory {
    width: u32,
    height: u32,
    payload_size: usize,
}

impl DefaultPhotoFactory {
    pub fn new(width: u32, height: u32, payload_size: usize) -> Self {
        Self { width,
               height,
               payload_size }
    }

    pub fn from_config(config: &PhotoConfig) -> Self {
        Self::new(config.width, config.height, config.payload_size)
    }
}

impl Default for DefaultPhotoFactory {
    fn default() -> Self { Self::from_config(&PhotoConfig::default()) }
}

impl PhotoFactory for DefaultPhotoFactory {
    fn create_photo(&self, kind: &str) -> Photo {
        let id = format!("{PHOTO_ID_PREFIX}{}", Uuid::new_v4());
        let mut payload = vec![0u8; self.payload_size];
        fill_from_seed(id.as_bytes(), &mut payload);
        let rating = Rating::from_seed(seed_byte(id.as_bytes()));

        let descriptor = Descriptor { width: self.width,
                                      height: self.height,
                                      captured_at: Utc::now(),
                                      rating,
                                      transforms: Vec::new(),
                                      format: ImageFormat::Jpeg.label().to_string(),
                                      description: PhotoKind::from_name(kind).description().to_string() };
        Photo::new(id, payload, descriptor)
    }
}
