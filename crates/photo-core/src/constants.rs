//! Constantes del núcleo de captura.
//!
//! Valores por defecto usados por la fábrica de fotos, los codecs simulados y
//! la configuración cuando no hay variables de entorno que los sobrescriban.

/// Ancho por defecto de una foto sintética.
pub const DEFAULT_WIDTH: u32 = 1920;
/// Alto por defecto de una foto sintética.
pub const DEFAULT_HEIGHT: u32 = 1080;
/// Tamaño (bytes) del payload sintético generado por la fábrica.
pub const DEFAULT_PAYLOAD_SIZE: usize = 1024;
/// Tamaño máximo (bytes) de un thumbnail.
pub const DEFAULT_THUMBNAIL_SIZE: usize = 128;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Prefijo mágico del JPEG simulado (SOI + APP0).
pub const JPEG_MAGIC: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE0];
/// Firma del PNG simulado.
pub const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Prefijo de los identificadores de foto (`photo-<uuid>`).
pub const PHOTO_ID_PREFIX: &str = "photo-";
