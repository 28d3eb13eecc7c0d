use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{JPEG_MAGIC, PNG_MAGIC};
use crate::errors::CodecError;

/// Conjunto cerrado de formatos soportados.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Selección tolerante usada por el pipeline: sin distinguir mayúsculas;
    /// vacío o desconocido cae a JPEG.
    pub fn select(name: &str) -> Self { name.parse().unwrap_or_default() }

    /// Etiqueta que se guarda en el descriptor ("JPEG" / "PNG").
    pub fn label(self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
        }
    }

    pub fn magic(self) -> &'static [u8] {
        match self {
            Self::Jpeg => &JPEG_MAGIC,
            Self::Png => &PNG_MAGIC,
        }
    }

    pub fn header_len(self) -> usize { self.magic().len() }

    /// Identifica el formato por su prefijo mágico completo.
    pub fn detect(data: &[u8]) -> Option<Self> {
        [Self::Png, Self::Jpeg].into_iter().find(|f| data.starts_with(f.magic()))
    }
}

impl FromStr for ImageFormat {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("jpeg") {
            Ok(Self::Jpeg)
        } else if name.eq_ignore_ascii_case("png") {
            Ok(Self::Png)
        } else {
            Err(CodecError::UnknownFormat(name.to_string()))
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}
