//! Errores del núcleo, agrupados por etapa.
//!
//! Los errores de colaboradores (`CodecError`, `StorageError`) se envuelven en
//! `PipelineError` con el contexto de la etapa que falló.

use thiserror::Error;

/// Errores del modelo (validación de valores del descriptor).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ModelError {
    #[error("rating {0} out of range [1, 5]")] RatingOutOfRange(u8),
    #[error("transform name at position {index} cannot be empty")] EmptyTransformName { index: usize },
}

/// Errores de codificación / decodificación.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CodecError {
    #[error("invalid {format} data: {reason}")]
    InvalidFormat { format: &'static str, reason: String },
    #[error("unknown image format: {0}")]
    UnknownFormat(String),
    #[error("no encoder registered for {0}")]
    MissingEncoder(&'static str),
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Errores del almacenamiento clave-valor.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StorageError {
    #[error("id cannot be empty")] EmptyId,
    #[error("not found: {0}")] NotFound(String),
    #[error("storage backend: {0}")] Backend(String),
}

/// Etapa del pipeline en la que se produjo un error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validate,
    Encode,
    Persist,
}

/// Error devuelto por `CapturePipeline`. La creación es total y no aparece aquí.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PipelineError {
    #[error("invalid transform: {0}")]
    InvalidTransform(#[from] ModelError),
    #[error("encode photo as {format}: {source}")]
    Encode {
        format: &'static str,
        #[source]
        source: CodecError,
    },
    #[error("save photo {id}: {source}")]
    Persist {
        id: String,
        #[source]
        source: StorageError,
    },
}

impl PipelineError {
    pub fn stage(&self) -> Stage {
        match self {
            Self::InvalidTransform(_) => Stage::Validate,
            Self::Encode { .. } => Stage::Encode,
            Self::Persist { .. } => Stage::Persist,
        }
    }
}

/// Errores al leer la configuración desde el entorno.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_error_reports_stage_and_source() {
        let err = PipelineError::Persist { id: "photo-1".into(),
                                           source: StorageError::Backend("disk full".into()) };
        assert_eq!(err.stage(), Stage::Persist);
        assert_eq!(err.to_string(), "save photo photo-1: storage backend: disk full");
        let source = std::error::Error::source(&err).expect("persist error must carry a source");
        assert_eq!(source.to_string(), "storage backend: disk full");
    }

    #[test]
    fn model_error_converts_into_validate_stage() {
        let err = PipelineError::from(ModelError::EmptyTransformName { index: 2 });
        assert_eq!(err.stage(), Stage::Validate);
        assert_eq!(err.to_string(), "invalid transform: transform name at position 2 cannot be empty");
    }

    #[test]
    fn codec_error_messages() {
        let e = CodecError::InvalidFormat { format: "PNG", reason: "missing signature".into() };
        assert_eq!(e.to_string(), "invalid PNG data: missing signature");
    }
}
