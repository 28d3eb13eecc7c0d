//! Tipos de evento y estructura `Event`.
//!
//! Un `Event` se construye por completo antes de publicarse: `kind` y
//! `subject` son fijos desde `Event::new`, y la metadata sólo puede añadirse
//! con `with_metadata`, que consume el valor. El bus entrega `&Event`, por lo
//! que ningún suscriptor puede modificarlo y el bus no guarda historial.
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::model::Artifact;

/// Enumeración cerrada de hitos observables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "ImageCaptured")]
    Created,
    #[serde(rename = "ImageProcessed")]
    Processed,
    #[serde(rename = "GallerySorted")]
    Sorted,
    #[serde(rename = "ImageEncoded")]
    Encoded,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [Self::Created, Self::Processed, Self::Sorted, Self::Encoded];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "ImageCaptured",
            Self::Processed => "ImageProcessed",
            Self::Sorted => "GallerySorted",
            Self::Encoded => "ImageEncoded",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Debug, Clone)]
pub struct Event {
    kind: EventKind,
    subject: Option<Arc<dyn Artifact>>,
    message: String,
    metadata: HashMap<String, Value>,
}

impl Event {
    pub fn new(kind: EventKind, subject: Option<Arc<dyn Artifact>>, message: impl Into<String>) -> Self {
        Self { kind,
               subject,
               message: message.into(),
               metadata: HashMap::new() }
    }

    /// Añade una entrada de metadata antes de publicar.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn kind(&self) -> EventKind { self.kind }

    pub fn subject(&self) -> Option<&Arc<dyn Artifact>> { self.subject.as_ref() }

    pub fn message(&self) -> &str { &self.message }

    pub fn metadata(&self) -> &HashMap<String, Value> { &self.metadata }

    pub fn metadata_value(&self, key: &str) -> Option<&Value> { self.metadata.get(key) }

    /// Representación JSON para logs (el artifact se reduce a su id).
    pub fn to_json(&self) -> Value {
        json!({
            "kind": self.kind,
            "subject": self.subject.as_ref().map(|a| a.id().to_string()),
            "message": self.message,
            "metadata": self.metadata,
        })
    }
}
