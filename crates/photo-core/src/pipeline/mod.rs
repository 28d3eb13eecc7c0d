//! Pipeline de captura (facade).
//!
//! Orquesta creación → transformaciones → codificación → persistencia →
//! notificación, y devuelve el primer error encontrado.

pub mod builder;
pub mod facade;

pub use builder::PipelineBuilder;
pub use facade::{CapturePipeline, Captured};
