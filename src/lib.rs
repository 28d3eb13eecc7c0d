//! photoflow: composición del simulador de captura.
//!
//! - `app`: cablea bus, suscriptores, storage, pipeline y galería.
//! - `menu`: interfaz de texto por menú sobre cualquier `BufRead`/`Write`.

pub mod app;
pub mod menu;

pub use app::{App, CodecReport, DecoratorReport};
