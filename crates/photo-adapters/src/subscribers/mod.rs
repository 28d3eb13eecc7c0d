//! Suscriptores periféricos del bus.

mod logging;
mod statistics;
mod thumbnail;

pub use logging::LoggingSubscriber;
pub use statistics::StatisticsSubscriber;
pub use thumbnail::ThumbnailSubscriber;

// Nombre efectivo: vacío → nombre por defecto del suscriptor.
fn name_or(name: &str, default: &str) -> String {
    if name.is_empty() { default.to_string() } else { name.to_string() }
}
