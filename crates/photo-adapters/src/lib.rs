//! photo-adapters: colaboradores concretos del núcleo.
//!
//! Este crate provee:
//! - `MapStorage`: adapta un mapa concurrente al contrato `Storage`.
//! - Suscriptores periféricos: log, caché de thumbnails y contador de
//!   estadísticas. Son instancias explícitas (sin estado global): quien compone
//!   el bus decide su ciclo de vida.

pub mod storage;
pub mod subscribers;

pub use storage::MapStorage;
pub use subscribers::{LoggingSubscriber, StatisticsSubscriber, ThumbnailSubscriber};
