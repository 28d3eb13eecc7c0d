//! photo-gallery: colección de fotos con estrategias de ordenación
//! intercambiables en tiempo de ejecución.

mod gallery;
mod strategy;

pub use gallery::Gallery;
pub use strategy::{SortByDate, SortById, SortByRating, SortStrategy};
