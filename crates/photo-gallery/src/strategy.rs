//! Estrategias de ordenación.
//!
//! Todas devuelven una secuencia nueva, con orden total y estable: los empates
//! conservan el orden de entrada, también en sentido descendente.
use std::cmp::Ordering;
use std::sync::Arc;

use photo_core::Artifact;

pub trait SortStrategy: Send + Sync {
    fn sort(&self, images: &[Arc<dyn Artifact>]) -> Vec<Arc<dyn Artifact>>;

    fn name(&self) -> &'static str;
}

// Calcula la clave una vez por artifact (descriptor() copia el historial).
fn sort_by_key<K, F>(images: &[Arc<dyn Artifact>], ascending: bool, key: F) -> Vec<Arc<dyn Artifact>>
    where K: Ord,
          F: Fn(&dyn Artifact) -> K
{
    let mut keyed: Vec<(K, Arc<dyn Artifact>)> = images.iter().map(|a| (key(a.as_ref()), a.clone())).collect();
    keyed.sort_by(|(a, _), (b, _)| directed(a.cmp(b), ascending));
    keyed.into_iter().map(|(_, a)| a).collect()
}

fn directed(ord: Ordering, ascending: bool) -> Ordering {
    if ascending { ord } else { ord.reverse() }
}

#[derive(Debug, Clone, Copy)]
pub struct SortByDate {
    ascending: bool,
}

impl SortByDate {
    pub fn new(ascending: bool) -> Self { Self { ascending } }
}

impl SortStrategy for SortByDate {
    fn sort(&self, images: &[Arc<dyn Artifact>]) -> Vec<Arc<dyn Artifact>> {
        sort_by_key(images, self.ascending, |a| a.descriptor().captured_at)
    }

    fn name(&self) -> &'static str {
        if self.ascending { "Date(Asc)" } else { "Date(Desc)" }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SortByRating {
    ascending: bool,
}

impl SortByRating {
    pub fn new(ascending: bool) -> Self { Self { ascending } }
}

impl SortStrategy for SortByRating {
    fn sort(&self, images: &[Arc<dyn Artifact>]) -> Vec<Arc<dyn Artifact>> {
        sort_by_key(images, self.ascending, |a| a.descriptor().rating)
    }

    fn name(&self) -> &'static str {
        if self.ascending { "Rating(Asc)" } else { "Rating(Desc)" }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SortById {
    ascending: bool,
}

impl SortById {
    pub fn new(ascending: bool) -> Self { Self { ascending } }
}

impl SortStrategy for SortById {
    fn sort(&self, images: &[Arc<dyn Artifact>]) -> Vec<Arc<dyn Artifact>> {
        sort_by_key(images, self.ascending, |a| a.id().to_string())
    }

    fn name(&self) -> &'static str {
        if self.ascending { "ID(Asc)" } else { "ID(Desc)" }
    }
}
