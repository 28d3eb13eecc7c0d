use dashmap::DashMap;
use photo_core::{Event, Subscriber};

/// Guarda, por id de artifact, los primeros `size` bytes del payload de cada
/// evento que tenga sujeto. Un evento posterior del mismo id lo reemplaza.
#[derive(Debug)]
pub struct ThumbnailSubscriber {
    name: String,
    size: usize,
    thumbnails: DashMap<String, Vec<u8>>,
}

impl ThumbnailSubscriber {
    pub fn new(name: &str, size: usize) -> Self {
        Self { name: super::name_or(name, "ThumbnailGenerator"),
               size,
               thumbnails: DashMap::new() }
    }

    pub fn thumbnail(&self, id: &str) -> Option<Vec<u8>> { self.thumbnails.get(id).map(|t| t.value().clone()) }

    pub fn len(&self) -> usize { self.thumbnails.len() }

    pub fn is_empty(&self) -> bool { self.thumbnails.is_empty() }
}

impl Subscriber for ThumbnailSubscriber {
    fn on_event(&self, event: &Event) {
        let Some(artifact) = event.subject() else { return };
        let payload = artifact.payload();
        let thumb = payload[..payload.len().min(self.size)].to_vec();
        self.thumbnails.insert(artifact.id().to_string(), thumb);
    }

    fn name(&self) -> &str { &self.name }
}
