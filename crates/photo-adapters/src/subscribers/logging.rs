use log::{debug, info};
use photo_core::{Event, Subscriber};

/// Escribe cada evento en el log (`info` con el tipo, `debug` con el JSON).
#[derive(Debug, Clone)]
pub struct LoggingSubscriber {
    name: String,
}

impl LoggingSubscriber {
    pub fn new(name: &str) -> Self { Self { name: super::name_or(name, "Logger") } }
}

impl Subscriber for LoggingSubscriber {
    fn on_event(&self, event: &Event) {
        info!("[{}] {}", self.name, event.kind());
        debug!("[{}] {}", self.name, event.to_json());
    }

    fn name(&self) -> &str { &self.name }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name() {
        assert_eq!(LoggingSubscriber::new("").name(), "Logger");
        assert_eq!(LoggingSubscriber::new("SystemLogger").name(), "SystemLogger");
    }
}
