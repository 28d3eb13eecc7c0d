use std::fmt::Write as _;

use dashmap::DashMap;
use indexmap::IndexMap;
use photo_core::{Event, EventKind, Subscriber};

/// Cuenta eventos por tipo.
#[derive(Debug)]
pub struct StatisticsSubscriber {
    name: String,
    counts: DashMap<EventKind, u64>,
}

impl StatisticsSubscriber {
    pub fn new(name: &str) -> Self {
        Self { name: super::name_or(name, "Statistics"),
               counts: DashMap::new() }
    }

    pub fn count(&self, kind: EventKind) -> u64 { self.counts.get(&kind).map(|c| *c).unwrap_or(0) }

    pub fn total(&self) -> u64 { self.counts.iter().map(|e| *e.value()).sum() }

    /// Conteos no nulos en el orden de `EventKind::ALL`.
    pub fn snapshot(&self) -> IndexMap<EventKind, u64> {
        EventKind::ALL.iter()
                      .filter_map(|k| self.counts.get(k).map(|c| (*k, *c)))
                      .collect()
    }

    pub fn report(&self) -> String {
        let mut out = String::from("Statistics:\n");
        for (kind, count) in self.snapshot() {
            let _ = writeln!(out, "  {kind}: {count}");
        }
        out
    }
}

impl Subscriber for StatisticsSubscriber {
    fn on_event(&self, event: &Event) { *self.counts.entry(event.kind()).or_insert(0) += 1; }

    fn name(&self) -> &str { &self.name }
}
