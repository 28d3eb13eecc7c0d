//! Bus de eventos en memoria, seguro entre hilos.
//!
//! `register`, `unregister` y `notify` pueden llamarse concurrentemente. El
//! conjunto de suscriptores está protegido por un `RwLock`; `notify` toma el
//! lock de lectura sólo para copiar la lista y lo suelta antes de invocar a
//! nadie. Cada entrega ve así el conjunto tal como estaba al empezar, en orden
//! de registro, aunque un suscriptor se desregistre (o registre a otro)
//! durante su propio `on_event`.
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, error};

use super::{Event, Subscriber};

/// Qué hacer cuando un suscriptor entra en pánico durante la entrega.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Captura el pánico, lo registra y sigue con el resto del snapshot.
    #[default]
    Isolate,
    /// Deja que el pánico llegue a quien llamó a `notify` (fail-fast). Los
    /// suscriptores posteriores del snapshot no reciben el evento.
    Propagate,
}

/// Resultado de una entrega.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delivery {
    /// Suscriptores cuyo `on_event` terminó normalmente.
    pub delivered: usize,
    /// Nombres de los suscriptores que entraron en pánico (sólo con `Isolate`).
    pub failed: Vec<String>,
}

impl Delivery {
    pub fn is_clean(&self) -> bool { self.failed.is_empty() }
}

pub struct EventBus {
    subscribers: RwLock<Vec<Arc<dyn Subscriber>>>,
    policy: FailurePolicy,
}

impl EventBus {
    pub fn new() -> Self { Self::with_policy(FailurePolicy::default()) }

    pub fn with_policy(policy: FailurePolicy) -> Self {
        Self { subscribers: RwLock::new(Vec::new()),
               policy }
    }

    /// Añade un suscriptor al final. Los duplicados se permiten y cada
    /// registro recibe su propia entrega.
    pub fn register(&self, subscriber: Arc<dyn Subscriber>) {
        debug!("event bus: register {}", subscriber.name());
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(subscriber);
    }

    /// Quita la primera entrada que sea el mismo objeto (identidad, no valor).
    /// Devuelve `false` si no estaba registrado.
    pub fn unregister(&self, subscriber: &Arc<dyn Subscriber>) -> bool {
        let mut subs = self.subscribers.write().unwrap_or_else(PoisonError::into_inner);
        match subs.iter().position(|s| same_subscriber(s, subscriber)) {
            Some(idx) => {
                subs.remove(idx);
                debug!("event bus: unregister {}", subscriber.name());
                true
            }
            None => false,
        }
    }

    /// Entrega `event` a una copia del conjunto tomada al entrar, en orden de
    /// registro, de forma síncrona.
    pub fn notify(&self, event: &Event) -> Delivery {
        let snapshot = self.snapshot();
        let mut delivery = Delivery::default();
        for subscriber in snapshot {
            match self.policy {
                FailurePolicy::Propagate => {
                    subscriber.on_event(event);
                    delivery.delivered += 1;
                }
                FailurePolicy::Isolate => {
                    match panic::catch_unwind(AssertUnwindSafe(|| subscriber.on_event(event))) {
                        Ok(()) => delivery.delivered += 1,
                        Err(payload) => {
                            error!("subscriber {} panicked on {}: {}",
                                   subscriber.name(),
                                   event.kind(),
                                   panic_message(payload.as_ref()));
                            delivery.failed.push(subscriber.name().to_string());
                        }
                    }
                }
            }
        }
        delivery
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn subscriber_names(&self) -> Vec<String> {
        self.snapshot().iter().map(|s| s.name().to_string()).collect()
    }

    fn snapshot(&self) -> Vec<Arc<dyn Subscriber>> {
        self.subscribers.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Default for EventBus {
    fn default() -> Self { Self::new() }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
         .field("subscribers", &self.subscriber_names())
         .field("policy", &self.policy)
         .finish()
    }
}

// Compara sólo la dirección de datos: dos `Arc<dyn _>` al mismo objeto pueden
// llevar vtables distintas.
fn same_subscriber(a: &Arc<dyn Subscriber>, b: &Arc<dyn Subscriber>) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::event::EventKind;

    struct Recorder {
        name: String,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl Subscriber for Recorder {
        fn on_event(&self, _event: &Event) {
            self.seen.lock().expect("lock").push(self.name.clone());
        }
        fn name(&self) -> &str { &self.name }
    }

    struct Panicker;

    impl Subscriber for Panicker {
        fn on_event(&self, _event: &Event) { panic!("boom"); }
        fn name(&self) -> &str { "panicker" }
    }

    fn recorder(name: &str, seen: &Arc<Mutex<Vec<String>>>) -> Arc<dyn Subscriber> {
        Arc::new(Recorder { name: name.to_string(),
                            seen: seen.clone() })
    }

    fn event() -> Event { Event::new(EventKind::Created, None, "test") }

    #[test]
    fn notify_in_registration_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let bus = EventBus::new();
        for n in ["a", "b", "c"] {
            bus.register(recorder(n, &seen));
        }
        let d = bus.notify(&event());
        assert_eq!(d.delivered, 3);
        assert!(d.is_clean());
        assert_eq!(*seen.lock().expect("lock"), ["a", "b", "c"]);
    }

    #[test]
    fn duplicates_are_notified_twice_and_removed_one_at_a_time() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let bus = EventBus::new();
        let r = recorder("dup", &seen);
        bus.register(r.clone());
        bus.register(r.clone());
        assert_eq!(bus.notify(&event()).delivered, 2);

        assert!(bus.unregister(&r));
        assert_eq!(bus.subscriber_count(), 1);
        assert!(bus.unregister(&r));
        assert!(!bus.unregister(&r), "absent subscriber is a no-op");
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn unregister_uses_identity_not_name() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let bus = EventBus::new();
        let first = recorder("same", &seen);
        let second = recorder("same", &seen);
        bus.register(first.clone());
        assert!(!bus.unregister(&second));
        assert!(bus.unregister(&first));
    }

    #[test]
    fn isolate_policy_keeps_delivering_after_panic() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let bus = EventBus::new();
        bus.register(recorder("before", &seen));
        bus.register(Arc::new(Panicker));
        bus.register(recorder("after", &seen));

        let d = bus.notify(&event());
        assert_eq!(d.delivered, 2);
        assert_eq!(d.failed, ["panicker"]);
        assert_eq!(*seen.lock().expect("lock"), ["before", "after"]);
    }

    #[test]
    fn propagate_policy_reraises_panic() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let bus = EventBus::with_policy(FailurePolicy::Propagate);
        bus.register(recorder("before", &seen));
        bus.register(Arc::new(Panicker));
        bus.register(recorder("after", &seen));

        let res = panic::catch_unwind(AssertUnwindSafe(|| bus.notify(&event())));
        assert!(res.is_err());
        assert_eq!(*seen.lock().expect("lock"), ["before"]);
        assert_eq!(bus.subscriber_count(), 3, "bus state survives the panic");
    }

    #[test]
    fn panic_message_extraction() {
        let p: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(p.as_ref()), "static");
        let p: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(p.as_ref()), "owned");
        let p: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(p.as_ref()), "non-string panic payload");
    }
}
