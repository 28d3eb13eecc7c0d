//! Eventos, suscriptores y el bus de notificaciones.

mod bus;
mod subscriber;
mod types;

pub use bus::{Delivery, EventBus, FailurePolicy};
pub use subscriber::Subscriber;
pub use types::{Event, EventKind};
