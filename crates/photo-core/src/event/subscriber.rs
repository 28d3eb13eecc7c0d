use super::Event;

/// Capacidad consumida por el `EventBus`.
///
/// `on_event` se invoca de forma síncrona desde el hilo que publica; un
/// suscriptor lento detiene a quien publica. Puede llamar de nuevo al bus
/// (registrar, desregistrar, publicar) porque el bus no mantiene ningún lock
/// mientras entrega.
pub trait Subscriber: Send + Sync {
    fn on_event(&self, event: &Event);

    fn name(&self) -> &str;
}
