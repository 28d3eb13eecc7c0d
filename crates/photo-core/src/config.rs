//! Configuración desde variables de entorno.
//!
//! Carga `.env` una sola vez (si existe) y lee las variables `PHOTOFLOW_*`.
//! Valores ausentes toman los defaults de `constants`; valores mal formados
//! son un `ConfigError`.

use std::env;

use dotenvy::dotenv;
use log::warn;
use once_cell::sync::Lazy;

use crate::codec::ImageFormat;
use crate::constants::{DEFAULT_HEIGHT, DEFAULT_PAYLOAD_SIZE, DEFAULT_THUMBNAIL_SIZE, DEFAULT_WIDTH};
use crate::errors::ConfigError;
use crate::event::FailurePolicy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Configuración global derivada del entorno. Si el entorno es inválido se
/// registra un warning y se usan los defaults.
pub static CONFIG: Lazy<PhotoConfig> = Lazy::new(|| {
    PhotoConfig::from_env().unwrap_or_else(|e| {
                               warn!("invalid photoflow configuration, using defaults: {e}");
                               PhotoConfig::default()
                           })
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoConfig {
    /// Formato usado cuando el llamador no indica uno.
    pub default_format: ImageFormat,
    pub payload_size: usize,
    pub width: u32,
    pub height: u32,
    pub thumbnail_size: usize,
    pub failure_policy: FailurePolicy,
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self { default_format: ImageFormat::Jpeg,
               payload_size: DEFAULT_PAYLOAD_SIZE,
               width: DEFAULT_WIDTH,
               height: DEFAULT_HEIGHT,
               thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
               failure_policy: FailurePolicy::Isolate }
    }
}

impl PhotoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda
    /// arbitraria (el entorno en producción, un mapa en tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let d = Self::default();
        let default_format = match lookup("PHOTOFLOW_DEFAULT_FORMAT") {
            Some(v) => v.parse().map_err(|_| invalid("PHOTOFLOW_DEFAULT_FORMAT", &v))?,
            None => d.default_format,
        };
        let failure_policy = match lookup("PHOTOFLOW_SUBSCRIBER_FAILURES") {
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "isolate" => FailurePolicy::Isolate,
                "propagate" => FailurePolicy::Propagate,
                _ => return Err(invalid("PHOTOFLOW_SUBSCRIBER_FAILURES", &v)),
            },
            None => d.failure_policy,
        };
        Ok(Self { default_format,
                  payload_size: parse_or(&lookup, "PHOTOFLOW_PAYLOAD_SIZE", d.payload_size)?,
                  width: parse_or(&lookup, "PHOTOFLOW_WIDTH", d.width)?,
                  height: parse_or(&lookup, "PHOTOFLOW_HEIGHT", d.height)?,
                  thumbnail_size: parse_or(&lookup, "PHOTOFLOW_THUMBNAIL_SIZE", d.thumbnail_size)?,
                  failure_policy })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
    where F: Fn(&str) -> Option<String>,
          T: std::str::FromStr
{
    match lookup(key) {
        Some(v) => v.trim().parse().map_err(|_| invalid(key, &v)),
        None => Ok(default),
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue { key,
                                value: value.to_string() }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() { Lazy::force(&DOTENV_LOADED); }

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = PhotoConfig::from_lookup(lookup(&[])).expect("defaults");
        assert_eq!(cfg, PhotoConfig::default());
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = PhotoConfig::from_lookup(lookup(&[("PHOTOFLOW_DEFAULT_FORMAT", "PNG"),
                                                    ("PHOTOFLOW_PAYLOAD_SIZE", "16"),
                                                    ("PHOTOFLOW_THUMBNAIL_SIZE", " 8 "),
                                                    ("PHOTOFLOW_SUBSCRIBER_FAILURES", "propagate")])).expect("valid overrides");
        assert_eq!(cfg.default_format, ImageFormat::Png);
        assert_eq!(cfg.payload_size, 16);
        assert_eq!(cfg.thumbnail_size, 8);
        assert_eq!(cfg.failure_policy, FailurePolicy::Propagate);
        assert_eq!(cfg.width, DEFAULT_WIDTH);
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = PhotoConfig::from_lookup(lookup(&[("PHOTOFLOW_WIDTH", "wide")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue { key: "PHOTOFLOW_WIDTH", value: "wide".into() });
        assert!(PhotoConfig::from_lookup(lookup(&[("PHOTOFLOW_DEFAULT_FORMAT", "gif")])).is_err());
        assert!(PhotoConfig::from_lookup(lookup(&[("PHOTOFLOW_SUBSCRIBER_FAILURES", "ignore")])).is_err());
    }
}
