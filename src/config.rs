// src/config.rs

use std::time::Duration;

use log::warn;

pub const GATE_URL_VAR: &str = "TIRES_QUIZ_GATE_URL";
pub const GATE_TIMEOUT_VAR: &str = "TIRES_QUIZ_GATE_TIMEOUT_SECS";
pub const GATE_RETRIES_VAR: &str = "TIRES_QUIZ_GATE_RETRIES";

const DEFAULT_TIMEOUT_SECS: u64 = 8;
const MAX_TIMEOUT_SECS: u64 = 300;
const DEFAULT_RETRIES: u32 = 1;
const MAX_RETRIES: u32 = 5;
const DEADLINE_SLACK: Duration = Duration::from_secs(2);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    /// Sin endpoint se usa siempre el quiz nativo.
    pub endpoint: Option<String>,
    pub timeout: Duration,
    pub retries: u32,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retries: DEFAULT_RETRIES,
        }
    }
}

impl GateConfig {
    /// Construye la config a partir de una función de búsqueda de variables,
    /// para poder probarla sin tocar el entorno del proceso.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint = lookup(GATE_URL_VAR)
            .or_else(|| option_env!("TIRES_QUIZ_GATE_URL").map(str::to_owned))
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty());

        let timeout = parse_or_default(GATE_TIMEOUT_VAR, lookup(GATE_TIMEOUT_VAR), DEFAULT_TIMEOUT_SECS)
            .clamp(1, MAX_TIMEOUT_SECS);
        let retries = parse_or_default(GATE_RETRIES_VAR, lookup(GATE_RETRIES_VAR), DEFAULT_RETRIES)
            .min(MAX_RETRIES);

        Self {
            endpoint,
            timeout: Duration::from_secs(timeout),
            retries,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Tiempo máximo que el gate puede pasar en `Validating`.
    /// Si la cuenta desborda se usa el máximo de timeout y reintentos.
    pub fn deadline(&self) -> Duration {
        self.timeout
            .checked_mul(self.retries.saturating_add(1))
            .and_then(|d| d.checked_add(DEADLINE_SLACK))
            .unwrap_or_else(|| {
                warn!("gate deadline overflowed, using the maximum");
                Duration::from_secs(MAX_TIMEOUT_SECS) * (MAX_RETRIES + 1) + DEADLINE_SLACK
            })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub gate: GateConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            gate: GateConfig::from_env(),
        }
    }
}

fn parse_or_default<T: std::str::FromStr + Copy>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring invalid value {value:?} for {key}");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_values_from_lookup() {
        let cfg = GateConfig::from_lookup(lookup_from(&[
            (GATE_URL_VAR, " https://example.com/gate "),
            (GATE_TIMEOUT_VAR, "3"),
            (GATE_RETRIES_VAR, "2"),
        ]));
        assert_eq!(cfg.endpoint.as_deref(), Some("https://example.com/gate"));
        assert_eq!(cfg.timeout, Duration::from_secs(3));
        assert_eq!(cfg.retries, 2);
        assert_eq!(cfg.deadline(), Duration::from_secs(11));
    }

    #[test]
    fn invalid_numbers_fall_back_and_retries_are_capped() {
        let cfg = GateConfig::from_lookup(lookup_from(&[
            (GATE_TIMEOUT_VAR, "soon"),
            (GATE_RETRIES_VAR, "99"),
        ]));
        assert_eq!(cfg.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(cfg.retries, MAX_RETRIES);
    }

    #[test]
    fn huge_timeout_is_capped() {
        let cfg = GateConfig::from_lookup(lookup_from(&[(
            GATE_TIMEOUT_VAR,
            "18446744073709551615",
        )]));
        assert_eq!(cfg.timeout, Duration::from_secs(MAX_TIMEOUT_SECS));
        assert_eq!(cfg.deadline(), Duration::from_secs(MAX_TIMEOUT_SECS * 2 + 2));
    }

    #[test]
    fn deadline_never_overflows() {
        let cfg = GateConfig {
            endpoint: None,
            timeout: Duration::MAX,
            retries: u32::MAX,
        };
        assert_eq!(
            cfg.deadline(),
            Duration::from_secs(MAX_TIMEOUT_SECS * u64::from(MAX_RETRIES + 1) + 2)
        );
    }

    #[test]
    fn blank_endpoint_means_native_only() {
        let cfg = GateConfig::from_lookup(lookup_from(&[(GATE_URL_VAR, "   ")]));
        assert_eq!(cfg.endpoint, None);
    }
}
