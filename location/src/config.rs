use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Upper bound on acquiring a fresh fix.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Desired accuracy hint handed to the provider for fresh fixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationAccuracy {
    /// Roughly country level. Cheapest on power.
    Lowest,
    /// Roughly city level.
    Low,
    /// Roughly neighborhood level.
    Medium,
    /// Roughly street level.
    #[default]
    High,
    /// Best the hardware can do.
    Best,
}

impl LocationAccuracy {
    /// Approximate radius in meters this hint asks for.
    #[must_use]
    pub const fn meters(self) -> f64 {
        match self {
            Self::Lowest => 3000.0,
            Self::Low => 1000.0,
            Self::Medium => 100.0,
            Self::High => 10.0,
            Self::Best => 0.0,
        }
    }
}

/// Settings for a [`crate::LocationGateway`].
///
/// Missing fields fall back to their defaults when deserializing, so the
/// struct can be embedded in an application config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Accuracy hint for fresh fixes.
    pub accuracy: LocationAccuracy,
    /// Hard bound on acquiring a fresh fix.
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            accuracy: LocationAccuracy::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GatewayConfig {
    /// Sets the accuracy hint.
    #[must_use]
    pub const fn with_accuracy(mut self, accuracy: LocationAccuracy) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Sets the fix timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bound_fixes_at_ten_seconds() {
        let config = GatewayConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.accuracy, LocationAccuracy::High);
    }

    #[test]
    fn builders_override_fields() {
        let config = GatewayConfig::default()
            .with_accuracy(LocationAccuracy::Low)
            .with_timeout(Duration::from_millis(250));
        assert_eq!(config.accuracy, LocationAccuracy::Low);
        assert_eq!(config.timeout, Duration::from_millis(250));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: GatewayConfig = serde_json::from_str(r#"{"accuracy":"best"}"#).unwrap();
        assert_eq!(config.accuracy, LocationAccuracy::Best);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn accuracy_hints_tighten_in_order() {
        let hints = [
            LocationAccuracy::Lowest,
            LocationAccuracy::Low,
            LocationAccuracy::Medium,
            LocationAccuracy::High,
            LocationAccuracy::Best,
        ];
        assert!(hints.windows(2).all(|w| w[0].meters() > w[1].meters()));
    }
}
