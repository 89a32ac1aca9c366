//! Ambient deposition conditions seen by every rate law.

use crate::error::ConfigError;

/// Reactor conditions: absolute temperature and total pressure.
///
/// Both values feed rate laws that are computed once at process
/// initialization and recomputed only when the environment changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    temperature: f64,
    pressure: f64,
}

impl Environment {
    /// Create a validated environment.
    ///
    /// `temperature` [K] must be finite and positive; `pressure` [Pa] must
    /// be finite and non-negative.
    pub fn new(temperature: f64, pressure: f64) -> Result<Self, ConfigError> {
        if !temperature.is_finite() || temperature <= 0.0 {
            return Err(ConfigError::InvalidEnvironment {
                reason: format!("temperature must be finite and positive, got {temperature}"),
            });
        }
        if !pressure.is_finite() || pressure < 0.0 {
            return Err(ConfigError::InvalidEnvironment {
                reason: format!("pressure must be finite and non-negative, got {pressure}"),
            });
        }
        Ok(Self {
            temperature,
            pressure,
        })
    }

    /// Absolute temperature [K].
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Total pressure [Pa].
    pub fn pressure(&self) -> f64 {
        self.pressure
    }
}

impl Default for Environment {
    /// 300 K, vacuum.
    fn default() -> Self {
        Self {
            temperature: 300.0,
            pressure: 0.0,
        }
    }
}
