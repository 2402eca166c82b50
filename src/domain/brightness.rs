//! Raw backlight brightness and its percentage view

use std::str::FromStr;

use serde::Deserialize;

use crate::domain::DomainError;

/// Current and maximum raw brightness of one backlight device.
///
/// Raw units are device specific; `max` is whatever the driver reports in
/// `max_brightness`. A `Brightness` can only be built with `max > 0`, so the
/// percentage view never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brightness {
    current: i64,
    max: i64,
}

impl Brightness {
    /// Create a brightness value, rejecting a non-positive maximum.
    pub fn new(current: i64, max: i64) -> Result<Self, DomainError> {
        if max <= 0 {
            return Err(DomainError::InvalidMaximum { max });
        }
        Ok(Self { current, max })
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Current brightness as a percentage of the maximum.
    pub fn percent(&self) -> f64 {
        100.0 * self.current as f64 / self.max as f64
    }

    /// Brightness set to `percent` of the maximum.
    ///
    /// The raw value is truncated toward zero. No range check happens here;
    /// use [`PercentPolicy::apply`] first if the input is untrusted.
    pub fn with_percent(&self, percent: f64) -> Self {
        Self {
            current: ((percent / 100.0) * self.max as f64) as i64,
            max: self.max,
        }
    }
}

/// What to do with a requested percentage outside `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PercentPolicy {
    /// Hand the value to the driver unchanged.
    #[default]
    Passthrough,
    /// Clamp into `0..=100`.
    Clamp,
    /// Fail with [`DomainError::PercentOutOfRange`].
    Reject,
}

impl PercentPolicy {
    pub fn apply(&self, percent: f64) -> Result<f64, DomainError> {
        let in_range = (0.0..=100.0).contains(&percent);
        match self {
            PercentPolicy::Passthrough => Ok(percent),
            PercentPolicy::Clamp => Ok(percent.clamp(0.0, 100.0)),
            PercentPolicy::Reject if in_range => Ok(percent),
            PercentPolicy::Reject => Err(DomainError::PercentOutOfRange(percent)),
        }
    }
}

impl FromStr for PercentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "passthrough" => Ok(PercentPolicy::Passthrough),
            "clamp" => Ok(PercentPolicy::Clamp),
            "reject" => Ok(PercentPolicy::Reject),
            other => Err(format!(
                "unknown percent policy {other:?}, expected passthrough, clamp or reject"
            )),
        }
    }
}
