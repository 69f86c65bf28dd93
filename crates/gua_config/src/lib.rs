//! Configuration defaults for chart computation.
//!
//! A config file is TOML with three optional tables:
//!
//! ```toml
//! [location]
//! latitude = 39.9042
//! longitude = 116.4074
//! meridian = 120.0      # civil time-zone meridian
//!
//! [calendar]
//! source = "astronomical"   # or "approximate"
//!
//! [output]
//! format = "text"           # or "json"
//! ```
//!
//! Missing tables and keys take the built-in defaults (Beijing, China
//! Standard Time, astronomical calendar, text output).

pub mod error;

use std::path::Path;

use gua_time::{CivilDate, ClockReading, TimeError};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuaConfig {
    pub location: LocationConfig,
    pub calendar: CalendarConfig,
    pub output: OutputConfig,
}

/// Default observer location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationConfig {
    /// North-positive degrees.
    pub latitude: f64,
    /// East-positive degrees.
    pub longitude: f64,
    /// Civil time-zone meridian in degrees. `None` (only reachable from
    /// code) selects the nominal 15° zone of `longitude`.
    pub meridian: Option<f64>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: 39.9042,
            longitude: 116.4074,
            meridian: Some(120.0),
        }
    }
}

impl LocationConfig {
    /// A clock reading at this location.
    pub fn reading(&self, date: CivilDate, hour: f64) -> ClockReading {
        let reading = ClockReading::new(date, hour, self.longitude, self.latitude);
        match self.meridian {
            Some(m) => reading.with_meridian(m),
            None => reading,
        }
    }

    pub fn validate(&self) -> Result<(), TimeError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(TimeError::InvalidLatitude(self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(TimeError::InvalidLongitude(self.longitude));
        }
        if let Some(m) = self.meridian {
            if !m.is_finite() || !(-180.0..=180.0).contains(&m) {
                return Err(TimeError::InvalidMeridian(m));
            }
        }
        Ok(())
    }
}

/// Where month and year pillars get the Sun's position from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSource {
    /// Analytic solar longitude with exact jie instants.
    #[default]
    Astronomical,
    /// Fixed Gregorian jie dates only.
    Approximate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    pub source: CalendarSource,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl GuaConfig {
    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load `path` if given, otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.location.validate()?;
        Ok(())
    }
}
