//! Configuration of the control parameters
//!
//! A [`ControlConfig`] is usually read from TOML:
//!
//! ```toml
//! latitude = 50.8
//! longitude = 6.1
//! angstromconstant = 0.25
//! angstromfactor = [0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5]
//! ```
//!
//! Every field is optional. Fields are applied in declaration order, so
//! `angstromconstant` is always trimmed before `angstromfactor`.

use crate::control::MeteoControl;
use crate::errors::{MeteoError, MeteoResult};
use crate::parameters::{MonthlyInput, ParameterName};
use crate::FloatValue;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A configured value: one number, or a list of numbers for monthly parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Scalar(FloatValue),
    List(Vec<FloatValue>),
}

impl ConfigValue {
    fn as_slice(&self) -> &[FloatValue] {
        match self {
            ConfigValue::Scalar(v) => std::slice::from_ref(v),
            ConfigValue::List(vs) => vs,
        }
    }

    fn to_monthly(&self, name: ParameterName) -> MeteoResult<MonthlyInput> {
        MonthlyInput::from_slice(name.as_str(), self.as_slice())
    }
}

/// User supplied values for the control parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControlConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<FloatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<FloatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angstromconstant: Option<ConfigValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angstromfactor: Option<ConfigValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angstromalternative: Option<ConfigValue>,
}

impl ControlConfig {
    pub fn from_toml_str(content: &str) -> MeteoResult<Self> {
        toml::from_str(content).map_err(|e| MeteoError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> MeteoResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| MeteoError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> MeteoResult<String> {
        toml::to_string(self).map_err(|e| MeteoError::Config(e.to_string()))
    }

    /// Assign every configured value to `control`, trimming as usual.
    ///
    /// All shapes are checked before anything is assigned, so a failing
    /// configuration leaves `control` unchanged.
    pub fn apply(&self, control: &mut MeteoControl) -> MeteoResult<()> {
        let constant = self
            .angstromconstant
            .as_ref()
            .map(|v| v.to_monthly(ParameterName::AngstromConstant))
            .transpose()?;
        let factor = self
            .angstromfactor
            .as_ref()
            .map(|v| v.to_monthly(ParameterName::AngstromFactor))
            .transpose()?;
        let alternative = self
            .angstromalternative
            .as_ref()
            .map(|v| v.to_monthly(ParameterName::AngstromAlternative))
            .transpose()?;

        if let Some(v) = self.latitude {
            control.set_latitude(v);
        }
        if let Some(v) = self.longitude {
            control.set_longitude(v);
        }
        if let Some(input) = constant {
            control.set_angstrom_constant(input);
        }
        if let Some(input) = factor {
            control.set_angstrom_factor(input);
        }
        if let Some(input) = alternative {
            control.set_angstrom_alternative(input);
        }
        debug!("Applied control configuration:\n{}", control);
        Ok(())
    }
}

impl MeteoControl {
    /// Build a container from defaults overridden by `config`.
    pub fn from_config(config: &ControlConfig) -> MeteoResult<Self> {
        let mut control = MeteoControl::with_defaults();
        config.apply(&mut control)?;
        Ok(control)
    }
}
