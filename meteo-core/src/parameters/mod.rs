//! Control parameters of the meteorology submodel
//!
//! Each parameter is described by a static [`ParameterDef`] (name, unit,
//! dimensionality, valid span and default) and stored either in a
//! [`ScalarParameter`] or a [`MonthlyParameter`]. The concrete definitions
//! live in this module; the [`MeteoControl`](crate::control::MeteoControl)
//! container owns one instance of each.

mod monthly;
mod scalar;

pub use monthly::{MonthlyInput, MonthlyParameter, JOINT_LIMIT};
pub use scalar::ScalarParameter;

use crate::bounds::Span;
use crate::errors::MeteoError;
use crate::FloatValue;
use std::fmt;
use std::str::FromStr;

/// Static description of a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterDef {
    /// Lowercase name, as used in configuration files and representations
    pub name: &'static str,
    /// Human readable description including the unit
    pub description: &'static str,
    /// 0 for scalars, 1 for monthly parameters
    pub ndim: usize,
    pub span: Span,
    /// Value assigned when a container is built with defaults.
    pub default: Option<FloatValue>,
}

/// The latitude [decimal degrees].
pub const LATITUDE: ParameterDef = ParameterDef {
    name: "latitude",
    description: "The latitude [decimal degrees]",
    ndim: 0,
    span: Span::new(-90.0, 90.0),
    default: None,
};

/// The longitude [decimal degrees].
pub const LONGITUDE: ParameterDef = ParameterDef {
    name: "longitude",
    description: "The longitude [decimal degrees]",
    ndim: 0,
    span: Span::new(-180.0, 180.0),
    default: None,
};

/// The Ångström "a" coefficient for calculating global radiation [-].
///
/// Trimmed so that $a \leq 1 - b$ for every month, where $b$ is
/// [`ANGSTROM_FACTOR`].
pub const ANGSTROM_CONSTANT: ParameterDef = ParameterDef {
    name: "angstromconstant",
    description: "The Ångström \"a\" coefficient for calculating global radiation [-]",
    ndim: 1,
    span: Span::new(0.0, 1.0),
    default: Some(0.25),
};

/// The Ångström "b" coefficient for calculating global radiation [-].
///
/// Trimmed so that $b \leq 1 - a$ for every month, where $a$ is
/// [`ANGSTROM_CONSTANT`].
pub const ANGSTROM_FACTOR: ParameterDef = ParameterDef {
    name: "angstromfactor",
    description: "The Ångström \"b\" coefficient for calculating global radiation [-]",
    ndim: 1,
    span: Span::new(0.0, 1.0),
    default: Some(0.5),
};

/// Alternative Ångström coefficient replacing "a" on days without any direct
/// sunshine [-].
pub const ANGSTROM_ALTERNATIVE: ParameterDef = ParameterDef {
    name: "angstromalternative",
    description: "An alternative Ångström coefficient for replacing coefficient \"a\" on days without any direct sunshine [-]",
    ndim: 1,
    span: Span::new(0.0, 1.0),
    default: Some(0.15),
};

/// Identifies one of the control parameters by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterName {
    Latitude,
    Longitude,
    AngstromConstant,
    AngstromFactor,
    AngstromAlternative,
}

impl ParameterName {
    /// All parameters in declaration order.
    pub const ALL: [ParameterName; 5] = [
        ParameterName::Latitude,
        ParameterName::Longitude,
        ParameterName::AngstromConstant,
        ParameterName::AngstromFactor,
        ParameterName::AngstromAlternative,
    ];

    pub fn def(self) -> &'static ParameterDef {
        match self {
            ParameterName::Latitude => &LATITUDE,
            ParameterName::Longitude => &LONGITUDE,
            ParameterName::AngstromConstant => &ANGSTROM_CONSTANT,
            ParameterName::AngstromFactor => &ANGSTROM_FACTOR,
            ParameterName::AngstromAlternative => &ANGSTROM_ALTERNATIVE,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.def().name
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterName {
    type Err = MeteoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ParameterName::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| MeteoError::UnknownParameter(s.to_string()))
    }
}

/// Render a value the way parameter representations show it.
///
/// Undefined values show as `nan`; defined ones are rounded to ten decimals
/// to hide floating point noise from the trimming arithmetic.
pub(crate) fn format_value(value: Option<FloatValue>) -> String {
    match value {
        None => "nan".to_string(),
        Some(v) => format!("{:?}", (v * 1e10).round() / 1e10),
    }
}
