//! Control parameters of a hydrological meteorology submodel.
//!
//! The location of the simulated catchment (latitude, longitude) and the
//! monthly Ångström coefficients used to estimate global radiation. Every
//! assignment trims values into their valid range; the "a" and "b"
//! coefficients are also trimmed against each other so that their sum stays
//! within 1.

pub mod bounds;
pub mod config;
pub mod control;
pub mod month;
pub mod parameters;
pub mod python;

pub mod errors;

/// Floating point type of all parameter values
pub type FloatValue = f64;

pub use config::{ConfigValue, ControlConfig};
pub use control::MeteoControl;
pub use errors::{MeteoError, MeteoResult};
pub use month::{Month, MonthlyValues, N_MONTHS};
pub use parameters::{MonthlyInput, MonthlyParameter, ParameterName, ScalarParameter};
