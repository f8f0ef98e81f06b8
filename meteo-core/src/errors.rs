use crate::FloatValue;
use thiserror::Error;

/// Error type for invalid parameter operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeteoError {
    #[error("Unknown parameter `{0}`")]
    UnknownParameter(String),
    #[error("Wrong shape for parameter `{name}`. Expected {expected} value(s), got {got}")]
    WrongShape {
        name: String,
        expected: String,
        got: usize,
    },
    #[error("Parameter `{0}` does not hold monthly values")]
    NotMonthly(String),
    #[error("For parameter `{name}`, at least one value needs to be defined")]
    Undefined { name: String },
    #[error("Parameter `{name}` has value {value}, which lies outside [{lower}, {upper}]")]
    OutOfBounds {
        name: String,
        value: FloatValue,
        lower: FloatValue,
        upper: FloatValue,
    },
    #[error("In {month}, angstromconstant ({constant}) and angstromfactor ({factor}) sum to more than 1")]
    JointConstraint {
        month: String,
        constant: FloatValue,
        factor: FloatValue,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenience type for `Result<T, MeteoError>`.
pub type MeteoResult<T> = Result<T, MeteoError>;
