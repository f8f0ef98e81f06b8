use super::{format_value, ParameterDef};
use crate::bounds::clamp_values;
use crate::FloatValue;
use std::fmt;

/// A single bounded value, e.g. latitude or longitude.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarParameter {
    def: &'static ParameterDef,
    value: Option<FloatValue>,
}

impl ScalarParameter {
    /// A parameter without a value.
    pub fn new(def: &'static ParameterDef) -> Self {
        Self { def, value: None }
    }

    /// A parameter holding its default value (undefined if it has none).
    pub fn with_default(def: &'static ParameterDef) -> Self {
        Self {
            def,
            value: def.default,
        }
    }

    pub fn def(&self) -> &'static ParameterDef {
        self.def
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn value(&self) -> Option<FloatValue> {
        self.value
    }

    /// Assign a new value and trim it into the static span.
    ///
    /// NaN makes the parameter undefined.
    pub fn set(&mut self, value: FloatValue) {
        self.value = (!value.is_nan()).then_some(value);
        self.trim(None, None);
    }

    /// Clamp the value into `[lower, upper]`, falling back to the static span
    /// for any bound not given. Returns true if the value changed.
    pub fn trim(&mut self, lower: Option<FloatValue>, upper: Option<FloatValue>) -> bool {
        let lower = lower.unwrap_or_else(|| self.def.span.lower_or_min());
        let upper = upper.unwrap_or_else(|| self.def.span.upper_or_max());
        clamp_values(
            self.def.name,
            std::slice::from_mut(&mut self.value),
            &[lower],
            &[upper],
        ) > 0
    }
}

impl fmt::Display for ScalarParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.def.name, format_value(self.value))
    }
}
