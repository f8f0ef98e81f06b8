use super::{format_value, ParameterDef};
use crate::bounds::clamp_values;
use crate::errors::{MeteoError, MeteoResult};
use crate::month::{Month, MonthlyValues, N_MONTHS};
use crate::FloatValue;
use std::fmt;

/// Upper limit of the sum of a monthly parameter and its sibling.
pub const JOINT_LIMIT: FloatValue = 1.0;

/// Values assigned to a monthly parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MonthlyInput {
    /// One value broadcast to all months
    Uniform(FloatValue),
    /// One value per month, in calendar order
    Months([FloatValue; N_MONTHS]),
}

impl MonthlyInput {
    /// Interpret a slice holding either one value or exactly twelve.
    pub fn from_slice(name: &str, values: &[FloatValue]) -> MeteoResult<Self> {
        if let [value] = values {
            return Ok(MonthlyInput::Uniform(*value));
        }
        <[FloatValue; N_MONTHS]>::try_from(values)
            .map(MonthlyInput::Months)
            .map_err(|_| MeteoError::WrongShape {
                name: name.to_string(),
                expected: format!("1 or {}", N_MONTHS),
                got: values.len(),
            })
    }

    pub fn into_values(self) -> MonthlyValues {
        match self {
            MonthlyInput::Uniform(v) => MonthlyValues::uniform(v),
            MonthlyInput::Months(vs) => MonthlyValues::from_array(vs),
        }
    }
}

impl From<FloatValue> for MonthlyInput {
    fn from(value: FloatValue) -> Self {
        MonthlyInput::Uniform(value)
    }
}

impl From<[FloatValue; N_MONTHS]> for MonthlyInput {
    fn from(values: [FloatValue; N_MONTHS]) -> Self {
        MonthlyInput::Months(values)
    }
}

/// A bounded parameter with one value per calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyParameter {
    def: &'static ParameterDef,
    values: MonthlyValues,
}

impl MonthlyParameter {
    /// A parameter with all months undefined.
    pub fn new(def: &'static ParameterDef) -> Self {
        Self {
            def,
            values: MonthlyValues::unset(),
        }
    }

    /// A parameter holding its default value in every month.
    pub fn with_default(def: &'static ParameterDef) -> Self {
        let values = match def.default {
            Some(v) => MonthlyValues::uniform(v),
            None => MonthlyValues::unset(),
        };
        Self { def, values }
    }

    pub fn def(&self) -> &'static ParameterDef {
        self.def
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn values(&self) -> &MonthlyValues {
        &self.values
    }

    pub fn get(&self, month: Month) -> Option<FloatValue> {
        self.values.get(month)
    }

    /// Replace the values without trimming.
    ///
    /// Used when the caller trims afterwards with a bound that depends on
    /// another parameter, or deliberately wants to skip trimming.
    pub fn assign(&mut self, input: impl Into<MonthlyInput>) {
        self.values = input.into().into_values();
    }

    pub(crate) fn assign_month(&mut self, month: Month, value: FloatValue) {
        self.values.set(month, Some(value));
    }

    /// Assign new values and trim them into the static span.
    pub fn set(&mut self, input: impl Into<MonthlyInput>) {
        self.assign(input);
        self.trim(None, None);
    }

    fn static_lower(&self, lower: Option<[FloatValue; N_MONTHS]>) -> [FloatValue; N_MONTHS] {
        lower.unwrap_or([self.def.span.lower_or_min(); N_MONTHS])
    }

    /// Clamp every month into `[lower, upper]`.
    ///
    /// Missing bounds fall back to the static span. Returns the number of
    /// months that were adjusted.
    pub fn trim(
        &mut self,
        lower: Option<[FloatValue; N_MONTHS]>,
        upper: Option<[FloatValue; N_MONTHS]>,
    ) -> usize {
        let lower = self.static_lower(lower);
        let upper = upper.unwrap_or([self.def.span.upper_or_max(); N_MONTHS]);
        clamp_values(self.def.name, self.values.as_mut_slice(), &lower, &upper)
    }

    /// Clamp every month so that its sum with `sibling` stays within
    /// [`JOINT_LIMIT`].
    ///
    /// Without an explicit `upper`, the bound for month $m$ is
    /// $1 - sibling_m$, or $1$ where the sibling is undefined. The bound is
    /// kept within `[lower, span.upper]`. Only `self` is modified, so the
    /// result depends on which of the two parameters was trimmed last.
    pub fn trim_against(
        &mut self,
        sibling: &MonthlyParameter,
        lower: Option<[FloatValue; N_MONTHS]>,
        upper: Option<[FloatValue; N_MONTHS]>,
    ) -> usize {
        let lower = self.static_lower(lower);
        let upper = upper.unwrap_or_else(|| self.complementary_upper(sibling, &lower));
        clamp_values(self.def.name, self.values.as_mut_slice(), &lower, &upper)
    }

    fn complementary_upper(
        &self,
        sibling: &MonthlyParameter,
        lower: &[FloatValue; N_MONTHS],
    ) -> [FloatValue; N_MONTHS] {
        let span_upper = self.def.span.upper_or_max();
        let mut upper = [JOINT_LIMIT; N_MONTHS];
        for (month, value) in sibling.values.iter() {
            let i = month.index();
            let bound = match (value, self.values.get(month)) {
                // A pair already within the limit keeps its value; recomputing
                // 1 - (1 - s) can land one ulp below s.
                (Some(s), Some(own)) if own + s <= JOINT_LIMIT => own.max(JOINT_LIMIT - s),
                (Some(s), _) => JOINT_LIMIT - s,
                (None, _) => JOINT_LIMIT,
            };
            upper[i] = bound.min(span_upper).max(lower[i]);
        }
        upper
    }
}

impl fmt::Display for MonthlyParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let all_undefined = self.values.as_array().iter().all(Option::is_none);
        if all_undefined {
            return write!(f, "{}(nan)", self.def.name);
        }
        if let Some(v) = self.values.uniform_value() {
            return write!(f, "{}({})", self.def.name, format_value(Some(v)));
        }
        let months: Vec<String> = self
            .values
            .iter()
            .map(|(m, v)| format!("{}={}", m.abbreviation(), format_value(v)))
            .collect();
        write!(f, "{}({})", self.def.name, months.join(", "))
    }
}
