//! The container of all control parameters of one model instance.
//!
//! [`MeteoControl`] owns each parameter and supplies the Ångström
//! coefficients with a reference to their sibling whenever they are trimmed.
//! The joint constraint
//!
//! $$a_m + b_m \leq 1$$
//!
//! is only enforced when a coefficient is assigned. Assigning $b$ after $a$
//! trims $b$ against $a$ and leaves $a$ untouched, so the outcome depends on
//! assignment order.

use crate::bounds::Span;
use crate::errors::{MeteoError, MeteoResult};
use crate::month::{Month, N_MONTHS};
use crate::parameters::{
    MonthlyInput, MonthlyParameter, ParameterName, ScalarParameter, ANGSTROM_ALTERNATIVE,
    ANGSTROM_CONSTANT, ANGSTROM_FACTOR, JOINT_LIMIT, LATITUDE, LONGITUDE,
};
use crate::FloatValue;
use is_close::is_close;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct MeteoControl {
    latitude: ScalarParameter,
    longitude: ScalarParameter,
    angstrom_constant: MonthlyParameter,
    angstrom_factor: MonthlyParameter,
    angstrom_alternative: MonthlyParameter,
}

impl MeteoControl {
    /// A container with every value undefined.
    pub fn new() -> Self {
        Self {
            latitude: ScalarParameter::new(&LATITUDE),
            longitude: ScalarParameter::new(&LONGITUDE),
            angstrom_constant: MonthlyParameter::new(&ANGSTROM_CONSTANT),
            angstrom_factor: MonthlyParameter::new(&ANGSTROM_FACTOR),
            angstrom_alternative: MonthlyParameter::new(&ANGSTROM_ALTERNATIVE),
        }
    }

    /// A container holding the default of every parameter that defines one.
    pub fn with_defaults() -> Self {
        Self {
            latitude: ScalarParameter::with_default(&LATITUDE),
            longitude: ScalarParameter::with_default(&LONGITUDE),
            angstrom_constant: MonthlyParameter::with_default(&ANGSTROM_CONSTANT),
            angstrom_factor: MonthlyParameter::with_default(&ANGSTROM_FACTOR),
            angstrom_alternative: MonthlyParameter::with_default(&ANGSTROM_ALTERNATIVE),
        }
    }

    pub fn latitude(&self) -> &ScalarParameter {
        &self.latitude
    }

    pub fn longitude(&self) -> &ScalarParameter {
        &self.longitude
    }

    pub fn angstrom_constant(&self) -> &MonthlyParameter {
        &self.angstrom_constant
    }

    pub fn angstrom_factor(&self) -> &MonthlyParameter {
        &self.angstrom_factor
    }

    pub fn angstrom_alternative(&self) -> &MonthlyParameter {
        &self.angstrom_alternative
    }

    pub fn set_latitude(&mut self, value: FloatValue) {
        self.latitude.set(value);
    }

    pub fn set_longitude(&mut self, value: FloatValue) {
        self.longitude.set(value);
    }

    /// Assign the Ångström "a" coefficient and trim it against the current
    /// "b" coefficient.
    pub fn set_angstrom_constant(&mut self, input: impl Into<MonthlyInput>) {
        self.angstrom_constant.assign(input);
        self.trim_angstrom_constant(None, None);
    }

    /// Assign the Ångström "b" coefficient and trim it against the current
    /// "a" coefficient.
    pub fn set_angstrom_factor(&mut self, input: impl Into<MonthlyInput>) {
        self.angstrom_factor.assign(input);
        self.trim_angstrom_factor(None, None);
    }

    pub fn set_angstrom_alternative(&mut self, input: impl Into<MonthlyInput>) {
        self.angstrom_alternative.set(input);
    }

    /// Trim the "a" coefficient, taking the dynamic upper bound from the "b"
    /// coefficient unless `upper` is given.
    pub fn trim_angstrom_constant(
        &mut self,
        lower: Option<[FloatValue; N_MONTHS]>,
        upper: Option<[FloatValue; N_MONTHS]>,
    ) -> usize {
        self.angstrom_constant
            .trim_against(&self.angstrom_factor, lower, upper)
    }

    /// Trim the "b" coefficient, taking the dynamic upper bound from the "a"
    /// coefficient unless `upper` is given.
    pub fn trim_angstrom_factor(
        &mut self,
        lower: Option<[FloatValue; N_MONTHS]>,
        upper: Option<[FloatValue; N_MONTHS]>,
    ) -> usize {
        self.angstrom_factor
            .trim_against(&self.angstrom_constant, lower, upper)
    }

    /// Assign a single month of a monthly parameter, trimming like a full
    /// assignment would.
    pub fn set_month(
        &mut self,
        name: ParameterName,
        month: Month,
        value: FloatValue,
    ) -> MeteoResult<()> {
        match name {
            ParameterName::AngstromConstant => {
                self.angstrom_constant.assign_month(month, value);
                self.trim_angstrom_constant(None, None);
            }
            ParameterName::AngstromFactor => {
                self.angstrom_factor.assign_month(month, value);
                self.trim_angstrom_factor(None, None);
            }
            ParameterName::AngstromAlternative => {
                self.angstrom_alternative.assign_month(month, value);
                self.angstrom_alternative.trim(None, None);
            }
            ParameterName::Latitude | ParameterName::Longitude => {
                return Err(MeteoError::NotMonthly(name.to_string()))
            }
        }
        Ok(())
    }

    /// Assign a parameter by name.
    ///
    /// Scalars take exactly one value, monthly parameters one or twelve.
    pub fn set_by_name(&mut self, name: &str, values: &[FloatValue]) -> MeteoResult<()> {
        let name: ParameterName = name.parse()?;
        match name {
            ParameterName::Latitude | ParameterName::Longitude => {
                let [value] = values else {
                    return Err(MeteoError::WrongShape {
                        name: name.to_string(),
                        expected: "1".to_string(),
                        got: values.len(),
                    });
                };
                if name == ParameterName::Latitude {
                    self.set_latitude(*value);
                } else {
                    self.set_longitude(*value);
                }
            }
            ParameterName::AngstromConstant => {
                let input = MonthlyInput::from_slice(name.as_str(), values)?;
                self.set_angstrom_constant(input);
            }
            ParameterName::AngstromFactor => {
                let input = MonthlyInput::from_slice(name.as_str(), values)?;
                self.set_angstrom_factor(input);
            }
            ParameterName::AngstromAlternative => {
                let input = MonthlyInput::from_slice(name.as_str(), values)?;
                self.set_angstrom_alternative(input);
            }
        }
        Ok(())
    }

    /// Current values of a parameter by name: one entry for scalars, twelve
    /// for monthly parameters.
    pub fn get_by_name(&self, name: &str) -> MeteoResult<Vec<Option<FloatValue>>> {
        let name: ParameterName = name.parse()?;
        let values = match name {
            ParameterName::Latitude => vec![self.latitude.value()],
            ParameterName::Longitude => vec![self.longitude.value()],
            ParameterName::AngstromConstant => self.angstrom_constant.values().as_array().to_vec(),
            ParameterName::AngstromFactor => self.angstrom_factor.values().as_array().to_vec(),
            ParameterName::AngstromAlternative => {
                self.angstrom_alternative.values().as_array().to_vec()
            }
        };
        Ok(values)
    }

    /// Check that all values are defined, within their static spans and that
    /// the Ångström coefficients satisfy the joint constraint.
    ///
    /// Nothing is modified; the first problem found is returned.
    pub fn verify(&self) -> MeteoResult<()> {
        for scalar in [&self.latitude, &self.longitude] {
            check_value(scalar.name(), scalar.def().span, scalar.value())?;
        }
        for monthly in [
            &self.angstrom_constant,
            &self.angstrom_factor,
            &self.angstrom_alternative,
        ] {
            for (_, value) in monthly.values().iter() {
                check_value(monthly.name(), monthly.def().span, value)?;
            }
        }
        for month in Month::ALL {
            let (Some(a), Some(b)) = (
                self.angstrom_constant.get(month),
                self.angstrom_factor.get(month),
            ) else {
                continue;
            };
            let sum = a + b;
            if sum > JOINT_LIMIT && !is_close!(sum, JOINT_LIMIT) {
                return Err(MeteoError::JointConstraint {
                    month: month.to_string(),
                    constant: a,
                    factor: b,
                });
            }
        }
        Ok(())
    }
}

fn check_value(name: &str, span: Span, value: Option<FloatValue>) -> MeteoResult<()> {
    let value = value.ok_or_else(|| MeteoError::Undefined {
        name: name.to_string(),
    })?;
    if !span.contains(value) {
        return Err(MeteoError::OutOfBounds {
            name: name.to_string(),
            value,
            lower: span.lower_or_min(),
            upper: span.upper_or_max(),
        });
    }
    Ok(())
}

impl Default for MeteoControl {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Display for MeteoControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.latitude)?;
        writeln!(f, "{}", self.longitude)?;
        writeln!(f, "{}", self.angstrom_constant)?;
        writeln!(f, "{}", self.angstrom_factor)?;
        write!(f, "{}", self.angstrom_alternative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(parameter: &MonthlyParameter) -> FloatValue {
        parameter
            .values()
            .uniform_value()
            .expect("Expected one value for all months")
    }

    #[test]
    fn test_default_construction() {
        let control = MeteoControl::with_defaults();

        assert_eq!(uniform(control.angstrom_constant()), 0.25);
        assert_eq!(uniform(control.angstrom_factor()), 0.5);
        assert_eq!(uniform(control.angstrom_alternative()), 0.15);
        assert_eq!(control.latitude().value(), None);
        assert_eq!(control.longitude().value(), None);
    }

    #[test]
    fn test_constant_without_factor() {
        let mut control = MeteoControl::new();
        control.set_angstrom_constant(1.5);

        assert_eq!(uniform(control.angstrom_constant()), 1.0);
    }

    #[test]
    fn test_constant_trimmed_by_factor() {
        let mut control = MeteoControl::new();
        control.set_angstrom_factor(0.6);
        control.set_angstrom_constant(0.5);

        assert!(is_close!(uniform(control.angstrom_constant()), 0.4));
        assert_eq!(uniform(control.angstrom_factor()), 0.6);
    }

    #[test]
    fn test_factor_trimmed_by_constant() {
        let mut control = MeteoControl::new();
        control.set_angstrom_constant(0.6);
        control.set_angstrom_factor(0.5);

        assert!(is_close!(uniform(control.angstrom_factor()), 0.4));
        assert_eq!(uniform(control.angstrom_constant()), 0.6);
    }

    #[test]
    fn test_assignment_order_matters() {
        let mut first = MeteoControl::new();
        first.set_angstrom_constant(0.8);
        first.set_angstrom_factor(0.8);
        assert_eq!(uniform(first.angstrom_constant()), 0.8);
        assert!(is_close!(uniform(first.angstrom_factor()), 0.2));

        let mut second = MeteoControl::new();
        second.set_angstrom_factor(0.8);
        second.set_angstrom_constant(0.8);
        assert!(is_close!(uniform(second.angstrom_constant()), 0.2));
        assert_eq!(uniform(second.angstrom_factor()), 0.8);
    }

    #[test]
    fn test_retrim_is_idempotent() {
        let mut control = MeteoControl::new();
        control.set_angstrom_factor(0.6);
        control.set_angstrom_constant(0.5);
        let before = control.clone();

        assert_eq!(control.trim_angstrom_constant(None, None), 0);
        assert_eq!(control.trim_angstrom_factor(None, None), 0);
        assert_eq!(control, before);
    }

    #[test]
    fn test_retrim_after_complement_is_idempotent() {
        for step in 1..100 {
            let b = step as FloatValue / 100.0;
            let mut control = MeteoControl::new();
            control.set_angstrom_factor(b);
            control.set_angstrom_constant(1.0);
            let before = control.clone();

            assert_eq!(control.trim_angstrom_factor(None, None), 0, "b = {}", b);
            assert_eq!(control.trim_angstrom_constant(None, None), 0, "b = {}", b);
            assert_eq!(control, before, "b = {}", b);
        }
    }

    #[test]
    fn test_set_month() {
        let mut control = MeteoControl::with_defaults();
        control
            .set_month(ParameterName::AngstromConstant, Month::July, 0.9)
            .unwrap();

        assert!(is_close!(
            control.angstrom_constant().get(Month::July).unwrap(),
            0.5
        ));
        assert_eq!(control.angstrom_constant().get(Month::June), Some(0.25));
        assert!(control
            .set_month(ParameterName::Latitude, Month::July, 1.0)
            .is_err());
    }

    #[test]
    fn test_by_name() {
        let mut control = MeteoControl::with_defaults();
        control.set_by_name("latitude", &[50.8]).unwrap();
        control.set_by_name("angstromalternative", &[0.2; 12]).unwrap();

        assert_eq!(control.get_by_name("latitude").unwrap(), vec![Some(50.8)]);
        assert_eq!(
            control.get_by_name("angstromalternative").unwrap(),
            vec![Some(0.2); 12]
        );
        assert!(matches!(
            control.set_by_name("latitude", &[1.0, 2.0]),
            Err(MeteoError::WrongShape { got: 2, .. })
        ));
        assert!(matches!(
            control.get_by_name("altitude"),
            Err(MeteoError::UnknownParameter(_))
        ));
    }

    #[test]
    fn test_verify() {
        let mut control = MeteoControl::with_defaults();
        assert!(matches!(
            control.verify(),
            Err(MeteoError::Undefined { ref name }) if name == "latitude"
        ));

        control.set_latitude(50.8);
        control.set_longitude(6.1);
        control.verify().unwrap();

        // Bypassing the trimming breaks the joint constraint
        control.angstrom_factor.assign(0.9);
        assert!(matches!(
            control.verify(),
            Err(MeteoError::JointConstraint { .. })
        ));

        control.set_angstrom_factor(0.9);
        control.verify().unwrap();
    }

    #[test]
    fn test_display() {
        let mut control = MeteoControl::with_defaults();
        control.set_latitude(50.8);

        assert_eq!(
            control.to_string(),
            "latitude(50.8)\n\
             longitude(nan)\n\
             angstromconstant(0.25)\n\
             angstromfactor(0.5)\n\
             angstromalternative(0.15)"
        );
    }
}
