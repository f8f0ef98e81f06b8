//! Range clamping shared by all parameters.
//!
//! Parameters do not inherit bounded behaviour; they hold a static [`Span`]
//! and call [`clamp_values`] with explicit per-element bounds.

use crate::FloatValue;
use log::warn;

/// Static valid range of a parameter. `None` means unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub lower: Option<FloatValue>,
    pub upper: Option<FloatValue>,
}

impl Span {
    pub const fn new(lower: FloatValue, upper: FloatValue) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    pub const fn unbounded() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }

    pub fn lower_or_min(&self) -> FloatValue {
        self.lower.unwrap_or(FloatValue::NEG_INFINITY)
    }

    pub fn upper_or_max(&self) -> FloatValue {
        self.upper.unwrap_or(FloatValue::INFINITY)
    }

    /// True if `value` lies within the span (inclusive).
    pub fn contains(&self, value: FloatValue) -> bool {
        value >= self.lower_or_min() && value <= self.upper_or_max()
    }
}

/// Clamp each defined element of `values` into `[lower[i], upper[i]]`.
///
/// Values below the lower bound are raised to it first, then values above the
/// upper bound are lowered to it. Undefined elements are left alone. Every
/// adjustment is logged as a warning under the parameter `name`.
///
/// Returns the number of adjusted elements.
///
/// # Panics
/// Panics if the three slices differ in length.
pub fn clamp_values(
    name: &str,
    values: &mut [Option<FloatValue>],
    lower: &[FloatValue],
    upper: &[FloatValue],
) -> usize {
    assert_eq!(values.len(), lower.len(), "lower bounds length mismatch");
    assert_eq!(values.len(), upper.len(), "upper bounds length mismatch");

    let mut adjusted = 0;
    for (i, slot) in values.iter_mut().enumerate() {
        let Some(old) = *slot else { continue };
        let new = old.max(lower[i]).min(upper[i]);
        if new != old {
            warn!(
                "For parameter `{}`, value {} at index {} lies outside [{}, {}] and has been trimmed to {}",
                name, old, i, lower[i], upper[i], new
            );
            *slot = Some(new);
            adjusted += 1;
        }
    }
    adjusted
}
