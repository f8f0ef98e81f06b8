//! Calendar months and per-month value storage.
//!
//! Monthly parameters hold one value per calendar month. A month without a
//! value is `None`; NaN inputs are normalised to `None` on the way in so that
//! nothing downstream has to rely on NaN propagation.

use crate::FloatValue;
use std::fmt;
use std::str::FromStr;

/// Number of entries of a monthly parameter.
pub const N_MONTHS: usize = 12;

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; N_MONTHS] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Zero-based position of the month within the year.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Month for a zero-based index, if the index is valid.
    pub fn from_index(index: usize) -> Option<Month> {
        Self::ALL.get(index).copied()
    }

    /// Three-letter lowercase abbreviation, used as keyword in representations.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Month::January => "jan",
            Month::February => "feb",
            Month::March => "mar",
            Month::April => "apr",
            Month::May => "may",
            Month::June => "jun",
            Month::July => "jul",
            Month::August => "aug",
            Month::September => "sep",
            Month::October => "oct",
            Month::November => "nov",
            Month::December => "dec",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Month::ALL
            .iter()
            .copied()
            .find(|m| {
                lower == m.abbreviation() || lower == m.to_string().to_lowercase()
            })
            .ok_or_else(|| format!("Unknown month: {}", s))
    }
}

fn defined(value: FloatValue) -> Option<FloatValue> {
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}

/// Twelve optional values, one per calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyValues([Option<FloatValue>; N_MONTHS]);

impl MonthlyValues {
    /// All months undefined.
    pub fn unset() -> Self {
        Self([None; N_MONTHS])
    }

    /// The same value for every month
    pub fn uniform(value: FloatValue) -> Self {
        Self([defined(value); N_MONTHS])
    }

    /// Values in calendar order. NaN entries become undefined.
    pub fn from_array(values: [FloatValue; N_MONTHS]) -> Self {
        Self(values.map(defined))
    }

    pub fn from_options(values: [Option<FloatValue>; N_MONTHS]) -> Self {
        Self(values.map(|v| v.and_then(defined)))
    }

    pub fn get(&self, month: Month) -> Option<FloatValue> {
        self.0[month.index()]
    }

    pub fn set(&mut self, month: Month, value: Option<FloatValue>) {
        self.0[month.index()] = value.and_then(defined);
    }

    pub fn as_array(&self) -> &[Option<FloatValue>; N_MONTHS] {
        &self.0
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Option<FloatValue>] {
        &mut self.0
    }

    /// Iterate over `(month, value)` pairs in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, Option<FloatValue>)> + '_ {
        Month::ALL.iter().map(move |&m| (m, self.get(m)))
    }

    /// True if every month holds a value
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// The common value if all twelve months hold the same defined value.
    pub fn uniform_value(&self) -> Option<FloatValue> {
        let first = self.0[0]?;
        self.0
            .iter()
            .all(|v| *v == Some(first))
            .then_some(first)
    }
}
