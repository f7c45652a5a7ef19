//! Sales Dataset Module
//! Static per-year monthly sales figures and the calendar month domain.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Calendar year key of the dataset.
pub type Year = u16;

/// Number of monthly values stored per year.
pub const MONTHS_PER_YEAR: usize = 12;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("No sales data for year {0}")]
    UnknownYear(Year),
    #[error("Unknown month filter: {0}")]
    UnknownMonth(String),
}

/// Calendar month, January first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; MONTHS_PER_YEAR] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Zero-based position in the year.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Three-letter label used on the category axis.
    pub fn label(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Month selector: every month, or a single one.
///
/// Serialized as `"all"` or the month label (`"Mar"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl MonthFilter {
    /// Every selectable filter in the order the month selector lists them.
    pub fn options() -> impl Iterator<Item = MonthFilter> {
        std::iter::once(MonthFilter::All).chain(Month::ALL.into_iter().map(MonthFilter::Only))
    }

    /// Human readable text for the selector.
    pub fn display_name(self) -> &'static str {
        match self {
            MonthFilter::All => "All Months",
            MonthFilter::Only(month) => month.label(),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(month) => f.write_str(month.label()),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(MonthFilter::All);
        }
        Month::ALL
            .into_iter()
            .find(|m| m.label() == s)
            .map(MonthFilter::Only)
            .ok_or_else(|| DataError::UnknownMonth(s.to_string()))
    }
}

impl TryFrom<String> for MonthFilter {
    type Error = DataError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthFilter> for String {
    fn from(filter: MonthFilter) -> Self {
        filter.to_string()
    }
}

/// Immutable monthly sales figures keyed by year.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesDataset {
    years: BTreeMap<Year, [f64; MONTHS_PER_YEAR]>,
}

impl SalesDataset {
    /// Create a dataset from per-year monthly values.
    pub fn new(years: impl IntoIterator<Item = (Year, [f64; MONTHS_PER_YEAR])>) -> Self {
        Self {
            years: years.into_iter().collect(),
        }
    }

    /// The figures the dashboard ships with.
    pub fn builtin() -> Self {
        Self::new([
            (
                2024,
                [
                    29.0, 71.0, 106.0, 129.0, 144.0, 176.0, 135.0, 148.0, 216.0, 194.0, 95.0, 54.0,
                ],
            ),
            (
                2025,
                [
                    83.0, 78.0, 98.0, 93.0, 106.0, 84.0, 105.0, 104.0, 91.0, 83.0, 109.0, 120.0,
                ],
            ),
        ])
    }

    /// Years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = Year> + '_ {
        self.years.keys().copied()
    }

    pub fn first_year(&self) -> Option<Year> {
        self.years.keys().next().copied()
    }

    pub fn contains_year(&self, year: Year) -> bool {
        self.years.contains_key(&year)
    }

    /// The 12 monthly values of a year.
    pub fn monthly(&self, year: Year) -> Result<&[f64; MONTHS_PER_YEAR], DataError> {
        self.years.get(&year).ok_or(DataError::UnknownYear(year))
    }

    /// `(year, total)` for every year, ascending.
    pub fn yearly_totals(&self) -> Vec<(Year, f64)> {
        self.years
            .iter()
            .map(|(year, values)| (*year, values.iter().sum()))
            .collect()
    }
}

impl Default for SalesDataset {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_two_years_in_order() {
        let dataset = SalesDataset::builtin();
        let years: Vec<Year> = dataset.years().collect();
        assert_eq!(years, vec![2024, 2025]);
        assert_eq!(dataset.first_year(), Some(2024));
    }

    #[test]
    fn yearly_totals_match_arithmetic_sums() {
        let dataset = SalesDataset::builtin();
        assert_eq!(
            dataset.yearly_totals(),
            vec![(2024, 1497.0), (2025, 1154.0)]
        );
    }

    #[test]
    fn unknown_year_is_reported() {
        let dataset = SalesDataset::builtin();
        assert_eq!(dataset.monthly(1999), Err(DataError::UnknownYear(1999)));
        assert!(!dataset.contains_year(1999));
    }

    #[test]
    fn month_filter_parses_labels_and_all() {
        assert_eq!("all".parse::<MonthFilter>(), Ok(MonthFilter::All));
        assert_eq!(
            "Mar".parse::<MonthFilter>(),
            Ok(MonthFilter::Only(Month::Mar))
        );
        assert_eq!(
            "March".parse::<MonthFilter>(),
            Err(DataError::UnknownMonth("March".to_string()))
        );
        assert_eq!(MonthFilter::Only(Month::Dec).to_string(), "Dec");
    }

    #[test]
    fn month_filter_options_lists_all_first() {
        let options: Vec<MonthFilter> = MonthFilter::options().collect();
        assert_eq!(options.len(), 13);
        assert_eq!(options[0], MonthFilter::All);
        assert_eq!(options[12], MonthFilter::Only(Month::Dec));
    }

    #[test]
    fn month_filter_serde_uses_labels() {
        let json = serde_json::to_string(&MonthFilter::Only(Month::Sep)).unwrap();
        assert_eq!(json, "\"Sep\"");
        let parsed: MonthFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(parsed, MonthFilter::All);
        assert!(serde_json::from_str::<MonthFilter>("\"Sept\"").is_err());
    }
}
