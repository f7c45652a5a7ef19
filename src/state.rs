//! Selection State
//! The three independent user choices that drive the view model.

use crate::data::{MonthFilter, Year};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chart kind shown in the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Area,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Area,
        ChartKind::Pie,
    ];

    /// Tab caption, also used in chart titles.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Bar => "Bar",
            ChartKind::Area => "Area",
            ChartKind::Pie => "Pie",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current chart kind, year and month filter.
///
/// Each setter replaces exactly one field and returns `true` when the value
/// changed, which tells the caller to rebuild the view model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    chart_kind: ChartKind,
    year: Year,
    month: MonthFilter,
}

impl Selection {
    pub fn new(chart_kind: ChartKind, year: Year, month: MonthFilter) -> Self {
        Self {
            chart_kind,
            year,
            month,
        }
    }

    pub fn chart_kind(&self) -> ChartKind {
        self.chart_kind
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn month(&self) -> MonthFilter {
        self.month
    }

    pub fn set_chart_kind(&mut self, chart_kind: ChartKind) -> bool {
        let changed = self.chart_kind != chart_kind;
        self.chart_kind = chart_kind;
        changed
    }

    pub fn set_year(&mut self, year: Year) -> bool {
        let changed = self.year != year;
        self.year = year;
        changed
    }

    pub fn set_month(&mut self, month: MonthFilter) -> bool {
        let changed = self.month != month;
        self.month = month;
        changed
    }
}
