//! Chart Configuration Module
//! Declarative chart descriptions, one variant per chart kind.

use crate::data::{SalesDataset, Year};
use crate::state::ChartKind;
use serde::{Serialize, Serializer};
use std::fmt;

/// 24-bit color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

pub const LINE_COLOR: Rgb = Rgb(0x3b, 0x82, 0xf6); // Blue
pub const BAR_COLOR: Rgb = Rgb(0xf9, 0x73, 0x16); // Orange
pub const AREA_COLOR: Rgb = Rgb(0xec, 0x48, 0x99); // Pink

/// Pie slice colors in year order.
pub const YEAR_PALETTE: [Rgb; 6] = [
    Rgb(0x3b, 0x82, 0xf6), // Blue
    Rgb(0x10, 0xb9, 0x81), // Green
    Rgb(0x8b, 0x5c, 0xf6), // Violet
    Rgb(0xf5, 0x9e, 0x0b), // Amber
    Rgb(0xef, 0x44, 0x44), // Red
    Rgb(0x06, 0xb6, 0xd4), // Cyan
];

pub const BACKGROUND_COLOR: Rgb = Rgb(0xf9, 0xfa, 0xfb);
pub const TEXT_COLOR: Rgb = Rgb(0x11, 0x18, 0x27);

pub const VALUE_AXIS_TITLE: &str = "Sales ($)";
pub const PIE_TITLE: &str = "Yearly Sales Distribution (Pie)";
pub const PIE_SERIES_NAME: &str = "Sales";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartStyle {
    pub background: Rgb,
    pub text: Rgb,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR,
            text: TEXT_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub data: Vec<f64>,
    pub color: Rgb,
}

/// Category-axis chart (line, bar, area) with a single series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesChart {
    pub title: String,
    pub categories: Vec<String>,
    pub value_axis_title: String,
    pub series: Series,
    pub style: ChartStyle,
    pub exporting_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub series_name: String,
    pub slices: Vec<PieSlice>,
    pub style: ChartStyle,
    pub exporting_enabled: bool,
}

impl PieChart {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Everything the renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChartConfiguration {
    Line(SeriesChart),
    Bar(SeriesChart),
    Area(SeriesChart),
    Pie(PieChart),
}

impl ChartConfiguration {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartConfiguration::Line(_) => ChartKind::Line,
            ChartConfiguration::Bar(_) => ChartKind::Bar,
            ChartConfiguration::Area(_) => ChartKind::Area,
            ChartConfiguration::Pie(_) => ChartKind::Pie,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ChartConfiguration::Line(c)
            | ChartConfiguration::Bar(c)
            | ChartConfiguration::Area(c) => &c.title,
            ChartConfiguration::Pie(p) => &p.title,
        }
    }

    pub fn style(&self) -> ChartStyle {
        match self {
            ChartConfiguration::Line(c)
            | ChartConfiguration::Bar(c)
            | ChartConfiguration::Area(c) => c.style,
            ChartConfiguration::Pie(p) => p.style,
        }
    }
}

/// Category at an axis position; blank between categories and off the ends.
pub(crate) fn category_label(categories: &[String], value: f64) -> String {
    let idx = value.round();
    if idx < 0.0 || (value - idx).abs() > 1e-6 {
        return String::new();
    }
    categories.get(idx as usize).cloned().unwrap_or_default()
}

fn series_chart(
    kind: ChartKind,
    color: Rgb,
    year: Year,
    categories: &[String],
    values: &[f64],
) -> SeriesChart {
    debug_assert_eq!(categories.len(), values.len());
    SeriesChart {
        title: format!("Sales Data ({}) - {}", year, kind.label()),
        categories: categories.to_vec(),
        value_axis_title: VALUE_AXIS_TITLE.to_string(),
        series: Series {
            name: year.to_string(),
            data: values.to_vec(),
            color,
        },
        style: ChartStyle::default(),
        exporting_enabled: false,
    }
}

pub fn build_line_config(year: Year, categories: &[String], values: &[f64]) -> ChartConfiguration {
    ChartConfiguration::Line(series_chart(
        ChartKind::Line,
        LINE_COLOR,
        year,
        categories,
        values,
    ))
}

pub fn build_bar_config(year: Year, categories: &[String], values: &[f64]) -> ChartConfiguration {
    ChartConfiguration::Bar(series_chart(
        ChartKind::Bar,
        BAR_COLOR,
        year,
        categories,
        values,
    ))
}

pub fn build_area_config(year: Year, categories: &[String], values: &[f64]) -> ChartConfiguration {
    ChartConfiguration::Area(series_chart(
        ChartKind::Area,
        AREA_COLOR,
        year,
        categories,
        values,
    ))
}

/// One slice per year, valued at the year's total. Ignores the selection.
pub fn build_pie_config(dataset: &SalesDataset) -> ChartConfiguration {
    let slices = dataset
        .yearly_totals()
        .into_iter()
        .enumerate()
        .map(|(idx, (year, total))| PieSlice {
            name: year.to_string(),
            value: total,
            color: YEAR_PALETTE[idx % YEAR_PALETTE.len()],
        })
        .collect();

    ChartConfiguration::Pie(PieChart {
        title: PIE_TITLE.to_string(),
        series_name: PIE_SERIES_NAME.to_string(),
        slices,
        style: ChartStyle::default(),
        exporting_enabled: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn series_builders_use_kind_color_and_title() {
        let categories = labels(&["Jan", "Feb"]);
        let values = [10.0, 20.0];

        let cases = [
            (
                build_line_config(2025, &categories, &values),
                LINE_COLOR,
                "Sales Data (2025) - Line",
            ),
            (
                build_bar_config(2025, &categories, &values),
                BAR_COLOR,
                "Sales Data (2025) - Bar",
            ),
            (
                build_area_config(2025, &categories, &values),
                AREA_COLOR,
                "Sales Data (2025) - Area",
            ),
        ];

        for (config, color, title) in cases {
            assert_eq!(config.title(), title);
            match config {
                ChartConfiguration::Line(c)
                | ChartConfiguration::Bar(c)
                | ChartConfiguration::Area(c) => {
                    assert_eq!(c.categories, categories);
                    assert_eq!(c.series.data, values.to_vec());
                    assert_eq!(c.series.name, "2025");
                    assert_eq!(c.series.color, color);
                    assert_eq!(c.value_axis_title, "Sales ($)");
                    assert!(!c.exporting_enabled);
                }
                ChartConfiguration::Pie(_) => panic!("expected a series chart"),
            }
        }
    }

    #[test]
    fn pie_has_one_slice_per_year_with_totals() {
        let dataset = SalesDataset::builtin();
        let ChartConfiguration::Pie(pie) = build_pie_config(&dataset) else {
            panic!("expected pie");
        };
        assert_eq!(pie.slices.len(), dataset.years().count());
        assert_eq!(pie.slices[0].name, "2024");
        assert_eq!(pie.slices[0].value, 1497.0);
        assert_eq!(pie.slices[0].color, Rgb(0x3b, 0x82, 0xf6));
        assert_eq!(pie.slices[1].name, "2025");
        assert_eq!(pie.slices[1].value, 1154.0);
        assert_eq!(pie.slices[1].color, Rgb(0x10, 0xb9, 0x81));
        assert_eq!(pie.total(), 2651.0);
        assert!(!pie.exporting_enabled);
    }

    #[test]
    fn category_label_only_on_whole_positions() {
        let categories = labels(&["Jan", "Feb"]);
        assert_eq!(category_label(&categories, 1.0), "Feb");
        assert_eq!(category_label(&categories, 0.0), "Jan");
        assert_eq!(category_label(&categories, 0.5), "");
        assert_eq!(category_label(&categories, -0.5), "");
        assert_eq!(category_label(&categories, -1.0), "");
        assert_eq!(category_label(&categories, 5.0), "");
    }

    #[test]
    fn colors_render_as_hex() {
        assert_eq!(BAR_COLOR.to_hex(), "#f97316");
        assert_eq!(AREA_COLOR.to_string(), "#ec4899");
    }

    #[test]
    fn configuration_serializes_with_type_tag() {
        let config = build_bar_config(2024, &labels(&["Mar"]), &[106.0]);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], "bar");
        assert_eq!(json["series"]["color"], "#f97316");
        assert_eq!(json["categories"][0], "Mar");
        assert_eq!(json["exporting_enabled"], false);
    }
}
