//! Delimited text export of the data shown in a chart.

use crate::charts::ChartConfiguration;
use csv::Writer;

/// CSV with a `Category` column and one column named after the series.
///
/// Series charts emit one row per category; the pie emits one row per slice.
pub fn chart_to_csv(config: &ChartConfiguration) -> Result<Vec<u8>, csv::Error> {
    let mut writer = Writer::from_writer(Vec::new());

    match config {
        ChartConfiguration::Line(chart)
        | ChartConfiguration::Bar(chart)
        | ChartConfiguration::Area(chart) => {
            writer.write_record(["Category", chart.series.name.as_str()])?;
            for (category, value) in chart.categories.iter().zip(&chart.series.data) {
                writer.write_record([category.clone(), value.to_string()])?;
            }
        }
        ChartConfiguration::Pie(pie) => {
            writer.write_record(["Category", pie.series_name.as_str()])?;
            for slice in &pie.slices {
                writer.write_record([slice.name.clone(), slice.value.to_string()])?;
            }
        }
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::config::{build_area_config, build_line_config};
    use crate::data::dataset::Month;
    use crate::data::{filtered_categories, filtered_values, MonthFilter, SalesDataset};

    fn as_text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn single_month_series() {
        let dataset = SalesDataset::builtin();
        let month = MonthFilter::Only(Month::Mar);
        let config = build_line_config(
            2024,
            &filtered_categories(month),
            &filtered_values(&dataset, 2024, month).unwrap(),
        );
        assert_eq!(
            as_text(chart_to_csv(&config).unwrap()),
            "Category,2024\nMar,106\n"
        );
    }

    #[test]
    fn full_year_has_row_per_month() {
        let dataset = SalesDataset::builtin();
        let config = build_area_config(
            2025,
            &filtered_categories(MonthFilter::All),
            &filtered_values(&dataset, 2025, MonthFilter::All).unwrap(),
        );
        let text = as_text(chart_to_csv(&config).unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Category,2025");
        assert_eq!(lines[1], "Jan,83");
        assert_eq!(lines[12], "Dec,120");
    }

    #[test]
    fn fractional_values_keep_decimals() {
        let config = build_line_config(2024, &["Jan".to_string()], &[12.5]);
        assert_eq!(
            as_text(chart_to_csv(&config).unwrap()),
            "Category,2024\nJan,12.5\n"
        );
    }
}
