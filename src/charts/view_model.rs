//! View Model
//! Filtered series plus one configuration per chart kind for a selection.

use crate::charts::config::{
    build_area_config, build_bar_config, build_line_config, build_pie_config, ChartConfiguration,
};
use crate::data::{filtered_categories, filtered_values, DataError, SalesDataset};
use crate::state::{ChartKind, Selection};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub line: ChartConfiguration,
    pub bar: ChartConfiguration,
    pub area: ChartConfiguration,
    pub pie: ChartConfiguration,
}

impl ViewModel {
    pub fn build(dataset: &SalesDataset, selection: &Selection) -> Result<Self, DataError> {
        let year = selection.year();
        let categories = filtered_categories(selection.month());
        let values = filtered_values(dataset, year, selection.month())?;

        Ok(Self {
            line: build_line_config(year, &categories, &values),
            bar: build_bar_config(year, &categories, &values),
            area: build_area_config(year, &categories, &values),
            pie: build_pie_config(dataset),
            categories,
            values,
        })
    }

    /// Configuration for a chart kind.
    pub fn active(&self, kind: ChartKind) -> &ChartConfiguration {
        match kind {
            ChartKind::Line => &self.line,
            ChartKind::Bar => &self.bar,
            ChartKind::Area => &self.area,
            ChartKind::Pie => &self.pie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::config::BAR_COLOR;
    use crate::data::dataset::Month;
    use crate::data::MonthFilter;

    #[test]
    fn march_2024_bar_has_single_orange_point() {
        let dataset = SalesDataset::builtin();
        let selection = Selection::new(ChartKind::Bar, 2024, MonthFilter::Only(Month::Mar));
        let model = ViewModel::build(&dataset, &selection).unwrap();

        let ChartConfiguration::Bar(bar) = model.active(selection.chart_kind()) else {
            panic!("expected bar configuration");
        };
        assert_eq!(bar.categories, vec!["Mar"]);
        assert_eq!(bar.series.data, vec![106.0]);
        assert_eq!(bar.series.color, BAR_COLOR);
    }

    #[test]
    fn categories_and_values_stay_aligned() {
        let dataset = SalesDataset::builtin();
        for month in MonthFilter::options() {
            let selection = Selection::new(ChartKind::Line, 2025, month);
            let model = ViewModel::build(&dataset, &selection).unwrap();
            assert_eq!(model.categories.len(), model.values.len());
            let expected = if month == MonthFilter::All { 12 } else { 1 };
            assert_eq!(model.values.len(), expected);
        }
    }

    #[test]
    fn pie_ignores_year_month_and_kind() {
        let dataset = SalesDataset::builtin();
        let reference = ViewModel::build(
            &dataset,
            &Selection::new(ChartKind::Pie, 2024, MonthFilter::All),
        )
        .unwrap()
        .pie;

        for kind in ChartKind::ALL {
            for year in dataset.years() {
                for month in MonthFilter::options() {
                    let model =
                        ViewModel::build(&dataset, &Selection::new(kind, year, month)).unwrap();
                    assert_eq!(model.pie, reference);
                }
            }
        }
    }

    #[test]
    fn active_matches_kind() {
        let dataset = SalesDataset::builtin();
        let model = ViewModel::build(
            &dataset,
            &Selection::new(ChartKind::Line, 2024, MonthFilter::All),
        )
        .unwrap();
        for kind in ChartKind::ALL {
            assert_eq!(model.active(kind).kind(), kind);
        }
    }

    #[test]
    fn unknown_year_fails_to_build() {
        let dataset = SalesDataset::builtin();
        let selection = Selection::new(ChartKind::Line, 1990, MonthFilter::All);
        assert_eq!(
            ViewModel::build(&dataset, &selection),
            Err(DataError::UnknownYear(1990))
        );
    }
}
