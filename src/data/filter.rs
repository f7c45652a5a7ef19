//! Series Filter Module
//! Narrows a year's monthly figures to the selected month.

use super::dataset::{DataError, Month, MonthFilter, SalesDataset, Year};

/// Category labels for the month filter: all 12 labels, or the single one.
pub fn filtered_categories(month: MonthFilter) -> Vec<String> {
    match month {
        MonthFilter::All => Month::ALL.iter().map(|m| m.label().to_string()).collect(),
        MonthFilter::Only(m) => vec![m.label().to_string()],
    }
}

/// Values for `year`, index-aligned with [`filtered_categories`].
pub fn filtered_values(
    dataset: &SalesDataset,
    year: Year,
    month: MonthFilter,
) -> Result<Vec<f64>, DataError> {
    let monthly = dataset.monthly(year)?;
    Ok(match month {
        MonthFilter::All => monthly.to_vec(),
        MonthFilter::Only(m) => vec![monthly[m.index()]],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_months_yields_twelve_ordered_labels() {
        assert_eq!(
            filtered_categories(MonthFilter::All),
            vec![
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"
            ]
        );
    }

    #[test]
    fn all_months_keeps_every_value() {
        let dataset = SalesDataset::builtin();
        for year in dataset.years() {
            let values = filtered_values(&dataset, year, MonthFilter::All).unwrap();
            assert_eq!(values.len(), 12);
            assert_eq!(
                values.iter().sum::<f64>(),
                dataset.monthly(year).unwrap().iter().sum::<f64>()
            );
        }
    }

    #[test]
    fn single_month_selects_matching_entry() {
        let dataset = SalesDataset::builtin();
        for year in dataset.years() {
            let monthly = dataset.monthly(year).unwrap();
            for month in Month::ALL {
                let filter = MonthFilter::Only(month);
                assert_eq!(filtered_categories(filter), vec![month.label()]);
                assert_eq!(
                    filtered_values(&dataset, year, filter).unwrap(),
                    vec![monthly[month.index()]]
                );
            }
        }
    }

    #[test]
    fn march_2024_is_106() {
        let dataset = SalesDataset::builtin();
        let values = filtered_values(&dataset, 2024, MonthFilter::Only(Month::Mar)).unwrap();
        assert_eq!(values, vec![106.0]);
    }

    #[test]
    fn unknown_year_is_an_error() {
        let dataset = SalesDataset::builtin();
        assert_eq!(
            filtered_values(&dataset, 2030, MonthFilter::All),
            Err(DataError::UnknownYear(2030))
        );
    }
}
