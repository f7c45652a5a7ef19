//! Data module - static sales figures and filtering

pub(crate) mod dataset;
mod filter;

pub use dataset::{DataError, MonthFilter, SalesDataset, Year};
pub use filter::{filtered_categories, filtered_values};
