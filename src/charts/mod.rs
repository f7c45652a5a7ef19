//! Charts module - chart configuration, view model and rendering

pub(crate) mod config;
mod plotter;
mod renderer;
mod view_model;

pub use config::ChartConfiguration;
pub use plotter::ChartPlotter;
pub use renderer::{RenderError, StaticChartRenderer};
pub use view_model::ViewModel;
