//! Chart Viewer Widget
//! Central panel that draws the active chart and keeps its handle for export.

use crate::charts::{ChartConfiguration, ChartPlotter};
use crate::export::ChartHandle;
use egui::Color32;

const MIN_CHART_HEIGHT: f32 = 240.0;
const TITLE_ALLOWANCE: f32 = 60.0;

/// Draws one chart card; remembers what it drew so exports reflect the
/// chart on screen.
#[derive(Default)]
pub struct ChartViewer {
    handle: Option<ChartHandle>,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle of the chart last drawn, `None` before the first frame.
    pub fn handle(&self) -> Option<&ChartHandle> {
        self.handle.as_ref()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, config: &ChartConfiguration) {
        egui::Frame::none()
            .fill(Color32::from(config.style().background))
            .rounding(12.0)
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(220)))
            .inner_margin(16.0)
            .show(ui, |ui| {
                let height = (ui.available_height() - TITLE_ALLOWANCE).max(MIN_CHART_HEIGHT);
                ChartPlotter::draw(ui, config, height);
            });

        if self.handle.as_ref().map(ChartHandle::config) != Some(config) {
            tracing::debug!("Rendered {} chart: {}", config.kind(), config.title());
            self.handle = Some(ChartHandle::new(config.clone()));
        }
    }
}
