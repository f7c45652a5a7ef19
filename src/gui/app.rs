//! Sales Dashboard Main Application
//! Main window with control panel and chart viewer.

use crate::charts::ViewModel;
use crate::config::{AppConfig, ExportSettings};
use crate::data::{DataError, SalesDataset};
use crate::export::{ExportKind, Exporter};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::state::Selection;
use egui::SidePanel;

/// Main application window.
pub struct DashboardApp {
    dataset: SalesDataset,
    selection: Selection,
    view_model: ViewModel,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
    export_settings: ExportSettings,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Result<Self, DataError> {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let dataset = SalesDataset::builtin();
        let selection = config.initial.to_selection(&dataset);
        let view_model = ViewModel::build(&dataset, &selection)?;
        tracing::info!(
            "Dashboard ready: {} chart, year {}, month {}",
            selection.chart_kind(),
            selection.year(),
            selection.month()
        );

        Ok(Self {
            control_panel: ControlPanel::new(dataset.years().collect()),
            chart_viewer: ChartViewer::new(),
            export_settings: config.export.clone(),
            dataset,
            selection,
            view_model,
        })
    }

    /// Rebuild the view model after a selection change.
    fn rebuild(&mut self) {
        tracing::debug!(
            "Selection changed: {} chart, year {}, month {}",
            self.selection.chart_kind(),
            self.selection.year(),
            self.selection.month()
        );
        match ViewModel::build(&self.dataset, &self.selection) {
            Ok(view_model) => self.view_model = view_model,
            Err(e) => {
                tracing::error!("Failed to rebuild view model: {}", e);
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }

    fn apply(&mut self, action: ControlPanelAction) {
        let changed = match action {
            ControlPanelAction::None => false,
            ControlPanelAction::SelectYear(year) => self.selection.set_year(year),
            ControlPanelAction::SelectMonth(month) => self.selection.set_month(month),
            ControlPanelAction::SelectChartKind(kind) => self.selection.set_chart_kind(kind),
            ControlPanelAction::Export(kind) => {
                self.handle_export(kind);
                false
            }
        };
        if changed {
            self.rebuild();
        }
    }

    /// Handle export - encode the displayed chart and save it where the user picks
    fn handle_export(&mut self, kind: ExportKind) {
        let artifact =
            match Exporter::export(self.chart_viewer.handle(), kind, &self.export_settings) {
                Ok(Some(artifact)) => artifact,
                Ok(None) => return, // Nothing rendered yet
                Err(e) => {
                    tracing::error!("{} export failed: {}", kind, e);
                    self.control_panel
                        .set_status(&format!("Error: {} export failed: {}", kind, e));
                    return;
                }
            };

        let path = match rfd::FileDialog::new()
            .add_filter(kind.filter_name(), &[kind.extension()])
            .set_file_name(&artifact.file_name)
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        if let Err(e) = artifact.write_to(&path) {
            tracing::error!("Writing {} failed: {}", path.display(), e);
            self.control_panel.set_status(&format!("Error: {}", e));
            return;
        }

        tracing::info!(
            "Saved {} export ({}) to {}",
            kind,
            artifact.mime_type(),
            path.display()
        );
        self.control_panel
            .set_status(&format!("Exported {} to {}", kind, path.display()));

        if self.export_settings.open_after_export {
            if let Err(e) = open::that(&path) {
                tracing::warn!("Could not open {}: {}", path.display(), e);
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let export_enabled = self.chart_viewer.handle().is_some();
                    let action = self.control_panel.show(ui, &self.selection, export_enabled);
                    self.apply(action);
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            let config = self.view_model.active(self.selection.chart_kind());
            self.chart_viewer.show(ui, config);
        });
    }
}
