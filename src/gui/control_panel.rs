//! Control Panel Widget
//! Left side panel with the year/month filters, chart tabs and export buttons.

use crate::data::{MonthFilter, Year};
use crate::export::ExportKind;
use crate::state::{ChartKind, Selection};
use egui::{Color32, ComboBox, RichText};

const ACCENT: Color32 = Color32::from_rgb(37, 99, 235); // Blue
const TAB_IDLE: Color32 = Color32::from_rgb(229, 231, 235); // Gray
const TAB_IDLE_TEXT: Color32 = Color32::from_rgb(55, 65, 81);
const PNG_BUTTON: Color32 = Color32::from_rgb(59, 130, 246);
const CSV_BUTTON: Color32 = Color32::from_rgb(34, 197, 94);

/// Left side control panel. Widgets only offer values from the dataset and
/// the fixed month/kind lists, so every emitted action is in range.
pub struct ControlPanel {
    years: Vec<Year>,
    status: String,
}

impl ControlPanel {
    pub fn new(years: Vec<Year>) -> Self {
        Self {
            years,
            status: "Ready".to_string(),
        }
    }

    /// Draw the control panel
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        selection: &Selection,
        export_enabled: bool,
    ) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(RichText::new("📊 Sales Dashboard").size(22.0).color(ACCENT));
            ui.label(
                RichText::new("Sales Data Visualization")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Filters =====
        ui.label(RichText::new("🔧 Filters").size(14.0).strong());
        ui.add_space(8.0);

        let label_width = 60.0;
        let combo_width = 150.0;

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Year:"));
            ComboBox::from_id_salt("year")
                .width(combo_width)
                .selected_text(selection.year().to_string())
                .show_ui(ui, |ui| {
                    for &year in &self.years {
                        if ui
                            .selectable_label(selection.year() == year, year.to_string())
                            .clicked()
                        {
                            action = ControlPanelAction::SelectYear(year);
                        }
                    }
                });
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Month:"));
            ComboBox::from_id_salt("month")
                .width(combo_width)
                .selected_text(selection.month().display_name())
                .show_ui(ui, |ui| {
                    for month in MonthFilter::options() {
                        if ui
                            .selectable_label(selection.month() == month, month.display_name())
                            .clicked()
                        {
                            action = ControlPanelAction::SelectMonth(month);
                        }
                    }
                });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Chart Tabs =====
        ui.label(RichText::new("📈 Chart").size(14.0).strong());
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            for kind in ChartKind::ALL {
                let active = selection.chart_kind() == kind;
                let (fill, text) = if active {
                    (ACCENT, Color32::WHITE)
                } else {
                    (TAB_IDLE, TAB_IDLE_TEXT)
                };
                let tab = egui::Button::new(RichText::new(kind.label()).size(14.0).color(text))
                    .fill(fill)
                    .rounding(10.0)
                    .min_size(egui::vec2(56.0, 30.0));
                if ui.add(tab).clicked() {
                    action = ControlPanelAction::SelectChartKind(kind);
                }
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export Buttons =====
        ui.label(RichText::new("💾 Export").size(14.0).strong());
        ui.add_space(8.0);

        ui.add_enabled_ui(export_enabled, |ui| {
            ui.horizontal(|ui| {
                for (kind, fill) in [(ExportKind::Png, PNG_BUTTON), (ExportKind::Csv, CSV_BUTTON)] {
                    let button = egui::Button::new(
                        RichText::new(format!("Export {}", kind))
                            .size(14.0)
                            .color(Color32::WHITE),
                    )
                    .fill(fill)
                    .min_size(egui::vec2(110.0, 30.0));
                    if ui.add(button).clicked() {
                        action = ControlPanelAction::Export(kind);
                    }
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.starts_with("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlPanelAction {
    None,
    SelectYear(Year),
    SelectMonth(MonthFilter),
    SelectChartKind(ChartKind),
    Export(ExportKind),
}
