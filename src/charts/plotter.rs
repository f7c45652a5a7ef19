//! Chart Plotter Module
//! Draws chart configurations interactively using egui_plot.

use crate::charts::config::{category_label, ChartConfiguration, PieChart, Rgb, SeriesChart};
use egui::{Color32, Pos2, RichText, Sense, Shape, Stroke};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints, Points};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Largest arc drawn as a single convex polygon.
const MAX_WEDGE_SWEEP: f32 = FRAC_PI_2;
/// Angular step between arc vertices.
const ARC_STEP: f32 = 0.04;

impl From<Rgb> for Color32 {
    fn from(c: Rgb) -> Self {
        Color32::from_rgb(c.0, c.1, c.2)
    }
}

/// How a category series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeriesMode {
    Line,
    Area,
    HorizontalBar,
}

/// Draws any [`ChartConfiguration`] into an egui `Ui`.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn draw(ui: &mut egui::Ui, config: &ChartConfiguration, height: f32) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(config.title())
                    .size(18.0)
                    .strong()
                    .color(Color32::from(config.style().text)),
            );
        });
        ui.add_space(8.0);

        match config {
            ChartConfiguration::Line(chart) => {
                Self::draw_series_chart(ui, "chart_line", chart, SeriesMode::Line, height)
            }
            ChartConfiguration::Bar(chart) => {
                Self::draw_series_chart(ui, "chart_bar", chart, SeriesMode::HorizontalBar, height)
            }
            ChartConfiguration::Area(chart) => {
                Self::draw_series_chart(ui, "chart_area", chart, SeriesMode::Area, height)
            }
            ChartConfiguration::Pie(pie) => Self::draw_pie_chart(ui, pie, height),
        }
    }

    /// Grid marks at every category index.
    fn category_marks(count: usize) -> Vec<GridMark> {
        (0..count)
            .map(|i| GridMark {
                value: i as f64,
                step_size: 1.0,
            })
            .collect()
    }

    fn draw_series_chart(
        ui: &mut egui::Ui,
        id: &str,
        chart: &SeriesChart,
        mode: SeriesMode,
        height: f32,
    ) {
        let color = Color32::from(chart.series.color);
        let count = chart.categories.len();
        let categories = chart.categories.clone();
        let upper = count.max(1) as f64 - 0.5;

        let plot = Plot::new(id)
            .height(height)
            .legend(Legend::default())
            .allow_scroll(false);

        // Bars run horizontally, so categories move to the vertical axis.
        let plot = if mode == SeriesMode::HorizontalBar {
            plot.x_axis_label(chart.value_axis_title.as_str())
                .include_x(0.0)
                .include_y(-0.5)
                .include_y(upper)
                .y_grid_spacer(move |_input| Self::category_marks(count))
                .y_axis_formatter(move |mark, _range| category_label(&categories, mark.value))
        } else {
            plot.y_axis_label(chart.value_axis_title.as_str())
                .include_y(0.0)
                .include_x(-0.5)
                .include_x(upper)
                .x_grid_spacer(move |_input| Self::category_marks(count))
                .x_axis_formatter(move |mark, _range| category_label(&categories, mark.value))
        };

        let points: Vec<[f64; 2]> = chart
            .series
            .data
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect();

        plot.show(ui, |plot_ui| match mode {
            SeriesMode::Line | SeriesMode::Area => {
                let mut line = Line::new(PlotPoints::from_iter(points.iter().copied()))
                    .color(color)
                    .width(2.0)
                    .name(&chart.series.name);
                if mode == SeriesMode::Area {
                    line = line.fill(0.0_f32);
                }
                plot_ui.line(line);
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points.iter().copied()))
                        .radius(4.0)
                        .color(color),
                );
            }
            SeriesMode::HorizontalBar => {
                let bars: Vec<Bar> = chart
                    .series
                    .data
                    .iter()
                    .zip(chart.categories.iter())
                    .enumerate()
                    .map(|(i, (&v, category))| Bar::new(i as f64, v).width(0.6).name(category))
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .color(color)
                        .name(&chart.series.name)
                        .horizontal(),
                );
            }
        });
    }

    /// Split a sweep into pieces no wider than a quarter turn so every piece
    /// is a convex wedge. Returns `(start, sweep)` pairs.
    pub fn wedge_segments(start: f32, sweep: f32) -> Vec<(f32, f32)> {
        if sweep <= 0.0 {
            return Vec::new();
        }
        let pieces = (sweep / MAX_WEDGE_SWEEP).ceil().max(1.0) as usize;
        let step = sweep / pieces as f32;
        (0..pieces)
            .map(|i| (start + i as f32 * step, step))
            .collect()
    }

    fn wedge_points(center: Pos2, radius: f32, start: f32, sweep: f32) -> Vec<Pos2> {
        let steps = (sweep / ARC_STEP).ceil().max(1.0) as usize;
        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for i in 0..=steps {
            let angle = start + sweep * i as f32 / steps as f32;
            points.push(center + radius * egui::vec2(angle.cos(), angle.sin()));
        }
        points
    }

    fn draw_pie_chart(ui: &mut egui::Ui, pie: &PieChart, height: f32) {
        let total = pie.total();

        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(height, height), Sense::hover());
            let painter = ui.painter_at(rect);
            let center = rect.center();
            let radius = rect.width().min(rect.height()) * 0.45;

            if total > 0.0 {
                // Clockwise from 12 o'clock (screen y grows downward).
                let mut start = -FRAC_PI_2;
                let mut boundaries = Vec::with_capacity(pie.slices.len());
                for slice in &pie.slices {
                    let sweep = (slice.value / total) as f32 * TAU;
                    let fill = Color32::from(slice.color);
                    for (seg_start, seg_sweep) in Self::wedge_segments(start, sweep) {
                        painter.add(Shape::convex_polygon(
                            Self::wedge_points(center, radius, seg_start, seg_sweep),
                            fill,
                            Stroke::NONE,
                        ));
                    }
                    boundaries.push(start);
                    start += sweep;
                }
                if pie.slices.len() > 1 {
                    for angle in boundaries {
                        painter.line_segment(
                            [center, center + radius * egui::vec2(angle.cos(), angle.sin())],
                            Stroke::new(2.0, Color32::WHITE),
                        );
                    }
                }
            } else {
                painter.circle_stroke(center, radius, Stroke::new(1.0, Color32::GRAY));
            }

            ui.add_space(20.0);

            // Legend
            ui.vertical(|ui| {
                ui.label(RichText::new(&pie.series_name).size(14.0).strong());
                ui.add_space(6.0);
                for slice in &pie.slices {
                    let share = if total > 0.0 {
                        slice.value / total * 100.0
                    } else {
                        0.0
                    };
                    ui.horizontal(|ui| {
                        let (swatch, _) =
                            ui.allocate_exact_size(egui::vec2(16.0, 16.0), Sense::hover());
                        ui.painter()
                            .rect_filled(swatch, 3.0, Color32::from(slice.color));
                        let text = format!("{}: {} ({:.1}%)", slice.name, slice.value, share);
                        ui.label(RichText::new(text).size(13.0));
                    });
                }
            });
        });
    }
}
