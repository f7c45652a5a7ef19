//! Static Chart Renderer
//! Draws chart configurations off-screen with plotters for image export.
//!
//! Layout mirrors the interactive viewer:
//! 1. Title centered above the plot
//! 2. Line/area: categories along the bottom, values up the left axis
//! 3. Bar: horizontal bars, categories down the left axis
//! 4. Pie: one labeled slice per entry with percentages, from 12 o'clock

use crate::charts::config::{category_label, ChartConfiguration, PieChart, Rgb, SeriesChart};
use image::{ImageFormat, RgbImage};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt::Display;
use std::io::Cursor;
use thiserror::Error;

const FONT: &str = "sans-serif";
const BAR_HALF_WIDTH: f64 = 0.3;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Chart drawing failed: {0}")]
    Draw(String),
    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Invalid image size {0}x{1}")]
    InvalidSize(u32, u32),
}

fn draw_err<E: Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

impl From<Rgb> for RGBColor {
    fn from(c: Rgb) -> Self {
        RGBColor(c.0, c.1, c.2)
    }
}

type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeriesShape {
    Line,
    Area,
    HorizontalBar,
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render a configuration into an RGB image of the given pixel size.
    pub fn render_rgb(
        config: &ChartConfiguration,
        width: u32,
        height: u32,
    ) -> Result<RgbImage, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidSize(width, height));
        }

        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&RGBColor::from(config.style().background))
                .map_err(draw_err)?;

            match config {
                ChartConfiguration::Line(chart) => {
                    Self::draw_series(&root, chart, SeriesShape::Line)?
                }
                ChartConfiguration::Area(chart) => {
                    Self::draw_series(&root, chart, SeriesShape::Area)?
                }
                ChartConfiguration::Bar(chart) => {
                    Self::draw_series(&root, chart, SeriesShape::HorizontalBar)?
                }
                ChartConfiguration::Pie(pie) => Self::draw_pie(&root, pie)?,
            }

            root.present().map_err(draw_err)?;
        }

        RgbImage::from_raw(width, height, buffer).ok_or(RenderError::InvalidSize(width, height))
    }

    /// Render a configuration and encode it as PNG bytes.
    pub fn render_png(
        config: &ChartConfiguration,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        let img = Self::render_rgb(config, width, height)?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Upper bound of the value axis: 10% headroom over the largest value.
    fn value_ceiling(values: &[f64]) -> f64 {
        let max = values.iter().copied().fold(0.0_f64, f64::max);
        if max <= 0.0 {
            1.0
        } else {
            (max * 1.1).ceil()
        }
    }

    fn draw_series(
        root: &Canvas<'_>,
        chart: &SeriesChart,
        shape: SeriesShape,
    ) -> Result<(), RenderError> {
        let text = RGBColor::from(chart.style.text);
        let color = RGBColor::from(chart.series.color);
        let categories = &chart.categories;
        let count = categories.len();
        let category_range = -0.5..(count.max(1) as f64 - 0.5);
        let value_range = 0.0..Self::value_ceiling(&chart.series.data);
        // Half-step ticks guarantee a tick on every category index.
        let tick_hint = count * 2 + 1;
        let formatter = |v: &f64| category_label(categories, *v);

        let mut builder = ChartBuilder::on(root);
        builder
            .caption(&chart.title, (FONT, 26).into_font().color(&text))
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(70);

        if shape == SeriesShape::HorizontalBar {
            let mut ctx = builder
                .build_cartesian_2d(value_range, category_range)
                .map_err(draw_err)?;

            ctx.configure_mesh()
                .disable_y_mesh()
                .y_labels(tick_hint)
                .y_label_formatter(&formatter)
                .x_desc(chart.value_axis_title.as_str())
                .label_style((FONT, 14).into_font().color(&text))
                .axis_desc_style((FONT, 16).into_font().color(&text))
                .draw()
                .map_err(draw_err)?;

            ctx.draw_series(chart.series.data.iter().enumerate().map(|(i, &v)| {
                let y = i as f64;
                Rectangle::new(
                    [(0.0, y - BAR_HALF_WIDTH), (v, y + BAR_HALF_WIDTH)],
                    color.filled(),
                )
            }))
            .map_err(draw_err)?
            .label(chart.series.name.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 14, y + 5)], color.filled()));

            Self::draw_legend(&mut ctx, text)?;
            return Ok(());
        }

        let mut ctx = builder
            .build_cartesian_2d(category_range, value_range)
            .map_err(draw_err)?;

        ctx.configure_mesh()
            .disable_x_mesh()
            .x_labels(tick_hint)
            .x_label_formatter(&formatter)
            .y_desc(chart.value_axis_title.as_str())
            .label_style((FONT, 14).into_font().color(&text))
            .axis_desc_style((FONT, 16).into_font().color(&text))
            .draw()
            .map_err(draw_err)?;

        let points: Vec<(f64, f64)> = chart
            .series
            .data
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect();

        let anno = if shape == SeriesShape::Area {
            ctx.draw_series(
                AreaSeries::new(points.iter().copied(), 0.0, color.mix(0.35))
                    .border_style(color.stroke_width(2)),
            )
        } else {
            ctx.draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
        }
        .map_err(draw_err)?;
        anno.label(chart.series.name.as_str()).legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
        });

        ctx.draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
        )
        .map_err(draw_err)?;

        Self::draw_legend(&mut ctx, text)
    }

    fn draw_legend<'a, DB: DrawingBackend + 'a>(
        ctx: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
        text: RGBColor,
    ) -> Result<(), RenderError> {
        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.85))
            .border_style(text)
            .label_font((FONT, 14).into_font().color(&text))
            .draw()
            .map_err(draw_err)
    }

    fn draw_pie(root: &Canvas<'_>, pie: &PieChart) -> Result<(), RenderError> {
        let text = RGBColor::from(pie.style.text);
        let area = root
            .titled(&pie.title, (FONT, 26).into_font().color(&text))
            .map_err(draw_err)?;

        if pie.total() <= 0.0 {
            return Ok(());
        }

        let (w, h) = area.dim_in_pixel();
        let center = (w as i32 / 2, h as i32 / 2);
        let radius = w.min(h) as f64 * 0.35;
        let sizes: Vec<f64> = pie.slices.iter().map(|s| s.value).collect();
        let colors: Vec<RGBColor> = pie.slices.iter().map(|s| RGBColor::from(s.color)).collect();
        let labels: Vec<String> = pie.slices.iter().map(|s| s.name.clone()).collect();

        let mut element = Pie::new(&center, &radius, &sizes, &colors, &labels);
        element.start_angle(-90.0);
        element.label_style((FONT, 18).into_font().color(&text));
        element.percentages((FONT, 16).into_font().color(&WHITE));
        area.draw(&element).map_err(draw_err)
    }
}
