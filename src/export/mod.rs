//! Export module - PNG, PDF and CSV output of the displayed chart

mod delimited;
mod pdf;

use crate::charts::{ChartConfiguration, RenderError, StaticChartRenderer};
use crate::config::ExportSettings;
use std::fmt;
use std::path::Path;
use thiserror::Error;

pub use delimited::chart_to_csv;
pub use pdf::single_image_document;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Render failed: {0}")]
    Render(#[from] RenderError),
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    Png,
    Pdf,
    Csv,
}

impl ExportKind {
    pub fn extension(self) -> &'static str {
        match self {
            ExportKind::Png => "png",
            ExportKind::Pdf => "pdf",
            ExportKind::Csv => "csv",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportKind::Png => "image/png",
            ExportKind::Pdf => "application/pdf",
            ExportKind::Csv => "text/csv",
        }
    }

    /// Name shown in the save dialog filter.
    pub fn filter_name(self) -> &'static str {
        match self {
            ExportKind::Png => "PNG Image",
            ExportKind::Pdf => "PDF Document",
            ExportKind::Csv => "CSV Files",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportKind::Png => "PNG",
            ExportKind::Pdf => "PDF",
            ExportKind::Csv => "CSV",
        })
    }
}

/// The chart currently on screen, as last drawn by the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartHandle {
    config: ChartConfiguration,
}

impl ChartHandle {
    pub fn new(config: ChartConfiguration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartConfiguration {
        &self.config
    }
}

/// Encoded export ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub kind: ExportKind,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn mime_type(&self) -> &'static str {
        self.kind.mime_type()
    }

    pub fn write_to(&self, path: &Path) -> Result<(), ExportError> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}

/// Turns the displayed chart into PNG, PDF or CSV bytes.
pub struct Exporter;

impl Exporter {
    /// Export the chart behind `handle`. Without a rendered chart this is a
    /// no-op returning `Ok(None)`.
    pub fn export(
        handle: Option<&ChartHandle>,
        kind: ExportKind,
        settings: &ExportSettings,
    ) -> Result<Option<ExportArtifact>, ExportError> {
        let Some(handle) = handle else {
            tracing::debug!("{} export requested before any chart was rendered", kind);
            return Ok(None);
        };

        let config = handle.config();
        let bytes = match kind {
            ExportKind::Png => {
                StaticChartRenderer::render_png(config, settings.width, settings.height)?
            }
            ExportKind::Pdf => {
                let image =
                    StaticChartRenderer::render_rgb(config, settings.width, settings.height)?;
                single_image_document(&image)?
            }
            ExportKind::Csv => chart_to_csv(config)?,
        };

        tracing::info!(
            "Exported {} chart as {} ({} bytes)",
            config.kind(),
            kind,
            bytes.len()
        );

        Ok(Some(ExportArtifact {
            kind,
            file_name: format!("{}.{}", settings.file_stem, kind.extension()),
            bytes,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::config::build_pie_config;
    use crate::data::SalesDataset;

    #[test]
    fn export_without_chart_is_a_no_op() {
        let settings = ExportSettings::default();
        for kind in [ExportKind::Png, ExportKind::Pdf, ExportKind::Csv] {
            let result = Exporter::export(None, kind, &settings).unwrap();
            assert!(result.is_none());
        }
    }

    #[test]
    fn csv_export_names_file_from_stem() {
        let handle = ChartHandle::new(build_pie_config(&SalesDataset::builtin()));
        let settings = ExportSettings {
            file_stem: "sales".to_string(),
            ..ExportSettings::default()
        };
        let artifact = Exporter::export(Some(&handle), ExportKind::Csv, &settings)
            .unwrap()
            .unwrap();
        assert_eq!(artifact.file_name, "sales.csv");
        assert_eq!(artifact.mime_type(), "text/csv");
        assert_eq!(
            String::from_utf8(artifact.bytes).unwrap(),
            "Category,Sales\n2024,1497\n2025,1154\n"
        );
    }

    #[test]
    fn kinds_map_to_extensions_and_mime_types() {
        assert_eq!(ExportKind::Png.extension(), "png");
        assert_eq!(ExportKind::Pdf.mime_type(), "application/pdf");
        assert_eq!(ExportKind::Csv.to_string(), "CSV");
    }

    #[test]
    fn artifact_writes_bytes_to_disk() {
        let artifact = ExportArtifact {
            kind: ExportKind::Csv,
            file_name: "chart.csv".to_string(),
            bytes: b"Category,2024\nJan,29\n".to_vec(),
        };
        let path = std::env::temp_dir().join(format!(
            "sales_dashboard_export_{}.csv",
            std::process::id()
        ));
        artifact.write_to(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), artifact.bytes);
        let _ = std::fs::remove_file(&path);
    }
}
