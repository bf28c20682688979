pub mod bounds;
pub mod estimate;
pub mod init;
pub mod replay;

use crate::cli::ReportArgs;
use crate::config::{resolve_config, RoiConfig};
use crate::formatting::FormattingConfig;
use crate::io::{self, create_writer, CalculatorReport, OutputFormat};
use anyhow::{Context, Result};

/// Report options after merging flags with the configuration file.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub format: OutputFormat,
    pub output: Option<std::path::PathBuf>,
    pub formatting: FormattingConfig,
    pub config: RoiConfig,
}

impl ReportSettings {
    pub fn resolve(args: &ReportArgs) -> Result<Self> {
        let config = resolve_config(args.config.as_deref())
            .context("Failed to load configuration")?;
        let format = args.format.unwrap_or_else(|| config.default_format());
        let formatting = if args.plain {
            FormattingConfig::plain()
        } else {
            FormattingConfig::from_env()
        };
        Ok(Self {
            format,
            output: args.output.clone(),
            formatting,
            config,
        })
    }
}

/// Render a report to the configured destination.
pub fn emit_report(report: &CalculatorReport, settings: &ReportSettings) -> Result<()> {
    let destination = io::open_destination(settings.output.as_deref())?;
    let mut writer = create_writer(
        settings.format,
        destination,
        settings.formatting,
        settings.config.display(),
    );
    writer.write_report(report)?;
    if let Some(path) = &settings.output {
        log::info!("Wrote report to {}", path.display());
    }
    Ok(())
}
