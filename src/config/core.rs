use serde::{Deserialize, Serialize};

use crate::io::output::OutputFormat;

/// Root configuration structure read from `.roi-engine.toml`.
///
/// Only presentation settings are configurable; the estimation constants
/// are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RoiConfig {
    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Display configuration for terminal and markdown reports
    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Use lakh / crore shorthand for large amounts
    #[serde(default = "default_true")]
    pub compact_amounts: bool,

    /// Print the calculation-details footer
    #[serde(default = "default_true")]
    pub show_details: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            compact_amounts: true,
            show_details: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl RoiConfig {
    pub fn default_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|output| output.default_format)
            .unwrap_or(OutputFormat::Terminal)
    }

    pub fn display(&self) -> DisplayConfig {
        self.display.unwrap_or_default()
    }
}

/// Contents written by `roi-engine init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# roi-engine configuration

[output]
# terminal | json | markdown
default_format = "terminal"

[display]
# Show large amounts as lakh / crore (e.g. 32.7L)
compact_amounts = true
# Print the calculation-details footer
show_details = true
"#;
