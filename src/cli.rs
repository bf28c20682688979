use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use crate::core::CalculationMode;
pub use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "roi-engine")]
#[command(about = "Estimate annual savings from automating manual work", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a single scenario
    Estimate {
        /// Individual employee or whole team
        #[arg(short, long, value_enum, default_value = "individual")]
        mode: CalculationMode,

        /// Monthly salary (individual) or total monthly team cost, in rupees
        #[arg(long, allow_negative_numbers = true)]
        cost: f64,

        /// Hours automated per month
        #[arg(long, allow_negative_numbers = true)]
        hours: f64,

        /// Team size (team mode only, 2-50); confirms the size
        #[arg(long = "team-size", allow_negative_numbers = true)]
        team_size: Option<i64>,

        /// Exit with an error when the call to action is not enabled
        #[arg(long)]
        strict: bool,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Replay a scripted sequence of calculator events
    Replay {
        /// Script file (.toml or .json) with an `events` list
        script: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Print the input bounds for both modes
    Bounds {
        /// Team size to show confirmed-team bounds for
        #[arg(long = "team-size", default_value = "5")]
        team_size: i64,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Options shared by commands that print a report.
#[derive(clap::Args, Debug, Clone)]
pub struct ReportArgs {
    /// Output format (defaults to the configured format, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to .roi-engine.toml discovery)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Plain output: no colors, ASCII only
    #[arg(long)]
    pub plain: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_team_estimate() {
        let cli = Cli::try_parse_from([
            "roi-engine",
            "estimate",
            "--mode",
            "team",
            "--cost",
            "500000",
            "--hours",
            "200",
            "--team-size",
            "5",
            "-f",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Estimate {
                mode,
                cost,
                team_size,
                report,
                ..
            } => {
                assert_eq!(mode, CalculationMode::Team);
                assert_eq!(cost, 500_000.0);
                assert_eq!(team_size, Some(5));
                assert_eq!(report.format, Some(OutputFormat::Json));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_single_is_alias_for_individual() {
        let cli = Cli::try_parse_from([
            "roi-engine", "estimate", "-m", "single", "--cost", "1", "--hours", "1",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Estimate {
                mode: CalculationMode::Individual,
                ..
            }
        ));
    }

    #[test]
    fn test_global_verbosity() {
        let cli = Cli::try_parse_from(["roi-engine", "bounds", "-vv"]).unwrap();
        assert_eq!(cli.verbosity, 2);
    }
}
