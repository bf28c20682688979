use anyhow::Result;
use clap::Parser;
use roi_engine::cli::{Cli, Commands};
use roi_engine::commands::{self, estimate::EstimateConfig, replay::ReplayConfig, ReportSettings};

fn main() -> Result<()> {
    let cli = Cli::parse();
    roi_engine::observability::init_logging(cli.verbosity);

    match cli.command {
        Commands::Estimate {
            mode,
            cost,
            hours,
            team_size,
            strict,
            report,
        } => {
            let config = EstimateConfig {
                mode,
                cost,
                hours,
                team_size,
                strict,
                settings: ReportSettings::resolve(&report)?,
            };
            commands::estimate::handle_estimate(config)
        }
        Commands::Replay { script, report } => {
            let config = ReplayConfig {
                script,
                settings: ReportSettings::resolve(&report)?,
            };
            commands::replay::handle_replay(config)
        }
        Commands::Bounds { team_size } => commands::bounds::handle_bounds(team_size),
        Commands::Init { force } => commands::init::init_config(force),
    }
}
