use super::{emit_report, ReportSettings};
use crate::core::CalculationMode;
use crate::io::CalculatorReport;
use crate::session::Calculator;
use anyhow::Result;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct EstimateConfig {
    pub mode: CalculationMode,
    pub cost: f64,
    pub hours: f64,
    pub team_size: Option<i64>,
    pub strict: bool,
    pub settings: ReportSettings,
}

/// Build the session the way a user would fill the form: mode, team size,
/// then cost and hours. Setting the size before the cost keeps the cost
/// from being rescaled.
pub fn build_calculator(
    mode: CalculationMode,
    cost: f64,
    hours: f64,
    team_size: Option<i64>,
) -> Calculator {
    let mut calculator = Calculator::with_mode(mode);
    if let Some(size) = team_size {
        if mode == CalculationMode::Individual {
            warn!("--team-size only applies in team mode; ignoring {}", size);
        }
        calculator.set_team_size(size);
    }
    calculator.set_monthly_cost(cost);
    calculator.set_hours(hours);
    calculator
}

pub fn handle_estimate(config: EstimateConfig) -> Result<()> {
    let calculator = build_calculator(config.mode, config.cost, config.hours, config.team_size);
    let report = CalculatorReport::from_calculator(&calculator);

    info!(
        mode = %config.mode,
        adjusted = report.output.estimate.adjusted_annual,
        tier = %report.output.cta_tier,
        "Estimate complete"
    );
    emit_report(&report, &config.settings)?;

    if config.strict && !report.output.cta_enabled {
        anyhow::bail!("Call to action is not enabled: {}", report.output.cta.title);
    }
    Ok(())
}
