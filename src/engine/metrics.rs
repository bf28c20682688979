//! Secondary figures shown next to the estimate.

use super::estimate::hourly_rate;
use crate::core::{Bounds, CalculationMode, CalculatorInput, SavingsEstimate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    pub hourly_rate: f64,
    /// Average monthly cost per person, team mode only
    pub per_person_cost: Option<f64>,
    /// Share of total working time covered by the automated hours, 0..=100
    pub automation_coverage_percent: f64,
    /// Efficiency factor as a whole percentage
    pub efficiency_percent: u32,
}

/// Share of working time automated, capped at 100%.
pub fn automation_coverage_percent(hours: f64, bounds: &Bounds) -> f64 {
    if hours <= 0.0 || bounds.total_working_hours <= 0.0 {
        return 0.0;
    }
    (hours / bounds.total_working_hours * 100.0).min(100.0)
}

pub fn per_person_cost(monthly_cost: f64, team_size: u32) -> f64 {
    monthly_cost / team_size.max(1) as f64
}

pub fn display_metrics(
    mode: CalculationMode,
    input: &CalculatorInput,
    bounds: &Bounds,
    estimate: &SavingsEstimate,
) -> DisplayMetrics {
    let per_person = match mode {
        CalculationMode::Team => Some(per_person_cost(input.monthly_cost, input.team_size)),
        CalculationMode::Individual => None,
    };

    DisplayMetrics {
        hourly_rate: hourly_rate(input.monthly_cost),
        per_person_cost: per_person,
        automation_coverage_percent: automation_coverage_percent(
            input.hours_automated_per_month,
            bounds,
        ),
        efficiency_percent: (estimate.efficiency_factor * 100.0).round() as u32,
    }
}
