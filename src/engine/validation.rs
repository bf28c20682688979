//! Per-field validation of calculator input.
//!
//! Both validators are pure functions of the current input and mode. They
//! never fail: out-of-range input is reported through the returned
//! [`ValidationResult`], and only [`ValidationLevel::Error`] blocks the call
//! to action.
//!
//! [`ValidationLevel::Error`]: crate::core::ValidationLevel::Error

use super::bounds::{compute_bounds, team_hours_cap, ModeConstants};
use crate::core::{CalculationMode, ValidationResult};
use crate::formatting::currency::format_inr;

/// Validate the monthly cost figure.
pub fn validate_cost(mode: CalculationMode, cost: f64) -> ValidationResult {
    if cost == 0.0 {
        return ValidationResult::hidden();
    }

    let constants = ModeConstants::for_mode(mode);
    if cost < constants.min_cost {
        return ValidationResult::error(format!(
            "Minimum {} should be {}",
            mode.cost_noun(),
            format_inr(constants.min_cost)
        ));
    }

    if cost < constants.low_cost_warning {
        return ValidationResult::warning(low_cost_message(mode));
    }
    if cost > constants.high_cost_info {
        return ValidationResult::info(high_cost_message(mode));
    }

    ValidationResult::info(format!("✓ {} looks reasonable", mode.cost_subject()))
}

fn low_cost_message(mode: CalculationMode) -> &'static str {
    match mode {
        CalculationMode::Individual => "This seems quite low for automation ROI",
        CalculationMode::Team => "Low team cost - consider single employee mode",
    }
}

fn high_cost_message(mode: CalculationMode) -> &'static str {
    match mode {
        CalculationMode::Individual => "High salary - great automation potential!",
        CalculationMode::Team => "Very high team cost - excellent automation potential!",
    }
}

/// Validate hours automated per month.
///
/// In team mode the exact cap is only reported once the team size has been
/// confirmed; before that, excess hours ask for the team size instead.
pub fn validate_hours(
    mode: CalculationMode,
    hours: f64,
    team_size: u32,
    team_size_explicitly_set: bool,
) -> ValidationResult {
    if hours == 0.0 {
        return ValidationResult::hidden();
    }

    let bounds = compute_bounds(mode, team_size, team_size_explicitly_set);
    if hours < bounds.min_hours {
        return ValidationResult::error(format!(
            "Minimum {} hour per month",
            bounds.min_hours
        ));
    }

    if hours > bounds.max_hours {
        return over_cap_error(mode, team_size, team_size_explicitly_set);
    }

    let thresholds = ModeConstants::for_mode(mode).hour_thresholds(team_size);
    match mode {
        CalculationMode::Individual => {
            if hours > thresholds.very_high {
                return ValidationResult::warning(
                    "Very high automation - ensure this is realistic",
                );
            }
            if hours > thresholds.high {
                return ValidationResult::warning(
                    "High automation hours - consider phased approach",
                );
            }
            if hours < thresholds.typical_start {
                return ValidationResult::info("Most businesses start with 20-60 hours/month");
            }
        }
        CalculationMode::Team => {
            let per_person = hours_per_person(hours, team_size);
            if hours > thresholds.very_high {
                return ValidationResult::warning(format!(
                    "Very high team automation ({}h per person) - consider phased rollout",
                    per_person
                ));
            }
            if hours > thresholds.high {
                return ValidationResult::warning(format!(
                    "High team automation ({}h per person) - ensure realistic planning",
                    per_person
                ));
            }
            if hours < thresholds.typical_start {
                return ValidationResult::info(
                    "Teams typically automate 25-80 hours per person/month",
                );
            }
        }
    }

    ValidationResult::info("✓ Automation scope looks realistic")
}

/// Only a confirmed team gets a concrete cap. Individual mode never confirms
/// a team size, so it shares the unconfirmed message.
fn over_cap_error(
    mode: CalculationMode,
    team_size: u32,
    team_size_explicitly_set: bool,
) -> ValidationResult {
    if mode == CalculationMode::Team && team_size_explicitly_set {
        ValidationResult::error(format!(
            "Maximum {} hours/month ({} x 160h)",
            team_hours_cap(team_size),
            team_size
        ))
    } else {
        ValidationResult::error("This seems too high - please set team size first")
    }
}

fn hours_per_person(hours: f64, team_size: u32) -> u64 {
    (hours / team_size.max(1) as f64).round() as u64
}
