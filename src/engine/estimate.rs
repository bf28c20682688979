//! Savings projection and confidence scoring.
//!
//! The sequencing and constants below (22 × 8 working month, 0.80
//! implementation factor, 0.85 realistic cap) are business constants and
//! must not be folded together.

use super::bounds::{compute_bounds, WORKING_HOURS_PER_PERSON};
use crate::core::{Bounds, CalculationMode, SavingsEstimate};

pub const MONTHS_PER_YEAR: f64 = 12.0;
/// Flat 20% deduction for setup and maintenance overhead.
pub const IMPLEMENTATION_COST_FACTOR: f64 = 0.80;
/// Share of the annualized role cost that may be claimed as savings.
pub const REALISTIC_CAP_RATIO: f64 = 0.85;

/// Efficiency tiers by absolute automated hours: (upper bound inclusive, factor).
const EFFICIENCY_TIERS: [(f64, f64); 2] = [(40.0, 0.90), (80.0, 0.75)];
const COMPLEX_TASK_EFFICIENCY: f64 = 0.60;

/// Below this monthly cost confidence drops regardless of mode.
pub const LOW_COST_CONFIDENCE_THRESHOLD: f64 = 15_000.0;
const HIGH_HOURS_CONFIDENCE_THRESHOLD: f64 = 100.0;
const VERY_HIGH_HOURS_CONFIDENCE_THRESHOLD: f64 = 120.0;
const MAX_CONFIDENCE: i32 = 5;
const MIN_CONFIDENCE: i32 = 1;

/// Fraction of gross automatable time convertible to savings.
///
/// Larger automation scopes involve more complex, lower-yield tasks.
pub fn efficiency_factor(hours: f64) -> f64 {
    EFFICIENCY_TIERS
        .iter()
        .find(|(upper, _)| hours <= *upper)
        .map(|(_, factor)| *factor)
        .unwrap_or(COMPLEX_TASK_EFFICIENCY)
}

/// Confidence heuristic in `1..=5`.
///
/// Penalties compound: a cost below the mode minimum also takes the
/// low-cost penalty, and hours above 120 also take the above-100 penalty.
pub fn confidence_score(cost: f64, hours: f64, bounds: &Bounds) -> u8 {
    let mut score = MAX_CONFIDENCE;

    if cost < LOW_COST_CONFIDENCE_THRESHOLD {
        score -= 1;
    }
    if hours > HIGH_HOURS_CONFIDENCE_THRESHOLD {
        score -= 1;
    }
    if hours > VERY_HIGH_HOURS_CONFIDENCE_THRESHOLD {
        score -= 1;
    }
    if cost < bounds.min_cost {
        score -= 2;
    }
    if !bounds.hours_in_range(hours) {
        score -= 2;
    }

    score.max(MIN_CONFIDENCE) as u8
}

/// Hourly rate implied by a monthly cost.
pub fn hourly_rate(monthly_cost: f64) -> f64 {
    monthly_cost / WORKING_HOURS_PER_PERSON
}

/// Estimate savings using the mode's default bounds (team size not yet
/// confirmed).
pub fn estimate(mode: CalculationMode, cost: f64, hours: f64) -> SavingsEstimate {
    let bounds = compute_bounds(mode, mode.default_team_size(), false);
    estimate_with_bounds(cost, hours, &bounds)
}

/// Estimate savings against explicit bounds.
pub fn estimate_with_bounds(cost: f64, hours: f64, bounds: &Bounds) -> SavingsEstimate {
    let confidence = confidence_score(cost, hours, bounds);
    if cost == 0.0 || hours == 0.0 {
        return SavingsEstimate::zero(confidence);
    }

    let gross_annual = hours * hourly_rate(cost) * MONTHS_PER_YEAR;

    let efficiency = efficiency_factor(hours);
    let efficiency_adjusted = gross_annual * efficiency;
    let implementation_adjusted = efficiency_adjusted * IMPLEMENTATION_COST_FACTOR;

    let cap = cost * MONTHS_PER_YEAR * REALISTIC_CAP_RATIO;
    let adjusted_annual = implementation_adjusted.min(cap);

    SavingsEstimate {
        gross_annual,
        adjusted_annual,
        confidence_score: confidence,
        efficiency_factor: efficiency,
    }
}
