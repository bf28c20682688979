//! ROI estimation engine.
//!
//! Pure, synchronous functions: bounds, validation, savings estimate,
//! confidence and call-to-action tier. [`evaluate`] runs them all for one
//! input and bundles the result into a [`CalculatorOutput`].

pub mod bounds;
pub mod cta;
pub mod estimate;
pub mod metrics;
pub mod validation;

pub use bounds::{clamp_team_size, compute_bounds, ModeConstants};
pub use cta::{cta_enabled, cta_message, cta_tier, CtaMessage, CtaTier};
pub use estimate::{confidence_score, efficiency_factor, estimate, estimate_with_bounds};
pub use metrics::DisplayMetrics;
pub use validation::{validate_cost, validate_hours};

use crate::core::{Bounds, CalculationMode, CalculatorInput, SavingsEstimate, ValidationResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Validation results for both input fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldValidation {
    pub cost: ValidationResult,
    pub hours: ValidationResult,
}

impl FieldValidation {
    pub fn for_input(mode: CalculationMode, input: &CalculatorInput) -> Self {
        Self {
            cost: validate_cost(mode, input.monthly_cost),
            hours: validate_hours(
                mode,
                input.hours_automated_per_month,
                input.team_size,
                input.team_size_explicitly_set,
            ),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.cost.is_error() || self.hours.is_error()
    }
}

/// Everything a presentation layer needs to render the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorOutput {
    pub bounds: Bounds,
    pub validation: FieldValidation,
    pub estimate: SavingsEstimate,
    pub cta_tier: CtaTier,
    pub cta_enabled: bool,
    pub cta: CtaMessage,
    pub metrics: DisplayMetrics,
}

/// Evaluate an input from scratch.
pub fn evaluate(mode: CalculationMode, input: &CalculatorInput) -> CalculatorOutput {
    evaluate_with_validation(mode, input, FieldValidation::for_input(mode, input))
}

/// Evaluate an input against validation state held by the caller.
pub fn evaluate_with_validation(
    mode: CalculationMode,
    input: &CalculatorInput,
    validation: FieldValidation,
) -> CalculatorOutput {
    let bounds = compute_bounds(mode, input.team_size, input.team_size_explicitly_set);
    let estimate = estimate_with_bounds(
        input.monthly_cost,
        input.hours_automated_per_month,
        &bounds,
    );

    let tier = cta_tier(estimate.adjusted_annual);
    let enabled = cta_enabled(estimate.adjusted_annual, &validation.cost, &validation.hours);
    let cta = cta_message(tier, enabled, validation.has_errors());
    let metrics = metrics::display_metrics(mode, input, &bounds, &estimate);

    debug!(
        %mode,
        cost = input.monthly_cost,
        hours = input.hours_automated_per_month,
        adjusted = estimate.adjusted_annual,
        confidence = estimate.confidence_score,
        tier = %tier,
        enabled,
        "Evaluated calculator input"
    );

    CalculatorOutput {
        bounds,
        validation,
        estimate,
        cta_tier: tier,
        cta_enabled: enabled,
        cta,
        metrics,
    }
}
