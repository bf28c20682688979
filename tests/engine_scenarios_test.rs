//! End-to-end checks of the calculation engine against worked scenarios.

use pretty_assertions::assert_eq;
use roi_engine::{
    compute_bounds, evaluate, Bounds, CalculationMode, CalculatorInput, CtaTier, ValidationLevel,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_individual_mid_salary_scenario() {
    let input = CalculatorInput::individual(75_000.0, 80.0);
    let output = evaluate(CalculationMode::Individual, &input);

    assert_eq!(
        output.bounds,
        Bounds {
            min_cost: 5_000.0,
            min_hours: 1.0,
            max_hours: 160.0,
            total_working_hours: 176.0,
        }
    );
    assert_close(output.estimate.gross_annual, 409_090.909);
    assert_eq!(output.estimate.efficiency_factor, 0.75);
    assert_close(output.estimate.adjusted_annual, 245_454.545);
    assert_eq!(output.estimate.confidence_score, 5);
    assert_eq!(output.cta_tier, CtaTier::Strong);
    assert!(output.cta_enabled);
    assert!(!output.validation.has_errors());
}

#[test]
fn test_confirmed_team_scenario() {
    let input = CalculatorInput::team(500_000.0, 200.0, 5, true);
    let output = evaluate(CalculationMode::Team, &input);

    assert_eq!(output.bounds.max_hours, 800.0);
    assert_eq!(output.bounds.total_working_hours, 880.0);
    assert_eq!(output.estimate.efficiency_factor, 0.60);
    assert_close(output.estimate.adjusted_annual, 3_272_727.272);
    assert_eq!(output.cta_tier, CtaTier::Significant);
    assert!(output.cta_enabled);
    assert_eq!(output.metrics.per_person_cost, Some(100_000.0));
}

#[test]
fn test_cost_below_minimum_blocks_call_to_action() {
    let input = CalculatorInput::individual(3_000.0, 40.0);
    let output = evaluate(CalculationMode::Individual, &input);

    assert_eq!(output.validation.cost.level, ValidationLevel::Error);
    assert!(output.validation.cost.show);
    assert_eq!(output.validation.cost.message, "Minimum salary should be ₹5,000");
    assert!(output.estimate.adjusted_annual > 0.0);
    assert!(!output.cta_enabled);
    assert_eq!(output.cta.title, "Please fix the errors above");
}

#[test]
fn test_unconfirmed_team_uses_flexible_cap() {
    let bounds = compute_bounds(CalculationMode::Team, 5, false);
    assert_eq!(bounds.max_hours, 2_000.0);

    let input = CalculatorInput::team(500_000.0, 900.0, 5, false);
    let output = evaluate(CalculationMode::Team, &input);
    assert_ne!(output.validation.hours.level, ValidationLevel::Error);

    let confirmed = CalculatorInput::team(500_000.0, 900.0, 5, true);
    let output = evaluate(CalculationMode::Team, &confirmed);
    assert_eq!(output.validation.hours.level, ValidationLevel::Error);
    assert_eq!(
        output.validation.hours.message,
        "Maximum 800 hours/month (5 x 160h)"
    );
    assert!(!output.cta_enabled);
}

#[test]
fn test_empty_input_has_no_projection() {
    for mode in [CalculationMode::Individual, CalculationMode::Team] {
        let output = evaluate(mode, &CalculatorInput::for_mode(mode));
        assert_eq!(output.estimate.adjusted_annual, 0.0);
        assert!(!output.cta_enabled);
        assert!(!output.validation.cost.show);
        assert!(!output.validation.hours.show);
    }
}

#[test]
fn test_large_hours_are_capped_by_cost() {
    let input = CalculatorInput::individual(20_000.0, 160.0);
    let output = evaluate(CalculationMode::Individual, &input);
    assert!(output.estimate.adjusted_annual <= 20_000.0 * 12.0 * 0.85);
    assert!(output.estimate.adjusted_annual <= output.estimate.gross_annual);
}
