//! Caller-held calculator session.
//!
//! [`Calculator`] mirrors how an interactive calculator behaves as the user
//! types: every setter revalidates the field it touches, switching modes
//! resets all inputs, and confirming a team size rescales the total cost
//! from the remembered per-person figure. The state lives in the value the
//! caller owns; there is nothing global.

use crate::core::{CalculationMode, CalculatorInput, ValidationResult};
use crate::engine::{self, bounds::clamp_team_size, CalculatorOutput, FieldValidation};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single user action against the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculatorEvent {
    SetMode { mode: CalculationMode },
    SetMonthlyCost { value: f64 },
    SetHours { value: f64 },
    SetTeamSize { value: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    mode: CalculationMode,
    input: CalculatorInput,
    /// Per-person cost remembered for rescaling when the team size changes
    per_person_cost: f64,
    validation: FieldValidation,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_mode(CalculationMode::Individual)
    }

    pub fn with_mode(mode: CalculationMode) -> Self {
        Self {
            mode,
            input: CalculatorInput::for_mode(mode),
            per_person_cost: 0.0,
            validation: FieldValidation::default(),
        }
    }

    pub fn mode(&self) -> CalculationMode {
        self.mode
    }

    pub fn input(&self) -> &CalculatorInput {
        &self.input
    }

    pub fn cost_validation(&self) -> &ValidationResult {
        &self.validation.cost
    }

    pub fn hours_validation(&self) -> &ValidationResult {
        &self.validation.hours
    }

    /// Switch mode and reset every dependent input.
    pub fn set_mode(&mut self, mode: CalculationMode) {
        debug!(from = %self.mode, to = %mode, "Switching calculator mode");
        *self = Self::with_mode(mode);
    }

    /// Update the monthly cost. Negative or non-finite values count as 0.
    pub fn set_monthly_cost(&mut self, value: f64) {
        let cost = sanitize(value);
        self.input.monthly_cost = cost;
        self.validation.cost = engine::validate_cost(self.mode, cost);

        if self.mode == CalculationMode::Team && cost > 0.0 && self.input.team_size > 0 {
            self.per_person_cost = cost / self.input.team_size as f64;
        }
    }

    /// Update hours automated per month. Negative or non-finite values count as 0.
    pub fn set_hours(&mut self, value: f64) {
        self.input.hours_automated_per_month = sanitize(value);
        self.revalidate_hours();
    }

    /// Confirm the team size (team mode only), clamped to 2..=50.
    ///
    /// A remembered per-person cost is carried over to the new size, and the
    /// hours are revalidated because the cap depends on the team size.
    pub fn set_team_size(&mut self, requested: i64) {
        if self.mode != CalculationMode::Team {
            debug!(requested, "Ignoring team size outside team mode");
            return;
        }

        let team_size = clamp_team_size(requested);
        debug!(requested, team_size, "Setting team size");
        self.input.team_size = team_size;
        self.input.team_size_explicitly_set = true;

        if self.per_person_cost > 0.0 {
            let total = self.per_person_cost * team_size as f64;
            self.input.monthly_cost = total;
            self.validation.cost = engine::validate_cost(self.mode, total);
        }

        if self.input.hours_automated_per_month > 0.0 {
            self.revalidate_hours();
        }
    }

    pub fn apply(&mut self, event: &CalculatorEvent) {
        match *event {
            CalculatorEvent::SetMode { mode } => self.set_mode(mode),
            CalculatorEvent::SetMonthlyCost { value } => self.set_monthly_cost(value),
            CalculatorEvent::SetHours { value } => self.set_hours(value),
            CalculatorEvent::SetTeamSize { value } => self.set_team_size(value),
        }
    }

    /// Current projection, gated on the session's validation state.
    pub fn output(&self) -> CalculatorOutput {
        engine::evaluate_with_validation(self.mode, &self.input, self.validation.clone())
    }

    fn revalidate_hours(&mut self) {
        self.validation.hours = engine::validate_hours(
            self.mode,
            self.input.hours_automated_per_month,
            self.input.team_size,
            self.input.team_size_explicitly_set,
        );
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValidationLevel;
    use proptest::prelude::*;

    #[test]
    fn test_new_calculator_is_empty_individual() {
        let calc = Calculator::new();
        assert_eq!(calc.mode(), CalculationMode::Individual);
        assert_eq!(calc.input().team_size, 1);
        assert!(!calc.cost_validation().show);
    }

    #[test]
    fn test_set_mode_resets_inputs_and_validation() {
        let mut calc = Calculator::new();
        calc.set_monthly_cost(3_000.0);
        calc.set_hours(200.0);
        assert!(calc.cost_validation().show);

        calc.set_mode(CalculationMode::Team);
        assert_eq!(calc.input().monthly_cost, 0.0);
        assert_eq!(calc.input().hours_automated_per_month, 0.0);
        assert_eq!(calc.input().team_size, 5);
        assert!(!calc.input().team_size_explicitly_set);
        assert!(!calc.cost_validation().show);
        assert!(!calc.hours_validation().show);
    }

    #[test]
    fn test_negative_input_counts_as_zero() {
        let mut calc = Calculator::new();
        calc.set_monthly_cost(-50_000.0);
        calc.set_hours(f64::NAN);
        assert_eq!(calc.input().monthly_cost, 0.0);
        assert_eq!(calc.input().hours_automated_per_month, 0.0);
        assert!(!calc.output().cta_enabled);
    }

    #[test]
    fn test_team_size_ignored_in_individual_mode() {
        let mut calc = Calculator::new();
        calc.set_team_size(10);
        assert_eq!(calc.input().team_size, 1);
        assert!(!calc.input().team_size_explicitly_set);
    }

    #[test]
    fn test_team_size_is_clamped() {
        let mut calc = Calculator::with_mode(CalculationMode::Team);
        calc.set_team_size(0);
        assert_eq!(calc.input().team_size, 2);
        calc.set_team_size(80);
        assert_eq!(calc.input().team_size, 50);
    }

    #[test]
    fn test_team_size_rescales_total_cost() {
        let mut calc = Calculator::with_mode(CalculationMode::Team);
        calc.set_monthly_cost(500_000.0); // 100,000 per person at default size 5
        calc.set_team_size(8);
        assert_eq!(calc.input().monthly_cost, 800_000.0);
    }

    #[test]
    fn test_team_size_revalidates_hours_against_new_cap() {
        let mut calc = Calculator::with_mode(CalculationMode::Team);
        calc.set_monthly_cost(500_000.0);
        calc.set_hours(900.0);
        assert_ne!(calc.hours_validation().level, ValidationLevel::Error);

        calc.set_team_size(5);
        assert_eq!(calc.hours_validation().level, ValidationLevel::Error);
        assert_eq!(
            calc.hours_validation().message,
            "Maximum 800 hours/month (5 x 160h)"
        );
        assert!(!calc.output().cta_enabled);
    }

    #[test]
    fn test_apply_events() {
        let mut calc = Calculator::new();
        for event in [
            CalculatorEvent::SetMode {
                mode: CalculationMode::Team,
            },
            CalculatorEvent::SetTeamSize { value: 5 },
            CalculatorEvent::SetMonthlyCost { value: 500_000.0 },
            CalculatorEvent::SetHours { value: 200.0 },
        ] {
            calc.apply(&event);
        }
        let output = calc.output();
        assert_eq!(output.bounds.max_hours, 800.0);
        assert!(output.cta_enabled);
        assert_eq!(output.cta_tier, crate::engine::CtaTier::Significant);
    }

    #[test]
    fn test_event_deserializes_from_tagged_json() {
        let event: CalculatorEvent =
            serde_json::from_str(r#"{"kind": "set_mode", "mode": "team"}"#).unwrap();
        assert_eq!(
            event,
            CalculatorEvent::SetMode {
                mode: CalculationMode::Team
            }
        );
    }

    fn event_strategy() -> impl Strategy<Value = CalculatorEvent> {
        prop_oneof![
            prop_oneof![Just(CalculationMode::Individual), Just(CalculationMode::Team)]
                .prop_map(|mode| CalculatorEvent::SetMode { mode }),
            (-1_000.0f64..20_000_000.0).prop_map(|value| CalculatorEvent::SetMonthlyCost { value }),
            (-10.0f64..3_000.0).prop_map(|value| CalculatorEvent::SetHours { value }),
            (-5i64..80).prop_map(|value| CalculatorEvent::SetTeamSize { value }),
        ]
    }

    proptest! {
        #[test]
        fn prop_session_validation_matches_fresh_evaluation(
            events in prop::collection::vec(event_strategy(), 0..24)
        ) {
            let mut calc = Calculator::new();
            for event in &events {
                calc.apply(event);
            }
            let fresh = engine::evaluate(calc.mode(), calc.input());
            prop_assert_eq!(calc.output(), fresh);
        }

        #[test]
        fn prop_mode_switch_always_resets(
            events in prop::collection::vec(event_strategy(), 0..16),
            team in any::<bool>(),
        ) {
            let mut calc = Calculator::new();
            for event in &events {
                calc.apply(event);
            }
            let mode = if team { CalculationMode::Team } else { CalculationMode::Individual };
            calc.set_mode(mode);
            prop_assert_eq!(calc.input().monthly_cost, 0.0);
            prop_assert_eq!(calc.input().hours_automated_per_month, 0.0);
            prop_assert!(!calc.cost_validation().show);
            prop_assert!(!calc.hours_validation().show);
        }

        #[test]
        fn prop_zero_input_never_enables_cta(
            events in prop::collection::vec(event_strategy(), 0..16),
        ) {
            let mut calc = Calculator::new();
            for event in &events {
                calc.apply(event);
            }
            calc.set_hours(0.0);
            let output = calc.output();
            prop_assert_eq!(output.estimate.adjusted_annual, 0.0);
            prop_assert!(!output.cta_enabled);
        }
    }
}
