//! Data model shared by the estimation engine, the calculator session and
//! the report writers.
//!
//! Every type here is a transient value: nothing is persisted, and the
//! derived types (`ValidationResult`, `SavingsEstimate`) are always
//! recomputed from a [`CalculatorInput`] and a [`CalculationMode`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the calculation models a single employee or an aggregate team.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// Cost is one person's monthly salary
    #[default]
    #[value(alias = "single")]
    Individual,
    /// Cost is the total monthly cost of the team
    Team,
}

impl CalculationMode {
    /// Team size assumed right after switching into this mode.
    pub fn default_team_size(self) -> u32 {
        match self {
            CalculationMode::Individual => 1,
            CalculationMode::Team => 5,
        }
    }

    /// Get mode label for display
    pub fn label(&self) -> &'static str {
        match self {
            CalculationMode::Individual => "Single Employee",
            CalculationMode::Team => "Team / Department",
        }
    }

    /// Label of the cost input field.
    pub fn cost_label(&self) -> &'static str {
        match self {
            CalculationMode::Individual => "Monthly Salary (₹)",
            CalculationMode::Team => "Total Monthly Cost (₹)",
        }
    }

    /// Lower-case noun used in minimum-cost messages.
    pub(crate) fn cost_noun(&self) -> &'static str {
        match self {
            CalculationMode::Individual => "salary",
            CalculationMode::Team => "total cost",
        }
    }

    /// Capitalised subject used in affirmative cost messages.
    pub(crate) fn cost_subject(&self) -> &'static str {
        match self {
            CalculationMode::Individual => "Salary",
            CalculationMode::Team => "Team cost",
        }
    }
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationMode::Individual => write!(f, "individual"),
            CalculationMode::Team => write!(f, "team"),
        }
    }
}

/// Raw calculator inputs as held by the caller.
///
/// Numbers are assumed non-negative; the session clamps user input before
/// it reaches this struct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// Monthly salary (individual) or total team monthly cost (team)
    pub monthly_cost: f64,
    pub hours_automated_per_month: f64,
    /// Only meaningful in team mode
    pub team_size: u32,
    /// Whether the user has confirmed the team size
    #[serde(default)]
    pub team_size_explicitly_set: bool,
}

impl CalculatorInput {
    /// Empty input for a freshly selected mode.
    pub fn for_mode(mode: CalculationMode) -> Self {
        Self {
            monthly_cost: 0.0,
            hours_automated_per_month: 0.0,
            team_size: mode.default_team_size(),
            team_size_explicitly_set: false,
        }
    }

    pub fn individual(monthly_cost: f64, hours: f64) -> Self {
        Self {
            monthly_cost,
            hours_automated_per_month: hours,
            ..Self::for_mode(CalculationMode::Individual)
        }
    }

    pub fn team(monthly_cost: f64, hours: f64, team_size: u32, explicitly_set: bool) -> Self {
        Self {
            monthly_cost,
            hours_automated_per_month: hours,
            team_size,
            team_size_explicitly_set: explicitly_set,
        }
    }
}

/// Mode-dependent input bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_cost: f64,
    pub min_hours: f64,
    pub max_hours: f64,
    /// Denominator for the coverage percentage, not the hours cap
    pub total_working_hours: f64,
}

impl Bounds {
    pub fn hours_in_range(&self, hours: f64) -> bool {
        hours >= self.min_hours && hours <= self.max_hours
    }
}

/// Severity of a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationLevel {
    /// Affirmative or advisory
    Info,
    /// Plausible but atypical
    Warning,
    /// Violates a hard bound and blocks the call to action
    Error,
}

impl ValidationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationLevel::Info => "info",
            ValidationLevel::Warning => "warning",
            ValidationLevel::Error => "error",
        }
    }
}

impl fmt::Display for ValidationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub level: ValidationLevel,
    pub message: String,
    pub show: bool,
}

impl ValidationResult {
    /// The untouched state: nothing to show.
    pub fn hidden() -> Self {
        Self {
            level: ValidationLevel::Info,
            message: String::new(),
            show: false,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::shown(ValidationLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::shown(ValidationLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::shown(ValidationLevel::Error, message)
    }

    fn shown(level: ValidationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            show: true,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == ValidationLevel::Error
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::hidden()
    }
}

/// Savings projection derived from a calculator input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsEstimate {
    pub gross_annual: f64,
    pub adjusted_annual: f64,
    /// Heuristic in 1..=5, display only
    pub confidence_score: u8,
    /// Fraction of gross time convertible to savings; 0 when nothing was estimated
    pub efficiency_factor: f64,
}

impl SavingsEstimate {
    pub fn zero(confidence_score: u8) -> Self {
        Self {
            gross_annual: 0.0,
            adjusted_annual: 0.0,
            confidence_score,
            efficiency_factor: 0.0,
        }
    }

    /// True when the realistic projection differs from the basic one.
    pub fn is_adjusted(&self) -> bool {
        self.adjusted_annual > 0.0 && self.adjusted_annual != self.gross_annual
    }
}
