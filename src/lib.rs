// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Bounds, CalculationMode, CalculatorInput, SavingsEstimate, ValidationLevel, ValidationResult,
};

pub use crate::engine::{
    compute_bounds, confidence_score, cta_enabled, cta_tier, efficiency_factor, estimate,
    estimate_with_bounds, evaluate, validate_cost, validate_hours, CalculatorOutput, CtaMessage,
    CtaTier, DisplayMetrics, FieldValidation,
};

pub use crate::session::{Calculator, CalculatorEvent};

pub use crate::io::output::{create_writer, CalculatorReport, OutputFormat, OutputWriter};
