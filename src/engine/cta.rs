//! Call-to-action tiers for the savings summary.
//!
//! The tier is a pure function of the adjusted annual savings; whether the
//! call to action is enabled additionally depends on validation state.

use crate::core::ValidationResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative tier of the projected savings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaTier {
    /// 5 crore and above
    Enterprise,
    /// 1 crore and above
    Outstanding,
    /// 5 lakh and above
    Significant,
    /// 2 lakh and above
    Strong,
    /// 1 lakh and above
    Good,
    /// 50 thousand and above
    Starter,
    Minimal,
}

/// Descending threshold ladder; first match wins.
const CTA_LADDER: [(f64, CtaTier); 6] = [
    (50_000_000.0, CtaTier::Enterprise),
    (10_000_000.0, CtaTier::Outstanding),
    (500_000.0, CtaTier::Significant),
    (200_000.0, CtaTier::Strong),
    (100_000.0, CtaTier::Good),
    (50_000.0, CtaTier::Starter),
];

impl CtaTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            CtaTier::Enterprise => "enterprise",
            CtaTier::Outstanding => "outstanding",
            CtaTier::Significant => "significant",
            CtaTier::Strong => "strong",
            CtaTier::Good => "good",
            CtaTier::Starter => "starter",
            CtaTier::Minimal => "minimal",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            CtaTier::Enterprise => "Massive automation potential - enterprise level ROI!",
            CtaTier::Outstanding => "Outstanding automation potential identified!",
            CtaTier::Significant => "Significant automation potential identified!",
            CtaTier::Strong => "Strong ROI potential - let's explore this further!",
            CtaTier::Good => "Good automation opportunity identified!",
            CtaTier::Starter => "Every automation journey starts somewhere!",
            CtaTier::Minimal => "Even small automations can make a difference!",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            CtaTier::Enterprise => "Book Executive Automation Strategy Session",
            CtaTier::Outstanding | CtaTier::Significant => "Book Your Priority Automation Audit",
            CtaTier::Strong => "Book Your Free Automation Audit",
            CtaTier::Good => "Explore Your Automation Options",
            CtaTier::Starter => "Discuss Your Automation Potential",
            CtaTier::Minimal => "Get Expert Automation Guidance",
        }
    }

    /// Button label for narrow layouts.
    pub fn button_label_short(&self) -> &'static str {
        match self {
            CtaTier::Enterprise => "Book Executive Session",
            CtaTier::Outstanding | CtaTier::Significant => "Book Priority Audit",
            CtaTier::Strong => "Book Free Audit",
            CtaTier::Good => "Explore Options",
            CtaTier::Starter => "Discuss Potential",
            CtaTier::Minimal => "Get Guidance",
        }
    }
}

impl fmt::Display for CtaTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify adjusted annual savings into a tier.
pub fn cta_tier(adjusted_annual: f64) -> CtaTier {
    CTA_LADDER
        .iter()
        .find(|(threshold, _)| adjusted_annual >= *threshold)
        .map(|(_, tier)| *tier)
        .unwrap_or(CtaTier::Minimal)
}

/// The call to action is enabled for any positive projection whose inputs
/// carry no error.
pub fn cta_enabled(adjusted_annual: f64, cost: &ValidationResult, hours: &ValidationResult) -> bool {
    adjusted_annual > 0.0 && !cost.is_error() && !hours.is_error()
}

/// Copy shown around the call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaMessage {
    pub title: String,
    pub button_text: String,
    pub button_text_short: String,
}

impl CtaMessage {
    fn new(title: &str, button_text: &str, button_text_short: &str) -> Self {
        Self {
            title: title.to_string(),
            button_text: button_text.to_string(),
            button_text_short: button_text_short.to_string(),
        }
    }
}

/// Pick the call-to-action copy for the current state.
pub fn cta_message(tier: CtaTier, enabled: bool, has_errors: bool) -> CtaMessage {
    if enabled {
        return CtaMessage::new(tier.headline(), tier.button_label(), tier.button_label_short());
    }

    let title = if has_errors {
        "Please fix the errors above"
    } else {
        "Enter your values to explore automation opportunities"
    };
    CtaMessage::new(title, "Complete inputs to continue", "Complete inputs")
}
