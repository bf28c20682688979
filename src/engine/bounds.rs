//! Mode-keyed constant table and bound computation.
//!
//! All mode-dependent constants live in [`ModeConstants`]; validation and
//! scoring read them from here rather than branching on the mode themselves.

use crate::core::{Bounds, CalculationMode};

/// Working days assumed per month.
pub const WORKING_DAYS_PER_MONTH: f64 = 22.0;
/// Working hours assumed per day.
pub const HOURS_PER_DAY: f64 = 8.0;
/// Hours in a working month for one person (22 × 8). Coverage denominator.
pub const WORKING_HOURS_PER_PERSON: f64 = WORKING_DAYS_PER_MONTH * HOURS_PER_DAY;
/// Automatable hours cap for one person. Deliberately below 176.
pub const MAX_HOURS_PER_PERSON: f64 = 160.0;
/// Team hours cap used until the user confirms the team size.
pub const UNCONFIRMED_TEAM_MAX_HOURS: f64 = 2000.0;

pub const MIN_TEAM_SIZE: u32 = 2;
pub const MAX_TEAM_SIZE: u32 = 50;

/// Hour thresholds for hours advice. Team thresholds are per person and get
/// multiplied by the team size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourThresholds {
    pub very_high: f64,
    pub high: f64,
    pub typical_start: f64,
}

/// Constants that depend on the calculation mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeConstants {
    pub min_cost: f64,
    pub min_hours: f64,
    /// Below this the cost is flagged as atypically low
    pub low_cost_warning: f64,
    /// Above this the cost is flagged as high potential
    pub high_cost_info: f64,
    pub hours: HourThresholds,
    /// Whether hour thresholds scale with team size
    pub per_person_hours: bool,
}

const INDIVIDUAL: ModeConstants = ModeConstants {
    min_cost: 5_000.0,
    min_hours: 1.0,
    low_cost_warning: 15_000.0,
    high_cost_info: 1_000_000.0,
    hours: HourThresholds {
        very_high: 120.0,
        high: 80.0,
        typical_start: 20.0,
    },
    per_person_hours: false,
};

const TEAM: ModeConstants = ModeConstants {
    min_cost: 10_000.0,
    min_hours: 1.0,
    low_cost_warning: 50_000.0,
    high_cost_info: 10_000_000.0,
    hours: HourThresholds {
        very_high: 80.0,
        high: 40.0,
        typical_start: 25.0,
    },
    per_person_hours: true,
};

impl ModeConstants {
    pub fn for_mode(mode: CalculationMode) -> &'static ModeConstants {
        match mode {
            CalculationMode::Individual => &INDIVIDUAL,
            CalculationMode::Team => &TEAM,
        }
    }

    /// Hour thresholds for the given team size.
    pub fn hour_thresholds(&self, team_size: u32) -> HourThresholds {
        let scale = if self.per_person_hours {
            team_size as f64
        } else {
            1.0
        };
        HourThresholds {
            very_high: self.hours.very_high * scale,
            high: self.hours.high * scale,
            typical_start: self.hours.typical_start * scale,
        }
    }
}

/// Compute the input bounds for a mode.
///
/// Team mode stays permissive (2,000 hours) until the team size has been
/// confirmed, then caps at 160 hours per person.
pub fn compute_bounds(
    mode: CalculationMode,
    team_size: u32,
    team_size_explicitly_set: bool,
) -> Bounds {
    let constants = ModeConstants::for_mode(mode);
    match mode {
        CalculationMode::Individual => Bounds {
            min_cost: constants.min_cost,
            min_hours: constants.min_hours,
            max_hours: MAX_HOURS_PER_PERSON,
            total_working_hours: WORKING_HOURS_PER_PERSON,
        },
        CalculationMode::Team => {
            let max_hours = if team_size_explicitly_set {
                team_size as f64 * MAX_HOURS_PER_PERSON
            } else {
                UNCONFIRMED_TEAM_MAX_HOURS
            };
            Bounds {
                min_cost: constants.min_cost,
                min_hours: constants.min_hours,
                max_hours,
                total_working_hours: WORKING_HOURS_PER_PERSON * team_size.max(1) as f64,
            }
        }
    }
}

/// Clamp a user-entered team size into the supported range.
pub fn clamp_team_size(requested: i64) -> u32 {
    requested.clamp(MIN_TEAM_SIZE as i64, MAX_TEAM_SIZE as i64) as u32
}

/// Cap that applies once the team size is confirmed.
pub fn team_hours_cap(team_size: u32) -> f64 {
    team_size as f64 * MAX_HOURS_PER_PERSON
}
