use crate::core::CalculationMode;
use crate::engine::bounds::{clamp_team_size, compute_bounds};
use crate::formatting::currency::{format_count, format_inr};
use anyhow::Result;
use comfy_table::{presets, Table};

/// Bound table rows: individual, unconfirmed team, confirmed team.
pub fn bounds_table(team_size: i64) -> Table {
    let team_size = clamp_team_size(team_size);
    let rows = [
        ("Individual".to_string(), compute_bounds(CalculationMode::Individual, 1, false)),
        (
            "Team, size not set".to_string(),
            compute_bounds(CalculationMode::Team, CalculationMode::Team.default_team_size(), false),
        ),
        (
            format!("Team, size set ({})", team_size),
            compute_bounds(CalculationMode::Team, team_size, true),
        ),
    ];

    let mut table = Table::new();
    table.load_preset(presets::ASCII_MARKDOWN);
    table.set_header(vec![
        "Mode",
        "Min cost",
        "Min hours",
        "Max hours",
        "Total working hours",
    ]);
    for (label, bounds) in rows {
        table.add_row(vec![
            label,
            format_inr(bounds.min_cost),
            format_count(bounds.min_hours),
            format_count(bounds.max_hours),
            format_count(bounds.total_working_hours),
        ]);
    }
    table
}

pub fn handle_bounds(team_size: i64) -> Result<()> {
    println!("{}", bounds_table(team_size));
    Ok(())
}
