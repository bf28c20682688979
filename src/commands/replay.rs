use super::{emit_report, ReportSettings};
use crate::errors::{Error, Result as RoiResult};
use crate::io::{read_file, CalculatorReport};
use crate::session::{Calculator, CalculatorEvent};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A recorded sequence of calculator events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplayScript {
    pub events: Vec<CalculatorEvent>,
}

impl ReplayScript {
    /// Run every event through a fresh session.
    pub fn run(&self) -> Calculator {
        let mut calculator = Calculator::new();
        for (index, event) in self.events.iter().enumerate() {
            debug!(index, ?event, "Applying event");
            calculator.apply(event);
        }
        calculator
    }
}

/// Parse a script; JSON when the extension says so, TOML otherwise.
pub fn parse_script(path: &Path, contents: &str) -> RoiResult<ReplayScript> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str::<ReplayScript>(contents).map_err(|e| e.to_string())
    } else {
        toml::from_str::<ReplayScript>(contents).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| Error::Script {
        path: path.to_path_buf(),
        message,
    })
}

pub fn load_script(path: &Path) -> RoiResult<ReplayScript> {
    let contents = read_file(path)?;
    parse_script(path, &contents)
}

#[derive(Debug, Clone)]
pub struct ReplayConfig {
    pub script: PathBuf,
    pub settings: ReportSettings,
}

pub fn handle_replay(config: ReplayConfig) -> Result<()> {
    let script = load_script(&config.script)?;
    let calculator = script.run();
    let report = CalculatorReport::from_calculator(&calculator);
    emit_report(&report, &config.settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalculationMode;
    use indoc::indoc;

    #[test]
    fn test_parse_toml_script() {
        let script = parse_script(
            Path::new("scenario.toml"),
            indoc! {r#"
                [[events]]
                kind = "set_mode"
                mode = "team"

                [[events]]
                kind = "set_monthly_cost"
                value = 500000.0

                [[events]]
                kind = "set_team_size"
                value = 8
            "#},
        )
        .unwrap();
        assert_eq!(script.events.len(), 3);

        let calculator = script.run();
        assert_eq!(calculator.mode(), CalculationMode::Team);
        assert_eq!(calculator.input().monthly_cost, 800_000.0);
    }

    #[test]
    fn test_parse_json_script() {
        let script = parse_script(
            Path::new("scenario.JSON"),
            r#"{"events": [{"kind": "set_hours", "value": 40}]}"#,
        )
        .unwrap();
        assert_eq!(
            script.events,
            vec![CalculatorEvent::SetHours { value: 40.0 }]
        );
    }

    #[test]
    fn test_unknown_event_kind_is_script_error() {
        let err = parse_script(
            Path::new("bad.toml"),
            "[[events]]\nkind = \"submit_lead\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::Script { .. }));
    }

    #[test]
    fn test_empty_script_yields_fresh_calculator() {
        let script = ReplayScript { events: vec![] };
        assert_eq!(script.run(), Calculator::new());
    }
}
