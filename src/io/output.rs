use crate::config::DisplayConfig;
use crate::core::{CalculationMode, CalculatorInput, ValidationResult};
use crate::engine::bounds::{HOURS_PER_DAY, WORKING_DAYS_PER_MONTH};
use crate::engine::estimate::{IMPLEMENTATION_COST_FACTOR, REALISTIC_CAP_RATIO};
use crate::engine::{bounds::team_hours_cap, CalculatorOutput};
use crate::formatting::currency::{format_compact_inr, format_count, format_inr, needs_exact_amount};
use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use crate::session::Calculator;
use chrono::{DateTime, Utc};
use comfy_table::{presets, Table};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub tool_version: String,
    pub generated_at: DateTime<Utc>,
}

impl ReportMetadata {
    pub fn now() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
        }
    }
}

/// Everything a writer renders: the inputs and the evaluated output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorReport {
    pub metadata: ReportMetadata,
    pub mode: CalculationMode,
    pub input: CalculatorInput,
    pub output: CalculatorOutput,
}

impl CalculatorReport {
    pub fn new(mode: CalculationMode, input: CalculatorInput, output: CalculatorOutput) -> Self {
        Self {
            metadata: ReportMetadata::now(),
            mode,
            input,
            output,
        }
    }

    pub fn from_calculator(calculator: &Calculator) -> Self {
        Self::new(calculator.mode(), *calculator.input(), calculator.output())
    }

    fn has_both_inputs(&self) -> bool {
        self.input.monthly_cost > 0.0 && self.input.hours_automated_per_month > 0.0
    }

    fn hours_limit_label(&self) -> String {
        match self.mode {
            CalculationMode::Team if self.input.team_size_explicitly_set => {
                format!("Max {}h", team_hours_cap(self.input.team_size))
            }
            CalculationMode::Team => "Flexible hours".to_string(),
            CalculationMode::Individual => format!("Max {}h", self.output.bounds.max_hours),
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &CalculatorReport) -> anyhow::Result<()>;
}

pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    formatting: FormattingConfig,
    display: DisplayConfig,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer, display)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(
            writer,
            Box::new(ColoredFormatter::new(formatting)),
            !formatting.emoji.should_use_emoji(),
            display,
        )),
    }
}

fn amount(value: f64, compact: bool) -> String {
    if compact {
        format_compact_inr(value)
    } else {
        format_inr(value)
    }
}

fn calculation_details(efficiency_percent: u32) -> Vec<String> {
    vec![
        format!(
            "Efficiency factor: {}% (based on complexity)",
            efficiency_percent
        ),
        format!(
            "Implementation costs: {:.0}% deducted for setup & maintenance",
            (1.0 - IMPLEMENTATION_COST_FACTOR) * 100.0
        ),
        format!(
            "Realistic cap: {:.0}% of total role cost maximum",
            REALISTIC_CAP_RATIO * 100.0
        ),
        format!(
            "Working days: {} days/month, {} hours/day",
            WORKING_DAYS_PER_MONTH, HOURS_PER_DAY
        ),
    ]
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    display: DisplayConfig,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, display: DisplayConfig) -> Self {
        Self { writer, display }
    }

    fn write_header(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Automation ROI Estimate")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Mode: {}", report.mode.label())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_inputs(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Inputs")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Input | Value | Limit | Status |")?;
        writeln!(self.writer, "|-------|-------|-------|--------|")?;
        writeln!(
            self.writer,
            "| {} | {} | Min {} | {} |",
            report.mode.cost_label(),
            format_inr(report.input.monthly_cost),
            format_inr(report.output.bounds.min_cost),
            markdown_status(&report.output.validation.cost)
        )?;
        if report.mode == CalculationMode::Team {
            writeln!(
                self.writer,
                "| Team size | {} people | 2-50 | {} |",
                report.input.team_size,
                if report.input.team_size_explicitly_set {
                    "confirmed"
                } else {
                    "default"
                }
            )?;
        }
        writeln!(
            self.writer,
            "| Hours Automated / Month | {} | {} | {} |",
            format_count(report.input.hours_automated_per_month),
            report.hours_limit_label(),
            markdown_status(&report.output.validation.hours)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_results(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        let estimate = &report.output.estimate;
        let compact = self.display.compact_amounts;

        writeln!(self.writer, "## Estimated Annual Savings")?;
        writeln!(self.writer)?;
        if report.has_both_inputs() {
            writeln!(self.writer, "| Projection | Annual Savings |")?;
            writeln!(self.writer, "|------------|----------------|")?;
            writeln!(
                self.writer,
                "| Basic Calculation | {} |",
                amount(estimate.gross_annual, compact)
            )?;
            writeln!(
                self.writer,
                "| Realistic Projection | {} |",
                amount(estimate.adjusted_annual, compact)
            )?;
            writeln!(self.writer)?;
        }

        writeln!(
            self.writer,
            "**{}**",
            amount(estimate.adjusted_annual, compact)
        )?;
        if compact && needs_exact_amount(estimate.adjusted_annual) {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "({} exact)",
                format_inr(estimate.adjusted_annual)
            )?;
        }
        if estimate.adjusted_annual > 0.0 {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "Confidence: {}/5",
                estimate.confidence_score
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_call_to_action(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        let cta = &report.output.cta;
        writeln!(self.writer, "## Next Step")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", cta.title)?;
        writeln!(self.writer)?;
        if report.output.cta_enabled {
            writeln!(self.writer, "> **{}**", cta.button_text)?;
        } else {
            writeln!(self.writer, "> ~~{}~~", cta.button_text)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_details(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        if !self.display.show_details || report.output.estimate.adjusted_annual <= 0.0 {
            return Ok(());
        }
        writeln!(self.writer, "## Calculation Details")?;
        writeln!(self.writer)?;
        for line in calculation_details(report.output.metrics.efficiency_percent) {
            writeln!(self.writer, "- {}", line)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn markdown_status(validation: &ValidationResult) -> String {
    if validation.show {
        format!("{}: {}", validation.level, validation.message)
    } else {
        "-".to_string()
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_inputs(report)?;
        self.write_results(report)?;
        self.write_call_to_action(report)?;
        self.write_details(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
    ascii: bool,
    display: DisplayConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(
        writer: W,
        formatter: Box<dyn OutputFormatter>,
        ascii: bool,
        display: DisplayConfig,
    ) -> Self {
        Self {
            writer,
            formatter,
            ascii,
            display,
        }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        if self.ascii {
            table.load_preset(presets::ASCII_FULL);
        } else {
            table.load_preset(presets::UTF8_FULL);
        }
        table
    }

    fn write_inputs(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        let mut table = self.table();
        table.set_header(vec!["Input", "Value", "Limit"]);
        table.add_row(vec![
            report.mode.cost_label().to_string(),
            format_inr(report.input.monthly_cost),
            format!("Min {}", format_inr(report.output.bounds.min_cost)),
        ]);
        if report.mode == CalculationMode::Team {
            let status = if report.input.team_size_explicitly_set {
                "confirmed"
            } else {
                "default, not confirmed"
            };
            table.add_row(vec![
                "Team size".to_string(),
                format!("{} people", report.input.team_size),
                status.to_string(),
            ]);
        }
        table.add_row(vec![
            "Hours Automated / Month".to_string(),
            format_count(report.input.hours_automated_per_month),
            report.hours_limit_label(),
        ]);
        writeln!(self.writer, "{}", table)?;

        for validation in [&report.output.validation.cost, &report.output.validation.hours] {
            if validation.show {
                writeln!(
                    self.writer,
                    "  {} {}",
                    self.formatter.level_marker(validation.level),
                    self.formatter.level(validation.level, &validation.message)
                )?;
            }
        }
        Ok(())
    }

    fn write_secondary_figures(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        let metrics = &report.output.metrics;
        if report.input.monthly_cost > 0.0 {
            let line = match metrics.per_person_cost {
                Some(per_person) => {
                    format!("Average per person: {}/month", format_inr(per_person))
                }
                None => format!("Hourly rate: {}", format_inr(metrics.hourly_rate)),
            };
            writeln!(self.writer, "  {}", self.formatter.dim(&line))?;
        }
        if report.input.hours_automated_per_month > 0.0 {
            let line = format!(
                "Automation coverage: {:.1}% of work time",
                metrics.automation_coverage_percent
            );
            writeln!(self.writer, "  {}", self.formatter.dim(&line))?;
        }
        Ok(())
    }

    fn write_results(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        let estimate = &report.output.estimate;
        let compact = self.display.compact_amounts;

        writeln!(self.writer)?;
        if report.has_both_inputs() {
            let mut table = self.table();
            table.set_header(vec!["Basic Calculation", "Realistic Projection"]);
            table.add_row(vec![
                format!("{} annually", amount(estimate.gross_annual, compact)),
                format!("{} annually", amount(estimate.adjusted_annual, compact)),
            ]);
            writeln!(self.writer, "{}", table)?;
        }

        let headline = amount(estimate.adjusted_annual, compact);
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.header("Estimated Annual Savings:"),
            self.formatter.highlight(&headline)
        )?;
        if compact && needs_exact_amount(estimate.adjusted_annual) {
            writeln!(
                self.writer,
                "  {}",
                self.formatter
                    .dim(&format!("({} exact)", format_inr(estimate.adjusted_annual)))
            )?;
        }
        if estimate.is_adjusted() {
            writeln!(
                self.writer,
                "  (Adjusted for efficiency: {}% & implementation costs)",
                report.output.metrics.efficiency_percent
            )?;
        }
        if estimate.adjusted_annual > 0.0 {
            writeln!(
                self.writer,
                "  Confidence: {} ({}/5)",
                self.formatter.confidence(estimate.confidence_score),
                estimate.confidence_score
            )?;
        }
        Ok(())
    }

    fn write_call_to_action(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        let cta = &report.output.cta;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.formatter.header(&cta.title))?;
        let button = format!("[ {} ]", cta.button_text);
        if report.output.cta_enabled {
            writeln!(self.writer, "  {}", self.formatter.highlight(&button))?;
        } else {
            writeln!(self.writer, "  {}", self.formatter.dim(&button))?;
        }
        Ok(())
    }

    fn write_details(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        if !self.display.show_details || report.output.estimate.adjusted_annual <= 0.0 {
            return Ok(());
        }
        let bullet = if self.ascii { "-" } else { "•" };
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.formatter.header("Calculation Details:"))?;
        for line in calculation_details(report.output.metrics.efficiency_percent) {
            writeln!(self.writer, "  {} {}", bullet, line)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            self.formatter
                .header(&format!("ROI Estimate: {}", report.mode.label()))
        )?;
        self.write_inputs(report)?;
        self.write_secondary_figures(report)?;
        self.write_results(report)?;
        self.write_call_to_action(report)?;
        self.write_details(report)?;
        self.writer.flush()?;
        Ok(())
    }
}
