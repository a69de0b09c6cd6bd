use std::fmt;

use crate::record::Orientation;

const TITLE: &str = "Diffusivity Catalog Validation Report";

/// How serious a check outcome is, ordered from harmless to fatal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Data is usable as is
    Pass,
    /// Data is usable but unusual
    Warning,
    /// Data cannot be used
    Failure,
}

impl Severity {
    fn glyph(self) -> &'static str {
        match self {
            Severity::Pass => "✓",
            Severity::Warning => "⚠",
            Severity::Failure => "✗",
        }
    }

    #[cfg(feature = "colorized_output")]
    fn fallback(self) -> &'static str {
        match self {
            Severity::Pass => "[OK]",
            Severity::Warning => "[WARN]",
            Severity::Failure => "[FAIL]",
        }
    }
}

/// Result of one check on one record, optionally narrowed to one axis
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationCheck {
    /// Catalog id or file stem of the record
    pub record: String,
    /// Axis the check looked at; `None` for record-wide checks
    pub orientation: Option<Orientation>,
    /// What was checked, e.g. "series aligned" or "Arrhenius fit"
    pub check: &'static str,
    /// Outcome severity
    pub severity: Severity,
    /// Explanation for warnings and failures
    pub message: Option<String>,
}

/// Record and axis under inspection; hands out checks already labelled with both
#[derive(Debug, Clone, Copy)]
pub(crate) struct CheckScope<'a> {
    record: &'a str,
    orientation: Option<Orientation>,
}

impl<'a> CheckScope<'a> {
    pub(crate) fn record(record: &'a str) -> Self {
        Self {
            record,
            orientation: None,
        }
    }

    pub(crate) fn axis(record: &'a str, orientation: Orientation) -> Self {
        Self {
            record,
            orientation: Some(orientation),
        }
    }

    fn check(
        self,
        check: &'static str,
        severity: Severity,
        message: Option<String>,
    ) -> ValidationCheck {
        ValidationCheck {
            record: self.record.to_string(),
            orientation: self.orientation,
            check,
            severity,
            message,
        }
    }

    pub(crate) fn pass(self, check: &'static str) -> ValidationCheck {
        self.check(check, Severity::Pass, None)
    }

    pub(crate) fn warn(self, check: &'static str, message: impl Into<String>) -> ValidationCheck {
        self.check(check, Severity::Warning, Some(message.into()))
    }

    pub(crate) fn fail(self, check: &'static str, message: impl Into<String>) -> ValidationCheck {
        self.check(check, Severity::Failure, Some(message.into()))
    }
}

/// Checks of a single record, in the order they ran
#[derive(Debug)]
pub struct RecordChecks<'a> {
    /// Record id
    pub id: &'a str,
    /// Every check run on the record
    pub checks: Vec<&'a ValidationCheck>,
}

impl RecordChecks<'_> {
    /// Most serious outcome among the record's checks
    pub fn worst(&self) -> Severity {
        self.checks
            .iter()
            .map(|c| c.severity)
            .max()
            .unwrap_or(Severity::Pass)
    }

    /// Number of checks with the given outcome
    pub fn count(&self, severity: Severity) -> usize {
        self.checks.iter().filter(|c| c.severity == severity).count()
    }

    /// Orientations that produced a warning or failure
    pub fn problem_axes(&self) -> Vec<Orientation> {
        let mut axes: Vec<Orientation> = self
            .checks
            .iter()
            .filter(|c| c.severity != Severity::Pass)
            .filter_map(|c| c.orientation)
            .collect();
        axes.sort();
        axes.dedup();
        axes
    }
}

/// Validation results for the built-in catalog or a record file
#[derive(Debug)]
pub struct ValidationReport {
    /// What was validated: the built-in catalog or a record file path
    pub source: String,
    /// Every check, grouped by record in insertion order
    pub checks: Vec<ValidationCheck>,
}

impl ValidationReport {
    /// Create an empty report for the given source
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            checks: Vec::new(),
        }
    }

    /// Add a check result
    pub fn add_check(&mut self, check: ValidationCheck) {
        self.checks.push(check);
    }

    /// Append the checks of a per-record report
    pub fn merge(&mut self, other: ValidationReport) {
        self.checks.extend(other.checks);
    }

    /// Checks grouped by record, records in first-seen order
    pub fn records(&self) -> Vec<RecordChecks<'_>> {
        let mut records: Vec<RecordChecks<'_>> = Vec::new();
        for check in &self.checks {
            match records.iter_mut().find(|r| r.id == check.record) {
                Some(record) => record.checks.push(check),
                None => records.push(RecordChecks {
                    id: &check.record,
                    checks: vec![check],
                }),
            }
        }
        records
    }

    /// Checks of one orientation of one record
    pub fn axis_checks<'a>(
        &'a self,
        record: &'a str,
        orientation: Orientation,
    ) -> impl Iterator<Item = &'a ValidationCheck> + 'a {
        self.checks
            .iter()
            .filter(move |c| c.record == record && c.orientation == Some(orientation))
    }

    /// Checks that failed
    pub fn failures(&self) -> impl Iterator<Item = &ValidationCheck> + '_ {
        self.checks.iter().filter(|c| c.severity == Severity::Failure)
    }

    /// True when any check failed
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Number of checks with the given outcome
    pub fn count(&self, severity: Severity) -> usize {
        self.checks.iter().filter(|c| c.severity == severity).count()
    }

    /// Most serious outcome in the report
    pub fn worst(&self) -> Severity {
        self.checks
            .iter()
            .map(|c| c.severity)
            .max()
            .unwrap_or(Severity::Pass)
    }

    /// Format the report with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        struct Colored<'a>(&'a ValidationReport);

        impl fmt::Display for Colored<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.render(f, true)
            }
        }

        Colored(self).to_string()
    }

    /// One line per record; only warnings and failures are expanded, by axis
    fn render(&self, f: &mut fmt::Formatter<'_>, colored: bool) -> fmt::Result {
        writeln!(f, "{}", paint(TITLE, Tone::Heading, colored))?;
        writeln!(f, "{}", paint("=".repeat(TITLE.len()), Tone::Heading, colored))?;
        writeln!(f, "{}: {}", paint("Source", Tone::Label, colored), self.source)?;
        writeln!(f)?;

        let records = self.records();
        for record in &records {
            let worst = record.worst();
            writeln!(
                f,
                "{} {}: {}/{} checks passed",
                symbol(worst, colored),
                paint(record.id, Tone::Of(worst), colored),
                record.count(Severity::Pass),
                record.checks.len()
            )?;

            for check in record.checks.iter().filter(|c| c.severity != Severity::Pass) {
                let axis = check
                    .orientation
                    .map(|o| format!("[{}] ", o))
                    .unwrap_or_default();
                writeln!(
                    f,
                    "    {} {}{}: {}",
                    symbol(check.severity, colored),
                    axis,
                    check.check,
                    check.message.as_deref().unwrap_or_default()
                )?;
            }
        }

        let tally = |severity| records.iter().filter(|r| r.worst() == severity).count();
        writeln!(f)?;
        writeln!(
            f,
            "{}: {} clean, {} with warnings, {} failing",
            paint("Records", Tone::Label, colored),
            paint(tally(Severity::Pass), Tone::Of(Severity::Pass), colored),
            paint(tally(Severity::Warning), Tone::Of(Severity::Warning), colored),
            paint(tally(Severity::Failure), Tone::Of(Severity::Failure), colored)
        )?;
        writeln!(
            f,
            "{}: {} passed, {} warnings, {} failed",
            paint("Checks", Tone::Label, colored),
            self.count(Severity::Pass),
            self.count(Severity::Warning),
            self.count(Severity::Failure)
        )?;

        writeln!(f)?;
        let verdict = match self.worst() {
            Severity::Pass => "Validation PASSED",
            Severity::Warning => "Validation PASSED with warnings",
            Severity::Failure => "Validation FAILED",
        };
        writeln!(f, "{}", paint(verdict, Tone::Verdict(self.worst()), colored))
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, false)
    }
}

#[derive(Clone, Copy)]
enum Tone {
    Heading,
    Label,
    Of(Severity),
    Verdict(Severity),
}

fn paint(text: impl fmt::Display, tone: Tone, colored: bool) -> String {
    #[cfg(feature = "colorized_output")]
    if colored {
        let styled = console::style(text.to_string());
        let styled = match tone {
            Tone::Heading => styled.bold().cyan(),
            Tone::Label => styled.bold(),
            Tone::Of(Severity::Pass) => styled.green(),
            Tone::Of(Severity::Warning) => styled.yellow(),
            Tone::Of(Severity::Failure) => styled.red(),
            Tone::Verdict(Severity::Pass) => styled.green().bold(),
            Tone::Verdict(Severity::Warning) => styled.yellow().bold(),
            Tone::Verdict(Severity::Failure) => styled.red().bold(),
        };
        return styled.to_string();
    }

    #[cfg(not(feature = "colorized_output"))]
    let _ = (tone, colored);

    text.to_string()
}

fn symbol(severity: Severity, colored: bool) -> String {
    #[cfg(feature = "colorized_output")]
    if colored {
        let emoji = console::Emoji(severity.glyph(), severity.fallback());
        return paint(emoji, Tone::Of(severity), true);
    }

    let _ = colored;
    severity.glyph().to_string()
}
