use campus_eligibility::config::AppConfig;
use campus_eligibility::error::AppError;
use campus_eligibility::rules::{
    rules_catalog, rules_table, AttendanceInput, AttendanceVerdict, EligibilityEngine, MarksInput,
    MarksMode, MarksVerdict, Tier, TierRulesView,
};
use clap::Args;
use std::fmt;

#[derive(Args, Debug)]
pub(crate) struct AttendanceArgs {
    /// Academic tier: pg, ug or diploma
    #[arg(long)]
    pub(crate) tier: String,
    /// Classes attended so far
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) attended: i64,
    /// Classes held so far
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) total: i64,
}

#[derive(Args, Debug)]
pub(crate) struct MarksArgs {
    /// Academic tier: pg, ug or diploma
    #[arg(long)]
    pub(crate) tier: String,
    /// Continuous evaluation marks (out of 30)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) ce: i64,
    /// Faculty marks (out of 10)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) faculty: i64,
    /// End-semester exam marks (out of 60)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) ese: i64,
    /// Require the CE and ESE minimums in addition to the total
    #[arg(long)]
    pub(crate) strict: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RulesArgs {
    /// Only print the table for this tier
    #[arg(long)]
    pub(crate) tier: Option<String>,
}

fn engine(strict: bool) -> Result<EligibilityEngine, AppError> {
    let mut evaluation = AppConfig::load()?.evaluation;
    if strict {
        evaluation.marks_mode = MarksMode::Strict;
    }
    Ok(EligibilityEngine::new(evaluation))
}

pub(crate) fn run_attendance_check(args: AttendanceArgs) -> Result<(), AppError> {
    let input = AttendanceInput::new(args.attended, args.total);
    let verdict = engine(false)?.check_attendance(&args.tier, &input)?;
    print!("{}", AttendanceReport(&verdict));
    Ok(())
}

pub(crate) fn run_marks_check(args: MarksArgs) -> Result<(), AppError> {
    let input = MarksInput::new(args.ce, args.faculty, args.ese);
    let verdict = engine(args.strict)?.check_marks(&args.tier, &input)?;
    print!("{}", MarksReport(&verdict));
    Ok(())
}

pub(crate) fn run_rules(args: RulesArgs) -> Result<(), AppError> {
    let views = match args.tier {
        Some(tier) => vec![rules_table(tier.parse::<Tier>()?)],
        None => rules_catalog(),
    };

    for (index, view) in views.iter().enumerate() {
        if index > 0 {
            println!();
        }
        print!("{}", RulesReport(view));
    }
    Ok(())
}

fn outcome_label(outcome: bool, positive: &'static str, negative: &'static str) -> &'static str {
    if outcome {
        positive
    } else {
        negative
    }
}

/// Plain-text summary of an attendance verdict.
pub(crate) struct AttendanceReport<'a>(pub(crate) &'a AttendanceVerdict);

impl fmt::Display for AttendanceReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = self.0;
        writeln!(f, "Attendance check ({})", verdict.tier.label())?;
        writeln!(
            f,
            "Attended {} of {} classes ({}%)",
            verdict.attended_classes, verdict.total_classes, verdict.percentage
        )?;

        writeln!(f, "\nExam gates")?;
        for gate in &verdict.gates {
            writeln!(
                f,
                "- {}: minimum {}%, {}",
                gate.gate_label,
                gate.minimum_pct,
                outcome_label(gate.eligible, "eligible", "not eligible")
            )?;
        }

        writeln!(
            f,
            "\nResult: {}",
            outcome_label(verdict.eligible, "ELIGIBLE", "NOT ELIGIBLE")
        )?;
        writeln!(f, "{}", verdict.reason)
    }
}

/// Plain-text summary of a marks verdict.
pub(crate) struct MarksReport<'a>(pub(crate) &'a MarksVerdict);

impl fmt::Display for MarksReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = self.0;
        let rules = verdict.tier.rules();
        writeln!(
            f,
            "Marks check ({}, {} mode)",
            verdict.tier.label(),
            verdict.mode.label()
        )?;
        writeln!(
            f,
            "- CE: {}/30 (minimum {}, {})",
            verdict.ce,
            rules.ce_min_marks,
            outcome_label(verdict.ce_met, "met", "not met")
        )?;
        writeln!(f, "- Faculty: {}/10", verdict.faculty)?;
        writeln!(
            f,
            "- ESE: {}/60 (minimum {}, {})",
            verdict.ese,
            rules.ese_min_marks,
            outcome_label(verdict.ese_met, "met", "not met")
        )?;
        writeln!(
            f,
            "- Total: {}/100 (minimum {}, {})",
            verdict.total,
            rules.total_min_marks,
            outcome_label(verdict.total_met, "met", "not met")
        )?;

        writeln!(
            f,
            "\nResult: {}",
            outcome_label(verdict.passed, "PASS", "FAIL")
        )?;
        writeln!(f, "{}", verdict.reason)
    }
}

/// Printable rule table with its worked samples.
pub(crate) struct RulesReport<'a>(pub(crate) &'a TierRulesView);

impl fmt::Display for RulesReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "{} ({})", view.label, view.tier)?;

        writeln!(f, "\nAttendance requirements")?;
        for row in &view.attendance {
            writeln!(
                f,
                "- {}: {}% (grace period {}%)",
                row.gate_label, row.minimum_pct, row.grace_period_pct
            )?;
        }

        writeln!(f, "\nPassing marks ({}% overall)", view.passing_pct)?;
        for row in &view.marks {
            writeln!(
                f,
                "- {}: {}/{} ({}%)",
                row.component_label, row.minimum_marks, row.maximum_marks, row.minimum_pct
            )?;
        }

        writeln!(f, "\nWorked samples")?;
        for sample in view.samples.attendance {
            writeln!(
                f,
                "- attendance {}/{}: {}",
                sample.attended_classes,
                sample.total_classes,
                outcome_label(sample.eligible, "ELIGIBLE", "NOT ELIGIBLE")
            )?;
        }
        for sample in view.samples.marks {
            writeln!(
                f,
                "- marks CE {} + faculty {} + ESE {}: {}",
                sample.ce,
                sample.faculty,
                sample.ese,
                outcome_label(sample.passed, "PASS", "FAIL")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_eligibility::rules::{attendance, marks};

    #[test]
    fn attendance_rendering_lists_each_gate() {
        let verdict = attendance::evaluate(&AttendanceInput::new(70, 100), Tier::Pg);

        let rendered = AttendanceReport(&verdict).to_string();

        assert!(rendered.contains("Attended 70 of 100 classes (70%)"));
        assert!(rendered.contains("- 2nd Internal: minimum 70%, eligible"));
        assert!(rendered.contains("- External Exam: minimum 75%, not eligible"));
        assert!(rendered.contains("Result: NOT ELIGIBLE"));
    }

    #[test]
    fn marks_rendering_shows_component_status() {
        let verdict = marks::evaluate(&MarksInput::new(13, 9, 30), Tier::Pg);

        let rendered = MarksReport(&verdict).to_string();

        assert!(rendered.contains("lenient mode"));
        assert!(rendered.contains("- CE: 13/30 (minimum 15, not met)"));
        assert!(rendered.contains("Result: PASS"));
    }

    #[test]
    fn rules_rendering_includes_samples() {
        let view = rules_table(Tier::Diploma);

        let rendered = RulesReport(&view).to_string();

        assert!(rendered.starts_with("Diploma (diploma)"));
        assert!(rendered.contains("- External Exam: 65% (grace period 15%)"));
        assert!(rendered.contains("- CE: 11/30 (35%)"));
        assert!(rendered.contains("- Total: 35/100 (35%)"));
        assert!(rendered.contains("- marks CE 9 + faculty 6 + ESE 19: FAIL"));
    }

    struct RejectingWriter;

    impl fmt::Write for RejectingWriter {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn reports_surface_writer_failures() {
        use std::fmt::Write as _;

        let verdict = attendance::evaluate(&AttendanceInput::new(80, 100), Tier::Ug);
        let view = rules_table(Tier::Pg);

        assert!(write!(RejectingWriter, "{}", AttendanceReport(&verdict)).is_err());
        assert!(write!(RejectingWriter, "{}", RulesReport(&view)).is_err());
    }
}
