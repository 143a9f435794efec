//! Attendance eligibility and exam pass/fail rules for PG, UG and Diploma tiers.
//!
//! The evaluators in [`attendance`] and [`marks`] are pure functions over a
//! [`Tier`]. [`EligibilityEngine`] is the entry point for raw tier tokens: it
//! resolves the tier, runs the validation stage, and applies the configured
//! marks mode.

pub mod attendance;
pub mod catalog;
mod config;
mod error;
pub mod marks;
pub mod percentage;
pub mod router;
pub mod tier;
pub mod validation;

#[cfg(test)]
mod tests;

pub use attendance::{AttendanceInput, AttendanceVerdict, ExamGate, GateCheck};
pub use catalog::{published_samples, rules_catalog, rules_table, TierRulesView};
pub use config::{EvaluationConfig, MarksMode};
pub use error::EligibilityError;
pub use marks::{MarkComponent, MarksInput, MarksShortfall, MarksVerdict};
pub use percentage::{attendance_percentage, marks_total};
pub use router::eligibility_router;
pub use tier::{lookup, Tier, TierRules};
pub use validation::{validate_attendance, validate_marks, ValidationErrors, ValidationIssue};

use tracing::debug;

/// Stateless facade that applies an [`EvaluationConfig`] to raw requests.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    config: EvaluationConfig,
}

impl EligibilityEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn check_attendance(
        &self,
        tier_id: &str,
        input: &AttendanceInput,
    ) -> Result<AttendanceVerdict, EligibilityError> {
        let tier: Tier = tier_id.parse()?;
        if self.config.validate_inputs {
            validate_attendance(input)?;
        }

        let verdict = attendance::evaluate(input, tier);
        debug!(
            tier = tier.id(),
            percentage = verdict.percentage,
            eligible = verdict.eligible,
            "attendance evaluated"
        );
        Ok(verdict)
    }

    pub fn check_marks(
        &self,
        tier_id: &str,
        input: &MarksInput,
    ) -> Result<MarksVerdict, EligibilityError> {
        let tier: Tier = tier_id.parse()?;
        if self.config.validate_inputs {
            validate_marks(input)?;
        }

        let verdict = marks::evaluate_with_mode(input, tier, self.config.marks_mode);
        debug!(
            tier = tier.id(),
            mode = self.config.marks_mode.label(),
            total = verdict.total,
            passed = verdict.passed,
            "marks evaluated"
        );
        Ok(verdict)
    }
}
