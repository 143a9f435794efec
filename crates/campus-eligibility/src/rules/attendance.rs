use serde::{Deserialize, Serialize};

use super::percentage::attendance_percentage;
use super::tier::{Tier, TierRules};

pub const ELIGIBLE_MESSAGE: &str = "Congratulations! You are eligible for all exams 🎉";

/// Class counts as reported by the caller. Not range checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceInput {
    pub attended_classes: i64,
    pub total_classes: i64,
}

impl AttendanceInput {
    pub fn new(attended_classes: i64, total_classes: i64) -> Self {
        Self {
            attended_classes,
            total_classes,
        }
    }

    pub fn percentage(&self) -> i64 {
        attendance_percentage(self.attended_classes, self.total_classes)
    }
}

/// Exam milestone gated by a minimum attendance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamGate {
    FirstInternal,
    SecondInternal,
    External,
}

impl ExamGate {
    pub const fn ordered() -> [Self; 3] {
        [Self::FirstInternal, Self::SecondInternal, Self::External]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstInternal => "1st Internal",
            Self::SecondInternal => "2nd Internal",
            Self::External => "External Exam",
        }
    }

    pub const fn minimum_pct(self, rules: &TierRules) -> u8 {
        match self {
            Self::FirstInternal => rules.first_internal_min_pct,
            Self::SecondInternal => rules.second_internal_min_pct,
            Self::External => rules.external_min_pct,
        }
    }
}

/// Outcome of one exam gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateCheck {
    pub gate: ExamGate,
    pub gate_label: &'static str,
    pub minimum_pct: u8,
    pub eligible: bool,
}

impl GateCheck {
    /// Rendered as `<Gate name> (<pct>% < <threshold>%)` in ineligible reasons.
    pub fn shortfall(&self, percentage: i64) -> Option<String> {
        if self.eligible {
            None
        } else {
            Some(format!(
                "{} ({}% < {}%)",
                self.gate_label, percentage, self.minimum_pct
            ))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceVerdict {
    pub tier: Tier,
    pub attended_classes: i64,
    pub total_classes: i64,
    pub percentage: i64,
    pub eligible: bool,
    pub first_internal_eligible: bool,
    pub second_internal_eligible: bool,
    pub external_eligible: bool,
    pub gates: Vec<GateCheck>,
    pub reason: String,
}

/// Evaluate every exam gate for the tier. Overall eligibility is the external
/// gate alone; the lower gates are reported for the breakdown.
pub fn evaluate(attendance: &AttendanceInput, tier: Tier) -> AttendanceVerdict {
    let rules = tier.rules();
    let percentage = attendance.percentage();

    let gates: Vec<GateCheck> = ExamGate::ordered()
        .into_iter()
        .map(|gate| {
            let minimum_pct = gate.minimum_pct(rules);
            GateCheck {
                gate,
                gate_label: gate.label(),
                minimum_pct,
                eligible: percentage >= i64::from(minimum_pct),
            }
        })
        .collect();

    let passed = |gate: ExamGate| {
        gates
            .iter()
            .any(|check| check.gate == gate && check.eligible)
    };
    let first_internal_eligible = passed(ExamGate::FirstInternal);
    let second_internal_eligible = passed(ExamGate::SecondInternal);
    let external_eligible = passed(ExamGate::External);
    let eligible = external_eligible;

    let reason = if eligible {
        ELIGIBLE_MESSAGE.to_string()
    } else {
        let failures: Vec<String> = gates
            .iter()
            .filter_map(|check| check.shortfall(percentage))
            .collect();
        format!("You are not eligible because: {}", failures.join(", "))
    };

    AttendanceVerdict {
        tier,
        attended_classes: attendance.attended_classes,
        total_classes: attendance.total_classes,
        percentage,
        eligible,
        first_internal_eligible,
        second_internal_eligible,
        external_eligible,
        gates,
        reason,
    }
}
