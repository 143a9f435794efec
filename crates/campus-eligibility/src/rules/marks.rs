use serde::{Deserialize, Serialize};

use super::config::MarksMode;
use super::percentage::marks_total;
use super::tier::{Tier, TierRules};

/// Component marks: CE out of 30, faculty out of 10, ESE out of 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarksInput {
    pub ce: i64,
    pub faculty: i64,
    pub ese: i64,
}

impl MarksInput {
    pub fn new(ce: i64, faculty: i64, ese: i64) -> Self {
        Self { ce, faculty, ese }
    }

    pub fn total(&self) -> i64 {
        marks_total(self.ce, self.faculty, self.ese)
    }

    pub fn component(&self, component: MarkComponent) -> i64 {
        match component {
            MarkComponent::Ce => self.ce,
            MarkComponent::Faculty => self.faculty,
            MarkComponent::Ese => self.ese,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkComponent {
    Ce,
    Faculty,
    Ese,
}

impl MarkComponent {
    pub const fn ordered() -> [Self; 3] {
        [Self::Ce, Self::Faculty, Self::Ese]
    }

    pub const fn field(self) -> &'static str {
        match self {
            Self::Ce => "ce",
            Self::Faculty => "faculty",
            Self::Ese => "ese",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ce => "CE",
            Self::Faculty => "Faculty",
            Self::Ese => "ESE",
        }
    }

    pub const fn max_marks(self) -> i64 {
        match self {
            Self::Ce => 30,
            Self::Faculty => 10,
            Self::Ese => 60,
        }
    }

    /// Faculty marks are advisory and carry no minimum.
    pub const fn minimum(self, rules: &TierRules) -> Option<u8> {
        match self {
            Self::Ce => Some(rules.ce_min_marks),
            Self::Faculty => None,
            Self::Ese => Some(rules.ese_min_marks),
        }
    }
}

/// A minimum that was enforced and not met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum MarksShortfall {
    Ce { actual: i64, required: u8 },
    Ese { actual: i64, required: u8 },
    Total { actual: i64, required: u8 },
}

impl MarksShortfall {
    pub fn summary(&self) -> String {
        match self {
            MarksShortfall::Ce { actual, required } => {
                format!("CE minimum ({actual} < {required})")
            }
            MarksShortfall::Ese { actual, required } => {
                format!("ESE minimum ({actual} < {required})")
            }
            MarksShortfall::Total { actual, required } => {
                format!("total minimum ({actual} < {required})")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarksVerdict {
    pub tier: Tier,
    pub mode: MarksMode,
    pub ce: i64,
    pub faculty: i64,
    pub ese: i64,
    pub total: i64,
    pub passed: bool,
    pub ce_met: bool,
    pub ese_met: bool,
    pub total_met: bool,
    pub shortfalls: Vec<MarksShortfall>,
    pub reason: String,
}

/// Total-only evaluation: pass iff `ce + faculty + ese >= total_min_marks`.
pub fn evaluate(marks: &MarksInput, tier: Tier) -> MarksVerdict {
    evaluate_with_mode(marks, tier, MarksMode::Lenient)
}

pub fn evaluate_with_mode(marks: &MarksInput, tier: Tier, mode: MarksMode) -> MarksVerdict {
    let rules = tier.rules();
    let total = marks.total();

    let ce_met = marks.ce >= i64::from(rules.ce_min_marks);
    let ese_met = marks.ese >= i64::from(rules.ese_min_marks);
    let total_met = total >= i64::from(rules.total_min_marks);

    let mut shortfalls = Vec::new();
    if mode == MarksMode::Strict {
        if !ce_met {
            shortfalls.push(MarksShortfall::Ce {
                actual: marks.ce,
                required: rules.ce_min_marks,
            });
        }
        if !ese_met {
            shortfalls.push(MarksShortfall::Ese {
                actual: marks.ese,
                required: rules.ese_min_marks,
            });
        }
    }
    if !total_met {
        shortfalls.push(MarksShortfall::Total {
            actual: total,
            required: rules.total_min_marks,
        });
    }

    let passed = shortfalls.is_empty();
    let reason = if passed {
        format!("Congratulations! You passed with {total}/100 🎉")
    } else {
        match mode {
            MarksMode::Lenient => format!(
                "You failed because total marks are below the required minimum ({} < {})",
                total, rules.total_min_marks
            ),
            MarksMode::Strict => {
                let failures: Vec<String> =
                    shortfalls.iter().map(MarksShortfall::summary).collect();
                format!("You failed because: {}", failures.join(", "))
            }
        }
    };

    MarksVerdict {
        tier,
        mode,
        ce: marks.ce,
        faculty: marks.faculty,
        ese: marks.ese,
        total,
        passed,
        ce_met,
        ese_met,
        total_met,
        shortfalls,
        reason,
    }
}
