use serde::{Deserialize, Serialize};

/// Which marks minimums gate a pass.
///
/// The published rule tables list CE and ESE minimums, but the dashboard only
/// ever enforced the aggregate total. `Lenient` keeps that behavior; `Strict`
/// additionally requires every component minimum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarksMode {
    #[default]
    Lenient,
    Strict,
}

impl MarksMode {
    pub fn from_token(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lenient" => Some(Self::Lenient),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

/// Knobs applied by [`super::EligibilityEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub marks_mode: MarksMode,
    pub validate_inputs: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            marks_mode: MarksMode::Lenient,
            validate_inputs: true,
        }
    }
}
