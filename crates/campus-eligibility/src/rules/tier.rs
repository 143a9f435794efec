use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::EligibilityError;

/// Academic program category. Each tier owns exactly one [`TierRules`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Pg,
    Ug,
    Diploma,
}

impl Tier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Pg, Self::Ug, Self::Diploma]
    }

    /// Wire token accepted by [`Tier::from_str`].
    pub const fn id(self) -> &'static str {
        match self {
            Self::Pg => "pg",
            Self::Ug => "ug",
            Self::Diploma => "diploma",
        }
    }

    pub const fn label(self) -> &'static str {
        self.rules().label
    }

    pub const fn rules(self) -> &'static TierRules {
        match self {
            Self::Pg => &PG_RULES,
            Self::Ug => &UG_RULES,
            Self::Diploma => &DIPLOMA_RULES,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tier {
    type Err = EligibilityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let token = value.trim();
        match token.to_ascii_lowercase().as_str() {
            "pg" => Ok(Self::Pg),
            "ug" => Ok(Self::Ug),
            "diploma" => Ok(Self::Diploma),
            _ => Err(EligibilityError::UnknownTier(token.to_string())),
        }
    }
}

/// Threshold table for a single tier.
///
/// Attendance minimums are percentages and never decrease from the first
/// internal exam to the external exam. Marks minimums are absolute marks out of
/// 30 (CE), 60 (ESE) and 100 (total).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierRules {
    pub tier: Tier,
    pub label: &'static str,
    pub first_internal_min_pct: u8,
    pub second_internal_min_pct: u8,
    pub external_min_pct: u8,
    pub ce_min_marks: u8,
    pub ese_min_marks: u8,
    pub total_min_marks: u8,
    /// Minimum percentage published for every marks component. Diploma CE is
    /// published as 35% even though 11/30 is nearer 37%.
    pub marks_min_pct: u8,
    /// Published alongside the thresholds; not consulted by any decision.
    pub grace_period_pct: u8,
}

const PG_RULES: TierRules = TierRules {
    tier: Tier::Pg,
    label: "Postgraduate (PG)",
    first_internal_min_pct: 65,
    second_internal_min_pct: 70,
    external_min_pct: 75,
    ce_min_marks: 15,
    ese_min_marks: 30,
    total_min_marks: 50,
    marks_min_pct: 50,
    grace_period_pct: 5,
};

const UG_RULES: TierRules = TierRules {
    tier: Tier::Ug,
    label: "Undergraduate (UG)",
    first_internal_min_pct: 60,
    second_internal_min_pct: 65,
    external_min_pct: 70,
    ce_min_marks: 12,
    ese_min_marks: 24,
    total_min_marks: 40,
    marks_min_pct: 40,
    grace_period_pct: 10,
};

const DIPLOMA_RULES: TierRules = TierRules {
    tier: Tier::Diploma,
    label: "Diploma",
    first_internal_min_pct: 55,
    second_internal_min_pct: 60,
    external_min_pct: 65,
    ce_min_marks: 11,
    ese_min_marks: 21,
    total_min_marks: 35,
    marks_min_pct: 35,
    grace_period_pct: 15,
};

/// Resolve a raw tier token (`pg`, `ug`, `diploma`) to its rule table.
pub fn lookup(tier_id: &str) -> Result<&'static TierRules, EligibilityError> {
    tier_id.parse::<Tier>().map(Tier::rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_owns_its_table() {
        for tier in Tier::ordered() {
            assert_eq!(tier.rules().tier, tier);
        }
    }

    #[test]
    fn attendance_thresholds_never_decrease() {
        for tier in Tier::ordered() {
            let rules = tier.rules();
            assert!(rules.first_internal_min_pct <= rules.second_internal_min_pct);
            assert!(rules.second_internal_min_pct <= rules.external_min_pct);
        }
    }

    #[test]
    fn lookup_accepts_known_tokens_case_insensitively() {
        assert_eq!(lookup("pg").expect("pg resolves").external_min_pct, 75);
        assert_eq!(lookup(" UG ").expect("ug resolves").total_min_marks, 40);
        assert_eq!(
            lookup("Diploma").expect("diploma resolves").grace_period_pct,
            15
        );
    }

    #[test]
    fn lookup_rejects_unknown_tokens() {
        match lookup("xyz") {
            Err(EligibilityError::UnknownTier(token)) => assert_eq!(token, "xyz"),
            other => panic!("expected unknown tier, got {other:?}"),
        }
        assert!(lookup("").is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for tier in Tier::ordered() {
            assert_eq!(tier.to_string().parse::<Tier>().expect("parses"), tier);
        }
    }
}
