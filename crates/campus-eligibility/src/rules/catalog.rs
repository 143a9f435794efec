//! Published rule tables and the worked samples shown beside them.

use serde::Serialize;

use super::attendance::ExamGate;
use super::marks::MarkComponent;
use super::tier::Tier;

#[derive(Debug, Clone, Serialize)]
pub struct GateRuleRow {
    pub gate: ExamGate,
    pub gate_label: &'static str,
    pub minimum_pct: u8,
    pub grace_period_pct: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarksRuleRow {
    pub component_label: &'static str,
    pub minimum_marks: u8,
    pub maximum_marks: i64,
    pub minimum_pct: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttendanceSample {
    pub attended_classes: i64,
    pub total_classes: i64,
    pub eligible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarksSample {
    pub ce: i64,
    pub faculty: i64,
    pub ese: i64,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublishedSamples {
    pub attendance: &'static [AttendanceSample],
    pub marks: &'static [MarksSample],
}

/// Everything the rules page renders for one tier.
#[derive(Debug, Clone, Serialize)]
pub struct TierRulesView {
    pub tier: Tier,
    pub label: &'static str,
    pub passing_pct: u8,
    pub grace_period_pct: u8,
    pub attendance: Vec<GateRuleRow>,
    pub marks: Vec<MarksRuleRow>,
    pub samples: PublishedSamples,
}

const PG_ATTENDANCE: [AttendanceSample; 2] = [
    attendance_sample(78, 100, true),
    attendance_sample(70, 100, false),
];
const UG_ATTENDANCE: [AttendanceSample; 2] = [
    attendance_sample(75, 100, true),
    attendance_sample(65, 100, false),
];
const DIPLOMA_ATTENDANCE: [AttendanceSample; 2] = [
    attendance_sample(70, 100, true),
    attendance_sample(60, 100, false),
];

const PG_MARKS: [MarksSample; 2] = [marks_sample(13, 9, 30, true), marks_sample(11, 6, 28, false)];
const UG_MARKS: [MarksSample; 2] = [marks_sample(14, 8, 26, true), marks_sample(10, 7, 22, false)];
const DIPLOMA_MARKS: [MarksSample; 2] =
    [marks_sample(12, 8, 23, true), marks_sample(9, 6, 19, false)];

const fn attendance_sample(attended: i64, total: i64, eligible: bool) -> AttendanceSample {
    AttendanceSample {
        attended_classes: attended,
        total_classes: total,
        eligible,
    }
}

const fn marks_sample(ce: i64, faculty: i64, ese: i64, passed: bool) -> MarksSample {
    MarksSample {
        ce,
        faculty,
        ese,
        passed,
    }
}

pub fn published_samples(tier: Tier) -> PublishedSamples {
    match tier {
        Tier::Pg => PublishedSamples {
            attendance: &PG_ATTENDANCE,
            marks: &PG_MARKS,
        },
        Tier::Ug => PublishedSamples {
            attendance: &UG_ATTENDANCE,
            marks: &UG_MARKS,
        },
        Tier::Diploma => PublishedSamples {
            attendance: &DIPLOMA_ATTENDANCE,
            marks: &DIPLOMA_MARKS,
        },
    }
}

pub fn rules_table(tier: Tier) -> TierRulesView {
    let rules = tier.rules();

    let attendance = ExamGate::ordered()
        .into_iter()
        .map(|gate| GateRuleRow {
            gate,
            gate_label: gate.label(),
            minimum_pct: gate.minimum_pct(rules),
            grace_period_pct: rules.grace_period_pct,
        })
        .collect();

    let mut marks: Vec<MarksRuleRow> = MarkComponent::ordered()
        .into_iter()
        .filter_map(|component| {
            component.minimum(rules).map(|minimum_marks| MarksRuleRow {
                component_label: component.label(),
                minimum_marks,
                maximum_marks: component.max_marks(),
                minimum_pct: rules.marks_min_pct,
            })
        })
        .collect();
    marks.push(MarksRuleRow {
        component_label: "Total",
        minimum_marks: rules.total_min_marks,
        maximum_marks: 100,
        minimum_pct: rules.marks_min_pct,
    });

    TierRulesView {
        tier,
        label: rules.label,
        passing_pct: rules.marks_min_pct,
        grace_period_pct: rules.grace_period_pct,
        attendance,
        marks,
        samples: published_samples(tier),
    }
}

pub fn rules_catalog() -> Vec<TierRulesView> {
    Tier::ordered().into_iter().map(rules_table).collect()
}
