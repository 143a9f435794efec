use serde::Serialize;
use std::fmt;

use super::attendance::AttendanceInput;
use super::marks::{MarkComponent, MarksInput};

/// One violated input bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

/// Every bound an input violated, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    fn check(issues: Vec<ValidationIssue>) -> Result<(), Self> {
        if issues.is_empty() {
            Ok(())
        } else {
            Err(Self { issues })
        }
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.issues.iter().map(|issue| issue.field).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self
            .issues
            .iter()
            .map(|issue| issue.message.as_str())
            .collect();
        write!(f, "invalid input: {}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub fn validate_marks(marks: &MarksInput) -> Result<(), ValidationErrors> {
    let issues = MarkComponent::ordered()
        .into_iter()
        .filter_map(|component| {
            let value = marks.component(component);
            let max = component.max_marks();
            (!(0..=max).contains(&value)).then(|| ValidationIssue {
                field: component.field(),
                message: format!(
                    "{} marks must be between 0 and {max} (got {value})",
                    component.label()
                ),
            })
        })
        .collect();

    ValidationErrors::check(issues)
}

pub fn validate_attendance(attendance: &AttendanceInput) -> Result<(), ValidationErrors> {
    let AttendanceInput {
        attended_classes,
        total_classes,
    } = *attendance;
    let mut issues = Vec::new();

    if attended_classes < 0 {
        issues.push(ValidationIssue {
            field: "attended_classes",
            message: format!("attended classes must not be negative (got {attended_classes})"),
        });
    }
    if total_classes < 0 {
        issues.push(ValidationIssue {
            field: "total_classes",
            message: format!("total classes must not be negative (got {total_classes})"),
        });
    }
    if attended_classes > total_classes {
        issues.push(ValidationIssue {
            field: "attended_classes",
            message: format!(
                "attended classes ({attended_classes}) must not exceed total classes ({total_classes})"
            ),
        });
    }

    ValidationErrors::check(issues)
}
