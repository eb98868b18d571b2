//! # Intake
//!
//! The step-1 form: who is being assessed and by whom.
//!
//! Fields are free text. Beyond length bounds nothing is validated (email
//! format included). Manager fields only apply to self assessments and are
//! dropped when the kind is [`AssessmentKind::Manager`].

use crate::primitives::{MAX_INTAKE_FIELD_LENGTH, MAX_NAME_LENGTH};
use crate::LadderError;
use serde::{Deserialize, Serialize};

/// Who fills in the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentKind {
    /// The designer assesses themself and names their manager.
    #[default]
    #[serde(rename = "self")]
    SelfAssessment,
    /// A manager assesses a designer.
    Manager,
}

/// The intake form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Intake {
    pub kind: AssessmentKind,
    pub full_name: String,
    pub email: String,
    pub manager_name: Option<String>,
    pub manager_email: Option<String>,
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), LadderError> {
    if value.len() > max {
        return Err(LadderError::FieldTooLong {
            field,
            length: value.len(),
            max,
        });
    }
    Ok(())
}

impl Intake {
    /// Check length bounds and drop fields that do not apply to the kind.
    pub fn normalized(mut self) -> Result<Self, LadderError> {
        check_length("full_name", &self.full_name, MAX_NAME_LENGTH)?;
        check_length("email", &self.email, MAX_INTAKE_FIELD_LENGTH)?;

        match self.kind {
            AssessmentKind::Manager => {
                self.manager_name = None;
                self.manager_email = None;
            }
            AssessmentKind::SelfAssessment => {
                if let Some(name) = &self.manager_name {
                    check_length("manager_name", name, MAX_INTAKE_FIELD_LENGTH)?;
                }
                if let Some(email) = &self.manager_email {
                    check_length("manager_email", email, MAX_INTAKE_FIELD_LENGTH)?;
                }
            }
        }

        Ok(self)
    }
}

/// Check a participant name against the length bound.
pub(crate) fn check_name(name: &str) -> Result<(), LadderError> {
    check_length("name", name, MAX_NAME_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manager_fields_dropped_for_manager_kind() {
        let intake = Intake {
            kind: AssessmentKind::Manager,
            full_name: "Dana Reyes".to_string(),
            email: "dana@example.com".to_string(),
            manager_name: Some("Sam".to_string()),
            manager_email: Some("sam@example.com".to_string()),
        }
        .normalized()
        .expect("normalized");
        assert_eq!(intake.manager_name, None);
        assert_eq!(intake.manager_email, None);
        assert_eq!(intake.full_name, "Dana Reyes");
    }

    #[test]
    fn self_kind_keeps_manager_fields() {
        let intake = Intake {
            manager_name: Some("Sam".to_string()),
            ..Intake::default()
        }
        .normalized()
        .expect("normalized");
        assert_eq!(intake.kind, AssessmentKind::SelfAssessment);
        assert_eq!(intake.manager_name.as_deref(), Some("Sam"));
    }

    #[test]
    fn email_format_is_not_checked() {
        let intake = Intake {
            email: "not an email".to_string(),
            ..Intake::default()
        };
        assert!(intake.normalized().is_ok());
    }

    #[test]
    fn overlong_field_rejected() {
        let intake = Intake {
            full_name: "a".repeat(MAX_NAME_LENGTH + 1),
            ..Intake::default()
        };
        assert!(matches!(
            intake.normalized(),
            Err(LadderError::FieldTooLong { field: "full_name", .. })
        ));
    }

    #[test]
    fn kind_serde_names() {
        assert_eq!(
            serde_json::to_string(&AssessmentKind::SelfAssessment).expect("json"),
            "\"self\""
        );
        let kind: AssessmentKind = serde_json::from_str("\"manager\"").expect("kind");
        assert_eq!(kind, AssessmentKind::Manager);
    }
}
