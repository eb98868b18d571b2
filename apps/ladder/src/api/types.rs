//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.
//!
//! Scores and averages are sent as JSON numbers. Averages additionally carry
//! a `*_display` string rounded to one decimal, which is what the wizard
//! renders.

use ladder_core::{
    AssessmentSummary, Intake, Mean, RoleAssessment, RoleCatalog, RoleDefinition, ScoreScale,
    Step, StepKind,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// ROLES RESPONSE
// =============================================================================

/// The slider contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleJson {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub labels: Vec<u8>,
}

impl From<ScoreScale> for ScaleJson {
    fn from(scale: ScoreScale) -> Self {
        Self {
            min: scale.min.as_f64(),
            max: scale.max.as_f64(),
            step: scale.step().as_f64(),
            labels: scale.labels(),
        }
    }
}

/// A criterion as defined in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionDefinitionJson {
    pub id: String,
    pub description: String,
}

/// A section as defined in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDefinitionJson {
    pub title: String,
    pub criteria: Vec<CriterionDefinitionJson>,
}

/// A role table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleJson {
    pub level: String,
    pub title: String,
    pub step: u8,
    pub description: String,
    pub sections: Vec<SectionDefinitionJson>,
}

impl From<&RoleDefinition> for RoleJson {
    fn from(role: &RoleDefinition) -> Self {
        Self {
            level: role.level.slug().to_string(),
            title: role.title().to_string(),
            step: role.level.step_number(),
            description: role.description.to_string(),
            sections: role
                .sections
                .iter()
                .map(|s| SectionDefinitionJson {
                    title: s.title.to_string(),
                    criteria: s
                        .criteria
                        .iter()
                        .map(|c| CriterionDefinitionJson {
                            id: c.id.to_string(),
                            description: c.description.to_string(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Catalog listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolesResponse {
    pub roles: Vec<RoleJson>,
    pub scale: ScaleJson,
}

impl RolesResponse {
    pub fn from_catalog(catalog: &RoleCatalog) -> Self {
        Self {
            roles: catalog.roles().iter().map(RoleJson::from).collect(),
            scale: ScoreScale::default().into(),
        }
    }
}

// =============================================================================
// STEP RESPONSE
// =============================================================================

/// One wizard page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepJson {
    pub step: u8,
    /// `intake`, `role` or `review`.
    pub kind: String,
    /// Role slug for role pages.
    pub level: Option<String>,
    pub title: String,
    pub description: String,
    pub progress_percent: u8,
    pub previous: Option<u8>,
    pub next: Option<u8>,
}

impl StepJson {
    pub fn new(step: Step, catalog: &RoleCatalog) -> Self {
        let page = step.page(catalog);
        let (kind, level) = match step.kind() {
            StepKind::Intake => ("intake", None),
            StepKind::Role(level) => ("role", Some(level.slug().to_string())),
            StepKind::Review => ("review", None),
        };
        Self {
            step: step.number(),
            kind: kind.to_string(),
            level,
            title: page.title,
            description: page.description,
            progress_percent: step.progress_percent(),
            previous: step.previous().map(Step::number),
            next: step.next().map(Step::number),
        }
    }
}

/// Step lookup response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResponse {
    pub success: bool,
    pub step: Option<StepJson>,
    pub error: Option<String>,
}

impl StepResponse {
    pub fn success(step: StepJson) -> Self {
        Self {
            success: true,
            step: Some(step),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            step: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// ASSESSMENT RESPONSE
// =============================================================================

/// A criterion with its current score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionJson {
    pub id: String,
    pub description: String,
    pub score: f64,
}

/// A section with its current average.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionJson {
    pub title: String,
    pub average: f64,
    pub average_display: String,
    pub criteria: Vec<CriterionJson>,
}

/// The full scoring state of one role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentJson {
    pub level: String,
    pub title: String,
    pub sections: Vec<SectionJson>,
    pub overall: f64,
    pub overall_display: String,
    pub notes: String,
}

impl TryFrom<&RoleAssessment> for AssessmentJson {
    type Error = ladder_core::LadderError;

    fn try_from(role: &RoleAssessment) -> Result<Self, Self::Error> {
        let sections = role
            .sections()
            .iter()
            .map(|section| {
                let average = section.average()?;
                Ok(SectionJson {
                    title: section.title.clone(),
                    average: average.as_f64(),
                    average_display: average.to_fixed_1(),
                    criteria: section
                        .criteria
                        .iter()
                        .map(|c| CriterionJson {
                            id: c.id.clone(),
                            description: c.description.clone(),
                            score: c.score.as_f64(),
                        })
                        .collect(),
                })
            })
            .collect::<Result<Vec<_>, Self::Error>>()?;
        let overall = role.overall()?;

        Ok(Self {
            level: role.level().slug().to_string(),
            title: role.title().to_string(),
            sections,
            overall: overall.as_f64(),
            overall_display: overall.to_fixed_1(),
            notes: role.notes().to_string(),
        })
    }
}

/// Assessment lookup/update response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub success: bool,
    pub assessment: Option<AssessmentJson>,
    pub error: Option<String>,
}

impl AssessmentResponse {
    pub fn success(assessment: AssessmentJson) -> Self {
        Self {
            success: true,
            assessment: Some(assessment),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            assessment: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// SCORE REQUEST/RESPONSE
// =============================================================================

/// Set one criterion score.
///
/// `score` is the raw slider value; range and step are checked by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub criterion_id: String,
    pub score: f64,
}

/// Score update response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub success: bool,
    pub previous: Option<f64>,
    pub assessment: Option<AssessmentJson>,
    pub error: Option<String>,
}

impl ScoreResponse {
    pub fn success(previous: f64, assessment: AssessmentJson) -> Self {
        Self {
            success: true,
            previous: Some(previous),
            assessment: Some(assessment),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            previous: None,
            assessment: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// NOTES REQUEST
// =============================================================================

/// Replace a role's qualitative notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesRequest {
    pub notes: String,
}

// =============================================================================
// SUMMARY RESPONSE
// =============================================================================

/// Query string of `GET /summary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryQuery {
    /// `literal` or `mean` (default).
    pub final_score: Option<String>,
}

/// One section line of a review card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionScoreJson {
    pub title: String,
    pub average: f64,
    pub average_display: String,
}

/// One review card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSummaryJson {
    pub level: String,
    pub title: String,
    pub sections: Vec<SectionScoreJson>,
    pub overall: f64,
    pub overall_display: String,
    pub notes: String,
}

/// The review page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryJson {
    pub roles: Vec<RoleSummaryJson>,
    pub final_score: f64,
    pub final_score_display: String,
    pub policy: String,
}

fn display(mean: &Mean) -> (f64, String) {
    (mean.as_f64(), mean.to_fixed_1())
}

impl From<&AssessmentSummary> for SummaryJson {
    fn from(summary: &AssessmentSummary) -> Self {
        let (final_score, final_score_display) = display(&summary.final_score);
        Self {
            roles: summary
                .roles
                .iter()
                .map(|role| {
                    let (overall, overall_display) = display(&role.overall);
                    RoleSummaryJson {
                        level: role.level.slug().to_string(),
                        title: role.title.clone(),
                        sections: role
                            .sections
                            .iter()
                            .map(|s| {
                                let (average, average_display) = display(&s.average);
                                SectionScoreJson {
                                    title: s.title.clone(),
                                    average,
                                    average_display,
                                }
                            })
                            .collect(),
                        overall,
                        overall_display,
                        notes: role.notes.clone(),
                    }
                })
                .collect(),
            final_score,
            final_score_display,
            policy: summary.policy.to_string(),
        }
    }
}

/// Summary response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub success: bool,
    pub summary: Option<SummaryJson>,
    pub error: Option<String>,
}

impl SummaryResponse {
    pub fn success(summary: SummaryJson) -> Self {
        Self {
            success: true,
            summary: Some(summary),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            summary: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// NAME & INTAKE
// =============================================================================

/// Participant name, used for both request and response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameJson {
    pub name: String,
}

/// Name update response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameResponse {
    pub success: bool,
    pub name: Option<String>,
    pub error: Option<String>,
}

impl NameResponse {
    pub fn success(name: impl Into<String>) -> Self {
        Self {
            success: true,
            name: Some(name.into()),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            name: None,
            error: Some(msg.into()),
        }
    }
}

/// Intake lookup/update response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeResponse {
    pub success: bool,
    pub intake: Option<Intake>,
    pub error: Option<String>,
}

impl IntakeResponse {
    pub fn success(intake: Intake) -> Self {
        Self {
            success: true,
            intake: Some(intake),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            intake: None,
            error: Some(msg.into()),
        }
    }
}
