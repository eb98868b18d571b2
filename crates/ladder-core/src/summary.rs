//! # Aggregator & Summary
//!
//! The [`Aggregator`] holds exactly one [`RoleAssessment`] per role level, in
//! ladder order. The review step reads all of them through
//! [`build_summary`], which produces a read-only [`AssessmentSummary`]
//! snapshot.
//!
//! ## Final Score
//!
//! Two behaviours are available through [`FinalScorePolicy`]:
//! - `Literal`: always `0.0`, the fixed value of the first review page
//! - `MeanOfRoles`: the mean of every role's overall score (default)

use crate::assessment::RoleAssessment;
use crate::roles::{RoleCatalog, RoleLevel};
use crate::scoring::Mean;
use crate::{LadderError, Score};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// FINAL SCORE POLICY
// =============================================================================

/// How the summary's final score is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FinalScorePolicy {
    /// The constant `0.0`.
    #[serde(rename = "literal")]
    Literal,
    /// Mean of the six role overalls.
    #[default]
    #[serde(rename = "mean", alias = "mean_of_roles")]
    MeanOfRoles,
}

impl FinalScorePolicy {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FinalScorePolicy::Literal => "literal",
            FinalScorePolicy::MeanOfRoles => "mean",
        }
    }
}

impl fmt::Display for FinalScorePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FinalScorePolicy {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(FinalScorePolicy::Literal),
            "mean" | "mean_of_roles" => Ok(FinalScorePolicy::MeanOfRoles),
            other => Err(LadderError::Configuration(format!(
                "unknown final score policy '{other}' (expected 'literal' or 'mean')"
            ))),
        }
    }
}

// =============================================================================
// SUMMARY SNAPSHOT
// =============================================================================

/// One section line of a role summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionScore {
    pub title: String,
    pub average: Mean,
}

/// The review card for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleSummary {
    pub level: RoleLevel,
    pub title: String,
    pub sections: Vec<SectionScore>,
    pub overall: Mean,
    pub notes: String,
}

/// Read-only snapshot of every role plus the final score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentSummary {
    pub roles: Vec<RoleSummary>,
    pub final_score: Mean,
    pub policy: FinalScorePolicy,
}

impl AssessmentSummary {
    /// The summary card for a level, if present.
    #[must_use]
    pub fn role(&self, level: RoleLevel) -> Option<&RoleSummary> {
        self.roles.iter().find(|r| r.level == level)
    }
}

/// Build the review snapshot from a set of role assessments.
///
/// Roles are reported in the order given. Untouched roles report zeros.
pub fn build_summary(
    assessments: &[RoleAssessment],
    policy: FinalScorePolicy,
) -> Result<AssessmentSummary, LadderError> {
    let mut roles = Vec::with_capacity(assessments.len());

    for assessment in assessments {
        let averages = assessment.section_averages()?;
        let sections = assessment
            .sections()
            .iter()
            .zip(averages)
            .map(|(section, average)| SectionScore {
                title: section.title.clone(),
                average,
            })
            .collect();
        roles.push(RoleSummary {
            level: assessment.level(),
            title: assessment.title().to_string(),
            sections,
            overall: assessment.overall()?,
            notes: assessment.notes().to_string(),
        });
    }

    let final_score = match policy {
        FinalScorePolicy::Literal => Mean::ZERO,
        FinalScorePolicy::MeanOfRoles => Mean::of_means(roles.iter().map(|r| r.overall))?,
    };

    Ok(AssessmentSummary {
        roles,
        final_score,
        policy,
    })
}

// =============================================================================
// AGGREGATOR
// =============================================================================

/// One assessment per role level, zero-initialised from a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregator {
    assessments: Vec<RoleAssessment>,
}

impl Aggregator {
    /// Create a zero-scored aggregator covering every role in the catalog.
    #[must_use]
    pub fn new(catalog: &RoleCatalog) -> Self {
        Self {
            assessments: catalog
                .roles()
                .iter()
                .map(RoleAssessment::from_definition)
                .collect(),
        }
    }

    /// All assessments in ladder order.
    #[must_use]
    pub fn assessments(&self) -> &[RoleAssessment] {
        &self.assessments
    }

    pub fn get(&self, level: RoleLevel) -> Result<&RoleAssessment, LadderError> {
        self.assessments
            .iter()
            .find(|a| a.level() == level)
            .ok_or_else(|| LadderError::UnknownRole(level.slug().to_string()))
    }

    pub fn get_mut(&mut self, level: RoleLevel) -> Result<&mut RoleAssessment, LadderError> {
        self.assessments
            .iter_mut()
            .find(|a| a.level() == level)
            .ok_or_else(|| LadderError::UnknownRole(level.slug().to_string()))
    }

    /// Record a criterion score for a role. Returns the previous score.
    pub fn record(
        &mut self,
        level: RoleLevel,
        criterion_id: &str,
        score: Score,
    ) -> Result<Score, LadderError> {
        self.get_mut(level)?.set_score(criterion_id, score)
    }

    /// Snapshot every role under the given policy.
    pub fn summary(&self, policy: FinalScorePolicy) -> Result<AssessmentSummary, LadderError> {
        build_summary(&self.assessments, policy)
    }

    /// Zero every role.
    pub fn reset(&mut self) {
        for assessment in &mut self.assessments {
            assessment.reset();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregator() -> Aggregator {
        Aggregator::new(&RoleCatalog::builtin().expect("builtin"))
    }

    #[test]
    fn untouched_summary_is_all_zero() {
        let agg = aggregator();
        for policy in [FinalScorePolicy::Literal, FinalScorePolicy::MeanOfRoles] {
            let summary = agg.summary(policy).expect("summary");
            assert_eq!(summary.roles.len(), 6);
            assert_eq!(summary.final_score, Mean::ZERO);
            for role in &summary.roles {
                assert_eq!(role.overall, Mean::ZERO);
                assert!(role.sections.iter().all(|s| s.average == Mean::ZERO));
            }
        }
    }

    #[test]
    fn literal_policy_ignores_scores() {
        let mut agg = aggregator();
        agg.record(RoleLevel::ProductDesigner, "hiring", Score::MAX)
            .expect("record");
        let summary = agg.summary(FinalScorePolicy::Literal).expect("summary");
        assert_eq!(summary.final_score, Mean::ZERO);
        assert_ne!(
            summary.role(RoleLevel::ProductDesigner).expect("role").overall,
            Mean::ZERO
        );
    }

    #[test]
    fn mean_policy_averages_roles() {
        let mut agg = aggregator();
        // Senior PD II: every criterion at 5 gives an overall of 5.
        let ids: Vec<String> = agg
            .get(RoleLevel::SeniorProductDesignerII)
            .expect("role")
            .sections()
            .iter()
            .flat_map(|s| s.criteria.iter().map(|c| c.id.clone()))
            .collect();
        for id in &ids {
            agg.record(RoleLevel::SeniorProductDesignerII, id, Score::MAX)
                .expect("record");
        }

        let summary = agg.summary(FinalScorePolicy::MeanOfRoles).expect("summary");
        // (5 + 0 * 5) / 6
        assert_eq!(summary.final_score.numerator(), 5);
        assert_eq!(summary.final_score.denominator(), 6);
        assert_eq!(summary.final_score.to_fixed_1(), "0.8");
    }

    #[test]
    fn summary_carries_notes_and_titles() {
        let mut agg = aggregator();
        agg.get_mut(RoleLevel::PrincipalProductDesigner)
            .expect("role")
            .set_notes("Ready for promotion")
            .expect("notes");
        let summary = agg.summary(FinalScorePolicy::default()).expect("summary");
        let role = summary
            .role(RoleLevel::PrincipalProductDesigner)
            .expect("role");
        assert_eq!(role.notes, "Ready for promotion");
        assert_eq!(role.title, "Principal Product Designer");
        assert_eq!(role.sections[0].title, "Strategic Thinking & Domain Expertise");
    }

    #[test]
    fn policy_parsing() {
        assert_eq!(
            "literal".parse::<FinalScorePolicy>().expect("policy"),
            FinalScorePolicy::Literal
        );
        assert_eq!(
            "MEAN".parse::<FinalScorePolicy>().expect("policy"),
            FinalScorePolicy::MeanOfRoles
        );
        assert!("median".parse::<FinalScorePolicy>().is_err());
        assert_eq!(FinalScorePolicy::default(), FinalScorePolicy::MeanOfRoles);
    }

    #[test]
    fn reset_zeroes_every_role() {
        let mut agg = aggregator();
        agg.record(RoleLevel::ProductDesignerII, "improvement", Score::MAX)
            .expect("record");
        agg.reset();
        assert_eq!(agg, aggregator());
    }
}
