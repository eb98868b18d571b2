//! # Assessment Engine
//!
//! One generic engine for every role level. A [`RoleAssessment`] is built
//! from a [`RoleDefinition`] and owns its sections and criteria; all derived
//! values (section averages, role overall) come from [`crate::scoring`] on
//! read.
//!
//! ## Mutation Rules
//!
//! - Scores change only through [`RoleAssessment::set_score`]
//! - A rejected score leaves the assessment untouched
//! - Notes change only through [`RoleAssessment::set_notes`]
//! - Criteria and sections are fixed for the lifetime of the assessment

use crate::primitives::MAX_NOTES_LENGTH;
use crate::roles::{RoleDefinition, RoleLevel, SectionDefinition};
use crate::scoring::{Mean, ScoreScale, role_overall, section_average};
use crate::{LadderError, Score};
use serde::{Deserialize, Serialize};

// =============================================================================
// CRITERION & SECTION
// =============================================================================

/// A scorable statement with its current score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub score: Score,
}

/// A titled group of criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub criteria: Vec<Criterion>,
}

impl Section {
    fn from_definition(definition: &SectionDefinition) -> Self {
        Self {
            title: definition.title.to_string(),
            criteria: definition
                .criteria
                .iter()
                .map(|c| Criterion {
                    id: c.id.to_string(),
                    description: c.description.to_string(),
                    score: Score::default(),
                })
                .collect(),
        }
    }

    /// Current criterion scores, in display order.
    #[must_use]
    pub fn scores(&self) -> Vec<Score> {
        self.criteria.iter().map(|c| c.score).collect()
    }

    /// Mean of the criterion scores.
    pub fn average(&self) -> Result<Mean, LadderError> {
        section_average(&self.scores())
    }
}

// =============================================================================
// ROLE ASSESSMENT
// =============================================================================

/// The scoring state of one role level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssessment {
    level: RoleLevel,
    sections: Vec<Section>,
    notes: String,
}

impl RoleAssessment {
    /// Create a zero-scored assessment from a validated role table.
    #[must_use]
    pub fn from_definition(definition: &RoleDefinition) -> Self {
        Self {
            level: definition.level,
            sections: definition
                .sections
                .iter()
                .map(Section::from_definition)
                .collect(),
            notes: String::new(),
        }
    }

    #[must_use]
    pub fn level(&self) -> RoleLevel {
        self.level
    }

    /// Display name of the role.
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.level.title()
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Qualitative notes, empty until set.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Look up a criterion by id.
    #[must_use]
    pub fn criterion(&self, criterion_id: &str) -> Option<&Criterion> {
        self.sections
            .iter()
            .flat_map(|s| s.criteria.iter())
            .find(|c| c.id == criterion_id)
    }

    /// Set one criterion's score and return the previous value.
    ///
    /// The score is checked against the default [`ScoreScale`] first; an
    /// unknown id or an invalid score changes nothing.
    pub fn set_score(&mut self, criterion_id: &str, score: Score) -> Result<Score, LadderError> {
        let score = ScoreScale::default().check(score)?;
        let level = self.level;
        let criterion = self
            .sections
            .iter_mut()
            .flat_map(|s| s.criteria.iter_mut())
            .find(|c| c.id == criterion_id)
            .ok_or_else(|| LadderError::UnknownCriterion {
                role: level.title().to_string(),
                criterion: criterion_id.to_string(),
            })?;
        Ok(std::mem::replace(&mut criterion.score, score))
    }

    /// Replace the qualitative notes.
    ///
    /// Notes longer than `MAX_NOTES_LENGTH` bytes are rejected, not truncated.
    pub fn set_notes(&mut self, notes: impl Into<String>) -> Result<(), LadderError> {
        let notes = notes.into();
        if notes.len() > MAX_NOTES_LENGTH {
            return Err(LadderError::NotesTooLong(notes.len(), MAX_NOTES_LENGTH));
        }
        self.notes = notes;
        Ok(())
    }

    /// Section averages in display order.
    pub fn section_averages(&self) -> Result<Vec<Mean>, LadderError> {
        self.sections.iter().map(Section::average).collect()
    }

    /// Mean of the section averages.
    pub fn overall(&self) -> Result<Mean, LadderError> {
        role_overall(&self.section_averages()?)
    }

    /// Zero every score and clear the notes.
    pub fn reset(&mut self) {
        for criterion in self.sections.iter_mut().flat_map(|s| s.criteria.iter_mut()) {
            criterion.score = Score::default();
        }
        self.notes.clear();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::RoleCatalog;

    fn product_designer() -> RoleAssessment {
        let catalog = RoleCatalog::builtin().expect("builtin");
        RoleAssessment::from_definition(
            catalog.role(RoleLevel::ProductDesigner).expect("role"),
        )
    }

    fn score(text: &str) -> Score {
        Score::parse(text).expect("score")
    }

    #[test]
    fn starts_at_zero() {
        let role = product_designer();
        assert_eq!(role.overall().expect("overall"), Mean::ZERO);
        assert!(role.notes().is_empty());
        assert_eq!(role.sections().len(), 5);
    }

    #[test]
    fn set_score_updates_section_and_overall() {
        let mut role = product_designer();
        let previous = role.set_score("design_system", score("4")).expect("set");
        assert_eq!(previous, Score::MIN);

        // Craft & Quality has two criteria: (4 + 0) / 2 = 2.
        let averages = role.section_averages().expect("averages");
        assert_eq!(averages[1].to_fixed_1(), "2.0");
        // Overall: 2 / 5 sections = 0.4.
        assert_eq!(role.overall().expect("overall").to_fixed_1(), "0.4");
    }

    #[test]
    fn unknown_criterion_is_rejected() {
        let mut role = product_designer();
        let before = role.clone();
        assert!(matches!(
            role.set_score("no_such_id", score("3")),
            Err(LadderError::UnknownCriterion { .. })
        ));
        assert_eq!(role, before);
    }

    #[test]
    fn notes_are_bounded() {
        let mut role = product_designer();
        role.set_notes("Strong systems thinker").expect("notes");
        assert_eq!(role.notes(), "Strong systems thinker");

        let long = "x".repeat(MAX_NOTES_LENGTH + 1);
        assert!(matches!(
            role.set_notes(long),
            Err(LadderError::NotesTooLong(_, _))
        ));
        assert_eq!(role.notes(), "Strong systems thinker");
    }

    #[test]
    fn notes_do_not_affect_scores() {
        let mut role = product_designer();
        role.set_score("hiring", score("5")).expect("set");
        let before = role.overall().expect("overall");
        role.set_notes("anything").expect("notes");
        assert_eq!(role.overall().expect("overall"), before);
    }

    #[test]
    fn reset_clears_everything() {
        let mut role = product_designer();
        role.set_score("hiring", score("5")).expect("set");
        role.set_notes("n").expect("notes");
        role.reset();
        assert_eq!(role.overall().expect("overall"), Mean::ZERO);
        assert!(role.notes().is_empty());
        assert_eq!(role.criterion("hiring").expect("criterion").score, Score::MIN);
    }
}
