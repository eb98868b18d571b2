//! # Scoresheet
//!
//! A batch of scores and notes for one or more roles, read from a file.
//!
//! ```toml
//! [[roles]]
//! level = "senior-product-designer"
//! notes = "Leads the checkout redesign"
//!
//! [roles.scores]
//! design_quality = 4.5
//! pattern_understanding = 4
//! ```
//!
//! Applying a scoresheet is all-or-nothing: every entry is applied to a
//! copy first, and the session only changes if all of them succeed.

use crate::roles::RoleLevel;
use crate::session::AssessmentSession;
use crate::{LadderError, Score};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scores and notes for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleScores {
    pub level: RoleLevel,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub scores: BTreeMap<String, Score>,
}

/// A file of role scores.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoresheet {
    #[serde(default)]
    pub roles: Vec<RoleScores>,
}

impl Scoresheet {
    pub fn from_toml_str(text: &str) -> Result<Self, LadderError> {
        toml::from_str(text).map_err(|e| LadderError::SerializationError(e.to_string()))
    }

    /// Total number of criterion scores in the sheet.
    #[must_use]
    pub fn score_count(&self) -> usize {
        self.roles.iter().map(|r| r.scores.len()).sum()
    }

    /// Apply every entry to the session, or none of them.
    pub fn apply(&self, session: &mut AssessmentSession) -> Result<(), LadderError> {
        let mut staged = session.aggregator().clone();
        for role in &self.roles {
            let assessment = staged.get_mut(role.level)?;
            for (criterion_id, score) in &role.scores {
                assessment.set_score(criterion_id, *score)?;
            }
            if let Some(notes) = &role.notes {
                assessment.set_notes(notes.as_str())?;
            }
        }
        session.replace_aggregator(staged);
        Ok(())
    }
}
