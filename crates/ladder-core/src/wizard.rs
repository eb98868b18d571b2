//! # Wizard Navigation
//!
//! The assessment is an eight-step wizard:
//!
//! | Step | Page                              |
//! |------|-----------------------------------|
//! | 1    | Intake (assessment information)   |
//! | 2-7  | One role level each, ladder order |
//! | 8    | Review                            |
//!
//! A [`Step`] can only hold a value in `1..=8`. Role page titles and
//! descriptions come from the catalog; intake and review pages are fixed.

use crate::primitives::STEP_COUNT;
use crate::roles::{RoleCatalog, RoleLevel};
use crate::LadderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const INTAKE_TITLE: &str = "Assessment Information";
const INTAKE_DESCRIPTION: &str = "Please select the type of assessment you would like to complete.";
const REVIEW_TITLE: &str = "Review Your Answers";
const REVIEW_DESCRIPTION: &str = "Review and confirm your assessment responses";

/// What a step renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "level", rename_all = "snake_case")]
pub enum StepKind {
    Intake,
    Role(RoleLevel),
    Review,
}

/// Title and description shown at the top of a wizard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContent {
    pub title: String,
    pub description: String,
}

/// A wizard step number in `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Step(u8);

impl Default for Step {
    fn default() -> Self {
        Self::FIRST
    }
}

impl Step {
    /// The intake step.
    pub const FIRST: Step = Step(1);

    /// The review step.
    pub const LAST: Step = Step(STEP_COUNT);

    pub fn new(number: u8) -> Result<Self, LadderError> {
        if (1..=STEP_COUNT).contains(&number) {
            Ok(Self(number))
        } else {
            Err(LadderError::InvalidStep(number.to_string()))
        }
    }

    /// Parse a step from URL or CLI text.
    pub fn parse(text: &str) -> Result<Self, LadderError> {
        let number = text
            .trim()
            .parse::<u8>()
            .map_err(|_| LadderError::InvalidStep(text.to_string()))?;
        Self::new(number)
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The following step, or `None` on the review page.
    #[must_use]
    pub fn next(self) -> Option<Step> {
        Step::new(self.0.checked_add(1)?).ok()
    }

    /// The preceding step, or `None` on intake (back to the welcome page).
    #[must_use]
    pub fn previous(self) -> Option<Step> {
        Step::new(self.0.checked_sub(1)?).ok()
    }

    #[must_use]
    pub fn kind(self) -> StepKind {
        match self.0 {
            1 => StepKind::Intake,
            STEP_COUNT => StepKind::Review,
            n => RoleLevel::from_step_number(n).map_or(StepKind::Review, StepKind::Role),
        }
    }

    /// The role level rendered at this step, if any.
    #[must_use]
    pub fn role(self) -> Option<RoleLevel> {
        match self.kind() {
            StepKind::Role(level) => Some(level),
            _ => None,
        }
    }

    /// The step that renders a role level.
    #[must_use]
    pub fn for_role(level: RoleLevel) -> Step {
        Step(level.step_number())
    }

    /// Completion percentage shown in the progress bar (`n * 100 / 8`).
    #[must_use]
    pub fn progress_percent(self) -> u8 {
        let percent = u16::from(self.0) * 100 / u16::from(STEP_COUNT);
        u8::try_from(percent).unwrap_or(100)
    }

    /// Page title and description.
    ///
    /// Role pages read their description from the catalog and fall back to
    /// the role title when the catalog leaves it empty.
    #[must_use]
    pub fn page(self, catalog: &RoleCatalog) -> PageContent {
        match self.kind() {
            StepKind::Intake => PageContent {
                title: INTAKE_TITLE.to_string(),
                description: INTAKE_DESCRIPTION.to_string(),
            },
            StepKind::Review => PageContent {
                title: REVIEW_TITLE.to_string(),
                description: REVIEW_DESCRIPTION.to_string(),
            },
            StepKind::Role(level) => {
                let description = catalog
                    .role(level)
                    .map(|r| r.description.to_string())
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| level.title().to_string());
                PageContent {
                    title: level.title().to_string(),
                    description,
                }
            }
        }
    }

    /// Every step in order.
    pub fn all() -> impl Iterator<Item = Step> {
        (1..=STEP_COUNT).map(Step)
    }
}

impl TryFrom<u8> for Step {
    type Error = LadderError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Step::new(value)
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.0
    }
}

impl FromStr for Step {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Step::parse(s)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bounds() {
        assert_eq!(Step::parse("1").expect("step"), Step::FIRST);
        assert_eq!(Step::parse(" 8 ").expect("step"), Step::LAST);
        for bad in ["0", "9", "-1", "abc", "", "2.5", "300"] {
            assert!(
                matches!(Step::parse(bad), Err(LadderError::InvalidStep(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn navigation_edges() {
        assert_eq!(Step::LAST.next(), None);
        assert_eq!(Step::FIRST.previous(), None);
        assert_eq!(Step::FIRST.next(), Some(Step(2)));
        assert_eq!(Step::LAST.previous(), Some(Step(7)));
    }

    #[test]
    fn kinds_cover_every_step() {
        let kinds: Vec<StepKind> = Step::all().map(Step::kind).collect();
        assert_eq!(kinds[0], StepKind::Intake);
        assert_eq!(kinds[7], StepKind::Review);
        for (kind, level) in kinds[1..7].iter().zip(RoleLevel::ALL) {
            assert_eq!(*kind, StepKind::Role(level));
            assert_eq!(Step::for_role(level).role(), Some(level));
        }
    }

    #[test]
    fn progress() {
        assert_eq!(Step::FIRST.progress_percent(), 12);
        assert_eq!(Step(4).progress_percent(), 50);
        assert_eq!(Step::LAST.progress_percent(), 100);
    }

    #[test]
    fn page_content() {
        let catalog = RoleCatalog::builtin().expect("builtin");
        assert_eq!(Step::FIRST.page(&catalog).title, "Assessment Information");
        assert_eq!(Step::LAST.page(&catalog).title, "Review Your Answers");

        let page = Step(4).page(&catalog);
        assert_eq!(page.title, "Senior Product Designer");
        assert_eq!(
            page.description,
            "Leadership and technical assessment for Senior Product Designer"
        );
    }

    #[test]
    fn serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Step>("3").is_ok());
        assert!(serde_json::from_str::<Step>("9").is_err());
    }
}
