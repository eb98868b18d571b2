//! # Role Catalog
//!
//! The six product-designer role levels and their declarative tables of
//! sections and criteria.
//!
//! Tables are pure data. The assessment engine in [`crate::assessment`] is
//! generic over them, so adding or rewording a criterion never touches
//! scoring code. A catalog is validated once at startup; any malformed table
//! is a fatal [`LadderError::Configuration`].
//!
//! ## Sources
//!
//! - [`RoleCatalog::builtin`]: the compiled-in tables in `tables.rs`
//! - [`RoleCatalog::from_toml_str`]: a replacement catalog from a TOML file

mod tables;

use crate::primitives::{FIRST_ROLE_STEP, MAX_CRITERIA_PER_SECTION, MAX_SECTIONS_PER_ROLE};
use crate::LadderError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// ROLE LEVEL
// =============================================================================

/// The six role levels, in ladder order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoleLevel {
    #[serde(rename = "product-designer")]
    ProductDesigner,
    #[serde(rename = "product-designer-ii")]
    ProductDesignerII,
    #[serde(rename = "senior-product-designer")]
    SeniorProductDesigner,
    #[serde(rename = "senior-product-designer-ii")]
    SeniorProductDesignerII,
    #[serde(rename = "principal-product-designer")]
    PrincipalProductDesigner,
    #[serde(rename = "principal-product-designer-ii")]
    PrincipalProductDesignerII,
}

impl RoleLevel {
    /// All levels in ladder order.
    pub const ALL: [RoleLevel; 6] = [
        RoleLevel::ProductDesigner,
        RoleLevel::ProductDesignerII,
        RoleLevel::SeniorProductDesigner,
        RoleLevel::SeniorProductDesignerII,
        RoleLevel::PrincipalProductDesigner,
        RoleLevel::PrincipalProductDesignerII,
    ];

    /// Position in ladder order (0-based).
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            RoleLevel::ProductDesigner => 0,
            RoleLevel::ProductDesignerII => 1,
            RoleLevel::SeniorProductDesigner => 2,
            RoleLevel::SeniorProductDesignerII => 3,
            RoleLevel::PrincipalProductDesigner => 4,
            RoleLevel::PrincipalProductDesignerII => 5,
        }
    }

    /// Display name.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            RoleLevel::ProductDesigner => "Product Designer",
            RoleLevel::ProductDesignerII => "Product Designer II",
            RoleLevel::SeniorProductDesigner => "Senior Product Designer",
            RoleLevel::SeniorProductDesignerII => "Senior Product Designer II",
            RoleLevel::PrincipalProductDesigner => "Principal Product Designer",
            RoleLevel::PrincipalProductDesignerII => "Principal Product Designer II",
        }
    }

    /// URL-safe identifier, also the serialized form.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            RoleLevel::ProductDesigner => "product-designer",
            RoleLevel::ProductDesignerII => "product-designer-ii",
            RoleLevel::SeniorProductDesigner => "senior-product-designer",
            RoleLevel::SeniorProductDesignerII => "senior-product-designer-ii",
            RoleLevel::PrincipalProductDesigner => "principal-product-designer",
            RoleLevel::PrincipalProductDesignerII => "principal-product-designer-ii",
        }
    }

    /// The wizard step number that renders this level (2..=7).
    #[must_use]
    pub fn step_number(&self) -> u8 {
        FIRST_ROLE_STEP.saturating_add(self.index() as u8)
    }

    /// The level rendered at a wizard step number, if any.
    #[must_use]
    pub fn from_step_number(step: u8) -> Option<RoleLevel> {
        let index = step.checked_sub(FIRST_ROLE_STEP)?;
        RoleLevel::ALL.get(usize::from(index)).copied()
    }
}

impl fmt::Display for RoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for RoleLevel {
    type Err = LadderError;

    /// Accepts the slug (`senior-product-designer-ii`) or the title,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        RoleLevel::ALL
            .into_iter()
            .find(|level| {
                level.slug().eq_ignore_ascii_case(needle)
                    || level.title().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| LadderError::UnknownRole(s.to_string()))
    }
}

// =============================================================================
// DEFINITIONS (declarative tables)
// =============================================================================

/// A scorable statement in a role table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionDefinition {
    pub id: Cow<'static, str>,
    pub description: Cow<'static, str>,
}

impl CriterionDefinition {
    /// Define a criterion in a compiled-in table.
    #[must_use]
    pub const fn new(id: &'static str, description: &'static str) -> Self {
        Self {
            id: Cow::Borrowed(id),
            description: Cow::Borrowed(description),
        }
    }
}

/// A titled group of criteria in a role table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDefinition {
    pub title: Cow<'static, str>,
    pub criteria: Vec<CriterionDefinition>,
}

impl SectionDefinition {
    /// Define a section in a compiled-in table.
    #[must_use]
    pub fn new(title: &'static str, criteria: Vec<CriterionDefinition>) -> Self {
        Self {
            title: Cow::Borrowed(title),
            criteria,
        }
    }
}

/// The full table for one role level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    pub level: RoleLevel,
    /// One-line description shown on the wizard page.
    #[serde(default)]
    pub description: Cow<'static, str>,
    pub sections: Vec<SectionDefinition>,
}

impl RoleDefinition {
    /// Define a role in a compiled-in table.
    #[must_use]
    pub fn new(
        level: RoleLevel,
        description: &'static str,
        sections: Vec<SectionDefinition>,
    ) -> Self {
        Self {
            level,
            description: Cow::Borrowed(description),
            sections,
        }
    }

    /// Display name of the role.
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.level.title()
    }

    /// Total number of criteria across all sections.
    #[must_use]
    pub fn criterion_count(&self) -> usize {
        self.sections.iter().map(|s| s.criteria.len()).sum()
    }

    /// Check the structural invariants of a single role table.
    ///
    /// - At least one section, at most `MAX_SECTIONS_PER_ROLE`
    /// - Section titles non-empty and unique within the role
    /// - Every section has at least one criterion, at most `MAX_CRITERIA_PER_SECTION`
    /// - Criterion ids non-empty and unique within the role
    pub fn validate(&self) -> Result<(), LadderError> {
        let role = self.level.title();

        if self.sections.is_empty() {
            return Err(LadderError::Configuration(format!(
                "{role}: role has no sections"
            )));
        }
        if self.sections.len() > MAX_SECTIONS_PER_ROLE {
            return Err(LadderError::Configuration(format!(
                "{role}: {} sections exceeds maximum {}",
                self.sections.len(),
                MAX_SECTIONS_PER_ROLE
            )));
        }

        let mut titles = BTreeSet::new();
        let mut ids = BTreeSet::new();

        for section in self.sections.iter() {
            if section.title.trim().is_empty() {
                return Err(LadderError::Configuration(format!(
                    "{role}: section with empty title"
                )));
            }
            if !titles.insert(section.title.as_ref()) {
                return Err(LadderError::Configuration(format!(
                    "{role}: duplicate section title '{}'",
                    section.title
                )));
            }
            if section.criteria.is_empty() {
                return Err(LadderError::Configuration(format!(
                    "{role}: section '{}' has no criteria",
                    section.title
                )));
            }
            if section.criteria.len() > MAX_CRITERIA_PER_SECTION {
                return Err(LadderError::Configuration(format!(
                    "{role}: section '{}' has {} criteria, maximum is {}",
                    section.title,
                    section.criteria.len(),
                    MAX_CRITERIA_PER_SECTION
                )));
            }

            for criterion in section.criteria.iter() {
                if criterion.id.trim().is_empty() {
                    return Err(LadderError::Configuration(format!(
                        "{role}: criterion with empty id in section '{}'",
                        section.title
                    )));
                }
                if !ids.insert(criterion.id.as_ref()) {
                    return Err(LadderError::Configuration(format!(
                        "{role}: duplicate criterion id '{}'",
                        criterion.id
                    )));
                }
            }
        }

        Ok(())
    }
}

// =============================================================================
// ROLE CATALOG
// =============================================================================

/// A validated set of role tables, exactly one per [`RoleLevel`], stored in
/// ladder order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleCatalog {
    roles: Vec<RoleDefinition>,
}

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    roles: Vec<RoleDefinition>,
}

impl RoleCatalog {
    /// Build a catalog from role tables in any order.
    ///
    /// Fails unless every level appears exactly once and every table passes
    /// [`RoleDefinition::validate`].
    pub fn new(roles: Vec<RoleDefinition>) -> Result<Self, LadderError> {
        let mut slots: Vec<Option<RoleDefinition>> = RoleLevel::ALL.iter().map(|_| None).collect();

        for role in roles {
            role.validate()?;
            let slot = slots.get_mut(role.level.index()).ok_or_else(|| {
                LadderError::Configuration(format!("{}: no slot for role", role.level))
            })?;
            if slot.is_some() {
                return Err(LadderError::Configuration(format!(
                    "{}: role defined more than once",
                    role.level
                )));
            }
            *slot = Some(role);
        }

        let mut ordered = Vec::with_capacity(slots.len());
        for (level, slot) in RoleLevel::ALL.iter().zip(slots) {
            let role = slot.ok_or_else(|| {
                LadderError::Configuration(format!("{level}: role is missing from catalog"))
            })?;
            ordered.push(role);
        }

        Ok(Self { roles: ordered })
    }

    /// The compiled-in catalog, validated.
    pub fn builtin() -> Result<Self, LadderError> {
        Self::new(tables::builtin_roles())
    }

    /// Parse and validate a catalog from TOML text.
    ///
    /// ```toml
    /// [[roles]]
    /// level = "product-designer"
    /// description = "Basic competency assessment"
    ///
    /// [[roles.sections]]
    /// title = "Craft & Quality"
    ///
    /// [[roles.sections.criteria]]
    /// id = "design_system"
    /// description = "Leans on existing patterns"
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, LadderError> {
        let file: CatalogFile =
            toml::from_str(text).map_err(|e| LadderError::SerializationError(e.to_string()))?;
        Self::new(file.roles)
    }

    /// The table for a level.
    #[must_use]
    pub fn role(&self, level: RoleLevel) -> Option<&RoleDefinition> {
        self.roles.get(level.index())
    }

    /// All tables in ladder order.
    #[must_use]
    pub fn roles(&self) -> &[RoleDefinition] {
        &self.roles
    }

    /// Total number of criteria across every role.
    #[must_use]
    pub fn criterion_count(&self) -> usize {
        self.roles.iter().map(RoleDefinition::criterion_count).sum()
    }
}

// =============================================================================
// TESTS
// =============================================================================
