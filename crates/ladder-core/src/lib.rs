//! # ladder-core
//!
//! The deterministic scoring engine for Ladder - THE LOGIC.
//!
//! This crate implements the product-designer competency assessment: six
//! role levels described by declarative tables, criterion scores on a
//! `[0, 5]` half-point scale, section averages, role overalls and a
//! cross-role review summary.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Owns all scoring state through an explicit [`AssessmentSession`]
//! - Derives every average on read; nothing derived is ever stored
//! - Uses exact integer arithmetic only (no floats)
//! - Persists nothing except the participant name
//! - Has NO async, NO network dependencies (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod assessment;
pub mod intake;
pub mod name_cache;
pub mod primitives;
pub mod roles;
pub mod scoresheet;
pub mod scoring;
pub mod session;
pub mod storage;
pub mod summary;
pub mod types;
pub mod wizard;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{LadderError, Score};

// =============================================================================
// RE-EXPORTS: Scoring Engine
// =============================================================================

pub use assessment::{Criterion, RoleAssessment, Section};
pub use roles::{CriterionDefinition, RoleCatalog, RoleDefinition, RoleLevel, SectionDefinition};
pub use scoring::{Mean, ScoreScale, role_overall, section_average};
pub use summary::{
    Aggregator, AssessmentSummary, FinalScorePolicy, RoleSummary, SectionScore, build_summary,
};

// =============================================================================
// RE-EXPORTS: Session & Wizard
// =============================================================================

pub use intake::{AssessmentKind, Intake};
pub use name_cache::{MemoryNameCache, NameCache};
pub use scoresheet::{RoleScores, Scoresheet};
pub use session::{AssessmentSession, NameBackend};
pub use storage::RedbNameCache;
pub use wizard::{PageContent, Step, StepKind};
