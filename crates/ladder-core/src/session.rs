//! # Session Module
//!
//! An [`AssessmentSession`] is the single owner of everything one wizard
//! run needs: the role catalog, the aggregator, the intake form, the current
//! step and the name cache. Callers construct it explicitly and pass it
//! around; there is no global state.
//!
//! Scores and notes live only in memory. The name is the only value that
//! outlives the session, and only with the `Persistent` backend.
//!
//! ## Name Backends
//!
//! - `InMemory`: [`MemoryNameCache`] (volatile)
//! - `Persistent`: [`RedbNameCache`] (disk-backed)

use crate::assessment::RoleAssessment;
use crate::intake::Intake;
use crate::name_cache::{MemoryNameCache, NameCache};
use crate::roles::{RoleCatalog, RoleLevel};
use crate::storage::RedbNameCache;
use crate::summary::{Aggregator, AssessmentSummary, FinalScorePolicy};
use crate::wizard::Step;
use crate::{LadderError, Score};
use std::path::Path;

/// Where the participant name is kept.
#[derive(Debug)]
pub enum NameBackend {
    /// Volatile, lost with the session.
    InMemory(MemoryNameCache),
    /// Disk-backed using redb.
    Persistent(RedbNameCache),
}

impl Default for NameBackend {
    fn default() -> Self {
        Self::InMemory(MemoryNameCache::new())
    }
}

impl NameBackend {
    fn cache(&self) -> &dyn NameCache {
        match self {
            NameBackend::InMemory(cache) => cache,
            NameBackend::Persistent(cache) => cache,
        }
    }

    fn cache_mut(&mut self) -> &mut dyn NameCache {
        match self {
            NameBackend::InMemory(cache) => cache,
            NameBackend::Persistent(cache) => cache,
        }
    }
}

/// One wizard run.
///
/// Does not implement `Clone`: the persistent backend owns a database
/// handle.
#[derive(Debug)]
pub struct AssessmentSession {
    catalog: RoleCatalog,
    aggregator: Aggregator,
    intake: Intake,
    step: Step,
    names: NameBackend,
}

impl AssessmentSession {
    /// Create a session with an in-memory name cache.
    #[must_use]
    pub fn new(catalog: RoleCatalog) -> Self {
        Self::with_backend(catalog, NameBackend::default())
    }

    /// Create a session whose name is persisted in a redb file.
    ///
    /// The intake name starts from the cached value.
    pub fn with_redb(path: impl AsRef<Path>, catalog: RoleCatalog) -> Result<Self, LadderError> {
        let cache = RedbNameCache::open(path)?;
        Ok(Self::with_backend(catalog, NameBackend::Persistent(cache)))
    }

    /// Create a session with an explicit name backend.
    #[must_use]
    pub fn with_backend(catalog: RoleCatalog, names: NameBackend) -> Self {
        let aggregator = Aggregator::new(&catalog);
        let intake = Intake {
            full_name: names.cache().get(),
            ..Intake::default()
        };
        Self {
            catalog,
            aggregator,
            intake,
            step: Step::FIRST,
            names,
        }
    }

    /// Check if the name is persisted to disk.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        matches!(self.names, NameBackend::Persistent(_))
    }

    #[must_use]
    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    // =========================================================================
    // NAME & INTAKE
    // =========================================================================

    /// The cached participant name (`""` when unset).
    #[must_use]
    pub fn name(&self) -> String {
        self.names.cache().get()
    }

    /// Write the participant name through to the cache and the intake form.
    pub fn set_name(&mut self, name: &str) -> Result<(), LadderError> {
        self.names.cache_mut().set(name)?;
        self.intake.full_name = name.to_string();
        Ok(())
    }

    #[must_use]
    pub fn intake(&self) -> &Intake {
        &self.intake
    }

    /// Replace the intake form. The full name is written to the cache.
    pub fn set_intake(&mut self, intake: Intake) -> Result<(), LadderError> {
        let intake = intake.normalized()?;
        self.names.cache_mut().set(&intake.full_name)?;
        self.intake = intake;
        Ok(())
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn go_to(&mut self, step: Step) {
        self.step = step;
    }

    /// Move to the next step. Returns `None` on the review page.
    pub fn advance(&mut self) -> Option<Step> {
        let next = self.step.next()?;
        self.step = next;
        Some(next)
    }

    /// Move to the previous step. Returns `None` on intake, where the caller
    /// leaves the wizard.
    pub fn retreat(&mut self) -> Option<Step> {
        let previous = self.step.previous()?;
        self.step = previous;
        Some(previous)
    }

    // =========================================================================
    // SCORING
    // =========================================================================

    pub fn assessment(&self, level: RoleLevel) -> Result<&RoleAssessment, LadderError> {
        self.aggregator.get(level)
    }

    /// Set one criterion score. Returns the previous score.
    pub fn set_score(
        &mut self,
        level: RoleLevel,
        criterion_id: &str,
        score: Score,
    ) -> Result<Score, LadderError> {
        self.aggregator.record(level, criterion_id, score)
    }

    pub fn set_notes(
        &mut self,
        level: RoleLevel,
        notes: impl Into<String>,
    ) -> Result<(), LadderError> {
        self.aggregator.get_mut(level)?.set_notes(notes)
    }

    pub fn summary(&self, policy: FinalScorePolicy) -> Result<AssessmentSummary, LadderError> {
        self.aggregator.summary(policy)
    }

    /// Zero every score and clear all notes. Name and intake are kept.
    pub fn reset_scores(&mut self) {
        self.aggregator.reset();
    }

    pub(crate) fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    pub(crate) fn replace_aggregator(&mut self, aggregator: Aggregator) {
        self.aggregator = aggregator;
    }
}

// =============================================================================
// TESTS
// =============================================================================
