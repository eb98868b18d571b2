//! # Name Cache
//!
//! The only persisted state: a single participant-name string.
//!
//! Reads never fail. An unset or unreadable value reads as `""`; read
//! failures are logged. Writing an empty name clears the stored value.

use crate::intake::check_name;
use crate::LadderError;

/// A single persisted string.
pub trait NameCache: std::fmt::Debug + Send + Sync {
    /// The stored name, or `""` when unset or unreadable.
    fn get(&self) -> String;

    /// Store a name. An empty name clears the stored value.
    fn set(&mut self, name: &str) -> Result<(), LadderError>;
}

/// Volatile name cache for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryNameCache {
    name: Option<String>,
}

impl MemoryNameCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl NameCache for MemoryNameCache {
    fn get(&self) -> String {
        self.name.clone().unwrap_or_default()
    }

    fn set(&mut self, name: &str) -> Result<(), LadderError> {
        check_name(name)?;
        self.name = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };
        Ok(())
    }
}
