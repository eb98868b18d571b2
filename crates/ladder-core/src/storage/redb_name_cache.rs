//! # redb-backed Name Cache
//!
//! Stores the participant name under a single key of a redb table.
//!
//! redb gives crash-safe, transactional writes with zero configuration, so a
//! name written by one `ladder` invocation is visible to the next one.

use crate::name_cache::NameCache;
use crate::intake::check_name;
use crate::primitives::NAME_CACHE_KEY;
use crate::LadderError;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::{Path, PathBuf};

/// Table for cached strings: key -> value
const NAMES: TableDefinition<&str, &str> = TableDefinition::new("names");

/// Log a read failure as a structured line and fall back to the default.
///
/// The core carries no tracing dependency; the app may redirect stderr.
fn log_and_default<T: Default>(result: Result<T, LadderError>, context: &str) -> T {
    match result {
        Ok(v) => v,
        Err(e) => {
            eprintln!(
                "{{\"level\":\"warn\",\"target\":\"ladder_core::storage\",\"message\":\"I/O error in {}: {}\"}}",
                context, e
            );
            T::default()
        }
    }
}

fn io_error(e: impl std::fmt::Display) -> LadderError {
    LadderError::IoError(e.to_string())
}

/// A name cache persisted in a redb database file.
pub struct RedbNameCache {
    db: Database,
    path: PathBuf,
}

impl std::fmt::Debug for RedbNameCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbNameCache")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl RedbNameCache {
    /// Open or create the database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LadderError> {
        let db = Database::create(path.as_ref()).map_err(io_error)?;

        // Create the table up front so reads never see a missing table.
        {
            let write_txn = db.begin_write().map_err(io_error)?;
            let _ = write_txn.open_table(NAMES).map_err(io_error)?;
            write_txn.commit().map_err(io_error)?;
        }

        Ok(Self {
            db,
            path: path.as_ref().to_path_buf(),
        })
    }

    /// Path of the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored name, surfacing storage errors.
    pub fn try_get(&self) -> Result<Option<String>, LadderError> {
        let read_txn = self.db.begin_read().map_err(io_error)?;
        let table = read_txn.open_table(NAMES).map_err(io_error)?;
        let value = table
            .get(NAME_CACHE_KEY)
            .map_err(io_error)?
            .map(|v| v.value().to_string());
        Ok(value)
    }
}

impl NameCache for RedbNameCache {
    fn get(&self) -> String {
        log_and_default(self.try_get(), "RedbNameCache::get").unwrap_or_default()
    }

    fn set(&mut self, name: &str) -> Result<(), LadderError> {
        check_name(name)?;
        let write_txn = self.db.begin_write().map_err(io_error)?;
        {
            let mut table = write_txn.open_table(NAMES).map_err(io_error)?;
            if name.is_empty() {
                table.remove(NAME_CACHE_KEY).map_err(io_error)?;
            } else {
                table.insert(NAME_CACHE_KEY, name).map_err(io_error)?;
            }
        }
        write_txn.commit().map_err(io_error)?;
        Ok(())
    }
}
