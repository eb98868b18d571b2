//! # Storage
//!
//! Disk-backed persistence. Only the participant name is ever stored.

mod redb_name_cache;

pub use redb_name_cache::RedbNameCache;
