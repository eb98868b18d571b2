//! # Innate Primitives
//!
//! Hardcoded runtime constants for the Ladder CORE.
//!
//! The scale, the wizard length and the input bounds are compiled into the
//! binary and are immutable at runtime. Role tables live in [`crate::roles`].

/// Number of half points in one whole point.
///
/// Scores are stored as half-point counts so that every average stays an
/// exact integer ratio.
pub const HALF_POINTS_PER_POINT: u8 = 2;

/// Lowest score on the slider, in half points.
pub const MIN_HALF_POINTS: u8 = 0;

/// Highest score on the slider, in half points (5.0).
pub const MAX_HALF_POINTS: u8 = 10;

/// Slider granularity, in half points (0.5).
pub const STEP_HALF_POINTS: u8 = 1;

/// Total number of wizard steps: intake, six role levels, review.
pub const STEP_COUNT: u8 = 8;

/// First wizard step that renders a role assessment.
pub const FIRST_ROLE_STEP: u8 = 2;

/// Key under which the participant name is persisted.
pub const NAME_CACHE_KEY: &str = "userName";

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum length for the cached participant name.
pub const MAX_NAME_LENGTH: usize = 256;

/// Maximum length for any other intake field (email, manager name/email).
pub const MAX_INTAKE_FIELD_LENGTH: usize = 256;

/// Maximum length for qualitative notes on one role.
///
/// Notes longer than this (16KB) are rejected rather than truncated.
pub const MAX_NOTES_LENGTH: usize = 16 * 1024;

/// Maximum number of criteria in a single section of a custom catalog.
///
/// Keeps rational denominators small; the built-in tables use at most six.
pub const MAX_CRITERIA_PER_SECTION: usize = 64;

/// Maximum number of sections in a single role of a custom catalog.
pub const MAX_SECTIONS_PER_ROLE: usize = 32;
