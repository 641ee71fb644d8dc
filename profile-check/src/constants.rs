//! Centralized constants for the profile-check crate.
//!
//! All limits and environment variable names live here so the ingest path
//! and the configuration layer agree on defaults.

// ============================================================================
// JSON LIMITS
// ============================================================================

/// Default maximum JSON input size (1MB) - prevents memory exhaustion.
pub const MAX_JSON_SIZE: usize = 1_000_000;

/// Default maximum JSON nesting depth - prevents stack overflow.
///
/// A profile document nests two levels deep (`section.field`), so 20 leaves
/// plenty of room for the extra data callers attach while keeping
/// miniserde's recursive parser well inside the stack.
pub const MAX_JSON_DEPTH: usize = 20;

// ============================================================================
// ENVIRONMENT VARIABLES
// ============================================================================

/// Overrides [`MAX_JSON_SIZE`] for [`Limits::from_env`](crate::Limits::from_env).
pub const ENV_MAX_JSON_SIZE: &str = "PROFILE_MAX_JSON_SIZE";

/// Overrides [`MAX_JSON_DEPTH`] for [`Limits::from_env`](crate::Limits::from_env).
pub const ENV_MAX_JSON_DEPTH: &str = "PROFILE_MAX_JSON_DEPTH";

/// Minimum level emitted by [`log!`](crate::log). One of `debug`, `info`,
/// `warn`, `error`.
pub const ENV_LOG_LEVEL: &str = "PROFILE_LOG_LEVEL";

// ============================================================================
// PROFILE SECTIONS
// ============================================================================

/// Wire name of the basic info section.
pub const SECTION_BASIC_INFO: &str = "basicInfo";

/// Wire name of the religion section.
pub const SECTION_RELIGION: &str = "religionDetails";

/// Wire name of the family section.
pub const SECTION_FAMILY: &str = "familyDetails";

/// Wire name of the astro section.
pub const SECTION_ASTRO: &str = "astroDetails";

/// Wire name of the education section.
pub const SECTION_EDUCATION: &str = "educationDetails";

/// Wire name of the career section.
pub const SECTION_CAREER: &str = "careerDetails";

/// Wire name of the lifestyle section.
pub const SECTION_LIFESTYLE: &str = "lifestyleHobbies";
