//! Errors raised while ingesting profile documents.
//!
//! The completeness check itself is total and never returns these; they come
//! from [`Profile::from_json`](crate::Profile::from_json) and describe why a
//! body could not be read as a profile.

/// Error type for profile ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    /// Input exceeds the configured size limit.
    TooLarge {
        /// Limit in bytes.
        max: usize,
    },
    /// Input nests deeper than the configured depth limit.
    TooDeep {
        /// Limit in levels.
        max: usize,
    },
    /// Input is not valid UTF-8.
    InvalidUtf8,
    /// Input is not JSON, or does not have the shape of a profile.
    InvalidJson,
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooLarge { max } => write!(f, "Profile exceeds maximum size ({max} bytes)"),
            Self::TooDeep { max } => write!(f, "Profile nesting exceeds maximum depth ({max})"),
            Self::InvalidUtf8 => write!(f, "Profile is not valid UTF-8"),
            Self::InvalidJson => write!(f, "Profile is not a valid profile document"),
        }
    }
}

impl std::error::Error for ProfileError {}
