//! # profile-check
//!
//! Null-safe completeness check for partially filled user profiles.
//!
//! A profile is complete when nine fields across seven sections are all
//! present and truthy:
//!
//! | Section | Fields |
//! |---|---|
//! | `basicInfo` | `firstName`, `lastName`, `age` |
//! | `religionDetails` | `religion` |
//! | `familyDetails` | `fatherOccupation` |
//! | `astroDetails` | `dateOfBirth` |
//! | `educationDetails` | `highestDegree` |
//! | `careerDetails` | `occupation` |
//! | `lifestyleHobbies` | `diet` |
//!
//! The check is total. Missing sections, `null`, empty strings, zero and
//! malformed input all mean "incomplete"; nothing panics and nothing errors.
//!
//! ## Typed profiles
//!
//! ```
//! use profile_check::{Profile, is_profile_complete};
//!
//! let profile = Profile::from_json(br#"{"basicInfo":{"firstName":"Asha"}}"#).unwrap();
//! assert!(!is_profile_complete(Some(&profile)));
//! assert!(!is_profile_complete(None));
//! ```
//!
//! ## Documents of unknown shape
//!
//! ```
//! use profile_check::{json, is_json_profile_complete};
//!
//! // A section of the wrong type is just another missing field
//! let body = json::try_parse(br#"{"basicInfo":"Asha","careerDetails":[]}"#);
//! assert!(!is_json_profile_complete(body.as_ref()));
//! ```
//!
//! ## Raw bodies
//!
//! ```
//! use profile_check::{check_bytes, Limits};
//!
//! let report = check_bytes(b"{not json", &Limits::default());
//! assert_eq!(report.to_string().split(' ').next(), Some("0/9"));
//! ```
//!
//! ## Configuration
//!
//! [`Limits::from_env`] and [`log::init_from_env`] read `PROFILE_MAX_JSON_SIZE`,
//! `PROFILE_MAX_JSON_DEPTH` and `PROFILE_LOG_LEVEL` from an environment slice
//! such as [`env::process()`].

pub mod completeness;
pub mod config;
pub mod constants;
pub mod env;
pub mod error;
pub mod json;
pub mod log;
pub mod profile;
pub mod truthy;

pub use completeness::{
    CompletenessReport, RequiredField, check_bytes, is_json_profile_complete,
    is_profile_complete, missing_fields, missing_json_fields,
};
pub use config::{Limits, LogLevel};
pub use error::ProfileError;
pub use json::JsonValue;
pub use profile::{
    AstroDetails, BasicInfo, CareerDetails, EducationDetails, FamilyDetails, LifestyleHobbies,
    Profile, ReligionDetails,
};
pub use truthy::{Truthy, is_truthy};

/// Common imports for callers.
pub mod prelude {
    pub use crate::completeness::{
        CompletenessReport, RequiredField, check_bytes, is_json_profile_complete,
        is_profile_complete,
    };
    pub use crate::config::Limits;
    pub use crate::json::{self, JsonValue};
    pub use crate::log;
    pub use crate::profile::Profile;
    pub use crate::truthy::Truthy;
}
