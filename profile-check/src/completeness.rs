//! Profile completeness check.
//!
//! A profile is complete when all nine [`RequiredField`]s are present and
//! [truthy](crate::Truthy). The check is total: absent profiles, missing
//! sections, `null`s, wrong types and malformed bodies all answer "incomplete"
//! and never panic or error.
//!
//! ```
//! use profile_check::{json, is_json_profile_complete, missing_json_fields, RequiredField};
//!
//! let body = json::try_parse(br#"{"basicInfo":{"firstName":"Asha","lastName":"Rao","age":0}}"#);
//! assert!(!is_json_profile_complete(body.as_ref()));
//!
//! let missing = missing_json_fields(body.as_ref());
//! assert_eq!(missing.first(), Some(&RequiredField::Age));
//! assert_eq!(missing.len(), 7);
//! ```

use crate::config::Limits;
use crate::constants::{
    SECTION_ASTRO, SECTION_BASIC_INFO, SECTION_CAREER, SECTION_EDUCATION, SECTION_FAMILY,
    SECTION_LIFESTYLE, SECTION_RELIGION,
};
use crate::json::{self, JsonValue};
use crate::profile::Profile;
use crate::truthy::Truthy;

/// A field that must be filled in for a profile to be complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum RequiredField {
    /// `basicInfo.firstName`
    FirstName,
    /// `basicInfo.lastName`
    LastName,
    /// `basicInfo.age`
    Age,
    /// `religionDetails.religion`
    Religion,
    /// `familyDetails.fatherOccupation`
    FatherOccupation,
    /// `astroDetails.dateOfBirth`
    DateOfBirth,
    /// `educationDetails.highestDegree`
    HighestDegree,
    /// `careerDetails.occupation`
    Occupation,
    /// `lifestyleHobbies.diet`
    Diet,
}

impl RequiredField {
    /// Every required field, in document order.
    pub const ALL: [Self; 9] = [
        Self::FirstName,
        Self::LastName,
        Self::Age,
        Self::Religion,
        Self::FatherOccupation,
        Self::DateOfBirth,
        Self::HighestDegree,
        Self::Occupation,
        Self::Diet,
    ];

    /// Wire name of the enclosing section.
    #[must_use]
    pub const fn section(self) -> &'static str {
        match self {
            Self::FirstName | Self::LastName | Self::Age => SECTION_BASIC_INFO,
            Self::Religion => SECTION_RELIGION,
            Self::FatherOccupation => SECTION_FAMILY,
            Self::DateOfBirth => SECTION_ASTRO,
            Self::HighestDegree => SECTION_EDUCATION,
            Self::Occupation => SECTION_CAREER,
            Self::Diet => SECTION_LIFESTYLE,
        }
    }

    /// Wire name of the field inside its section.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Age => "age",
            Self::Religion => "religion",
            Self::FatherOccupation => "fatherOccupation",
            Self::DateOfBirth => "dateOfBirth",
            Self::HighestDegree => "highestDegree",
            Self::Occupation => "occupation",
            Self::Diet => "diet",
        }
    }

    /// `[section, key]`, ready for the `json` path accessors.
    #[must_use]
    pub const fn path(self) -> [&'static str; 2] {
        [self.section(), self.key()]
    }

    /// Whether this field is filled in on a typed profile.
    #[must_use]
    pub fn is_filled(self, profile: &Profile) -> bool {
        match self {
            Self::FirstName => profile
                .basic_info
                .as_ref()
                .and_then(|s| s.first_name.as_ref())
                .is_truthy(),
            Self::LastName => profile
                .basic_info
                .as_ref()
                .and_then(|s| s.last_name.as_ref())
                .is_truthy(),
            Self::Age => profile.basic_info.as_ref().and_then(|s| s.age).is_truthy(),
            Self::Religion => profile
                .religion_details
                .as_ref()
                .and_then(|s| s.religion.as_ref())
                .is_truthy(),
            Self::FatherOccupation => profile
                .family_details
                .as_ref()
                .and_then(|s| s.father_occupation.as_ref())
                .is_truthy(),
            Self::DateOfBirth => profile
                .astro_details
                .as_ref()
                .and_then(|s| s.date_of_birth.as_ref())
                .is_truthy(),
            Self::HighestDegree => profile
                .education_details
                .as_ref()
                .and_then(|s| s.highest_degree.as_ref())
                .is_truthy(),
            Self::Occupation => profile
                .career_details
                .as_ref()
                .and_then(|s| s.occupation.as_ref())
                .is_truthy(),
            Self::Diet => profile
                .lifestyle_hobbies
                .as_ref()
                .and_then(|s| s.diet.as_ref())
                .is_truthy(),
        }
    }

    /// Whether this field is filled in on a JSON document of any shape.
    #[must_use]
    pub fn is_filled_json(self, profile: &JsonValue) -> bool {
        profile.path_truthy(&self.path())
    }
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.section(), self.key())
    }
}

/// Whether every required field of a typed profile is filled in.
///
/// `None` is incomplete.
///
/// ```
/// use profile_check::is_profile_complete;
///
/// assert!(!is_profile_complete(None));
/// assert!(!is_profile_complete(Some(&Default::default())));
/// ```
#[must_use]
pub fn is_profile_complete(profile: Option<&Profile>) -> bool {
    profile.is_some_and(|p| RequiredField::ALL.iter().all(|f| f.is_filled(p)))
}

/// Whether every required field of a JSON profile is filled in.
///
/// Accepts documents of any shape. Sections that are not objects, fields of
/// unexpected types and `null` are judged by truthiness, never rejected.
#[must_use]
pub fn is_json_profile_complete(profile: Option<&JsonValue>) -> bool {
    profile.is_some_and(|p| RequiredField::ALL.iter().all(|f| f.is_filled_json(p)))
}

/// Required fields not filled in on a typed profile, in [`RequiredField::ALL`] order.
#[must_use]
pub fn missing_fields(profile: Option<&Profile>) -> Vec<RequiredField> {
    match profile {
        Some(p) => RequiredField::ALL
            .into_iter()
            .filter(|f| !f.is_filled(p))
            .collect(),
        None => RequiredField::ALL.to_vec(),
    }
}

/// Required fields not filled in on a JSON profile, in [`RequiredField::ALL`] order.
#[must_use]
pub fn missing_json_fields(profile: Option<&JsonValue>) -> Vec<RequiredField> {
    match profile {
        Some(p) => RequiredField::ALL
            .into_iter()
            .filter(|f| !f.is_filled_json(p))
            .collect(),
        None => RequiredField::ALL.to_vec(),
    }
}

/// Outcome of a completeness check with the fields still to fill in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletenessReport {
    missing: Vec<RequiredField>,
}

impl CompletenessReport {
    /// Report for a typed profile.
    #[must_use]
    pub fn for_profile(profile: Option<&Profile>) -> Self {
        Self {
            missing: missing_fields(profile),
        }
    }

    /// Report for a JSON profile.
    #[must_use]
    pub fn for_json(profile: Option<&JsonValue>) -> Self {
        Self {
            missing: missing_json_fields(profile),
        }
    }

    /// Whether nothing is missing.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Fields still to fill in.
    #[must_use]
    pub fn missing(&self) -> &[RequiredField] {
        &self.missing
    }

    /// Number of required fields filled in.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.total() - self.missing.len()
    }

    /// Number of required fields.
    #[must_use]
    pub const fn total(&self) -> usize {
        RequiredField::ALL.len()
    }
}

impl std::fmt::Display for CompletenessReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} required fields", self.completed(), self.total())?;
        if let Some((first, rest)) = self.missing.split_first() {
            write!(f, " (missing: {first}")?;
            for field in rest {
                write!(f, ", {field}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// Check a raw profile body.
///
/// The body must be a well-formed JSON document within `limits`; anything
/// else is logged at `warn` and reported with every field missing.
#[must_use]
pub fn check_bytes(data: &[u8], limits: &Limits) -> CompletenessReport {
    match json::try_parse_full_with(data, limits) {
        Ok(value) => {
            let report = CompletenessReport::for_json(Some(&value));
            crate::log!(debug, "profile checked",
                completed: report.completed(),
                total: report.total());
            report
        },
        Err(e) => {
            crate::log!(warn, "profile body rejected", reason: e, bytes: data.len());
            CompletenessReport::for_json(None)
        },
    }
}
