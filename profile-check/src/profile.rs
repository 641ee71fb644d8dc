//! Typed profile record.
//!
//! Every section and every field is optional: a profile is filled in over
//! many sessions and any part of it may be missing when it is checked. Wire
//! names are camelCase to match the documents the client stores.

// Plain records, built with struct literals by callers
#![allow(clippy::exhaustive_structs)]

use crate::config::Limits;
use crate::error::ProfileError;
use crate::json::check_input;
use miniserde::{Deserialize, Serialize};

/// Name and age.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    /// Given name.
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    /// Age in years. Zero is treated as not filled in.
    pub age: Option<f64>,
}

/// Religious background.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReligionDetails {
    /// Religion.
    pub religion: Option<String>,
}

/// Family background.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyDetails {
    /// Father's occupation.
    #[serde(rename = "fatherOccupation")]
    pub father_occupation: Option<String>,
}

/// Birth data used for horoscope matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AstroDetails {
    /// Date of birth as entered by the client, usually `YYYY-MM-DD`.
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<String>,
}

/// Education.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationDetails {
    /// Highest degree obtained.
    #[serde(rename = "highestDegree")]
    pub highest_degree: Option<String>,
}

/// Career.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerDetails {
    /// Current occupation.
    pub occupation: Option<String>,
}

/// Lifestyle and hobbies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifestyleHobbies {
    /// Dietary preference.
    pub diet: Option<String>,
}

/// A user profile with every section optional.
///
/// # Example
///
/// ```
/// use profile_check::{BasicInfo, Profile, is_profile_complete};
///
/// let profile = Profile {
///     basic_info: Some(BasicInfo {
///         first_name: Some("Asha".into()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert!(!is_profile_complete(Some(&profile)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// `basicInfo` section.
    #[serde(rename = "basicInfo")]
    pub basic_info: Option<BasicInfo>,
    /// `religionDetails` section.
    #[serde(rename = "religionDetails")]
    pub religion_details: Option<ReligionDetails>,
    /// `familyDetails` section.
    #[serde(rename = "familyDetails")]
    pub family_details: Option<FamilyDetails>,
    /// `astroDetails` section.
    #[serde(rename = "astroDetails")]
    pub astro_details: Option<AstroDetails>,
    /// `educationDetails` section.
    #[serde(rename = "educationDetails")]
    pub education_details: Option<EducationDetails>,
    /// `careerDetails` section.
    #[serde(rename = "careerDetails")]
    pub career_details: Option<CareerDetails>,
    /// `lifestyleHobbies` section.
    #[serde(rename = "lifestyleHobbies")]
    pub lifestyle_hobbies: Option<LifestyleHobbies>,
}

impl Profile {
    /// Parse a profile document under the default [`Limits`].
    ///
    /// Unknown keys are ignored and `null` reads as absent. A field with the
    /// wrong type (say, `"age": "thirty"`) rejects the whole document; use
    /// [`is_json_profile_complete`](crate::is_json_profile_complete) when the
    /// shape cannot be trusted.
    pub fn from_json(data: &[u8]) -> Result<Self, ProfileError> {
        Self::from_json_with(data, &Limits::new())
    }

    /// Parse a profile document under explicit limits.
    pub fn from_json_with(data: &[u8], limits: &Limits) -> Result<Self, ProfileError> {
        let text = check_input(data, limits)?;
        miniserde::json::from_str(text).map_err(|_| ProfileError::InvalidJson)
    }

    /// Serialize to a JSON string. Absent sections and fields are written as `null`.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        miniserde::json::to_string(self)
    }
}
