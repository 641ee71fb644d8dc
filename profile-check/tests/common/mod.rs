//! Shared fixtures for integration tests.

use profile_check::{
    AstroDetails, BasicInfo, CareerDetails, EducationDetails, FamilyDetails, LifestyleHobbies,
    Profile, ReligionDetails,
};

/// A profile with every required field filled in.
#[allow(dead_code)]
pub fn full_profile() -> Profile {
    Profile {
        basic_info: Some(BasicInfo {
            first_name: Some("Asha".to_string()),
            last_name: Some("Rao".to_string()),
            age: Some(29.0),
        }),
        religion_details: Some(ReligionDetails {
            religion: Some("Hindu".to_string()),
        }),
        family_details: Some(FamilyDetails {
            father_occupation: Some("Teacher".to_string()),
        }),
        astro_details: Some(AstroDetails {
            date_of_birth: Some("1996-04-12".to_string()),
        }),
        education_details: Some(EducationDetails {
            highest_degree: Some("MSc".to_string()),
        }),
        career_details: Some(CareerDetails {
            occupation: Some("Engineer".to_string()),
        }),
        lifestyle_hobbies: Some(LifestyleHobbies {
            diet: Some("Vegetarian".to_string()),
        }),
    }
}

/// The JSON document equivalent of [`full_profile`].
#[allow(dead_code)]
pub const FULL_JSON: &[u8] = br#"{
    "basicInfo": {"firstName": "Asha", "lastName": "Rao", "age": 29},
    "religionDetails": {"religion": "Hindu"},
    "familyDetails": {"fatherOccupation": "Teacher"},
    "astroDetails": {"dateOfBirth": "1996-04-12"},
    "educationDetails": {"highestDegree": "MSc"},
    "careerDetails": {"occupation": "Engineer"},
    "lifestyleHobbies": {"diet": "Vegetarian"}
}"#;
