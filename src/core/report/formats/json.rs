//! JSON report rendering backed by serde

use crate::core::report::{StudentProfile, TeacherProfile};

/// Serialize a student profile as pretty-printed JSON
///
/// # Errors
/// Returns an error if serialization fails
pub fn student(profile: &StudentProfile<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(profile)
}

/// Serialize a teacher profile as pretty-printed JSON
///
/// # Errors
/// Returns an error if serialization fails
pub fn teacher(profile: &TeacherProfile<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(profile)
}
