//! Report format implementations
//!
//! Renderers for plain text, Markdown and JSON output, plus the shared
//! label helpers that turn unresolved references into `<unknown>`.

pub mod json;
pub mod markdown;
pub mod text;

use crate::core::models::{Department, Discipline, Faculty, Group, Student, Teacher};
use crate::core::report::{GradeLine, StudentProfile, TeacherProfile, UNKNOWN};
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain text for the terminal
    Text,
    /// Markdown, renders well in editors and forges
    Markdown,
    /// Pretty-printed JSON
    Json,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Render a student profile in the requested format
///
/// # Errors
/// Returns an error when JSON serialization fails.
pub fn render_student(
    profile: &StudentProfile<'_>,
    format: ReportFormat,
) -> Result<String, Box<dyn Error>> {
    match format {
        ReportFormat::Text => Ok(text::student(profile)),
        ReportFormat::Markdown => Ok(markdown::student(profile)),
        ReportFormat::Json => Ok(json::student(profile)?),
    }
}

/// Render a teacher profile in the requested format
///
/// # Errors
/// Returns an error when JSON serialization fails.
pub fn render_teacher(
    profile: &TeacherProfile<'_>,
    format: ReportFormat,
) -> Result<String, Box<dyn Error>> {
    match format {
        ReportFormat::Text => Ok(text::teacher(profile)),
        ReportFormat::Markdown => Ok(markdown::teacher(profile)),
        ReportFormat::Json => Ok(json::teacher(profile)?),
    }
}

pub(crate) fn faculty_name(faculty: Option<&Faculty>) -> &str {
    faculty.map_or(UNKNOWN, |f| f.name.as_str())
}

pub(crate) fn department_name(department: Option<&Department>) -> &str {
    department.map_or(UNKNOWN, |d| d.name.as_str())
}

pub(crate) fn discipline_name(discipline: Option<&Discipline>) -> &str {
    discipline.map_or(UNKNOWN, |d| d.name.as_str())
}

pub(crate) fn group_label(group: Option<&Group>) -> String {
    group.map_or_else(|| UNKNOWN.to_string(), Group::display)
}

pub(crate) fn teacher_name(teacher: Option<&Teacher>) -> String {
    teacher.map_or_else(|| UNKNOWN.to_string(), Teacher::short_name)
}

pub(crate) fn student_name(student: Option<&Student>) -> String {
    student.map_or_else(|| UNKNOWN.to_string(), Student::short_name)
}

/// Research leadership of a teacher in one phrase
pub(crate) const fn research_summary(teacher: &Teacher) -> &'static str {
    match (
        teacher.leads_research_topics,
        teacher.leads_research_directions,
    ) {
        (true, true) => "topics and directions",
        (true, false) => "topics",
        (false, true) => "directions",
        (false, false) => "none",
    }
}

/// Grade note for one timeline entry: the committed total and mark when
/// the student has a grade for the discipline, "not graded" otherwise
pub(crate) fn grade_note(grades: &[GradeLine<'_>], discipline_id: Uuid) -> String {
    grades
        .iter()
        .find(|line| line.record.discipline_id == discipline_id)
        .map_or_else(
            || "not graded".to_string(),
            |line| format!("{} ({})", line.record.total_points, line.record.grade),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!(ReportFormat::from_str("text"), Ok(ReportFormat::Text));
        assert_eq!(ReportFormat::from_str("md"), Ok(ReportFormat::Markdown));
        assert_eq!(ReportFormat::from_str("JSON"), Ok(ReportFormat::Json));
        assert!(ReportFormat::from_str("pdf").is_err());
    }

    #[test]
    fn test_format_extension_and_display() {
        assert_eq!(ReportFormat::Text.extension(), "txt");
        assert_eq!(ReportFormat::Markdown.extension(), "md");
        assert_eq!(ReportFormat::Json.extension(), "json");
        assert_eq!(ReportFormat::Markdown.to_string(), "markdown");
    }

    #[test]
    fn test_unresolved_references_render_as_unknown() {
        assert_eq!(faculty_name(None), UNKNOWN);
        assert_eq!(group_label(None), UNKNOWN);
        assert_eq!(teacher_name(None), UNKNOWN);
    }

    #[test]
    fn test_grade_note_resolves_by_discipline() {
        use crate::core::models::StudentGrade;

        let record = StudentGrade::new(Uuid::new_v4(), Uuid::new_v4(), 55, 30, 85, "4".to_string());
        let lines = [GradeLine {
            discipline: None,
            record: &record,
        }];

        assert_eq!(grade_note(&lines, record.discipline_id), "85 (4)");
        assert_eq!(grade_note(&lines, Uuid::new_v4()), "not graded");
    }
}
