//! Validation rules for registry records
//!
//! Stateless predicates invoked before any mutation commits to the registry.
//! Every rejection names the offending field and the rule it violated;
//! invalid input never panics and never leaves partial state behind.

pub mod conflicts;
pub mod grades;

use crate::core::models::{
    Department, Discipline, Faculty, Group, Student, Teacher, ThesisWork, WorkLoad,
};
use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

/// Valid range for calendar years (admission, thesis defense)
pub const YEAR_RANGE: RangeInclusive<u16> = 1900..=2100;

/// Valid range for course numbers
pub const COURSE_RANGE: RangeInclusive<u16> = 1..=6;

/// Valid range for semester numbers
pub const SEMESTER_RANGE: RangeInclusive<u16> = 1..=10;

/// Valid range for assigned workload hours
pub const HOURS_RANGE: RangeInclusive<u16> = 1..=1000;

/// Valid range for per-lesson-type discipline hours; zero means not taught
pub const PART_HOURS_RANGE: RangeInclusive<u16> = 0..=1000;

/// Valid range for thesis defense grades
pub const THESIS_GRADE_RANGE: RangeInclusive<u16> = 2..=5;

// Latin and Cyrillic letters, spaces, hyphens and periods. Group numbers
// and titles additionally allow digits.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Zа-яА-ЯёЁ\s\.\-]+$").expect("name pattern must compile"));

static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-zA-Zа-яА-ЯёЁ\s\.\-]+$").expect("title pattern must compile")
});

static ACADEMIC_YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}/\d{4}$").expect("academic year pattern must compile"));

/// A rejected mutation, naming the field and the rule it broke
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Required text field is empty after trimming
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    /// Text field contains characters outside letters, spaces, hyphens and periods
    #[error("{field} may only contain letters, spaces, hyphens and periods")]
    InvalidName { field: &'static str },

    /// Text field contains characters outside letters, digits, spaces, hyphens and periods
    #[error("{field} may only contain letters, digits, spaces, hyphens and periods")]
    InvalidTitle { field: &'static str },

    /// Numeric field falls outside its legal range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u16,
        max: u16,
        value: u16,
    },

    /// Academic year field does not match the YYYY/YYYY form
    #[error("{field} must be an academic year in YYYY/YYYY form")]
    InvalidAcademicYear { field: &'static str },

    /// Required foreign key is nil
    #[error("{field} is not selected")]
    NotSelected { field: &'static str },

    /// Foreign key does not resolve to a stored record
    #[error("{field} does not refer to a known {entity}")]
    UnknownReference {
        field: &'static str,
        entity: &'static str,
    },

    /// Mutation targets an identifier the registry does not hold
    #[error("no {entity} with the given identifier")]
    UnknownId { entity: &'static str },

    /// Teacher position requires a higher academic title
    #[error("academic title is too low for position {position}")]
    PositionTitleMismatch { position: &'static str },

    /// All three per-lesson-type hour fields are zero
    #[error("at least one of lecture, seminar and laboratory hours must be nonzero")]
    NoTaughtHours,

    /// Another teacher already holds this lesson slot
    #[error("{lesson} for this discipline, group and semester is already assigned to another teacher")]
    LessonSlotTaken { lesson: &'static str },

    /// Workload references a discipline taught to a different group
    #[error("discipline belongs to a different group than the workload")]
    GroupMismatch,

    /// Teacher has no eligibility link for the discipline
    #[error("teacher is not linked to this discipline")]
    NotLinkedToDiscipline,

    /// Supervisor candidate leads neither research topics nor directions
    #[error("supervisor must lead research topics or research directions")]
    IneligibleSupervisor,

    /// A link for this (teacher, discipline) pair already exists
    #[error("teacher is already linked to this discipline")]
    DuplicateLink,
}

/// Check a person or unit name: non-empty, letters/spaces/hyphens/periods only
///
/// # Errors
/// Returns [`ValidationError::Empty`] or [`ValidationError::InvalidName`].
pub fn validate_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if !NAME_PATTERN.is_match(value) {
        return Err(ValidationError::InvalidName { field });
    }
    Ok(())
}

/// Check a title-like field (group numbers, discipline and thesis titles):
/// the name rule plus digits
///
/// # Errors
/// Returns [`ValidationError::Empty`] or [`ValidationError::InvalidTitle`].
pub fn validate_title(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if !TITLE_PATTERN.is_match(value) {
        return Err(ValidationError::InvalidTitle { field });
    }
    Ok(())
}

/// Check that a numeric field falls inside its range
///
/// # Errors
/// Returns [`ValidationError::OutOfRange`] naming the field and bounds.
pub fn validate_range(
    field: &'static str,
    value: u16,
    range: &RangeInclusive<u16>,
) -> Result<(), ValidationError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min: *range.start(),
            max: *range.end(),
            value,
        })
    }
}

/// Check an academic year field against the YYYY/YYYY form
///
/// # Errors
/// Returns [`ValidationError::InvalidAcademicYear`].
pub fn validate_academic_year(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if ACADEMIC_YEAR_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidAcademicYear { field })
    }
}

/// Validate the intra-record fields of a faculty
///
/// # Errors
/// Returns the first field rule the faculty breaks.
pub fn check_faculty(faculty: &Faculty) -> Result<(), ValidationError> {
    validate_name("name", &faculty.name)?;
    validate_name("dean", &faculty.dean)
}

/// Validate the intra-record fields of a department
///
/// # Errors
/// Returns the first field rule the department breaks.
pub fn check_department(department: &Department) -> Result<(), ValidationError> {
    validate_name("name", &department.name)?;
    validate_name("head", &department.head)
}

/// Validate the intra-record fields of a group
///
/// # Errors
/// Returns the first field rule the group breaks.
pub fn check_group(group: &Group) -> Result<(), ValidationError> {
    validate_title("number", &group.number)?;
    validate_range("year_of_admission", group.year_of_admission, &YEAR_RANGE)?;
    validate_range("course", group.course, &COURSE_RANGE)
}

/// Validate the intra-record fields of a student; the middle name may be empty
///
/// # Errors
/// Returns the first field rule the student breaks.
pub fn check_student(student: &Student) -> Result<(), ValidationError> {
    validate_name("last_name", &student.last_name)?;
    validate_name("first_name", &student.first_name)?;
    if !student.middle_name.is_empty() {
        validate_name("middle_name", &student.middle_name)?;
    }
    validate_title("record_book_number", &student.record_book_number)
}

/// Validate the intra-record fields of a teacher, including the
/// position/title coupling
///
/// # Errors
/// Returns the first field rule the teacher breaks.
pub fn check_teacher(teacher: &Teacher) -> Result<(), ValidationError> {
    validate_name("last_name", &teacher.last_name)?;
    validate_name("first_name", &teacher.first_name)?;
    if !teacher.middle_name.is_empty() {
        validate_name("middle_name", &teacher.middle_name)?;
    }
    conflicts::check_position_title(teacher)
}

/// Validate the intra-record fields of a discipline
///
/// # Errors
/// Returns the first field rule the discipline breaks.
pub fn check_discipline(discipline: &Discipline) -> Result<(), ValidationError> {
    validate_title("name", &discipline.name)?;
    validate_range("semester", discipline.semester(), &SEMESTER_RANGE)?;
    validate_range("lecture_hours", discipline.lecture_hours, &PART_HOURS_RANGE)?;
    validate_range("seminar_hours", discipline.seminar_hours, &PART_HOURS_RANGE)?;
    validate_range(
        "laboratory_hours",
        discipline.laboratory_hours,
        &PART_HOURS_RANGE,
    )?;
    if discipline.lecture_hours == 0
        && discipline.seminar_hours == 0
        && discipline.laboratory_hours == 0
    {
        return Err(ValidationError::NoTaughtHours);
    }
    Ok(())
}

/// Validate the intra-record fields of a workload assignment
///
/// # Errors
/// Returns the first field rule the workload breaks.
pub fn check_workload(workload: &WorkLoad) -> Result<(), ValidationError> {
    validate_range("hours", workload.hours, &HOURS_RANGE)?;
    validate_academic_year("academic_year", &workload.academic_year)?;
    validate_range("semester", workload.semester, &SEMESTER_RANGE)
}

/// Validate the intra-record fields of a thesis work
///
/// # Errors
/// Returns the first field rule the thesis breaks.
pub fn check_thesis(thesis: &ThesisWork) -> Result<(), ValidationError> {
    validate_title("title", &thesis.title)?;
    validate_range("year", thesis.year, &YEAR_RANGE)?;
    if let Some(grade) = thesis.grade {
        validate_range("grade", grade, &THESIS_GRADE_RANGE)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_accepts_cyrillic_and_latin() {
        assert!(validate_name("name", "Иванов-Петров").is_ok());
        assert!(validate_name("name", "St. John Smith").is_ok());
    }

    #[test]
    fn test_validate_name_rejects_empty_and_digits() {
        assert_eq!(
            validate_name("dean", "   "),
            Err(ValidationError::Empty { field: "dean" })
        );
        assert_eq!(
            validate_name("dean", "Agent 47"),
            Err(ValidationError::InvalidName { field: "dean" })
        );
    }

    #[test]
    fn test_validate_title_allows_digits() {
        assert!(validate_title("number", "Б-201").is_ok());
        assert!(validate_title("number", "CS-42").is_ok());
        assert_eq!(
            validate_title("number", "CS_42"),
            Err(ValidationError::InvalidTitle { field: "number" })
        );
    }

    #[test]
    fn test_validate_range_bounds() {
        assert!(validate_range("year", 1900, &YEAR_RANGE).is_ok());
        assert!(validate_range("year", 2100, &YEAR_RANGE).is_ok());
        assert_eq!(
            validate_range("year", 1899, &YEAR_RANGE),
            Err(ValidationError::OutOfRange {
                field: "year",
                min: 1900,
                max: 2100,
                value: 1899
            })
        );
    }

    #[test]
    fn test_validate_academic_year() {
        assert!(validate_academic_year("academic_year", "2024/2025").is_ok());
        assert!(validate_academic_year("academic_year", "2024-2025").is_err());
        assert!(validate_academic_year("academic_year", "24/25").is_err());
    }

    #[test]
    fn test_check_discipline_requires_some_hours() {
        use crate::core::models::ControlForm;
        use uuid::Uuid;

        let mut discipline = crate::core::models::Discipline::new(
            "Algebra".to_string(),
            1,
            0,
            0,
            0,
            ControlForm::Exam,
            Uuid::new_v4(),
        );
        assert_eq!(check_discipline(&discipline), Err(ValidationError::NoTaughtHours));

        discipline.seminar_hours = 17;
        assert!(check_discipline(&discipline).is_ok());
    }

    #[test]
    fn test_check_student_allows_empty_middle_name() {
        use uuid::Uuid;

        let student = crate::core::models::Student::new(
            "Lee".to_string(),
            "Ada".to_string(),
            String::new(),
            Uuid::new_v4(),
            "RB-1001".to_string(),
            0.0,
        );
        assert!(check_student(&student).is_ok());
    }
}
