//! Discipline model and control forms

use crate::core::codec::{
    self, parse_id, parse_num, parse_trailing_id, require_fields, DecodeError, Record,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a discipline is examined
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlForm {
    /// Pass/fail credit
    Pass,
    /// Graded credit
    DifferentiatedPass,
    /// Exam
    Exam,
}

impl ControlForm {
    /// Numeric wire code for the persisted format
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Map a persisted numeric code back to a control form
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(Self::Pass),
            1 => Some(Self::DifferentiatedPass),
            2 => Some(Self::Exam),
            _ => None,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::DifferentiatedPass => "differentiated pass",
            Self::Exam => "exam",
        }
    }
}

/// Represents a taught discipline tied to one group and one semester.
///
/// The course number is derived from the semester and cannot be set
/// independently; [`set_semester`](Self::set_semester) keeps it in step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discipline {
    /// Record identifier
    pub id: Uuid,

    /// Discipline name (alphanumeric)
    pub name: String,

    /// Course, always `(semester + 1) / 2`
    course: u16,

    /// Semester the discipline is taught in
    semester: u16,

    /// Lecture hours (0-1000)
    pub lecture_hours: u16,

    /// Seminar hours (0-1000)
    pub seminar_hours: u16,

    /// Laboratory hours (0-1000)
    pub laboratory_hours: u16,

    /// How the discipline is examined
    pub control_form: ControlForm,

    /// Group the discipline is taught to; nil when not assigned
    pub group_id: Uuid,
}

impl Discipline {
    /// Create a new discipline with a fresh identifier; course derives from
    /// the semester
    #[must_use]
    pub fn new(
        name: String,
        semester: u16,
        lecture_hours: u16,
        seminar_hours: u16,
        laboratory_hours: u16,
        control_form: ControlForm,
        group_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            course: Self::course_for_semester(semester),
            semester,
            lecture_hours,
            seminar_hours,
            laboratory_hours,
            control_form,
            group_id,
        }
    }

    /// Course a semester belongs to: `(semester + 1) / 2`, integer division.
    ///
    /// Semesters 1-2 map to course 1, 3-4 to course 2, and so on.
    #[must_use]
    pub const fn course_for_semester(semester: u16) -> u16 {
        (semester + 1) / 2
    }

    /// Current semester
    #[must_use]
    pub const fn semester(&self) -> u16 {
        self.semester
    }

    /// Current course (derived)
    #[must_use]
    pub const fn course(&self) -> u16 {
        self.course
    }

    /// Set the semester, recomputing the course
    pub fn set_semester(&mut self, semester: u16) {
        self.semester = semester;
        self.course = Self::course_for_semester(semester);
    }

    /// Sum of lecture, seminar, and laboratory hours, saturating on overflow
    #[must_use]
    pub const fn total_hours(&self) -> u16 {
        self.lecture_hours
            .saturating_add(self.seminar_hours)
            .saturating_add(self.laboratory_hours)
    }
}

impl Record for Discipline {
    const FILE_NAME: &'static str = "disciplines.txt";

    fn id(&self) -> Uuid {
        self.id
    }

    fn encode(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}|{}",
            self.id,
            self.name,
            self.course,
            self.semester,
            self.lecture_hours,
            self.seminar_hours,
            self.laboratory_hours,
            self.control_form.code(),
            self.group_id
        )
    }

    // Legacy floor is 8: lines written before disciplines were tied to a
    // group carry no group_id slot.
    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = codec::split_fields(line);
        require_fields(&fields, 8)?;

        let form_code = parse_num(fields[7], "control_form")?;

        Ok(Self {
            id: parse_id(fields[0], "id")?,
            name: fields[1].to_string(),
            course: parse_num(fields[2], "course")?,
            semester: parse_num(fields[3], "semester")?,
            lecture_hours: parse_num(fields[4], "lecture_hours")?,
            seminar_hours: parse_num(fields[5], "seminar_hours")?,
            laboratory_hours: parse_num(fields[6], "laboratory_hours")?,
            control_form: ControlForm::from_code(form_code).ok_or(DecodeError::UnknownCode {
                field: "control_form",
                code: form_code,
            })?,
            group_id: parse_trailing_id(&fields, 8, "group_id")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_for_semester() {
        assert_eq!(Discipline::course_for_semester(1), 1);
        assert_eq!(Discipline::course_for_semester(2), 1);
        assert_eq!(Discipline::course_for_semester(3), 2);
        assert_eq!(Discipline::course_for_semester(6), 3);
        assert_eq!(Discipline::course_for_semester(10), 5);
    }

    #[test]
    fn test_new_derives_course() {
        let discipline = Discipline::new(
            "Mathematical Analysis".to_string(),
            4,
            60,
            30,
            0,
            ControlForm::Exam,
            Uuid::new_v4(),
        );

        assert_eq!(discipline.semester(), 4);
        assert_eq!(discipline.course(), 2);
    }

    #[test]
    fn test_set_semester_recomputes_course() {
        let mut discipline = Discipline::new(
            "Linear Algebra".to_string(),
            1,
            40,
            40,
            0,
            ControlForm::DifferentiatedPass,
            Uuid::new_v4(),
        );
        assert_eq!(discipline.course(), 1);

        discipline.set_semester(7);
        assert_eq!(discipline.course(), 4);
    }

    #[test]
    fn test_total_hours() {
        let discipline = Discipline::new(
            "Programming".to_string(),
            2,
            30,
            15,
            45,
            ControlForm::Exam,
            Uuid::new_v4(),
        );
        assert_eq!(discipline.total_hours(), 90);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let discipline = Discipline::new(
            "Discrete Mathematics".to_string(),
            3,
            50,
            25,
            25,
            ControlForm::Pass,
            Uuid::new_v4(),
        );

        let decoded = Discipline::decode(&discipline.encode()).unwrap();
        assert_eq!(decoded, discipline);
    }

    #[test]
    fn test_decode_legacy_line_without_group() {
        let id = Uuid::new_v4();
        let line = format!("{id}|Physics|2|4|60|30|0|2");

        let discipline = Discipline::decode(&line).unwrap();
        assert_eq!(discipline.semester(), 4);
        assert!(discipline.group_id.is_nil());
    }

    #[test]
    fn test_decode_rejects_unknown_control_form() {
        let id = Uuid::new_v4();
        let group = Uuid::new_v4();
        let line = format!("{id}|Physics|2|4|60|30|0|7|{group}");
        assert!(Discipline::decode(&line).is_err());
    }
}
