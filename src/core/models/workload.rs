//! Teaching workload assignments

use crate::core::codec::{
    self, parse_id, parse_num, require_fields, DecodeError, Record,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of lesson a workload entry covers
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LessonType {
    /// Lecture for the whole group
    Lecture,
    /// Seminar section
    Seminar,
    /// Laboratory section
    Laboratory,
    /// Consultation hours
    Consultation,
    /// Course work supervision
    CourseWork,
    /// Course project supervision
    CourseProject,
}

impl LessonType {
    /// Numeric wire code for the persisted format
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Map a persisted numeric code back to a lesson type
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(Self::Lecture),
            1 => Some(Self::Seminar),
            2 => Some(Self::Laboratory),
            3 => Some(Self::Consultation),
            4 => Some(Self::CourseWork),
            5 => Some(Self::CourseProject),
            _ => None,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lecture => "lecture",
            Self::Seminar => "seminar",
            Self::Laboratory => "laboratory",
            Self::Consultation => "consultation",
            Self::CourseWork => "course work",
            Self::CourseProject => "course project",
        }
    }
}

/// Assignment of one teacher to teach one discipline for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLoad {
    /// Record identifier
    pub id: Uuid,

    /// Teacher holding the assignment
    pub teacher_id: Uuid,

    /// Discipline being taught
    pub discipline_id: Uuid,

    /// Group being taught
    pub group_id: Uuid,

    /// Kind of lesson
    pub lesson_type: LessonType,

    /// Assigned hours (1-1000)
    pub hours: u16,

    /// Academic year in "YYYY/YYYY" form
    pub academic_year: String,

    /// Semester the assignment applies to
    pub semester: u16,
}

impl WorkLoad {
    /// Create a new workload assignment with a fresh identifier
    #[must_use]
    pub fn new(
        teacher_id: Uuid,
        discipline_id: Uuid,
        group_id: Uuid,
        lesson_type: LessonType,
        hours: u16,
        academic_year: String,
        semester: u16,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            teacher_id,
            discipline_id,
            group_id,
            lesson_type,
            hours,
            academic_year,
            semester,
        }
    }
}

impl Record for WorkLoad {
    const FILE_NAME: &'static str = "workloads.txt";

    fn id(&self) -> Uuid {
        self.id
    }

    fn encode(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}",
            self.id,
            self.teacher_id,
            self.discipline_id,
            self.group_id,
            self.lesson_type.code(),
            self.hours,
            self.academic_year,
            self.semester
        )
    }

    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = codec::split_fields(line);
        require_fields(&fields, 8)?;

        let type_code = parse_num(fields[4], "lesson_type")?;

        Ok(Self {
            id: parse_id(fields[0], "id")?,
            teacher_id: parse_id(fields[1], "teacher_id")?,
            discipline_id: parse_id(fields[2], "discipline_id")?,
            group_id: parse_id(fields[3], "group_id")?,
            lesson_type: LessonType::from_code(type_code).ok_or(DecodeError::UnknownCode {
                field: "lesson_type",
                code: type_code,
            })?,
            hours: parse_num(fields[5], "hours")?,
            academic_year: fields[6].to_string(),
            semester: parse_num(fields[7], "semester")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_type_code_round_trip() {
        for lesson_type in [
            LessonType::Lecture,
            LessonType::Seminar,
            LessonType::Laboratory,
            LessonType::Consultation,
            LessonType::CourseWork,
            LessonType::CourseProject,
        ] {
            assert_eq!(LessonType::from_code(lesson_type.code()), Some(lesson_type));
        }
        assert_eq!(LessonType::from_code(6), None);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let workload = WorkLoad::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            LessonType::Lecture,
            34,
            "2024/2025".to_string(),
            3,
        );

        let decoded = WorkLoad::decode(&workload.encode()).unwrap();
        assert_eq!(decoded, workload);
    }

    #[test]
    fn test_decode_rejects_unknown_lesson_type() {
        let line = format!(
            "{}|{}|{}|{}|9|34|2024/2025|3",
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        assert!(WorkLoad::decode(&line).is_err());
    }

    #[test]
    fn test_decode_rejects_short_line() {
        assert!(WorkLoad::decode("only|three|fields").is_err());
    }
}
