//! Per-discipline grade records

use crate::core::codec::{self, parse_id, parse_num, require_fields, DecodeError, Record};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One student's result in one discipline.
///
/// Total points and the textual mark are derived from the point pair by the
/// grading rules; this record stores the outcome as committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentGrade {
    /// Record identifier
    pub id: Uuid,

    /// Graded student
    pub student_id: Uuid,

    /// Discipline the grade is for
    pub discipline_id: Uuid,

    /// Points earned during the semester
    pub semester_points: u16,

    /// Points earned at the exam or credit
    pub exam_points: u16,

    /// Sum of semester and exam points
    pub total_points: u16,

    /// Textual mark ("2".."5", "pass" or "fail")
    pub grade: String,
}

impl StudentGrade {
    /// Create a new grade record with a fresh identifier
    #[must_use]
    pub fn new(
        student_id: Uuid,
        discipline_id: Uuid,
        semester_points: u16,
        exam_points: u16,
        total_points: u16,
        grade: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id,
            discipline_id,
            semester_points,
            exam_points,
            total_points,
            grade,
        }
    }
}

impl Record for StudentGrade {
    const FILE_NAME: &'static str = "grades.txt";

    fn id(&self) -> Uuid {
        self.id
    }

    fn encode(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}",
            self.id,
            self.student_id,
            self.discipline_id,
            self.semester_points,
            self.exam_points,
            self.total_points,
            self.grade
        )
    }

    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = codec::split_fields(line);
        require_fields(&fields, 7)?;

        Ok(Self {
            id: parse_id(fields[0], "id")?,
            student_id: parse_id(fields[1], "student_id")?,
            discipline_id: parse_id(fields[2], "discipline_id")?,
            semester_points: parse_num(fields[3], "semester_points")?,
            exam_points: parse_num(fields[4], "exam_points")?,
            total_points: parse_num(fields[5], "total_points")?,
            grade: fields[6].to_string(),
        })
    }
}
