//! Group model

use crate::core::codec::{
    self, join_ids, parse_id, parse_ids, parse_num, require_fields, DecodeError, Record,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a student group within a faculty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Record identifier
    pub id: Uuid,

    /// Group number (alphanumeric, e.g., "B-201")
    pub number: String,

    /// Year the group was admitted
    pub year_of_admission: u16,

    /// Course the group is in (advisory; disciplines derive their own)
    pub course: u16,

    /// Owning faculty
    pub faculty_id: Uuid,

    /// Students enrolled in this group
    pub student_ids: Vec<Uuid>,
}

impl Group {
    /// Create a new group with a fresh identifier
    ///
    /// # Arguments
    /// * `number` - Group number (alphanumeric)
    /// * `year_of_admission` - Admission year
    /// * `course` - Current course number
    /// * `faculty_id` - Owning faculty
    #[must_use]
    pub fn new(number: String, year_of_admission: u16, course: u16, faculty_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            number,
            year_of_admission,
            course,
            faculty_id,
            student_ids: Vec::new(),
        }
    }

    /// Register a student id, keeping the list duplicate-free
    pub fn add_student(&mut self, student_id: Uuid) {
        if !self.student_ids.contains(&student_id) {
            self.student_ids.push(student_id);
        }
    }

    /// Drop a student id from the enrollment list
    pub fn remove_student(&mut self, student_id: Uuid) {
        self.student_ids.retain(|id| *id != student_id);
    }

    /// Human-readable listing line for this group
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{} (course {}, {})",
            self.number, self.course, self.year_of_admission
        )
    }
}

impl Record for Group {
    const FILE_NAME: &'static str = "groups.txt";

    fn id(&self) -> Uuid {
        self.id
    }

    fn encode(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}",
            self.id,
            self.number,
            self.year_of_admission,
            self.course,
            self.faculty_id,
            join_ids(&self.student_ids)
        )
    }

    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = codec::split_fields(line);
        require_fields(&fields, 6)?;

        Ok(Self {
            id: parse_id(fields[0], "id")?,
            number: fields[1].to_string(),
            year_of_admission: parse_num(fields[2], "year_of_admission")?,
            course: parse_num(fields[3], "course")?,
            faculty_id: parse_id(fields[4], "faculty_id")?,
            student_ids: parse_ids(fields[5], "student_ids")?,
        })
    }
}
