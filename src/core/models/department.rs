//! Department model

use crate::core::codec::{
    self, join_ids, parse_id, parse_ids, require_fields, DecodeError, Record,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a department within a faculty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Record identifier
    pub id: Uuid,

    /// Department name
    pub name: String,

    /// Head of department
    pub head: String,

    /// Owning faculty
    pub faculty_id: Uuid,

    /// Teachers attached to this department
    pub teacher_ids: Vec<Uuid>,
}

impl Department {
    /// Create a new department with a fresh identifier
    #[must_use]
    pub fn new(name: String, head: String, faculty_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            head,
            faculty_id,
            teacher_ids: Vec::new(),
        }
    }

    /// Register a teacher id, keeping the list duplicate-free
    pub fn add_teacher(&mut self, teacher_id: Uuid) {
        if !self.teacher_ids.contains(&teacher_id) {
            self.teacher_ids.push(teacher_id);
        }
    }
}

impl Record for Department {
    const FILE_NAME: &'static str = "departments.txt";

    fn id(&self) -> Uuid {
        self.id
    }

    fn encode(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.id,
            self.name,
            self.head,
            self.faculty_id,
            join_ids(&self.teacher_ids)
        )
    }

    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = codec::split_fields(line);
        require_fields(&fields, 5)?;

        Ok(Self {
            id: parse_id(fields[0], "id")?,
            name: fields[1].to_string(),
            head: fields[2].to_string(),
            faculty_id: parse_id(fields[3], "faculty_id")?,
            teacher_ids: parse_ids(fields[4], "teacher_ids")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        let mut department = Department::new(
            "Department of Algebra".to_string(),
            "Orlov K. S.".to_string(),
            Uuid::new_v4(),
        );
        department.add_teacher(Uuid::new_v4());

        let decoded = Department::decode(&department.encode()).unwrap();
        assert_eq!(decoded, department);
    }

    #[test]
    fn test_decode_empty_teacher_list() {
        let id = Uuid::new_v4();
        let faculty = Uuid::new_v4();
        let line = format!("{id}|Department of Geometry|Volkova E. A.|{faculty}|");

        let department = Department::decode(&line).unwrap();
        assert!(department.teacher_ids.is_empty());
    }
}
