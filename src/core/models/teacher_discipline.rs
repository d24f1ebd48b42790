//! Teacher-to-discipline eligibility links

use crate::core::codec::{self, parse_id, require_fields, DecodeError, Record};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Link marking a teacher as eligible to take workload for a discipline.
///
/// At most one link exists per (teacher, discipline) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherDiscipline {
    /// Record identifier
    pub id: Uuid,

    /// Linked teacher
    pub teacher_id: Uuid,

    /// Discipline the teacher may be assigned
    pub discipline_id: Uuid,
}

impl TeacherDiscipline {
    /// Create a new link with a fresh identifier
    #[must_use]
    pub fn new(teacher_id: Uuid, discipline_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            teacher_id,
            discipline_id,
        }
    }
}

impl Record for TeacherDiscipline {
    const FILE_NAME: &'static str = "teacherdisciplines.txt";

    fn id(&self) -> Uuid {
        self.id
    }

    fn encode(&self) -> String {
        format!("{}|{}|{}", self.id, self.teacher_id, self.discipline_id)
    }

    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = codec::split_fields(line);
        require_fields(&fields, 3)?;

        Ok(Self {
            id: parse_id(fields[0], "id")?,
            teacher_id: parse_id(fields[1], "teacher_id")?,
            discipline_id: parse_id(fields[2], "discipline_id")?,
        })
    }
}
