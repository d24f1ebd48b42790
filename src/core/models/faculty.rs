//! Faculty model

use crate::core::codec::{
    self, join_ids, parse_id, parse_ids, parse_trailing_ids, require_fields, DecodeError, Record,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a faculty, the top of the organizational hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    /// Record identifier
    pub id: Uuid,

    /// Faculty name (e.g., "Faculty of Applied Mathematics")
    pub name: String,

    /// Dean's name
    pub dean: String,

    /// Groups belonging to this faculty, in insertion order
    pub group_ids: Vec<Uuid>,

    /// Departments belonging to this faculty, in insertion order
    pub department_ids: Vec<Uuid>,
}

impl Faculty {
    /// Create a new faculty with a fresh identifier
    ///
    /// # Arguments
    /// * `name` - Faculty name
    /// * `dean` - Dean's name
    #[must_use]
    pub fn new(name: String, dean: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            dean,
            group_ids: Vec::new(),
            department_ids: Vec::new(),
        }
    }

    /// Register a group id, keeping the list duplicate-free
    pub fn add_group(&mut self, group_id: Uuid) {
        if !self.group_ids.contains(&group_id) {
            self.group_ids.push(group_id);
        }
    }

    /// Register a department id, keeping the list duplicate-free
    pub fn add_department(&mut self, department_id: Uuid) {
        if !self.department_ids.contains(&department_id) {
            self.department_ids.push(department_id);
        }
    }
}

impl Record for Faculty {
    const FILE_NAME: &'static str = "faculties.txt";

    fn id(&self) -> Uuid {
        self.id
    }

    fn encode(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.id,
            self.name,
            self.dean,
            join_ids(&self.group_ids),
            join_ids(&self.department_ids)
        )
    }

    // Legacy floor is 4: files written before departments were tracked
    // carry no department_ids slot.
    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = codec::split_fields(line);
        require_fields(&fields, 4)?;

        Ok(Self {
            id: parse_id(fields[0], "id")?,
            name: fields[1].to_string(),
            dean: fields[2].to_string(),
            group_ids: parse_ids(fields[3], "group_ids")?,
            department_ids: parse_trailing_ids(&fields, 4, "department_ids")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faculty_creation() {
        let faculty = Faculty::new(
            "Faculty of Physics".to_string(),
            "Sokolova A. P.".to_string(),
        );

        assert_eq!(faculty.name, "Faculty of Physics");
        assert_eq!(faculty.dean, "Sokolova A. P.");
        assert!(faculty.group_ids.is_empty());
        assert!(faculty.department_ids.is_empty());
        assert!(!faculty.id.is_nil());
    }

    #[test]
    fn test_add_group_deduplicates() {
        let mut faculty = Faculty::new("F".to_string(), "D".to_string());
        let group_id = Uuid::new_v4();

        faculty.add_group(group_id);
        faculty.add_group(group_id);

        assert_eq!(faculty.group_ids.len(), 1);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let mut faculty = Faculty::new(
            "Faculty of Mechanics".to_string(),
            "Ivanov I. I.".to_string(),
        );
        faculty.add_group(Uuid::new_v4());
        faculty.add_group(Uuid::new_v4());
        faculty.add_department(Uuid::new_v4());

        let decoded = Faculty::decode(&faculty.encode()).unwrap();
        assert_eq!(decoded, faculty);
    }

    #[test]
    fn test_decode_legacy_line_without_departments() {
        let id = Uuid::new_v4();
        let group = Uuid::new_v4();
        let line = format!("{id}|Faculty of Chemistry|Petrova N. V.|{group}");

        let faculty = Faculty::decode(&line).unwrap();
        assert_eq!(faculty.id, id);
        assert_eq!(faculty.group_ids, vec![group]);
        assert!(faculty.department_ids.is_empty());
    }

    #[test]
    fn test_decode_rejects_short_line() {
        assert!(Faculty::decode("only|three|fields").is_err());
    }

    #[test]
    fn test_decode_rejects_bad_id() {
        assert!(Faculty::decode("nope|Name|Dean|").is_err());
    }
}
