//! Thesis work records

use crate::core::codec::{self, parse_id, parse_num, require_fields, DecodeError, Record};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A student's thesis with its supervising teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThesisWork {
    /// Record identifier
    pub id: Uuid,

    /// Thesis title (alphanumeric)
    pub title: String,

    /// Student writing the thesis
    pub student_id: Uuid,

    /// Supervising teacher; must lead research topics or directions
    pub supervisor_id: Uuid,

    /// Defense year (1900-2100)
    pub year: u16,

    /// Defense grade (2-5); `None` until the thesis is graded
    pub grade: Option<u16>,
}

impl ThesisWork {
    /// Create a new ungraded thesis with a fresh identifier
    #[must_use]
    pub fn new(title: String, student_id: Uuid, supervisor_id: Uuid, year: u16) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            student_id,
            supervisor_id,
            year,
            grade: None,
        }
    }
}

impl Record for ThesisWork {
    const FILE_NAME: &'static str = "thesisworks.txt";

    fn id(&self) -> Uuid {
        self.id
    }

    fn encode(&self) -> String {
        let grade = self.grade.map(|g| g.to_string()).unwrap_or_default();
        format!(
            "{}|{}|{}|{}|{}|{}",
            self.id, self.title, self.student_id, self.supervisor_id, self.year, grade
        )
    }

    // Legacy floor is 5: lines written before defenses were graded carry no
    // grade slot. An unparsable grade also reads back as ungraded.
    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = codec::split_fields(line);
        require_fields(&fields, 5)?;

        Ok(Self {
            id: parse_id(fields[0], "id")?,
            title: fields[1].to_string(),
            student_id: parse_id(fields[2], "student_id")?,
            supervisor_id: parse_id(fields[3], "supervisor_id")?,
            year: parse_num(fields[4], "year")?,
            grade: fields.get(5).and_then(|f| f.parse().ok()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_thesis_is_ungraded() {
        let thesis = ThesisWork::new(
            "Graph Coloring Heuristics".to_string(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            2025,
        );
        assert_eq!(thesis.grade, None);
    }

    #[test]
    fn test_encode_decode_round_trip_graded() {
        let mut thesis = ThesisWork::new(
            "Static Analysis of Build Scripts".to_string(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            2024,
        );
        thesis.grade = Some(5);

        let decoded = ThesisWork::decode(&thesis.encode()).unwrap();
        assert_eq!(decoded, thesis);
    }

    #[test]
    fn test_encode_decode_round_trip_ungraded() {
        let thesis = ThesisWork::new(
            "Cache-Oblivious Data Structures".to_string(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            2026,
        );

        let line = thesis.encode();
        assert!(line.ends_with('|'));

        let decoded = ThesisWork::decode(&line).unwrap();
        assert_eq!(decoded, thesis);
    }

    #[test]
    fn test_decode_legacy_line_without_grade() {
        let line = format!(
            "{}|Compiler Fuzzing|{}|{}|2021",
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4()
        );

        let thesis = ThesisWork::decode(&line).unwrap();
        assert_eq!(thesis.year, 2021);
        assert_eq!(thesis.grade, None);
    }

    #[test]
    fn test_decode_unparsable_grade_reads_as_ungraded() {
        let line = format!(
            "{}|Compiler Fuzzing|{}|{}|2021|excellent",
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4()
        );

        let thesis = ThesisWork::decode(&line).unwrap();
        assert_eq!(thesis.grade, None);
    }
}
