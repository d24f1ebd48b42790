//! Student model

use crate::core::codec::{self, parse_id, parse_num, require_fields, DecodeError, Record};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an enrolled student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Record identifier
    pub id: Uuid,

    /// Family name
    pub last_name: String,

    /// Given name
    pub first_name: String,

    /// Patronymic or middle name; may be empty
    pub middle_name: String,

    /// Group the student belongs to
    pub group_id: Uuid,

    /// Record book (transcript) number
    pub record_book_number: String,

    /// Grade point average; unconstrained numeric
    pub gpa: f32,
}

impl Student {
    /// Create a new student with a fresh identifier
    #[must_use]
    pub fn new(
        last_name: String,
        first_name: String,
        middle_name: String,
        group_id: Uuid,
        record_book_number: String,
        gpa: f32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            last_name,
            first_name,
            middle_name,
            group_id,
            record_book_number,
            gpa,
        }
    }

    /// Full name: "Last First Middle" (middle omitted when empty)
    #[must_use]
    pub fn full_name(&self) -> String {
        if self.middle_name.is_empty() {
            format!("{} {}", self.last_name, self.first_name)
        } else {
            format!("{} {} {}", self.last_name, self.first_name, self.middle_name)
        }
    }

    /// Short name: "Last F. M." (initials for given and middle names)
    #[must_use]
    pub fn short_name(&self) -> String {
        short_name(&self.last_name, &self.first_name, &self.middle_name)
    }
}

/// Build a "Last F. M." short form from name parts; empty parts are skipped.
#[must_use]
pub fn short_name(last: &str, first: &str, middle: &str) -> String {
    let mut name = last.to_string();
    if let Some(initial) = first.chars().next() {
        name.push_str(&format!(" {initial}."));
    }
    if let Some(initial) = middle.chars().next() {
        name.push_str(&format!(" {initial}."));
    }
    name
}

impl Record for Student {
    const FILE_NAME: &'static str = "students.txt";

    fn id(&self) -> Uuid {
        self.id
    }

    fn encode(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}",
            self.id,
            self.last_name,
            self.first_name,
            self.middle_name,
            self.group_id,
            self.record_book_number,
            self.gpa
        )
    }

    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = codec::split_fields(line);
        require_fields(&fields, 7)?;

        Ok(Self {
            id: parse_id(fields[0], "id")?,
            last_name: fields[1].to_string(),
            first_name: fields[2].to_string(),
            middle_name: fields[3].to_string(),
            group_id: parse_id(fields[4], "group_id")?,
            record_book_number: fields[5].to_string(),
            gpa: parse_num(fields[6], "gpa")?,
        })
    }
}
