//! Teacher model and the position/degree/title enums

use crate::core::codec::{
    self, parse_flag, parse_id, parse_num, require_fields, DecodeError, Record,
};
use crate::core::models::student::short_name;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Academic position held by a teacher, in seniority order
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TeacherPosition {
    /// Entry-level position
    Assistant,
    /// Lecturer
    Lecturer,
    /// Senior lecturer
    SeniorLecturer,
    /// Associate professor (docent)
    AssociateProfessor,
    /// Full professor
    Professor,
}

impl TeacherPosition {
    /// Numeric wire code for the persisted format
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Map a persisted numeric code back to a position
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(Self::Assistant),
            1 => Some(Self::Lecturer),
            2 => Some(Self::SeniorLecturer),
            3 => Some(Self::AssociateProfessor),
            4 => Some(Self::Professor),
            _ => None,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Assistant => "assistant",
            Self::Lecturer => "lecturer",
            Self::SeniorLecturer => "senior lecturer",
            Self::AssociateProfessor => "associate professor",
            Self::Professor => "professor",
        }
    }
}

/// Academic degree held by a teacher
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcademicDegree {
    /// No degree
    None,
    /// Candidate of Sciences
    CandidateOfSciences,
    /// Doctor of Sciences
    DoctorOfSciences,
}

impl AcademicDegree {
    /// Numeric wire code for the persisted format
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Map a persisted numeric code back to a degree
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::CandidateOfSciences),
            2 => Some(Self::DoctorOfSciences),
            _ => None,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::CandidateOfSciences => "candidate of sciences",
            Self::DoctorOfSciences => "doctor of sciences",
        }
    }
}

/// Academic title held by a teacher
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcademicTitle {
    /// No title
    None,
    /// Associate professor title
    AssociateProfessor,
    /// Professor title
    Professor,
}

impl AcademicTitle {
    /// Numeric wire code for the persisted format
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Map a persisted numeric code back to a title
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::AssociateProfessor),
            2 => Some(Self::Professor),
            _ => None,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::AssociateProfessor => "associate professor",
            Self::Professor => "professor",
        }
    }
}

/// Represents a member of the teaching staff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    /// Record identifier
    pub id: Uuid,

    /// Family name
    pub last_name: String,

    /// Given name
    pub first_name: String,

    /// Patronymic or middle name; may be empty
    pub middle_name: String,

    /// Position held
    pub position: TeacherPosition,

    /// Academic degree
    pub degree: AcademicDegree,

    /// Academic title
    pub title: AcademicTitle,

    /// Department the teacher belongs to
    pub department_id: Uuid,

    /// Whether the teacher is a postgraduate student
    pub is_postgraduate: bool,

    /// Whether the teacher leads research topics
    pub leads_research_topics: bool,

    /// Whether the teacher leads research directions
    pub leads_research_directions: bool,
}

impl Teacher {
    /// Create a new teacher with a fresh identifier; research flags start unset
    #[must_use]
    pub fn new(
        last_name: String,
        first_name: String,
        middle_name: String,
        position: TeacherPosition,
        degree: AcademicDegree,
        title: AcademicTitle,
        department_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            last_name,
            first_name,
            middle_name,
            position,
            degree,
            title,
            department_id,
            is_postgraduate: false,
            leads_research_topics: false,
            leads_research_directions: false,
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

    /// Short name: "Last F. M."
    #[must_use]
    pub fn short_name(&self) -> String {
        short_name(&self.last_name, &self.first_name, &self.middle_name)
    }

    /// Whether position and title agree.
    ///
    /// An associate-professor position requires at least the
    /// associate-professor title; a professor position requires the
    /// professor title. Junior positions carry no title requirement.
    #[must_use]
    pub const fn is_position_valid(&self) -> bool {
        match self.position {
            TeacherPosition::AssociateProfessor => matches!(
                self.title,
                AcademicTitle::AssociateProfessor | AcademicTitle::Professor
            ),
            TeacherPosition::Professor => matches!(self.title, AcademicTitle::Professor),
            _ => true,
        }
    }

    /// Assistants do not lecture
    #[must_use]
    pub fn can_teach_lectures(&self) -> bool {
        self.position != TeacherPosition::Assistant
    }

    /// Professors do not run laboratory sections
    #[must_use]
    pub fn can_teach_laboratory(&self) -> bool {
        self.position != TeacherPosition::Professor
    }

    /// Eligible to supervise thesis works
    #[must_use]
    pub const fn can_supervise_thesis(&self) -> bool {
        self.leads_research_topics || self.leads_research_directions
    }
}

impl Record for Teacher {
    const FILE_NAME: &'static str = "teachers.txt";

    fn id(&self) -> Uuid {
        self.id
    }

    fn encode(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
            self.id,
            self.last_name,
            self.first_name,
            self.middle_name,
            self.position.code(),
            self.degree.code(),
            self.title.code(),
            self.department_id,
            self.is_postgraduate,
            self.leads_research_topics,
            self.leads_research_directions
        )
    }

    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = codec::split_fields(line);
        require_fields(&fields, 11)?;

        let position_code = parse_num(fields[4], "position")?;
        let degree_code = parse_num(fields[5], "degree")?;
        let title_code = parse_num(fields[6], "title")?;

        Ok(Self {
            id: parse_id(fields[0], "id")?,
            last_name: fields[1].to_string(),
            first_name: fields[2].to_string(),
            middle_name: fields[3].to_string(),
            position: TeacherPosition::from_code(position_code).ok_or(
                DecodeError::UnknownCode {
                    field: "position",
                    code: position_code,
                },
            )?,
            degree: AcademicDegree::from_code(degree_code).ok_or(DecodeError::UnknownCode {
                field: "degree",
                code: degree_code,
            })?,
            title: AcademicTitle::from_code(title_code).ok_or(DecodeError::UnknownCode {
                field: "title",
                code: title_code,
            })?,
            department_id: parse_id(fields[7], "department_id")?,
            is_postgraduate: parse_flag(fields[8], "is_postgraduate")?,
            leads_research_topics: parse_flag(fields[9], "leads_research_topics")?,
            leads_research_directions: parse_flag(fields[10], "leads_research_directions")?,
        })
    }
}
