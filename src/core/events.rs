//! Change notifications emitted by the registry
//!
//! Every committed mutation publishes one [`ChangeEvent`] to all
//! subscribed observers. Bulk loads stay silent; observers re-read the
//! collections after a reload instead.

use uuid::Uuid;

/// Entity collection a change applies to
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// Faculty collection
    Faculty,
    /// Department collection
    Department,
    /// Group collection
    Group,
    /// Student collection
    Student,
    /// Teacher collection
    Teacher,
    /// Discipline collection
    Discipline,
    /// Workload collection
    WorkLoad,
    /// Thesis work collection
    ThesisWork,
    /// Grade collection
    StudentGrade,
    /// Teacher-discipline link collection
    TeacherDiscipline,
}

impl EntityKind {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Faculty => "faculty",
            Self::Department => "department",
            Self::Group => "group",
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Discipline => "discipline",
            Self::WorkLoad => "workload",
            Self::ThesisWork => "thesis work",
            Self::StudentGrade => "grade",
            Self::TeacherDiscipline => "teacher-discipline link",
        }
    }
}

/// What happened to the record
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    /// Record inserted
    Added,
    /// Record replaced in place
    Updated,
    /// Record deleted
    Removed,
}

/// One committed mutation
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Collection the record belongs to
    pub entity: EntityKind,
    /// Kind of mutation
    pub change: ChangeKind,
    /// Identifier of the affected record
    pub id: Uuid,
}

impl ChangeEvent {
    /// Create a new change event
    #[must_use]
    pub const fn new(entity: EntityKind, change: ChangeKind, id: Uuid) -> Self {
        Self { entity, change, id }
    }
}
