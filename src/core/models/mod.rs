//! Entity models for `UniRegistry`

pub mod department;
pub mod discipline;
pub mod faculty;
pub mod grade;
pub mod group;
pub mod student;
pub mod teacher;
pub mod teacher_discipline;
pub mod thesis;
pub mod workload;

pub use department::Department;
pub use discipline::{ControlForm, Discipline};
pub use faculty::Faculty;
pub use grade::StudentGrade;
pub use group::Group;
pub use student::Student;
pub use teacher::{AcademicDegree, AcademicTitle, Teacher, TeacherPosition};
pub use teacher_discipline::TeacherDiscipline;
pub use thesis::ThesisWork;
pub use workload::{LessonType, WorkLoad};
