//! Read-only report projections over the registry
//!
//! Profiles borrow straight from the registry and resolve every foreign
//! key once; references that no longer resolve stay `None` and render as
//! `<unknown>`. Renderers for the supported output formats live in
//! [`formats`].

pub mod formats;
pub mod timeline;

pub use formats::ReportFormat;
pub use timeline::Timeline;

use crate::core::models::{
    Department, Discipline, Faculty, Group, Student, StudentGrade, Teacher, ThesisWork, WorkLoad,
};
use crate::core::store::Registry;
use serde::Serialize;
use uuid::Uuid;

/// Placeholder for a foreign key that no longer resolves
pub const UNKNOWN: &str = "<unknown>";

/// One grade joined with its discipline
#[derive(Debug, Clone, Serialize)]
pub struct GradeLine<'a> {
    /// Discipline the grade was earned in, when it still resolves
    pub discipline: Option<&'a Discipline>,
    /// The stored grade record
    pub record: &'a StudentGrade,
}

/// One thesis joined with its supervisor
#[derive(Debug, Clone, Serialize)]
pub struct ThesisLine<'a> {
    /// The stored thesis record
    pub thesis: &'a ThesisWork,
    /// Supervising teacher, when the reference still resolves
    pub supervisor: Option<&'a Teacher>,
}

/// Everything a per-student report needs, resolved once
#[derive(Debug, Clone, Serialize)]
pub struct StudentProfile<'a> {
    /// The student on report
    pub student: &'a Student,
    /// Home group, when the reference still resolves
    pub group: Option<&'a Group>,
    /// Faculty of the home group
    pub faculty: Option<&'a Faculty>,
    /// Grades with their disciplines
    pub grades: Vec<GradeLine<'a>>,
    /// Thesis works with their supervisors
    pub theses: Vec<ThesisLine<'a>>,
    /// Group disciplines split around the current semester; absent when
    /// the group does not resolve
    pub timeline: Option<Timeline<'a>>,
}

/// One workload assignment joined with its discipline and group
#[derive(Debug, Clone, Serialize)]
pub struct WorkloadLine<'a> {
    /// The stored assignment
    pub workload: &'a WorkLoad,
    /// Assigned discipline, when the reference still resolves
    pub discipline: Option<&'a Discipline>,
    /// Taught group, when the reference still resolves
    pub group: Option<&'a Group>,
}

/// One supervised thesis joined with its student
#[derive(Debug, Clone, Serialize)]
pub struct SupervisionLine<'a> {
    /// The stored thesis record
    pub thesis: &'a ThesisWork,
    /// Student writing it, when the reference still resolves
    pub student: Option<&'a Student>,
}

/// Everything a per-teacher report needs, resolved once
#[derive(Debug, Clone, Serialize)]
pub struct TeacherProfile<'a> {
    /// The teacher on report
    pub teacher: &'a Teacher,
    /// Employing department, when the reference still resolves
    pub department: Option<&'a Department>,
    /// Faculty of the department
    pub faculty: Option<&'a Faculty>,
    /// Disciplines the teacher is linked to
    pub disciplines: Vec<&'a Discipline>,
    /// Workload assignments with their disciplines and groups
    pub workloads: Vec<WorkloadLine<'a>>,
    /// Theses under this teacher's supervision
    pub supervised: Vec<SupervisionLine<'a>>,
    /// Sum of assigned workload hours
    pub total_hours: u32,
}

/// Build the per-student projection.
///
/// `month` is the calendar month (1-12) used to place the group's current
/// semester; pass [`timeline::now_month`] for the local clock.
///
/// Returns `None` when no student carries the identifier.
#[must_use]
pub fn student_profile(
    registry: &Registry,
    student_id: Uuid,
    month: u32,
) -> Option<StudentProfile<'_>> {
    let student = registry.find_student(student_id)?;
    let group = registry.find_group(student.group_id);
    let faculty = group.and_then(|g| registry.find_faculty(g.faculty_id));

    let grades = registry
        .grades_of_student(student_id)
        .into_iter()
        .map(|record| GradeLine {
            discipline: registry.find_discipline(record.discipline_id),
            record,
        })
        .collect();

    let theses = registry
        .thesis_works_of_student(student_id)
        .into_iter()
        .map(|thesis| ThesisLine {
            thesis,
            supervisor: registry.find_teacher(thesis.supervisor_id),
        })
        .collect();

    let timeline = group.map(|g| {
        let disciplines = registry.disciplines_of_group(g.id);
        timeline::partition(&disciplines, timeline::current_semester(g.course, month))
    });

    Some(StudentProfile {
        student,
        group,
        faculty,
        grades,
        theses,
        timeline,
    })
}

/// Build the per-teacher projection.
///
/// Returns `None` when no teacher carries the identifier.
#[must_use]
pub fn teacher_profile(registry: &Registry, teacher_id: Uuid) -> Option<TeacherProfile<'_>> {
    let teacher = registry.find_teacher(teacher_id)?;
    let department = registry.find_department(teacher.department_id);
    let faculty = department.and_then(|d| registry.find_faculty(d.faculty_id));

    let mut disciplines = registry.disciplines_of_teacher(teacher_id);
    disciplines.sort_by(|a, b| a.name.cmp(&b.name));

    let workloads: Vec<WorkloadLine<'_>> = registry
        .workloads_of_teacher(teacher_id)
        .into_iter()
        .map(|workload| WorkloadLine {
            workload,
            discipline: registry.find_discipline(workload.discipline_id),
            group: registry.find_group(workload.group_id),
        })
        .collect();

    let supervised = registry
        .thesis_works_of_supervisor(teacher_id)
        .into_iter()
        .map(|thesis| SupervisionLine {
            thesis,
            student: registry.find_student(thesis.student_id),
        })
        .collect();

    let total_hours = workloads
        .iter()
        .map(|line| u32::from(line.workload.hours))
        .sum();

    Some(TeacherProfile {
        teacher,
        department,
        faculty,
        disciplines,
        workloads,
        supervised,
        total_hours,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{
        AcademicDegree, AcademicTitle, ControlForm, LessonType, TeacherDiscipline, TeacherPosition,
    };

    struct Fixture {
        registry: Registry,
        student_id: Uuid,
        teacher_id: Uuid,
        discipline_id: Uuid,
    }

    fn fixture() -> Fixture {
        let mut registry = Registry::new();

        let faculty = Faculty::new("Informatics".to_string(), "Крылова".to_string());
        let faculty_id = faculty.id;
        registry.add_faculty(faculty).unwrap();

        let department = Department::new(
            "Software Engineering".to_string(),
            "Киселёв".to_string(),
            faculty_id,
        );
        let department_id = department.id;
        registry.add_department(department).unwrap();

        let group = Group::new("ПИ-201".to_string(), 2024, 2, faculty_id);
        let group_id = group.id;
        registry.add_group(group).unwrap();

        let student = Student::new(
            "Смирнова".to_string(),
            "Анна".to_string(),
            "Павловна".to_string(),
            group_id,
            "ПИ-2024-001".to_string(),
            4.5,
        );
        let student_id = student.id;
        registry.add_student(student).unwrap();

        let mut teacher = Teacher::new(
            "Волков".to_string(),
            "Дмитрий".to_string(),
            String::new(),
            TeacherPosition::AssociateProfessor,
            AcademicDegree::CandidateOfSciences,
            AcademicTitle::AssociateProfessor,
            department_id,
        );
        teacher.leads_research_directions = true;
        let teacher_id = teacher.id;
        registry.add_teacher(teacher).unwrap();

        let discipline = Discipline::new(
            "Databases".to_string(),
            3,
            40,
            20,
            20,
            ControlForm::Exam,
            group_id,
        );
        let discipline_id = discipline.id;
        registry.add_discipline(discipline).unwrap();

        registry
            .add_teacher_discipline(TeacherDiscipline::new(teacher_id, discipline_id))
            .unwrap();
        registry
            .add_workload(WorkLoad::new(
                teacher_id,
                discipline_id,
                group_id,
                LessonType::Lecture,
                40,
                "2025/2026".to_string(),
                3,
            ))
            .unwrap();
        registry
            .record_grade(student_id, discipline_id, 55, 35)
            .unwrap();
        registry
            .add_thesis_work(ThesisWork::new(
                "Query Planning".to_string(),
                student_id,
                teacher_id,
                2026,
            ))
            .unwrap();

        Fixture {
            registry,
            student_id,
            teacher_id,
            discipline_id,
        }
    }

    #[test]
    fn test_student_profile_resolves_relationships() {
        let fixture = fixture();
        // October: course 2 puts the group in semester 3
        let profile = student_profile(&fixture.registry, fixture.student_id, 10).unwrap();

        assert_eq!(profile.student.id, fixture.student_id);
        assert!(profile.group.is_some());
        assert!(profile.faculty.is_some());
        assert_eq!(profile.grades.len(), 1);
        assert_eq!(profile.grades[0].record.grade, "5");
        assert_eq!(profile.theses.len(), 1);

        let timeline = profile.timeline.unwrap();
        assert_eq!(timeline.current_semester, 3);
        assert_eq!(timeline.active.len(), 1);
        assert_eq!(timeline.active[0].id, fixture.discipline_id);
    }

    #[test]
    fn test_student_profile_survives_dangling_group() {
        let mut fixture = fixture();
        let group_id = fixture
            .registry
            .find_student(fixture.student_id)
            .unwrap()
            .group_id;
        fixture.registry.remove_group(group_id).unwrap();

        let profile = student_profile(&fixture.registry, fixture.student_id, 10).unwrap();
        assert!(profile.group.is_none());
        assert!(profile.faculty.is_none());
        assert!(profile.timeline.is_none());
        // Grade lines survive with their disciplines
        assert_eq!(profile.grades.len(), 1);
    }

    #[test]
    fn test_teacher_profile_aggregates_hours() {
        let fixture = fixture();
        let profile = teacher_profile(&fixture.registry, fixture.teacher_id).unwrap();

        assert_eq!(profile.disciplines.len(), 1);
        assert_eq!(profile.workloads.len(), 1);
        assert_eq!(profile.supervised.len(), 1);
        assert_eq!(profile.total_hours, 40);
        assert!(profile.department.is_some());
        assert!(profile.faculty.is_some());
    }

    #[test]
    fn test_unknown_ids_yield_no_profile() {
        let fixture = fixture();
        assert!(student_profile(&fixture.registry, Uuid::new_v4(), 10).is_none());
        assert!(teacher_profile(&fixture.registry, Uuid::new_v4()).is_none());
    }
}
