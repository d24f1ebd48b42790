//! Referential integrity scanning
//!
//! Removals never cascade, so records can end up holding foreign keys
//! that no longer resolve. The scan walks every stored reference and
//! reports the dangling ones. A nil identifier means "not assigned" and
//! is never reported.

use crate::core::events::EntityKind;
use crate::core::store::Registry;
use std::fmt;
use uuid::Uuid;

/// One stored reference that no longer resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrityIssue {
    /// Collection of the record holding the reference
    pub entity: EntityKind,
    /// Identifier of the record holding the reference
    pub id: Uuid,
    /// Field the reference sits in
    pub field: &'static str,
    /// Identifier that fails to resolve
    pub target: Uuid,
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} -> {} does not resolve",
            self.entity.label(),
            self.id,
            self.field,
            self.target
        )
    }
}

/// Walk every stored reference and collect the dangling ones
#[must_use]
pub fn scan(registry: &Registry) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    for faculty in registry.faculties() {
        for group_id in &faculty.group_ids {
            if registry.find_group(*group_id).is_none() {
                issues.push(issue(EntityKind::Faculty, faculty.id, "group_ids", *group_id));
            }
        }
        for department_id in &faculty.department_ids {
            if registry.find_department(*department_id).is_none() {
                issues.push(issue(
                    EntityKind::Faculty,
                    faculty.id,
                    "department_ids",
                    *department_id,
                ));
            }
        }
    }

    for department in registry.departments() {
        if dangling(department.faculty_id, registry.find_faculty(department.faculty_id).is_some()) {
            issues.push(issue(
                EntityKind::Department,
                department.id,
                "faculty_id",
                department.faculty_id,
            ));
        }
        for teacher_id in &department.teacher_ids {
            if registry.find_teacher(*teacher_id).is_none() {
                issues.push(issue(
                    EntityKind::Department,
                    department.id,
                    "teacher_ids",
                    *teacher_id,
                ));
            }
        }
    }

    for group in registry.groups() {
        if dangling(group.faculty_id, registry.find_faculty(group.faculty_id).is_some()) {
            issues.push(issue(EntityKind::Group, group.id, "faculty_id", group.faculty_id));
        }
        for student_id in &group.student_ids {
            if registry.find_student(*student_id).is_none() {
                issues.push(issue(EntityKind::Group, group.id, "student_ids", *student_id));
            }
        }
    }

    for student in registry.students() {
        if dangling(student.group_id, registry.find_group(student.group_id).is_some()) {
            issues.push(issue(EntityKind::Student, student.id, "group_id", student.group_id));
        }
    }

    for teacher in registry.teachers() {
        if dangling(
            teacher.department_id,
            registry.find_department(teacher.department_id).is_some(),
        ) {
            issues.push(issue(
                EntityKind::Teacher,
                teacher.id,
                "department_id",
                teacher.department_id,
            ));
        }
    }

    for discipline in registry.disciplines() {
        if dangling(discipline.group_id, registry.find_group(discipline.group_id).is_some()) {
            issues.push(issue(
                EntityKind::Discipline,
                discipline.id,
                "group_id",
                discipline.group_id,
            ));
        }
    }

    for workload in registry.workloads() {
        if dangling(workload.teacher_id, registry.find_teacher(workload.teacher_id).is_some()) {
            issues.push(issue(
                EntityKind::WorkLoad,
                workload.id,
                "teacher_id",
                workload.teacher_id,
            ));
        }
        if dangling(
            workload.discipline_id,
            registry.find_discipline(workload.discipline_id).is_some(),
        ) {
            issues.push(issue(
                EntityKind::WorkLoad,
                workload.id,
                "discipline_id",
                workload.discipline_id,
            ));
        }
        if dangling(workload.group_id, registry.find_group(workload.group_id).is_some()) {
            issues.push(issue(
                EntityKind::WorkLoad,
                workload.id,
                "group_id",
                workload.group_id,
            ));
        }
    }

    for thesis in registry.thesis_works() {
        if dangling(thesis.student_id, registry.find_student(thesis.student_id).is_some()) {
            issues.push(issue(
                EntityKind::ThesisWork,
                thesis.id,
                "student_id",
                thesis.student_id,
            ));
        }
        if dangling(
            thesis.supervisor_id,
            registry.find_teacher(thesis.supervisor_id).is_some(),
        ) {
            issues.push(issue(
                EntityKind::ThesisWork,
                thesis.id,
                "supervisor_id",
                thesis.supervisor_id,
            ));
        }
    }

    for grade in registry.grades() {
        if dangling(grade.student_id, registry.find_student(grade.student_id).is_some()) {
            issues.push(issue(
                EntityKind::StudentGrade,
                grade.id,
                "student_id",
                grade.student_id,
            ));
        }
        if dangling(
            grade.discipline_id,
            registry.find_discipline(grade.discipline_id).is_some(),
        ) {
            issues.push(issue(
                EntityKind::StudentGrade,
                grade.id,
                "discipline_id",
                grade.discipline_id,
            ));
        }
    }

    for link in registry.teacher_disciplines() {
        if dangling(link.teacher_id, registry.find_teacher(link.teacher_id).is_some()) {
            issues.push(issue(
                EntityKind::TeacherDiscipline,
                link.id,
                "teacher_id",
                link.teacher_id,
            ));
        }
        if dangling(
            link.discipline_id,
            registry.find_discipline(link.discipline_id).is_some(),
        ) {
            issues.push(issue(
                EntityKind::TeacherDiscipline,
                link.id,
                "discipline_id",
                link.discipline_id,
            ));
        }
    }

    issues
}

const fn issue(entity: EntityKind, id: Uuid, field: &'static str, target: Uuid) -> IntegrityIssue {
    IntegrityIssue {
        entity,
        id,
        field,
        target,
    }
}

fn dangling(target: Uuid, resolves: bool) -> bool {
    !target.is_nil() && !resolves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Faculty, Group, Student};

    #[test]
    fn test_consistent_registry_scans_clean() {
        let mut registry = Registry::new();
        let faculty = Faculty::new("History".to_string(), "Павлова".to_string());
        let faculty_id = faculty.id;
        registry.add_faculty(faculty).unwrap();
        registry
            .add_group(Group::new("И-101".to_string(), 2024, 1, faculty_id))
            .unwrap();

        assert!(scan(&registry).is_empty());
    }

    #[test]
    fn test_removed_group_leaves_traceable_dangling_keys() {
        let mut registry = Registry::new();
        let faculty = Faculty::new("History".to_string(), "Павлова".to_string());
        let faculty_id = faculty.id;
        registry.add_faculty(faculty).unwrap();

        let group = Group::new("И-101".to_string(), 2024, 1, faculty_id);
        let group_id = group.id;
        registry.add_group(group).unwrap();

        let student = Student::new(
            "Титов".to_string(),
            "Олег".to_string(),
            String::new(),
            group_id,
            "И-2024-011".to_string(),
            0.0,
        );
        let student_id = student.id;
        registry.add_student(student).unwrap();

        registry.remove_group(group_id).unwrap();
        let issues = scan(&registry);

        // Faculty roster and the student record both point at the gone group
        assert!(issues.contains(&issue(EntityKind::Faculty, faculty_id, "group_ids", group_id)));
        assert!(issues.contains(&issue(EntityKind::Student, student_id, "group_id", group_id)));
    }

    #[test]
    fn test_nil_group_reference_is_not_dangling() {
        use std::fs;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        // Legacy discipline line with no group slot
        let line = format!("{}|Paleography|1|2|30|10|0|0\n", Uuid::new_v4());
        fs::write(dir.path().join("disciplines.txt"), line).unwrap();

        let mut registry = Registry::new();
        registry.load_all(dir.path()).unwrap();
        assert!(registry.disciplines()[0].group_id.is_nil());

        assert!(scan(&registry).is_empty());
    }
}
