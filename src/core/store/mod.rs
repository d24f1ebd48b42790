//! In-memory registry of all academic records
//!
//! One ordered collection per entity type, acting as the single source of
//! truth for the whole process. Mutations go through the committing
//! operations in [`commit`], which validate first and publish a
//! [`ChangeEvent`] after; reads go through the lookup and relationship
//! queries below. Loading and saving the whole registry lives in
//! [`persistence`].

mod commit;
mod persistence;

pub use persistence::LoadReport;

use crate::core::events::ChangeEvent;
use crate::core::models::{
    Department, Discipline, Faculty, Group, Student, StudentGrade, Teacher, TeacherDiscipline,
    ThesisWork, WorkLoad,
};
use uuid::Uuid;

type Subscriber = Box<dyn Fn(&ChangeEvent)>;

/// Holds every record collection plus the observer list.
///
/// Collections are only reachable as slices from the outside; child
/// modules commit validated mutations directly.
pub struct Registry {
    faculties: Vec<Faculty>,
    departments: Vec<Department>,
    groups: Vec<Group>,
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    disciplines: Vec<Discipline>,
    workloads: Vec<WorkLoad>,
    thesis_works: Vec<ThesisWork>,
    grades: Vec<StudentGrade>,
    teacher_disciplines: Vec<TeacherDiscipline>,
    subscribers: Vec<(usize, Subscriber)>,
    next_token: usize,
}

impl Registry {
    /// Create an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            faculties: Vec::new(),
            departments: Vec::new(),
            groups: Vec::new(),
            students: Vec::new(),
            teachers: Vec::new(),
            disciplines: Vec::new(),
            workloads: Vec::new(),
            thesis_works: Vec::new(),
            grades: Vec::new(),
            teacher_disciplines: Vec::new(),
            subscribers: Vec::new(),
            next_token: 0,
        }
    }

    /// All faculties, in insertion order
    #[must_use]
    pub fn faculties(&self) -> &[Faculty] {
        &self.faculties
    }

    /// All departments, in insertion order
    #[must_use]
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// All groups, in insertion order
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// All students, in insertion order
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// All teachers, in insertion order
    #[must_use]
    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    /// All disciplines, in insertion order
    #[must_use]
    pub fn disciplines(&self) -> &[Discipline] {
        &self.disciplines
    }

    /// All workload assignments, in insertion order
    #[must_use]
    pub fn workloads(&self) -> &[WorkLoad] {
        &self.workloads
    }

    /// All thesis works, in insertion order
    #[must_use]
    pub fn thesis_works(&self) -> &[ThesisWork] {
        &self.thesis_works
    }

    /// All grade records, in insertion order
    #[must_use]
    pub fn grades(&self) -> &[StudentGrade] {
        &self.grades
    }

    /// All teacher-discipline links, in insertion order
    #[must_use]
    pub fn teacher_disciplines(&self) -> &[TeacherDiscipline] {
        &self.teacher_disciplines
    }

    /// Total number of stored records across all collections
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.faculties.len()
            + self.departments.len()
            + self.groups.len()
            + self.students.len()
            + self.teachers.len()
            + self.disciplines.len()
            + self.workloads.len()
            + self.thesis_works.len()
            + self.grades.len()
            + self.teacher_disciplines.len()
    }

    /// Look up a faculty by identifier
    #[must_use]
    pub fn find_faculty(&self, id: Uuid) -> Option<&Faculty> {
        self.faculties.iter().find(|f| f.id == id)
    }

    /// Look up a department by identifier
    #[must_use]
    pub fn find_department(&self, id: Uuid) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    /// Look up a group by identifier
    #[must_use]
    pub fn find_group(&self, id: Uuid) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Look up a student by identifier
    #[must_use]
    pub fn find_student(&self, id: Uuid) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Look up a teacher by identifier
    #[must_use]
    pub fn find_teacher(&self, id: Uuid) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    /// Look up a discipline by identifier
    #[must_use]
    pub fn find_discipline(&self, id: Uuid) -> Option<&Discipline> {
        self.disciplines.iter().find(|d| d.id == id)
    }

    /// Look up a workload assignment by identifier
    #[must_use]
    pub fn find_workload(&self, id: Uuid) -> Option<&WorkLoad> {
        self.workloads.iter().find(|w| w.id == id)
    }

    /// Look up a thesis work by identifier
    #[must_use]
    pub fn find_thesis_work(&self, id: Uuid) -> Option<&ThesisWork> {
        self.thesis_works.iter().find(|t| t.id == id)
    }

    /// Look up a grade record by identifier
    #[must_use]
    pub fn find_grade(&self, id: Uuid) -> Option<&StudentGrade> {
        self.grades.iter().find(|g| g.id == id)
    }

    /// All departments belonging to a faculty
    #[must_use]
    pub fn departments_of_faculty(&self, faculty_id: Uuid) -> Vec<&Department> {
        self.departments
            .iter()
            .filter(|d| d.faculty_id == faculty_id)
            .collect()
    }

    /// All groups belonging to a faculty
    #[must_use]
    pub fn groups_of_faculty(&self, faculty_id: Uuid) -> Vec<&Group> {
        self.groups
            .iter()
            .filter(|g| g.faculty_id == faculty_id)
            .collect()
    }

    /// All students enrolled in a group
    #[must_use]
    pub fn students_of_group(&self, group_id: Uuid) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.group_id == group_id)
            .collect()
    }

    /// All teachers employed by a department
    #[must_use]
    pub fn teachers_of_department(&self, department_id: Uuid) -> Vec<&Teacher> {
        self.teachers
            .iter()
            .filter(|t| t.department_id == department_id)
            .collect()
    }

    /// All disciplines taught to a group
    #[must_use]
    pub fn disciplines_of_group(&self, group_id: Uuid) -> Vec<&Discipline> {
        self.disciplines
            .iter()
            .filter(|d| d.group_id == group_id)
            .collect()
    }

    /// All workload assignments held by a teacher
    #[must_use]
    pub fn workloads_of_teacher(&self, teacher_id: Uuid) -> Vec<&WorkLoad> {
        self.workloads
            .iter()
            .filter(|w| w.teacher_id == teacher_id)
            .collect()
    }

    /// All thesis works supervised by a teacher
    #[must_use]
    pub fn thesis_works_of_supervisor(&self, teacher_id: Uuid) -> Vec<&ThesisWork> {
        self.thesis_works
            .iter()
            .filter(|t| t.supervisor_id == teacher_id)
            .collect()
    }

    /// All thesis works written by a student
    #[must_use]
    pub fn thesis_works_of_student(&self, student_id: Uuid) -> Vec<&ThesisWork> {
        self.thesis_works
            .iter()
            .filter(|t| t.student_id == student_id)
            .collect()
    }

    /// All grade records of a student
    #[must_use]
    pub fn grades_of_student(&self, student_id: Uuid) -> Vec<&StudentGrade> {
        self.grades
            .iter()
            .filter(|g| g.student_id == student_id)
            .collect()
    }

    /// The grade a student holds in a discipline, if any
    #[must_use]
    pub fn grade_for(&self, student_id: Uuid, discipline_id: Uuid) -> Option<&StudentGrade> {
        self.grades
            .iter()
            .find(|g| g.student_id == student_id && g.discipline_id == discipline_id)
    }

    /// All eligibility links held by a teacher
    #[must_use]
    pub fn links_of_teacher(&self, teacher_id: Uuid) -> Vec<&TeacherDiscipline> {
        self.teacher_disciplines
            .iter()
            .filter(|l| l.teacher_id == teacher_id)
            .collect()
    }

    /// All disciplines a teacher is linked to, resolving the link table
    #[must_use]
    pub fn disciplines_of_teacher(&self, teacher_id: Uuid) -> Vec<&Discipline> {
        self.teacher_disciplines
            .iter()
            .filter(|l| l.teacher_id == teacher_id)
            .filter_map(|l| self.find_discipline(l.discipline_id))
            .collect()
    }

    /// Register an observer; returns a token for [`unsubscribe`](Self::unsubscribe)
    pub fn subscribe(&mut self, observer: impl Fn(&ChangeEvent) + 'static) -> usize {
        let token = self.next_token;
        self.next_token += 1;
        self.subscribers.push((token, Box::new(observer)));
        token
    }

    /// Drop a previously registered observer; returns whether it was found
    pub fn unsubscribe(&mut self, token: usize) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(t, _)| *t != token);
        self.subscribers.len() != before
    }

    fn notify(&self, event: &ChangeEvent) {
        for (_, subscriber) in &self.subscribers {
            subscriber(event);
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::{ChangeKind, EntityKind};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_empty_registry_has_no_records() {
        let registry = Registry::new();
        assert_eq!(registry.record_count(), 0);
        assert!(registry.find_faculty(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_relationship_queries_filter_by_foreign_key() {
        let mut registry = Registry::new();
        let faculty = Faculty::new("Mathematics".to_string(), "Орлов".to_string());
        let faculty_id = faculty.id;
        registry.faculties.push(faculty);

        let mut home = Group::new("М-101".to_string(), 2024, 1, faculty_id);
        let other = Group::new("Ф-101".to_string(), 2024, 1, Uuid::new_v4());
        let home_id = home.id;
        home.add_student(Uuid::new_v4());
        registry.groups.push(home);
        registry.groups.push(other);

        let groups = registry.groups_of_faculty(faculty_id);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, home_id);
    }

    #[test]
    fn test_grade_for_matches_the_pair() {
        let mut registry = Registry::new();
        let student_id = Uuid::new_v4();
        let discipline_id = Uuid::new_v4();
        registry.grades.push(StudentGrade::new(
            student_id,
            discipline_id,
            50,
            30,
            80,
            "4".to_string(),
        ));

        assert!(registry.grade_for(student_id, discipline_id).is_some());
        assert!(registry.grade_for(student_id, Uuid::new_v4()).is_none());
        assert!(registry.grade_for(Uuid::new_v4(), discipline_id).is_none());
    }

    #[test]
    fn test_disciplines_of_teacher_resolves_links() {
        let mut registry = Registry::new();
        let teacher_id = Uuid::new_v4();

        let discipline = Discipline::new(
            "Topology".to_string(),
            5,
            40,
            20,
            0,
            crate::core::models::ControlForm::Exam,
            Uuid::new_v4(),
        );
        let discipline_id = discipline.id;
        registry.disciplines.push(discipline);

        registry
            .teacher_disciplines
            .push(TeacherDiscipline::new(teacher_id, discipline_id));
        // Dangling link resolves to nothing
        registry
            .teacher_disciplines
            .push(TeacherDiscipline::new(teacher_id, Uuid::new_v4()));

        let linked = registry.disciplines_of_teacher(teacher_id);
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].id, discipline_id);
    }

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let mut registry = Registry::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let token = registry.subscribe(move |event| sink.borrow_mut().push(*event));

        let event = ChangeEvent::new(EntityKind::Faculty, ChangeKind::Added, Uuid::new_v4());
        registry.notify(&event);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0], event);

        assert!(registry.unsubscribe(token));
        registry.notify(&event);
        assert_eq!(seen.borrow().len(), 1);

        assert!(!registry.unsubscribe(token));
    }
}
