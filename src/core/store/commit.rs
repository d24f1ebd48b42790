//! Committing operations
//!
//! Every add, update and remove validates first, mutates second, and
//! publishes a change event last. A rejected mutation leaves the registry
//! untouched. Removals never cascade; records referencing the removed
//! identifier keep it as a dangling foreign key.

use crate::core::events::{ChangeEvent, ChangeKind, EntityKind};
use crate::core::models::{
    Department, Discipline, Faculty, Group, Student, StudentGrade, Teacher, TeacherDiscipline,
    ThesisWork, WorkLoad,
};
use crate::core::rules::{self, conflicts, grades, ValidationError};
use crate::core::store::Registry;
use uuid::Uuid;

impl Registry {
    /// Add a faculty
    ///
    /// # Errors
    /// Returns the first field rule the record breaks.
    pub fn add_faculty(&mut self, faculty: Faculty) -> Result<(), ValidationError> {
        rules::check_faculty(&faculty)?;

        let id = faculty.id;
        self.faculties.push(faculty);
        self.notify(&ChangeEvent::new(EntityKind::Faculty, ChangeKind::Added, id));
        Ok(())
    }

    /// Replace a stored faculty with the same identifier
    ///
    /// # Errors
    /// Returns a validation error, or [`ValidationError::UnknownId`] when no
    /// faculty carries the identifier.
    pub fn update_faculty(&mut self, faculty: Faculty) -> Result<(), ValidationError> {
        rules::check_faculty(&faculty)?;

        let slot = self
            .faculties
            .iter_mut()
            .find(|f| f.id == faculty.id)
            .ok_or(ValidationError::UnknownId { entity: "faculty" })?;
        let id = faculty.id;
        *slot = faculty;
        self.notify(&ChangeEvent::new(
            EntityKind::Faculty,
            ChangeKind::Updated,
            id,
        ));
        Ok(())
    }

    /// Remove a faculty; departments and groups keep their dangling key
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownId`] when no faculty carries the
    /// identifier.
    pub fn remove_faculty(&mut self, id: Uuid) -> Result<(), ValidationError> {
        let index = self
            .faculties
            .iter()
            .position(|f| f.id == id)
            .ok_or(ValidationError::UnknownId { entity: "faculty" })?;
        self.faculties.remove(index);
        self.notify(&ChangeEvent::new(
            EntityKind::Faculty,
            ChangeKind::Removed,
            id,
        ));
        Ok(())
    }

    /// Add a department and enroll it in its faculty's roster
    ///
    /// # Errors
    /// Returns a field rule violation or an unresolved faculty reference.
    pub fn add_department(&mut self, department: Department) -> Result<(), ValidationError> {
        rules::check_department(&department)?;
        self.require_faculty("faculty_id", department.faculty_id)?;

        let id = department.id;
        if let Some(faculty) = self
            .faculties
            .iter_mut()
            .find(|f| f.id == department.faculty_id)
        {
            faculty.add_department(id);
        }
        self.departments.push(department);
        self.notify(&ChangeEvent::new(
            EntityKind::Department,
            ChangeKind::Added,
            id,
        ));
        Ok(())
    }

    /// Replace a stored department with the same identifier
    ///
    /// # Errors
    /// Returns a validation error, or [`ValidationError::UnknownId`] when no
    /// department carries the identifier.
    pub fn update_department(&mut self, department: Department) -> Result<(), ValidationError> {
        rules::check_department(&department)?;
        self.require_faculty("faculty_id", department.faculty_id)?;

        let slot = self
            .departments
            .iter_mut()
            .find(|d| d.id == department.id)
            .ok_or(ValidationError::UnknownId {
                entity: "department",
            })?;
        let id = department.id;
        *slot = department;
        self.notify(&ChangeEvent::new(
            EntityKind::Department,
            ChangeKind::Updated,
            id,
        ));
        Ok(())
    }

    /// Remove a department; teachers keep their dangling key
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownId`] when no department carries the
    /// identifier.
    pub fn remove_department(&mut self, id: Uuid) -> Result<(), ValidationError> {
        let index = self
            .departments
            .iter()
            .position(|d| d.id == id)
            .ok_or(ValidationError::UnknownId {
                entity: "department",
            })?;
        self.departments.remove(index);
        self.notify(&ChangeEvent::new(
            EntityKind::Department,
            ChangeKind::Removed,
            id,
        ));
        Ok(())
    }

    /// Add a group and enroll it in its faculty's roster
    ///
    /// # Errors
    /// Returns a field rule violation or an unresolved faculty reference.
    pub fn add_group(&mut self, group: Group) -> Result<(), ValidationError> {
        rules::check_group(&group)?;
        self.require_faculty("faculty_id", group.faculty_id)?;

        let id = group.id;
        if let Some(faculty) = self.faculties.iter_mut().find(|f| f.id == group.faculty_id) {
            faculty.add_group(id);
        }
        self.groups.push(group);
        self.notify(&ChangeEvent::new(EntityKind::Group, ChangeKind::Added, id));
        Ok(())
    }

    /// Replace a stored group with the same identifier
    ///
    /// # Errors
    /// Returns a validation error, or [`ValidationError::UnknownId`] when no
    /// group carries the identifier.
    pub fn update_group(&mut self, group: Group) -> Result<(), ValidationError> {
        rules::check_group(&group)?;
        self.require_faculty("faculty_id", group.faculty_id)?;

        let slot = self
            .groups
            .iter_mut()
            .find(|g| g.id == group.id)
            .ok_or(ValidationError::UnknownId { entity: "group" })?;
        let id = group.id;
        *slot = group;
        self.notify(&ChangeEvent::new(EntityKind::Group, ChangeKind::Updated, id));
        Ok(())
    }

    /// Remove a group; students and disciplines keep their dangling key
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownId`] when no group carries the
    /// identifier.
    pub fn remove_group(&mut self, id: Uuid) -> Result<(), ValidationError> {
        let index = self
            .groups
            .iter()
            .position(|g| g.id == id)
            .ok_or(ValidationError::UnknownId { entity: "group" })?;
        self.groups.remove(index);
        self.notify(&ChangeEvent::new(EntityKind::Group, ChangeKind::Removed, id));
        Ok(())
    }

    /// Add a student and enroll them in their group's roster
    ///
    /// # Errors
    /// Returns a field rule violation or an unresolved group reference.
    pub fn add_student(&mut self, student: Student) -> Result<(), ValidationError> {
        rules::check_student(&student)?;
        self.require_group("group_id", student.group_id)?;

        let id = student.id;
        if let Some(group) = self.groups.iter_mut().find(|g| g.id == student.group_id) {
            group.add_student(id);
        }
        self.students.push(student);
        self.notify(&ChangeEvent::new(
            EntityKind::Student,
            ChangeKind::Added,
            id,
        ));
        Ok(())
    }

    /// Replace a stored student with the same identifier
    ///
    /// # Errors
    /// Returns a validation error, or [`ValidationError::UnknownId`] when no
    /// student carries the identifier.
    pub fn update_student(&mut self, student: Student) -> Result<(), ValidationError> {
        rules::check_student(&student)?;
        self.require_group("group_id", student.group_id)?;

        let slot = self
            .students
            .iter_mut()
            .find(|s| s.id == student.id)
            .ok_or(ValidationError::UnknownId { entity: "student" })?;
        let id = student.id;
        *slot = student;
        self.notify(&ChangeEvent::new(
            EntityKind::Student,
            ChangeKind::Updated,
            id,
        ));
        Ok(())
    }

    /// Remove a student; grades and thesis works keep their dangling key
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownId`] when no student carries the
    /// identifier.
    pub fn remove_student(&mut self, id: Uuid) -> Result<(), ValidationError> {
        let index = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or(ValidationError::UnknownId { entity: "student" })?;
        self.students.remove(index);
        self.notify(&ChangeEvent::new(
            EntityKind::Student,
            ChangeKind::Removed,
            id,
        ));
        Ok(())
    }

    /// Add a teacher and enroll them in their department's roster
    ///
    /// # Errors
    /// Returns a field rule violation, the position/title coupling, or an
    /// unresolved department reference.
    pub fn add_teacher(&mut self, teacher: Teacher) -> Result<(), ValidationError> {
        rules::check_teacher(&teacher)?;
        self.require_department("department_id", teacher.department_id)?;

        let id = teacher.id;
        if let Some(department) = self
            .departments
            .iter_mut()
            .find(|d| d.id == teacher.department_id)
        {
            department.add_teacher(id);
        }
        self.teachers.push(teacher);
        self.notify(&ChangeEvent::new(
            EntityKind::Teacher,
            ChangeKind::Added,
            id,
        ));
        Ok(())
    }

    /// Replace a stored teacher with the same identifier
    ///
    /// # Errors
    /// Returns a validation error, or [`ValidationError::UnknownId`] when no
    /// teacher carries the identifier.
    pub fn update_teacher(&mut self, teacher: Teacher) -> Result<(), ValidationError> {
        rules::check_teacher(&teacher)?;
        self.require_department("department_id", teacher.department_id)?;

        let slot = self
            .teachers
            .iter_mut()
            .find(|t| t.id == teacher.id)
            .ok_or(ValidationError::UnknownId { entity: "teacher" })?;
        let id = teacher.id;
        *slot = teacher;
        self.notify(&ChangeEvent::new(
            EntityKind::Teacher,
            ChangeKind::Updated,
            id,
        ));
        Ok(())
    }

    /// Remove a teacher; workloads, links and theses keep their dangling key
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownId`] when no teacher carries the
    /// identifier.
    pub fn remove_teacher(&mut self, id: Uuid) -> Result<(), ValidationError> {
        let index = self
            .teachers
            .iter()
            .position(|t| t.id == id)
            .ok_or(ValidationError::UnknownId { entity: "teacher" })?;
        self.teachers.remove(index);
        self.notify(&ChangeEvent::new(
            EntityKind::Teacher,
            ChangeKind::Removed,
            id,
        ));
        Ok(())
    }

    /// Add a discipline
    ///
    /// # Errors
    /// Returns a field rule violation or an unresolved group reference.
    pub fn add_discipline(&mut self, discipline: Discipline) -> Result<(), ValidationError> {
        rules::check_discipline(&discipline)?;
        self.require_group("group_id", discipline.group_id)?;

        let id = discipline.id;
        self.disciplines.push(discipline);
        self.notify(&ChangeEvent::new(
            EntityKind::Discipline,
            ChangeKind::Added,
            id,
        ));
        Ok(())
    }

    /// Replace a stored discipline with the same identifier
    ///
    /// # Errors
    /// Returns a validation error, or [`ValidationError::UnknownId`] when no
    /// discipline carries the identifier.
    pub fn update_discipline(&mut self, discipline: Discipline) -> Result<(), ValidationError> {
        rules::check_discipline(&discipline)?;
        self.require_group("group_id", discipline.group_id)?;

        let slot = self
            .disciplines
            .iter_mut()
            .find(|d| d.id == discipline.id)
            .ok_or(ValidationError::UnknownId {
                entity: "discipline",
            })?;
        let id = discipline.id;
        *slot = discipline;
        self.notify(&ChangeEvent::new(
            EntityKind::Discipline,
            ChangeKind::Updated,
            id,
        ));
        Ok(())
    }

    /// Remove a discipline; workloads, links and grades keep their dangling
    /// key
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownId`] when no discipline carries the
    /// identifier.
    pub fn remove_discipline(&mut self, id: Uuid) -> Result<(), ValidationError> {
        let index = self
            .disciplines
            .iter()
            .position(|d| d.id == id)
            .ok_or(ValidationError::UnknownId {
                entity: "discipline",
            })?;
        self.disciplines.remove(index);
        self.notify(&ChangeEvent::new(
            EntityKind::Discipline,
            ChangeKind::Removed,
            id,
        ));
        Ok(())
    }

    /// Add a workload assignment.
    ///
    /// Beyond field rules, the teacher, discipline and group must resolve,
    /// the discipline must be taught to the workload's group, the teacher
    /// must hold an eligibility link for the discipline, and a lecture or
    /// seminar slot must not be held by another teacher.
    ///
    /// # Errors
    /// Returns the first rule the assignment breaks.
    pub fn add_workload(&mut self, workload: WorkLoad) -> Result<(), ValidationError> {
        self.check_workload_rules(&workload)?;

        let id = workload.id;
        self.workloads.push(workload);
        self.notify(&ChangeEvent::new(
            EntityKind::WorkLoad,
            ChangeKind::Added,
            id,
        ));
        Ok(())
    }

    /// Replace a stored workload with the same identifier, re-checking
    /// every assignment rule
    ///
    /// # Errors
    /// Returns a validation error, or [`ValidationError::UnknownId`] when no
    /// workload carries the identifier.
    pub fn update_workload(&mut self, workload: WorkLoad) -> Result<(), ValidationError> {
        self.check_workload_rules(&workload)?;

        let slot = self
            .workloads
            .iter_mut()
            .find(|w| w.id == workload.id)
            .ok_or(ValidationError::UnknownId { entity: "workload" })?;
        let id = workload.id;
        *slot = workload;
        self.notify(&ChangeEvent::new(
            EntityKind::WorkLoad,
            ChangeKind::Updated,
            id,
        ));
        Ok(())
    }

    /// Remove a workload assignment
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownId`] when no workload carries the
    /// identifier.
    pub fn remove_workload(&mut self, id: Uuid) -> Result<(), ValidationError> {
        let index = self
            .workloads
            .iter()
            .position(|w| w.id == id)
            .ok_or(ValidationError::UnknownId { entity: "workload" })?;
        self.workloads.remove(index);
        self.notify(&ChangeEvent::new(
            EntityKind::WorkLoad,
            ChangeKind::Removed,
            id,
        ));
        Ok(())
    }

    /// Add a thesis work; the supervisor must lead research topics or
    /// directions
    ///
    /// # Errors
    /// Returns the first rule the thesis breaks.
    pub fn add_thesis_work(&mut self, thesis: ThesisWork) -> Result<(), ValidationError> {
        self.check_thesis_rules(&thesis)?;

        let id = thesis.id;
        self.thesis_works.push(thesis);
        self.notify(&ChangeEvent::new(
            EntityKind::ThesisWork,
            ChangeKind::Added,
            id,
        ));
        Ok(())
    }

    /// Replace a stored thesis work with the same identifier
    ///
    /// # Errors
    /// Returns a validation error, or [`ValidationError::UnknownId`] when no
    /// thesis carries the identifier.
    pub fn update_thesis_work(&mut self, thesis: ThesisWork) -> Result<(), ValidationError> {
        self.check_thesis_rules(&thesis)?;

        let slot = self
            .thesis_works
            .iter_mut()
            .find(|t| t.id == thesis.id)
            .ok_or(ValidationError::UnknownId {
                entity: "thesis work",
            })?;
        let id = thesis.id;
        *slot = thesis;
        self.notify(&ChangeEvent::new(
            EntityKind::ThesisWork,
            ChangeKind::Updated,
            id,
        ));
        Ok(())
    }

    /// Remove a thesis work
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownId`] when no thesis carries the
    /// identifier.
    pub fn remove_thesis_work(&mut self, id: Uuid) -> Result<(), ValidationError> {
        let index = self
            .thesis_works
            .iter()
            .position(|t| t.id == id)
            .ok_or(ValidationError::UnknownId {
                entity: "thesis work",
            })?;
        self.thesis_works.remove(index);
        self.notify(&ChangeEvent::new(
            EntityKind::ThesisWork,
            ChangeKind::Removed,
            id,
        ));
        Ok(())
    }

    /// Link a teacher to a discipline, making workload assignments for it
    /// eligible
    ///
    /// # Errors
    /// Returns an unresolved reference or [`ValidationError::DuplicateLink`].
    pub fn add_teacher_discipline(
        &mut self,
        link: TeacherDiscipline,
    ) -> Result<(), ValidationError> {
        self.require_teacher("teacher_id", link.teacher_id)?;
        self.require_discipline("discipline_id", link.discipline_id)?;
        conflicts::check_unique_link(&self.teacher_disciplines, &link)?;

        let id = link.id;
        self.teacher_disciplines.push(link);
        self.notify(&ChangeEvent::new(
            EntityKind::TeacherDiscipline,
            ChangeKind::Added,
            id,
        ));
        Ok(())
    }

    /// Remove a teacher-discipline link; workloads already assigned stay
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownId`] when no link carries the
    /// identifier.
    pub fn remove_teacher_discipline(&mut self, id: Uuid) -> Result<(), ValidationError> {
        let index = self
            .teacher_disciplines
            .iter()
            .position(|l| l.id == id)
            .ok_or(ValidationError::UnknownId {
                entity: "teacher-discipline link",
            })?;
        self.teacher_disciplines.remove(index);
        self.notify(&ChangeEvent::new(
            EntityKind::TeacherDiscipline,
            ChangeKind::Removed,
            id,
        ));
        Ok(())
    }

    /// Record a student's result in a discipline.
    ///
    /// Points are clamped to the discipline's control-form caps, graded,
    /// and committed. At most one grade record exists per
    /// (student, discipline) pair: an existing record is rewritten in
    /// place, otherwise a new one is appended.
    ///
    /// # Errors
    /// Returns an unresolved student or discipline reference.
    pub fn record_grade(
        &mut self,
        student_id: Uuid,
        discipline_id: Uuid,
        semester_points: u16,
        exam_points: u16,
    ) -> Result<grades::GradeOutcome, ValidationError> {
        self.require_student("student_id", student_id)?;
        self.require_discipline("discipline_id", discipline_id)?;

        let form = self
            .find_discipline(discipline_id)
            .map(|d| d.control_form)
            .ok_or(ValidationError::UnknownReference {
                field: "discipline_id",
                entity: "discipline",
            })?;

        let (semester_points, exam_points) =
            grades::clamp_points(form, semester_points, exam_points);
        let outcome = grades::evaluate(form, semester_points, exam_points);

        if let Some(existing) = self
            .grades
            .iter_mut()
            .find(|g| g.student_id == student_id && g.discipline_id == discipline_id)
        {
            existing.semester_points = semester_points;
            existing.exam_points = exam_points;
            existing.total_points = outcome.total;
            existing.grade = outcome.mark.to_string();
            let id = existing.id;
            self.notify(&ChangeEvent::new(
                EntityKind::StudentGrade,
                ChangeKind::Updated,
                id,
            ));
        } else {
            let record = StudentGrade::new(
                student_id,
                discipline_id,
                semester_points,
                exam_points,
                outcome.total,
                outcome.mark.to_string(),
            );
            let id = record.id;
            self.grades.push(record);
            self.notify(&ChangeEvent::new(
                EntityKind::StudentGrade,
                ChangeKind::Added,
                id,
            ));
        }

        Ok(outcome)
    }

    /// Remove a grade record
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownId`] when no grade carries the
    /// identifier.
    pub fn remove_grade(&mut self, id: Uuid) -> Result<(), ValidationError> {
        let index = self
            .grades
            .iter()
            .position(|g| g.id == id)
            .ok_or(ValidationError::UnknownId { entity: "grade" })?;
        self.grades.remove(index);
        self.notify(&ChangeEvent::new(
            EntityKind::StudentGrade,
            ChangeKind::Removed,
            id,
        ));
        Ok(())
    }

    fn check_workload_rules(&self, workload: &WorkLoad) -> Result<(), ValidationError> {
        rules::check_workload(workload)?;
        self.require_teacher("teacher_id", workload.teacher_id)?;
        self.require_discipline("discipline_id", workload.discipline_id)?;
        self.require_group("group_id", workload.group_id)?;

        let discipline = self
            .find_discipline(workload.discipline_id)
            .ok_or(ValidationError::UnknownReference {
                field: "discipline_id",
                entity: "discipline",
            })?;
        conflicts::check_discipline_group(discipline, workload)?;
        conflicts::check_teacher_linked(
            &self.teacher_disciplines,
            workload.teacher_id,
            workload.discipline_id,
        )?;
        conflicts::check_lesson_slot(&self.workloads, workload)
    }

    fn check_thesis_rules(&self, thesis: &ThesisWork) -> Result<(), ValidationError> {
        rules::check_thesis(thesis)?;
        self.require_student("student_id", thesis.student_id)?;
        self.require_teacher("supervisor_id", thesis.supervisor_id)?;

        let supervisor =
            self.find_teacher(thesis.supervisor_id)
                .ok_or(ValidationError::UnknownReference {
                    field: "supervisor_id",
                    entity: "teacher",
                })?;
        conflicts::check_supervisor(supervisor)
    }

    fn require_faculty(&self, field: &'static str, id: Uuid) -> Result<(), ValidationError> {
        if id.is_nil() {
            return Err(ValidationError::NotSelected { field });
        }
        if self.find_faculty(id).is_none() {
            return Err(ValidationError::UnknownReference {
                field,
                entity: "faculty",
            });
        }
        Ok(())
    }

    fn require_department(&self, field: &'static str, id: Uuid) -> Result<(), ValidationError> {
        if id.is_nil() {
            return Err(ValidationError::NotSelected { field });
        }
        if self.find_department(id).is_none() {
            return Err(ValidationError::UnknownReference {
                field,
                entity: "department",
            });
        }
        Ok(())
    }

    fn require_group(&self, field: &'static str, id: Uuid) -> Result<(), ValidationError> {
        if id.is_nil() {
            return Err(ValidationError::NotSelected { field });
        }
        if self.find_group(id).is_none() {
            return Err(ValidationError::UnknownReference {
                field,
                entity: "group",
            });
        }
        Ok(())
    }

    fn require_student(&self, field: &'static str, id: Uuid) -> Result<(), ValidationError> {
        if id.is_nil() {
            return Err(ValidationError::NotSelected { field });
        }
        if self.find_student(id).is_none() {
            return Err(ValidationError::UnknownReference {
                field,
                entity: "student",
            });
        }
        Ok(())
    }

    fn require_teacher(&self, field: &'static str, id: Uuid) -> Result<(), ValidationError> {
        if id.is_nil() {
            return Err(ValidationError::NotSelected { field });
        }
        if self.find_teacher(id).is_none() {
            return Err(ValidationError::UnknownReference {
                field,
                entity: "teacher",
            });
        }
        Ok(())
    }

    fn require_discipline(&self, field: &'static str, id: Uuid) -> Result<(), ValidationError> {
        if id.is_nil() {
            return Err(ValidationError::NotSelected { field });
        }
        if self.find_discipline(id).is_none() {
            return Err(ValidationError::UnknownReference {
                field,
                entity: "discipline",
            });
        }
        Ok(())
    }
}
