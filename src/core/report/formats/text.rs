//! Plain-text report rendering for the terminal

use crate::core::report::formats::{
    department_name, discipline_name, faculty_name, grade_note, group_label, research_summary,
    student_name, teacher_name,
};
use crate::core::report::{StudentProfile, TeacherProfile};
use std::fmt::Write;

/// Render a student profile as plain text
#[must_use]
pub fn student(profile: &StudentProfile<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Student: {} ===", profile.student.full_name());
    let _ = writeln!(out, "Record book: {}", profile.student.record_book_number);
    let _ = writeln!(out, "Group: {}", group_label(profile.group));
    let _ = writeln!(out, "Faculty: {}", faculty_name(profile.faculty));
    let _ = writeln!(out, "GPA: {:.2}", profile.student.gpa);

    out.push_str("\nGrades:\n");
    if profile.grades.is_empty() {
        out.push_str("  (none)\n");
    }
    for line in &profile.grades {
        let _ = writeln!(
            out,
            "  {}: {} + {} = {} ({})",
            discipline_name(line.discipline),
            line.record.semester_points,
            line.record.exam_points,
            line.record.total_points,
            line.record.grade
        );
    }

    out.push_str("\nThesis works:\n");
    if profile.theses.is_empty() {
        out.push_str("  (none)\n");
    }
    for line in &profile.theses {
        let grade = line
            .thesis
            .grade
            .map_or_else(|| "not graded".to_string(), |g| g.to_string());
        let _ = writeln!(
            out,
            "  {} ({}, supervisor: {}, grade: {})",
            line.thesis.title,
            line.thesis.year,
            teacher_name(line.supervisor),
            grade
        );
    }

    if let Some(timeline) = &profile.timeline {
        let _ = writeln!(out, "\nCurrent semester: {}", timeline.current_semester);
        for (heading, disciplines) in [
            ("Completed", &timeline.completed),
            ("Active", &timeline.active),
            ("Upcoming", &timeline.upcoming),
        ] {
            let _ = writeln!(out, "{heading}:");
            if disciplines.is_empty() {
                out.push_str("  (none)\n");
            }
            for discipline in disciplines {
                let _ = writeln!(
                    out,
                    "  {} (semester {}): {}",
                    discipline.name,
                    discipline.semester(),
                    grade_note(&profile.grades, discipline.id)
                );
            }
        }
    }

    out
}

/// Render a teacher profile as plain text
#[must_use]
pub fn teacher(profile: &TeacherProfile<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Teacher: {} ===", profile.teacher.full_name());
    let _ = writeln!(out, "Position: {}", profile.teacher.position.label());
    let _ = writeln!(out, "Degree: {}", profile.teacher.degree.label());
    let _ = writeln!(out, "Title: {}", profile.teacher.title.label());
    let _ = writeln!(out, "Department: {}", department_name(profile.department));
    let _ = writeln!(out, "Faculty: {}", faculty_name(profile.faculty));
    let _ = writeln!(out, "Research: {}", research_summary(profile.teacher));

    out.push_str("\nLinked disciplines:\n");
    if profile.disciplines.is_empty() {
        out.push_str("  (none)\n");
    }
    for discipline in &profile.disciplines {
        let _ = writeln!(
            out,
            "  {} (semester {}, {})",
            discipline.name,
            discipline.semester(),
            discipline.control_form.label()
        );
    }

    let _ = writeln!(out, "\nWorkload ({} hours):", profile.total_hours);
    if profile.workloads.is_empty() {
        out.push_str("  (none)\n");
    }
    for line in &profile.workloads {
        let _ = writeln!(
            out,
            "  {} for {}: {} hours of {}, {} semester {}",
            discipline_name(line.discipline),
            group_label(line.group),
            line.workload.hours,
            line.workload.lesson_type.label(),
            line.workload.academic_year,
            line.workload.semester
        );
    }

    out.push_str("\nSupervised theses:\n");
    if profile.supervised.is_empty() {
        out.push_str("  (none)\n");
    }
    for line in &profile.supervised {
        let _ = writeln!(
            out,
            "  {} ({}, student: {})",
            line.thesis.title,
            line.thesis.year,
            student_name(line.student)
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{
        AcademicDegree, AcademicTitle, Department, Faculty, Teacher, TeacherPosition,
    };
    use crate::core::report::teacher_profile;
    use crate::core::store::Registry;

    #[test]
    fn test_teacher_text_names_dangling_department() {
        let mut registry = Registry::new();
        let faculty = Faculty::new("Informatics".to_string(), "Крылова".to_string());
        let faculty_id = faculty.id;
        registry.add_faculty(faculty).unwrap();

        let department = Department::new(
            "Networks".to_string(),
            "Баранов".to_string(),
            faculty_id,
        );
        let department_id = department.id;
        registry.add_department(department).unwrap();

        let teacher_record = Teacher::new(
            "Баранов".to_string(),
            "Семён".to_string(),
            String::new(),
            TeacherPosition::Lecturer,
            AcademicDegree::None,
            AcademicTitle::None,
            department_id,
        );
        let teacher_id = teacher_record.id;
        registry.add_teacher(teacher_record).unwrap();
        registry.remove_department(department_id).unwrap();

        let profile = teacher_profile(&registry, teacher_id).unwrap();
        let rendered = teacher(&profile);

        assert!(rendered.contains("Department: <unknown>"));
        assert!(rendered.contains("Position: lecturer"));
    }
}
