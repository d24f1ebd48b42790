//! Markdown report rendering
//!
//! Fills the embedded templates by placeholder substitution. The output
//! renders well in GitHub, GitLab, and VS Code.

use crate::core::report::formats::{
    department_name, discipline_name, faculty_name, grade_note, group_label, research_summary,
    student_name, teacher_name,
};
use crate::core::report::{GradeLine, StudentProfile, TeacherProfile, Timeline};
use std::fmt::Write;

/// Embedded student report template
const STUDENT_TEMPLATE: &str = include_str!("../templates/student.md");

/// Embedded teacher report template
const TEACHER_TEMPLATE: &str = include_str!("../templates/teacher.md");

/// Render a student profile as Markdown
#[must_use]
pub fn student(profile: &StudentProfile<'_>) -> String {
    let mut output = STUDENT_TEMPLATE.to_string();

    output = output.replace("{{full_name}}", &profile.student.full_name());
    output = output.replace("{{record_book}}", &profile.student.record_book_number);
    output = output.replace("{{group}}", &group_label(profile.group));
    output = output.replace("{{faculty}}", faculty_name(profile.faculty));
    output = output.replace("{{gpa}}", &format!("{:.2}", profile.student.gpa));

    output = output.replace("{{grades_table}}", &grades_table(profile));
    output = output.replace("{{theses}}", &theses_list(profile));

    let timeline = profile.timeline.as_ref().map_or_else(
        || "No group assigned.".to_string(),
        |timeline| timeline_sections(timeline, &profile.grades),
    );
    output = output.replace("{{timeline}}", &timeline);

    output
}

/// Render a teacher profile as Markdown
#[must_use]
pub fn teacher(profile: &TeacherProfile<'_>) -> String {
    let mut output = TEACHER_TEMPLATE.to_string();

    output = output.replace("{{full_name}}", &profile.teacher.full_name());
    output = output.replace("{{position}}", profile.teacher.position.label());
    output = output.replace("{{degree}}", profile.teacher.degree.label());
    output = output.replace("{{title}}", profile.teacher.title.label());
    output = output.replace("{{department}}", department_name(profile.department));
    output = output.replace("{{faculty}}", faculty_name(profile.faculty));
    output = output.replace("{{research}}", research_summary(profile.teacher));
    output = output.replace("{{total_hours}}", &profile.total_hours.to_string());

    output = output.replace("{{disciplines}}", &disciplines_list(profile));
    output = output.replace("{{workload_table}}", &workload_table(profile));
    output = output.replace("{{supervised}}", &supervised_list(profile));

    output
}

fn grades_table(profile: &StudentProfile<'_>) -> String {
    if profile.grades.is_empty() {
        return "No grades recorded.".to_string();
    }

    let mut table = String::new();
    table.push_str("| Discipline | Semester pts | Exam pts | Total | Grade |\n");
    table.push_str("|---|---|---|---|---|\n");

    for line in &profile.grades {
        let _ = writeln!(
            table,
            "| {} | {} | {} | {} | {} |",
            discipline_name(line.discipline),
            line.record.semester_points,
            line.record.exam_points,
            line.record.total_points,
            line.record.grade
        );
    }

    table
}

fn theses_list(profile: &StudentProfile<'_>) -> String {
    if profile.theses.is_empty() {
        return "No thesis works.".to_string();
    }

    let mut list = String::new();
    for line in &profile.theses {
        let grade = line
            .thesis
            .grade
            .map_or_else(|| "not graded".to_string(), |g| g.to_string());
        let _ = writeln!(
            list,
            "- {} ({}, supervisor: {}, grade: {})",
            line.thesis.title,
            line.thesis.year,
            teacher_name(line.supervisor),
            grade
        );
    }

    list
}

fn timeline_sections(timeline: &Timeline<'_>, grades: &[GradeLine<'_>]) -> String {
    let mut sections = String::new();
    let _ = writeln!(sections, "Current semester: {}\n", timeline.current_semester);

    for (heading, disciplines) in [
        ("Completed", &timeline.completed),
        ("Active", &timeline.active),
        ("Upcoming", &timeline.upcoming),
    ] {
        let _ = writeln!(sections, "### {heading}\n");
        if disciplines.is_empty() {
            sections.push_str("(none)\n\n");
            continue;
        }
        for discipline in disciplines {
            let _ = writeln!(
                sections,
                "- {} (semester {}): {}",
                discipline.name,
                discipline.semester(),
                grade_note(grades, discipline.id)
            );
        }
        sections.push('\n');
    }

    sections
}

fn disciplines_list(profile: &TeacherProfile<'_>) -> String {
    if profile.disciplines.is_empty() {
        return "No linked disciplines.".to_string();
    }

    let mut list = String::new();
    for discipline in &profile.disciplines {
        let _ = writeln!(
            list,
            "- {} (semester {}, {})",
            discipline.name,
            discipline.semester(),
            discipline.control_form.label()
        );
    }

    list
}

fn workload_table(profile: &TeacherProfile<'_>) -> String {
    if profile.workloads.is_empty() {
        return "No workload assigned.".to_string();
    }

    let mut table = String::new();
    table.push_str("| Discipline | Group | Lesson | Hours | Year | Semester |\n");
    table.push_str("|---|---|---|---|---|---|\n");

    for line in &profile.workloads {
        let _ = writeln!(
            table,
            "| {} | {} | {} | {} | {} | {} |",
            discipline_name(line.discipline),
            group_label(line.group),
            line.workload.lesson_type.label(),
            line.workload.hours,
            line.workload.academic_year,
            line.workload.semester
        );
    }

    table
}

fn supervised_list(profile: &TeacherProfile<'_>) -> String {
    if profile.supervised.is_empty() {
        return "No supervised theses.".to_string();
    }

    let mut list = String::new();
    for line in &profile.supervised {
        let _ = writeln!(
            list,
            "- {} ({}, student: {})",
            line.thesis.title,
            line.thesis.year,
            student_name(line.student)
        );
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Faculty, Group, Student};
    use crate::core::report::student_profile;
    use crate::core::store::Registry;

    #[test]
    fn test_student_markdown_fills_every_placeholder() {
        let mut registry = Registry::new();
        let faculty = Faculty::new("Informatics".to_string(), "Крылова".to_string());
        let faculty_id = faculty.id;
        registry.add_faculty(faculty).unwrap();

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

        let profile = student_profile(&registry, student_id, 10).unwrap();
        let rendered = super::student(&profile);

        assert!(rendered.contains("Смирнова Анна Павловна"));
        assert!(rendered.contains("ПИ-2024-001"));
        assert!(rendered.contains("4.50"));
        assert!(rendered.contains("No grades recorded."));
        assert!(!rendered.contains("{{"));
    }
}
