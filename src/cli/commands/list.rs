//! List command handler
//!
//! Prints one line per record of the chosen collection, with foreign
//! keys resolved to display names where possible.

use crate::args::EntityArg;
use std::path::Path;
use uni_registry::config::Config;
use uni_registry::core::models::{Group, Student, StudentGrade, Teacher, ThesisWork, WorkLoad};
use uni_registry::core::report::UNKNOWN;
use uni_registry::core::store::Registry;
use uni_registry::{error, info};

/// Run the list command for one entity collection.
pub fn run(entity: EntityArg, config: &Config) {
    if let Err(err) = list_entities(entity, config) {
        error!("List failed: {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn list_entities(entity: EntityArg, config: &Config) -> Result<(), String> {
    let data_dir = Path::new(&config.paths.data_dir);
    let mut registry = Registry::new();
    let load = registry
        .load_all(data_dir)
        .map_err(|e| format!("✗ Failed to load data from {}: {e}", data_dir.display()))?;
    info!(
        "Loaded {} records from {}",
        load.loaded,
        data_dir.display()
    );

    match entity {
        EntityArg::Faculties => {
            print_header("Faculties", registry.faculties().len());
            for faculty in registry.faculties() {
                println!("  {}  {} (dean: {})", faculty.id, faculty.name, faculty.dean);
            }
        }
        EntityArg::Departments => {
            print_header("Departments", registry.departments().len());
            for department in registry.departments() {
                println!(
                    "  {}  {} (head: {})",
                    department.id, department.name, department.head
                );
            }
        }
        EntityArg::Groups => {
            print_header("Groups", registry.groups().len());
            for group in registry.groups() {
                println!("  {}  {}", group.id, group.display());
            }
        }
        EntityArg::Students => {
            print_header("Students", registry.students().len());
            for student in registry.students() {
                println!(
                    "  {}  {}, {}, GPA {:.2}",
                    student.id,
                    student.full_name(),
                    student.record_book_number,
                    student.gpa
                );
            }
        }
        EntityArg::Teachers => {
            print_header("Teachers", registry.teachers().len());
            for teacher in registry.teachers() {
                println!(
                    "  {}  {} ({})",
                    teacher.id,
                    teacher.full_name(),
                    teacher.position.label()
                );
            }
        }
        EntityArg::Disciplines => {
            print_header("Disciplines", registry.disciplines().len());
            for discipline in registry.disciplines() {
                println!(
                    "  {}  {} (semester {}, {}, {} hours)",
                    discipline.id,
                    discipline.name,
                    discipline.semester(),
                    discipline.control_form.label(),
                    discipline.total_hours()
                );
            }
        }
        EntityArg::Workloads => {
            print_header("Workloads", registry.workloads().len());
            for workload in registry.workloads() {
                println!("  {}  {}", workload.id, workload_line(&registry, workload));
            }
        }
        EntityArg::Theses => {
            print_header("Thesis works", registry.thesis_works().len());
            for thesis in registry.thesis_works() {
                println!("  {}  {}", thesis.id, thesis_line(&registry, thesis));
            }
        }
        EntityArg::Grades => {
            print_header("Grades", registry.grades().len());
            for grade in registry.grades() {
                println!("  {}  {}", grade.id, grade_line(&registry, grade));
            }
        }
        EntityArg::Links => {
            print_header("Teacher-discipline links", registry.teacher_disciplines().len());
            for link in registry.teacher_disciplines() {
                println!(
                    "  {}  {} -> {}",
                    link.id,
                    teacher_name(&registry, link.teacher_id),
                    discipline_name(&registry, link.discipline_id)
                );
            }
        }
    }

    Ok(())
}

fn print_header(title: &str, count: usize) {
    println!("\n=== {title} ({count}) ===");
    if count == 0 {
        println!("  (none)");
    }
}

fn teacher_name(registry: &Registry, id: uuid::Uuid) -> String {
    registry
        .find_teacher(id)
        .map_or_else(|| UNKNOWN.to_string(), Teacher::short_name)
}

fn student_name(registry: &Registry, id: uuid::Uuid) -> String {
    registry
        .find_student(id)
        .map_or_else(|| UNKNOWN.to_string(), Student::short_name)
}

fn discipline_name(registry: &Registry, id: uuid::Uuid) -> String {
    registry
        .find_discipline(id)
        .map_or_else(|| UNKNOWN.to_string(), |d| d.name.clone())
}

fn group_label(registry: &Registry, id: uuid::Uuid) -> String {
    registry
        .find_group(id)
        .map_or_else(|| UNKNOWN.to_string(), Group::display)
}

fn workload_line(registry: &Registry, workload: &WorkLoad) -> String {
    format!(
        "{}: {} for {}, {} hours of {}, {} semester {}",
        teacher_name(registry, workload.teacher_id),
        discipline_name(registry, workload.discipline_id),
        group_label(registry, workload.group_id),
        workload.hours,
        workload.lesson_type.label(),
        workload.academic_year,
        workload.semester
    )
}

fn thesis_line(registry: &Registry, thesis: &ThesisWork) -> String {
    let grade = thesis
        .grade
        .map_or_else(|| "not graded".to_string(), |g| g.to_string());
    format!(
        "{} ({}, student: {}, supervisor: {}, grade: {})",
        thesis.title,
        thesis.year,
        student_name(registry, thesis.student_id),
        teacher_name(registry, thesis.supervisor_id),
        grade
    )
}

fn grade_line(registry: &Registry, grade: &StudentGrade) -> String {
    format!(
        "{}: {} = {} ({})",
        student_name(registry, grade.student_id),
        discipline_name(registry, grade.discipline_id),
        grade.total_points,
        grade.grade
    )
}
