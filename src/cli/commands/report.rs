//! Report command handler
//!
//! Renders student and teacher profiles in various formats (text,
//! Markdown, JSON) and writes them to the reports directory.

use crate::args::ReportSubcommand;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use uni_registry::config::Config;
use uni_registry::core::report::{
    self,
    formats::{render_student, render_teacher},
    timeline, ReportFormat, StudentProfile, TeacherProfile, UNKNOWN,
};
use uni_registry::core::store::Registry;
use uni_registry::{error, info};
use uuid::Uuid;

/// Run the report command.
pub fn run(subcommand: ReportSubcommand, config: &Config) {
    let result = match subcommand {
        ReportSubcommand::Student { id, format, output } => {
            generate_student(&id, &format, output.as_deref(), config)
        }
        ReportSubcommand::Teacher { id, format, output } => {
            generate_teacher(&id, &format, output.as_deref(), config)
        }
    };

    if let Err(err) = result {
        error!("Report generation failed: {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn generate_student(
    id_str: &str,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let format = parse_format(format_str)?;
    let student_id = parse_record_id(id_str)?;
    let registry = load_registry(config)?;

    let profile = report::student_profile(&registry, student_id, timeline::now_month())
        .ok_or_else(|| format!("✗ No student with id {student_id}"))?;

    let rendered =
        render_student(&profile, format).map_err(|e| format!("✗ Failed to render report: {e}"))?;

    let output_path = resolve_output_path(output_file, config, "student", student_id, format)?;
    std::fs::write(&output_path, rendered)
        .map_err(|e| format!("✗ Failed to write {}: {e}", output_path.display()))?;

    println!("✓ Report generated: {}", output_path.display());
    info!("Report exported to: {}", output_path.display());
    print_student_summary(&profile);

    Ok(())
}

fn generate_teacher(
    id_str: &str,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let format = parse_format(format_str)?;
    let teacher_id = parse_record_id(id_str)?;
    let registry = load_registry(config)?;

    let profile = report::teacher_profile(&registry, teacher_id)
        .ok_or_else(|| format!("✗ No teacher with id {teacher_id}"))?;

    let rendered =
        render_teacher(&profile, format).map_err(|e| format!("✗ Failed to render report: {e}"))?;

    let output_path = resolve_output_path(output_file, config, "teacher", teacher_id, format)?;
    std::fs::write(&output_path, rendered)
        .map_err(|e| format!("✗ Failed to write {}: {e}", output_path.display()))?;

    println!("✓ Report generated: {}", output_path.display());
    info!("Report exported to: {}", output_path.display());
    print_teacher_summary(&profile);

    Ok(())
}

fn parse_format(format_str: &str) -> Result<ReportFormat, String> {
    ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}. Use: text, markdown, or json"))
}

fn parse_record_id(id_str: &str) -> Result<Uuid, String> {
    Uuid::parse_str(id_str).map_err(|_| format!("✗ Invalid record id: '{id_str}'"))
}

fn load_registry(config: &Config) -> Result<Registry, String> {
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
    Ok(registry)
}

/// Determine where the rendered report goes: an explicit output path
/// wins, otherwise the configured reports directory is created and a
/// name is derived from the subject and record id.
fn resolve_output_path(
    output_file: Option<&Path>,
    config: &Config,
    subject: &str,
    id: Uuid,
    format: ReportFormat,
) -> Result<PathBuf, String> {
    if let Some(output) = output_file {
        return Ok(output.to_path_buf());
    }

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    Ok(reports_dir.join(format!("{subject}_{id}.{}", format.extension())))
}

fn print_student_summary(profile: &StudentProfile<'_>) {
    println!("\n=== Summary ===");
    println!("Student: {}", profile.student.full_name());
    println!(
        "Group: {}",
        profile
            .group
            .map_or_else(|| UNKNOWN.to_string(), |group| group.display())
    );
    println!("Grades recorded: {}", profile.grades.len());
    println!("Thesis works: {}", profile.theses.len());
}

fn print_teacher_summary(profile: &TeacherProfile<'_>) {
    println!("\n=== Summary ===");
    println!("Teacher: {}", profile.teacher.full_name());
    println!("Linked disciplines: {}", profile.disciplines.len());
    println!(
        "Workload: {} assignments, {} hours",
        profile.workloads.len(),
        profile.total_hours
    );
    println!("Supervised theses: {}", profile.supervised.len());
}
