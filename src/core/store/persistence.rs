//! Whole-registry persistence
//!
//! One UTF-8 text file per entity type inside the data directory, one
//! encoded record per line. Loads clear the collections first so a reload
//! is idempotent, and skip undecodable lines instead of failing the whole
//! pass. Saves rewrite every file from scratch.

use crate::core::codec::Record;
use crate::core::store::Registry;
use crate::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Line counters from one load pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Records decoded and appended
    pub loaded: usize,
    /// Lines dropped because they failed to decode
    pub skipped: usize,
}

impl Registry {
    /// Load every collection from the files in `dir`.
    ///
    /// Collections are cleared first. A missing file reads as an empty
    /// collection; an undecodable line is skipped, counted and logged.
    /// Files are read in dependency order, link tables last.
    ///
    /// # Errors
    /// Returns an error only when a present file cannot be read.
    pub fn load_all(&mut self, dir: &Path) -> io::Result<LoadReport> {
        self.faculties.clear();
        self.departments.clear();
        self.groups.clear();
        self.students.clear();
        self.teachers.clear();
        self.disciplines.clear();
        self.workloads.clear();
        self.thesis_works.clear();
        self.grades.clear();
        self.teacher_disciplines.clear();

        let mut report = LoadReport::default();
        load_file(dir, &mut self.faculties, &mut report)?;
        load_file(dir, &mut self.departments, &mut report)?;
        load_file(dir, &mut self.groups, &mut report)?;
        load_file(dir, &mut self.students, &mut report)?;
        load_file(dir, &mut self.teachers, &mut report)?;
        load_file(dir, &mut self.disciplines, &mut report)?;
        load_file(dir, &mut self.workloads, &mut report)?;
        load_file(dir, &mut self.thesis_works, &mut report)?;
        load_file(dir, &mut self.grades, &mut report)?;
        load_file(dir, &mut self.teacher_disciplines, &mut report)?;
        Ok(report)
    }

    /// Encode every collection and overwrite its file in `dir`, creating
    /// the directory when needed
    ///
    /// # Errors
    /// Returns an error when the directory or a file cannot be written.
    pub fn save_all(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)?;
        save_file(dir, &self.faculties)?;
        save_file(dir, &self.departments)?;
        save_file(dir, &self.groups)?;
        save_file(dir, &self.students)?;
        save_file(dir, &self.teachers)?;
        save_file(dir, &self.disciplines)?;
        save_file(dir, &self.workloads)?;
        save_file(dir, &self.thesis_works)?;
        save_file(dir, &self.grades)?;
        save_file(dir, &self.teacher_disciplines)?;
        Ok(())
    }
}

fn load_file<R: Record>(dir: &Path, out: &mut Vec<R>, report: &mut LoadReport) -> io::Result<()> {
    let path = dir.join(R::FILE_NAME);
    if !path.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(&path)?;
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match R::decode(line) {
            Ok(record) => {
                out.push(record);
                report.loaded += 1;
            }
            Err(err) => {
                report.skipped += 1;
                warn!("Skipping bad line in {}: {err}", R::FILE_NAME);
            }
        }
    }
    Ok(())
}

fn save_file<R: Record>(dir: &Path, records: &[R]) -> io::Result<()> {
    let mut content = String::new();
    for record in records {
        content.push_str(&record.encode());
        content.push('\n');
    }
    fs::write(dir.join(R::FILE_NAME), content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Faculty, Group, Student};
    use tempfile::TempDir;
    use uuid::Uuid;

    fn populated_registry() -> (Registry, Uuid) {
        let mut registry = Registry::new();

        let faculty = Faculty::new("Mechanics".to_string(), "Фролова".to_string());
        let faculty_id = faculty.id;
        registry.add_faculty(faculty).unwrap();

        let group = Group::new("МХ-101".to_string(), 2024, 1, faculty_id);
        let group_id = group.id;
        registry.add_group(group).unwrap();

        registry
            .add_student(Student::new(
                "Громов".to_string(),
                "Илья".to_string(),
                String::new(),
                group_id,
                "МХ-2024-003".to_string(),
                0.0,
            ))
            .unwrap();

        (registry, faculty_id)
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let (registry, _) = populated_registry();

        registry.save_all(dir.path()).unwrap();

        let mut reloaded = Registry::new();
        let report = reloaded.load_all(dir.path()).unwrap();

        assert_eq!(report.loaded, 3);
        assert_eq!(report.skipped, 0);
        assert_eq!(reloaded.faculties(), registry.faculties());
        assert_eq!(reloaded.groups(), registry.groups());
        assert_eq!(reloaded.students(), registry.students());
    }

    #[test]
    fn test_load_from_empty_directory() {
        let dir = TempDir::new().unwrap();

        let mut registry = Registry::new();
        let report = registry.load_all(dir.path()).unwrap();

        assert_eq!(report, LoadReport::default());
        assert_eq!(registry.record_count(), 0);
    }

    #[test]
    fn test_load_skips_bad_lines_and_keeps_good_ones() {
        let dir = TempDir::new().unwrap();
        let good = Faculty::new("Chemistry".to_string(), "Белова".to_string());

        let content = format!(
            "{}\nnot-a-uuid|Broken|Dean||\n{}|TooShort\n",
            good.encode(),
            Uuid::new_v4()
        );
        fs::write(dir.path().join("faculties.txt"), content).unwrap();

        let mut registry = Registry::new();
        let report = registry.load_all(dir.path()).unwrap();

        assert_eq!(report.loaded, 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(registry.faculties().len(), 1);
        assert_eq!(registry.faculties()[0].name, "Chemistry");
    }

    #[test]
    fn test_reload_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let (registry, _) = populated_registry();
        registry.save_all(dir.path()).unwrap();

        let mut reloaded = Registry::new();
        reloaded.load_all(dir.path()).unwrap();
        let first_pass = reloaded.record_count();

        reloaded.load_all(dir.path()).unwrap();
        assert_eq!(reloaded.record_count(), first_pass);
    }

    #[test]
    fn test_save_rewrites_stale_files() {
        let dir = TempDir::new().unwrap();
        let (mut registry, faculty_id) = populated_registry();

        registry.save_all(dir.path()).unwrap();
        registry.remove_faculty(faculty_id).unwrap();
        registry.save_all(dir.path()).unwrap();

        let mut reloaded = Registry::new();
        reloaded.load_all(dir.path()).unwrap();
        assert!(reloaded.faculties().is_empty());
        // Students were not cascaded and still round-trip
        assert_eq!(reloaded.students().len(), 1);
    }
}
