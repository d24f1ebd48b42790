//! Academic timeline derivation
//!
//! The academic year splits into an odd half (September through January)
//! and an even half (February through August). A group's current semester
//! follows from its course number and the calendar month; the group's
//! disciplines then partition into completed, active and upcoming.

use crate::core::models::Discipline;
use chrono::{Datelike, Local};
use serde::Serialize;
use std::cmp::Ordering;

/// A group's disciplines split around the current semester
#[derive(Debug, Clone, Serialize)]
pub struct Timeline<'a> {
    /// Semester currently underway
    pub current_semester: u16,
    /// Disciplines of earlier semesters
    pub completed: Vec<&'a Discipline>,
    /// Disciplines of the current semester
    pub active: Vec<&'a Discipline>,
    /// Disciplines of later semesters
    pub upcoming: Vec<&'a Discipline>,
}

/// Semester underway for a course in a given calendar month (1-12)
#[must_use]
pub const fn current_semester(course: u16, month: u32) -> u16 {
    let even_half = course.saturating_mul(2);
    if month >= 9 || month == 1 {
        even_half.saturating_sub(1)
    } else {
        even_half
    }
}

/// Calendar month of the local clock
#[must_use]
pub fn now_month() -> u32 {
    Local::now().month()
}

/// Partition disciplines around the current semester, each part ordered
/// by semester and then name
#[must_use]
pub fn partition<'a>(disciplines: &[&'a Discipline], current_semester: u16) -> Timeline<'a> {
    let mut ordered = disciplines.to_vec();
    ordered.sort_by(|a, b| {
        a.semester()
            .cmp(&b.semester())
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut timeline = Timeline {
        current_semester,
        completed: Vec::new(),
        active: Vec::new(),
        upcoming: Vec::new(),
    };

    for discipline in ordered {
        match discipline.semester().cmp(&current_semester) {
            Ordering::Less => timeline.completed.push(discipline),
            Ordering::Equal => timeline.active.push(discipline),
            Ordering::Greater => timeline.upcoming.push(discipline),
        }
    }

    timeline
}
