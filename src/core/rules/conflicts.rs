//! Cross-record business rules
//!
//! Predicates that look beyond a single record: lesson slot ownership,
//! eligibility links, and supervision rights. All of them scan the
//! caller-supplied collections and never mutate anything.

use crate::core::models::{Discipline, LessonType, Teacher, TeacherDiscipline, WorkLoad};
use crate::core::rules::ValidationError;
use uuid::Uuid;

/// Check the position/title coupling: associate professors need at least
/// the associate professor title, professors need the professor title
///
/// # Errors
/// Returns [`ValidationError::PositionTitleMismatch`] naming the position.
pub fn check_position_title(teacher: &Teacher) -> Result<(), ValidationError> {
    if teacher.is_position_valid() {
        Ok(())
    } else {
        Err(ValidationError::PositionTitleMismatch {
            position: teacher.position.label(),
        })
    }
}

/// Check that a lecture or seminar slot is not already held by another
/// teacher.
///
/// Lectures and seminars pool into one slot per (discipline, group,
/// semester): whichever teacher holds either kind holds both. The
/// candidate's own record is skipped so updates do not conflict with
/// themselves. Laboratory and the remaining lesson types are exempt.
///
/// # Errors
/// Returns [`ValidationError::LessonSlotTaken`] naming the lesson type.
pub fn check_lesson_slot(
    existing: &[WorkLoad],
    candidate: &WorkLoad,
) -> Result<(), ValidationError> {
    if !matches!(
        candidate.lesson_type,
        LessonType::Lecture | LessonType::Seminar
    ) {
        return Ok(());
    }

    let taken = existing.iter().any(|other| {
        other.id != candidate.id
            && other.teacher_id != candidate.teacher_id
            && other.discipline_id == candidate.discipline_id
            && other.group_id == candidate.group_id
            && other.semester == candidate.semester
            && matches!(
                other.lesson_type,
                LessonType::Lecture | LessonType::Seminar
            )
    });

    if taken {
        Err(ValidationError::LessonSlotTaken {
            lesson: candidate.lesson_type.label(),
        })
    } else {
        Ok(())
    }
}

/// Check that a workload's discipline is taught to the workload's group
///
/// # Errors
/// Returns [`ValidationError::GroupMismatch`].
pub fn check_discipline_group(
    discipline: &Discipline,
    workload: &WorkLoad,
) -> Result<(), ValidationError> {
    if discipline.group_id == workload.group_id {
        Ok(())
    } else {
        Err(ValidationError::GroupMismatch)
    }
}

/// Check that a teacher may supervise thesis works
///
/// # Errors
/// Returns [`ValidationError::IneligibleSupervisor`].
pub fn check_supervisor(teacher: &Teacher) -> Result<(), ValidationError> {
    if teacher.can_supervise_thesis() {
        Ok(())
    } else {
        Err(ValidationError::IneligibleSupervisor)
    }
}

/// Check that a teacher is linked to a discipline and may take workload
/// for it
///
/// # Errors
/// Returns [`ValidationError::NotLinkedToDiscipline`].
pub fn check_teacher_linked(
    links: &[TeacherDiscipline],
    teacher_id: Uuid,
    discipline_id: Uuid,
) -> Result<(), ValidationError> {
    let linked = links
        .iter()
        .any(|link| link.teacher_id == teacher_id && link.discipline_id == discipline_id);

    if linked {
        Ok(())
    } else {
        Err(ValidationError::NotLinkedToDiscipline)
    }
}

/// Check that no link for the candidate's (teacher, discipline) pair exists
/// yet
///
/// # Errors
/// Returns [`ValidationError::DuplicateLink`].
pub fn check_unique_link(
    links: &[TeacherDiscipline],
    candidate: &TeacherDiscipline,
) -> Result<(), ValidationError> {
    let duplicate = links.iter().any(|link| {
        link.id != candidate.id
            && link.teacher_id == candidate.teacher_id
            && link.discipline_id == candidate.discipline_id
    });

    if duplicate {
        Err(ValidationError::DuplicateLink)
    } else {
        Ok(())
    }
}
