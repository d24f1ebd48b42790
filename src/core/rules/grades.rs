//! Point-based grade computation
//!
//! A grade is a pure function of the control form and the
//! (semester points, exam points) pair. Points above the form's caps are
//! clamped by the caller before evaluation, never rejected.

use crate::core::models::ControlForm;

/// Maximum points per component for one control form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointCaps {
    /// Cap on semester points
    pub semester: u16,
    /// Cap on exam points
    pub exam: u16,
}

/// Outcome of grading one point pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeOutcome {
    /// Sum of the clamped point pair
    pub total: u16,
    /// Textual mark: "2".."5" for graded forms, "pass"/"fail" for credits
    pub mark: &'static str,
}

/// Point caps for a control form: exams split 60/40, credits 80/20
#[must_use]
pub const fn caps(form: ControlForm) -> PointCaps {
    match form {
        ControlForm::Exam => PointCaps {
            semester: 60,
            exam: 40,
        },
        ControlForm::Pass | ControlForm::DifferentiatedPass => PointCaps {
            semester: 80,
            exam: 20,
        },
    }
}

/// Clamp a point pair to the caps of a control form
#[must_use]
pub const fn clamp_points(form: ControlForm, semester_points: u16, exam_points: u16) -> (u16, u16) {
    let caps = caps(form);
    let semester = if semester_points > caps.semester {
        caps.semester
    } else {
        semester_points
    };
    let exam = if exam_points > caps.exam {
        caps.exam
    } else {
        exam_points
    };
    (semester, exam)
}

/// Grade a point pair under a control form.
///
/// Exam and differentiated pass map the total onto the 2..5 scale; plain
/// pass is a 50-point threshold. Points are taken as given; clamp first
/// with [`clamp_points`].
#[must_use]
pub const fn evaluate(form: ControlForm, semester_points: u16, exam_points: u16) -> GradeOutcome {
    let total = semester_points + exam_points;
    let mark = match form {
        ControlForm::Exam | ControlForm::DifferentiatedPass => match total {
            0..=49 => "2",
            50..=72 => "3",
            73..=86 => "4",
            _ => "5",
        },
        ControlForm::Pass => {
            if total >= 50 {
                "pass"
            } else {
                "fail"
            }
        }
    };
    GradeOutcome { total, mark }
}
