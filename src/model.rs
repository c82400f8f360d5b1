//! Entity value types served by the record providers.
//!
//! All three are immutable from the engine's perspective: fields are private
//! and exposed through accessors, and the engine only ever receives clones.

use serde::{Deserialize, Serialize};

/// A student record owned by the Student Directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    student_id: String,
    name: String,
    department: String,
}

impl Student {
    pub fn new(student_id: &str, name: &str, department: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            name: name.to_string(),
            department: department.to_string(),
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> &str {
        &self.department
    }
}

/// A course record owned by the Course Catalog.
///
/// `credit` is a positive real number in well-formed data, but nothing here
/// validates that; the engine computes with whatever value it receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    course_id: String,
    name: String,
    credit: f64,
    teacher: String,
}

impl Course {
    pub fn new(course_id: &str, name: &str, credit: f64, teacher: &str) -> Self {
        Self {
            course_id: course_id.to_string(),
            name: name.to_string(),
            credit,
            teacher: teacher.to_string(),
        }
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credit(&self) -> f64 {
        self.credit
    }

    pub fn teacher(&self) -> &str {
        &self.teacher
    }
}

/// One (student, course) → score entry owned by the Grade Ledger.
///
/// Scores are conceptually in [0, 100]; out-of-range values pass through
/// unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeEntry {
    student_id: String,
    course_id: String,
    score: f64,
}

impl GradeEntry {
    pub fn new(student_id: &str, course_id: &str, score: f64) -> Self {
        Self {
            student_id: student_id.to_string(),
            course_id: course_id.to_string(),
            score,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}
