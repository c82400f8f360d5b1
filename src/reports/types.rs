//! Structured results returned by the engine queries.
//!
//! Expected absence — unknown keys, empty record sets — is a variant on the
//! result enums, never an error. None of these types carry timestamps, so
//! repeated queries over unchanged providers serialize byte-identically.

use crate::model::{Course, Student};
use crate::reports::distribution::Distribution;
use serde::Serialize;

/// Outcome of a per-student transcript query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StudentReport {
    UnknownStudent,
    /// The student exists but the ledger holds no entries for them.
    NoGrades { student: Student },
    Transcript(Transcript),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    pub student: Student,
    /// One row per grade entry whose course resolved in the catalog, in
    /// ledger order. Unresolved references are omitted.
    pub rows: Vec<TranscriptRow>,
    /// Credit-weighted GPA; `None` when no referenced course resolved or the
    /// resolved credits sum to zero.
    pub gpa: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptRow {
    pub course_id: String,
    pub course_name: String,
    pub score: f64,
    pub credit: f64,
}

/// Outcome of a per-course report query. `NoGrades` is distinct from
/// `UnknownCourse`: the course exists but nobody has a recorded score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CourseQuery {
    UnknownCourse,
    NoGrades { course: Course },
    Report(CourseReport),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseReport {
    pub course: Course,
    /// Unweighted arithmetic mean of the course's scores. Not the GPA.
    pub average: f64,
    /// Descending by score; ties keep the ledger's enumeration order.
    pub ranking: Vec<RankEntry>,
    pub distribution: Distribution,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry {
    pub rank: usize,
    pub student_id: String,
    /// Resolved through the directory; `None` when the id is unknown there.
    pub name: Option<String>,
    pub score: f64,
}

/// Outcome of a department summary query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DepartmentReport {
    NoStudents,
    Summary(DepartmentSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentSummary {
    pub department: String,
    /// Everyone the directory reports for the department.
    pub student_count: usize,
    /// Students with at least one grade entry. Always <= `student_count`.
    pub graded_student_count: usize,
    /// Sum of per-student GPAs divided by `graded_student_count`; students
    /// whose references all fail to resolve still count in the denominator.
    /// `None` when no student has grades.
    pub mean_gpa: Option<f64>,
    /// Per-course enrollment and unweighted mean score, course-id order.
    pub courses: Vec<CourseTally>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseTally {
    pub course_id: String,
    pub course_name: String,
    pub enrolled: usize,
    pub mean_score: f64,
}

/// Outcome of a teacher summary query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TeacherReport {
    UnknownTeacher,
    Summary(TeacherSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherSummary {
    pub teacher: String,
    pub course_count: usize,
    pub courses: Vec<TeacherCourse>,
    /// Mean enrollment per course; zero-enrollment courses count as 0.
    pub mean_enrollment: f64,
    /// Mean of the per-course averages, NOT re-weighted by enrollment.
    /// Zero-enrollment courses are excluded from the denominator; `None`
    /// when every course is empty.
    pub mean_course_average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherCourse {
    pub course_id: String,
    pub course_name: String,
    pub credit: f64,
    pub enrollment: usize,
    /// `None` for a course with no recorded scores.
    pub average: Option<f64>,
    pub distribution: Distribution,
}
