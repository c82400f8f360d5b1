//! Record aggregation and statistics.
//!
//! This module joins grade entries against course credit weights and
//! student/course/teacher groupings to compute weighted GPAs, rankings,
//! bucketed distributions, and department/teacher summaries. All queries are
//! stateless reads over the injected providers; results carry no formatting.

pub mod course;
pub mod department;
pub mod distribution;
pub mod teacher;
pub mod transcript;
pub mod types;
pub mod utility;

pub use distribution::Distribution;
pub use types::{
    CourseQuery, CourseReport, CourseTally, DepartmentReport, DepartmentSummary, RankEntry,
    StudentReport, TeacherCourse, TeacherReport, TeacherSummary, Transcript, TranscriptRow,
};

use crate::providers::{CourseCatalog, GradeLedger, StudentDirectory};

/// The aggregation engine: four query operations over three read-only
/// providers. Holds no state of its own; every call recomputes from whatever
/// the providers currently return.
pub struct ReportEngine<'a, S, C, G> {
    directory: &'a S,
    catalog: &'a C,
    ledger: &'a G,
}

impl<'a, S, C, G> ReportEngine<'a, S, C, G>
where
    S: StudentDirectory,
    C: CourseCatalog,
    G: GradeLedger,
{
    pub fn new(directory: &'a S, catalog: &'a C, ledger: &'a G) -> Self {
        Self {
            directory,
            catalog,
            ledger,
        }
    }

    /// Per-student transcript with credit-weighted GPA.
    pub fn student_transcript(&self, student_id: &str) -> StudentReport {
        transcript::student_transcript(self.directory, self.catalog, self.ledger, student_id)
    }

    /// Per-course ranking, unweighted average, and score distribution.
    pub fn course_report(&self, course_id: &str) -> CourseQuery {
        course::course_report(self.directory, self.catalog, self.ledger, course_id)
    }

    /// Department-wide GPA mean and per-course enrollment tallies.
    pub fn department_summary(&self, department: &str) -> DepartmentReport {
        department::department_summary(self.directory, self.catalog, self.ledger, department)
    }

    /// Per-teacher course summaries and cross-course means.
    pub fn teacher_summary(&self, teacher: &str) -> TeacherReport {
        teacher::teacher_summary(self.catalog, self.ledger, teacher)
    }
}
