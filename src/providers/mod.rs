//! Read-only capability traits the engine consumes.
//!
//! Each trait is a narrow in-process contract over one record set. The engine
//! never mutates a provider; a provider's only obligation is to serve a
//! consistent snapshot for the duration of one aggregation call.

mod loader;
mod memory;

pub use loader::{load_catalog, load_directory, load_ledger};
pub use memory::{MemoryCatalog, MemoryDirectory, MemoryLedger};

use crate::model::{Course, Student};

pub trait StudentDirectory {
    fn lookup(&self, student_id: &str) -> Option<Student>;

    /// All students in `department`, in the provider's stable order.
    fn by_department(&self, department: &str) -> Vec<Student>;
}

pub trait CourseCatalog {
    fn lookup(&self, course_id: &str) -> Option<Course>;

    /// All courses taught by `teacher`, in the provider's stable order.
    fn by_teacher(&self, teacher: &str) -> Vec<Course>;
}

pub trait GradeLedger {
    /// `(course_id, score)` pairs for one student, in the ledger's stable
    /// enumeration order.
    fn grades_for_student(&self, student_id: &str) -> Vec<(String, f64)>;

    /// `(student_id, score)` pairs for one course, in the ledger's stable
    /// enumeration order. This order is the ranking tie-breaker.
    fn grades_for_course(&self, course_id: &str) -> Vec<(String, f64)>;
}
