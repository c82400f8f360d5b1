//! Vec-backed provider implementations.
//!
//! Records are kept in insertion order, which makes filter results and grade
//! enumeration deterministic across repeated calls. Lookups are linear scans;
//! record sets at this scale don't justify an index.

use super::{CourseCatalog, GradeLedger, StudentDirectory};
use crate::model::{Course, GradeEntry, Student};

#[derive(Debug, Default)]
pub struct MemoryDirectory {
    students: Vec<Student>,
}

impl MemoryDirectory {
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    pub fn insert(&mut self, student: Student) {
        self.students.push(student);
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl StudentDirectory for MemoryDirectory {
    fn lookup(&self, student_id: &str) -> Option<Student> {
        self.students
            .iter()
            .find(|s| s.student_id() == student_id)
            .cloned()
    }

    fn by_department(&self, department: &str) -> Vec<Student> {
        self.students
            .iter()
            .filter(|s| s.department() == department)
            .cloned()
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct MemoryCatalog {
    courses: Vec<Course>,
}

impl MemoryCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn insert(&mut self, course: Course) {
        self.courses.push(course);
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl CourseCatalog for MemoryCatalog {
    fn lookup(&self, course_id: &str) -> Option<Course> {
        self.courses
            .iter()
            .find(|c| c.course_id() == course_id)
            .cloned()
    }

    fn by_teacher(&self, teacher: &str) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|c| c.teacher() == teacher)
            .cloned()
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct MemoryLedger {
    entries: Vec<GradeEntry>,
}

impl MemoryLedger {
    pub fn new(entries: Vec<GradeEntry>) -> Self {
        Self { entries }
    }

    pub fn insert(&mut self, entry: GradeEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GradeLedger for MemoryLedger {
    fn grades_for_student(&self, student_id: &str) -> Vec<(String, f64)> {
        self.entries
            .iter()
            .filter(|e| e.student_id() == student_id)
            .map(|e| (e.course_id().to_string(), e.score()))
            .collect()
    }

    fn grades_for_course(&self, course_id: &str) -> Vec<(String, f64)> {
        self.entries
            .iter()
            .filter(|e| e.course_id() == course_id)
            .map(|e| (e.student_id().to_string(), e.score()))
            .collect()
    }
}
