//! CSV loaders for the in-memory providers.
//!
//! Expected files: `students.csv` (student_id,name,department), `courses.csv`
//! (course_id,name,credit,teacher), `grades.csv` (student_id,course_id,score).
//! Grade rows are kept in file order, so the file order is the ledger's
//! enumeration order.

use super::{MemoryCatalog, MemoryDirectory, MemoryLedger};
use crate::model::{Course, GradeEntry, Student};
use anyhow::Result;
use std::fs::File;
use std::path::Path;
use tracing::debug;

pub fn load_directory(path: &Path) -> Result<MemoryDirectory> {
    let file = File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);

    let mut students = Vec::new();
    for result in rdr.deserialize() {
        let record: Student = result?;
        students.push(record);
    }

    debug!(path = %path.display(), count = students.len(), "Loaded students");
    Ok(MemoryDirectory::new(students))
}

pub fn load_catalog(path: &Path) -> Result<MemoryCatalog> {
    let file = File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);

    let mut courses = Vec::new();
    for result in rdr.deserialize() {
        let record: Course = result?;
        courses.push(record);
    }

    debug!(path = %path.display(), count = courses.len(), "Loaded courses");
    Ok(MemoryCatalog::new(courses))
}

pub fn load_ledger(path: &Path) -> Result<MemoryLedger> {
    let file = File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);

    let mut entries = Vec::new();
    for result in rdr.deserialize() {
        let record: GradeEntry = result?;
        entries.push(record);
    }

    debug!(path = %path.display(), count = entries.len(), "Loaded grade entries");
    Ok(MemoryLedger::new(entries))
}
