//! Per-student transcript and credit-weighted GPA.

use crate::providers::{CourseCatalog, GradeLedger, StudentDirectory};
use crate::reports::types::{StudentReport, Transcript, TranscriptRow};

/// Credit-weighted GPA over one student's `(course_id, score)` pairs:
/// `Σ(score × credit) / Σ(credit)` across the pairs whose course resolves in
/// the catalog. Unresolved references are skipped — their credit is unknown,
/// so they cannot participate in the weighting.
///
/// Returns `None` when the input is empty, when nothing resolves, or when the
/// resolved credits sum to zero; never 0.0-as-absence and never NaN.
pub fn weighted_gpa<C: CourseCatalog>(grades: &[(String, f64)], catalog: &C) -> Option<f64> {
    let mut weighted_sum = 0.0;
    let mut total_credits = 0.0;
    let mut resolved = 0usize;

    for (course_id, score) in grades {
        let Some(course) = catalog.lookup(course_id) else {
            continue;
        };
        weighted_sum += score * course.credit();
        total_credits += course.credit();
        resolved += 1;
    }

    if resolved == 0 || total_credits == 0.0 {
        return None;
    }
    Some(weighted_sum / total_credits)
}

/// Builds a student's transcript: the resolved grade rows in ledger order
/// plus the weighted GPA.
pub fn student_transcript<S, C, G>(
    directory: &S,
    catalog: &C,
    ledger: &G,
    student_id: &str,
) -> StudentReport
where
    S: StudentDirectory,
    C: CourseCatalog,
    G: GradeLedger,
{
    let Some(student) = directory.lookup(student_id) else {
        return StudentReport::UnknownStudent;
    };

    let grades = ledger.grades_for_student(student_id);
    if grades.is_empty() {
        return StudentReport::NoGrades { student };
    }

    let gpa = weighted_gpa(&grades, catalog);

    let rows = grades
        .iter()
        .filter_map(|(course_id, score)| {
            catalog.lookup(course_id).map(|course| TranscriptRow {
                course_id: course_id.clone(),
                course_name: course.name().to_string(),
                score: *score,
                credit: course.credit(),
            })
        })
        .collect();

    StudentReport::Transcript(Transcript { student, rows, gpa })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, GradeEntry, Student};
    use crate::providers::{MemoryCatalog, MemoryDirectory, MemoryLedger};

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::new(vec![
            Course::new("c1", "Algebra", 3.0, "Smith"),
            Course::new("c2", "Physics", 2.0, "Jones"),
        ])
    }

    #[test]
    fn test_weighted_gpa_example() {
        // (90*3 + 80*2) / 5 = 86.0
        let grades = vec![("c1".to_string(), 90.0), ("c2".to_string(), 80.0)];
        assert_eq!(weighted_gpa(&grades, &catalog()), Some(86.0));
    }

    #[test]
    fn test_weighted_gpa_empty_input() {
        assert_eq!(weighted_gpa(&[], &catalog()), None);
    }

    #[test]
    fn test_weighted_gpa_nothing_resolves() {
        let grades = vec![("ghost".to_string(), 95.0)];
        assert_eq!(weighted_gpa(&grades, &catalog()), None);
    }

    #[test]
    fn test_weighted_gpa_skips_unresolved_references() {
        let grades = vec![
            ("c1".to_string(), 90.0),
            ("ghost".to_string(), 0.0),
            ("c2".to_string(), 80.0),
        ];
        assert_eq!(weighted_gpa(&grades, &catalog()), Some(86.0));
    }

    #[test]
    fn test_weighted_gpa_zero_total_credit_is_no_data() {
        let catalog = MemoryCatalog::new(vec![Course::new("c1", "Seminar", 0.0, "Smith")]);
        let grades = vec![("c1".to_string(), 100.0)];
        assert_eq!(weighted_gpa(&grades, &catalog), None);
    }

    #[test]
    fn test_transcript_unknown_student() {
        let directory = MemoryDirectory::default();
        let ledger = MemoryLedger::default();
        let report = student_transcript(&directory, &catalog(), &ledger, "s1");
        assert_eq!(report, StudentReport::UnknownStudent);
    }

    #[test]
    fn test_transcript_no_grades() {
        let student = Student::new("s1", "Alice", "CS");
        let directory = MemoryDirectory::new(vec![student.clone()]);
        let ledger = MemoryLedger::default();

        let report = student_transcript(&directory, &catalog(), &ledger, "s1");
        assert_eq!(report, StudentReport::NoGrades { student });
    }

    #[test]
    fn test_transcript_rows_follow_ledger_order() {
        let directory = MemoryDirectory::new(vec![Student::new("s1", "Alice", "CS")]);
        let ledger = MemoryLedger::new(vec![
            GradeEntry::new("s1", "c2", 80.0),
            GradeEntry::new("s1", "ghost", 50.0),
            GradeEntry::new("s1", "c1", 90.0),
        ]);

        let report = student_transcript(&directory, &catalog(), &ledger, "s1");
        let StudentReport::Transcript(t) = report else {
            panic!("expected a transcript");
        };

        // The ghost course is dropped, the rest keep ledger order.
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0].course_id, "c2");
        assert_eq!(t.rows[1].course_id, "c1");
        assert_eq!(t.gpa, Some(86.0));
    }

    #[test]
    fn test_transcript_gpa_none_when_nothing_resolves() {
        let directory = MemoryDirectory::new(vec![Student::new("s1", "Alice", "CS")]);
        let ledger = MemoryLedger::new(vec![GradeEntry::new("s1", "ghost", 70.0)]);

        let report = student_transcript(&directory, &catalog(), &ledger, "s1");
        let StudentReport::Transcript(t) = report else {
            panic!("expected a transcript");
        };
        assert!(t.rows.is_empty());
        assert_eq!(t.gpa, None);
    }
}
