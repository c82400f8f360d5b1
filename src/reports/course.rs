//! Per-course ranking, unweighted average, and score distribution.

use crate::providers::{CourseCatalog, GradeLedger, StudentDirectory};
use crate::reports::distribution::Distribution;
use crate::reports::types::{CourseQuery, CourseReport, RankEntry};
use crate::reports::utility::mean;

/// Orders `(student_id, score)` pairs by descending score. The sort is
/// stable, so equal scores keep the input's enumeration order — rankings are
/// reproducible across runs given the same ledger order. NaN scores are
/// ordered by IEEE total order (above every real score) rather than
/// panicking the sort.
pub fn rank_entries(entries: &[(String, f64)]) -> Vec<(String, f64)> {
    let mut ranked = entries.to_vec();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

pub fn course_report<S, C, G>(
    directory: &S,
    catalog: &C,
    ledger: &G,
    course_id: &str,
) -> CourseQuery
where
    S: StudentDirectory,
    C: CourseCatalog,
    G: GradeLedger,
{
    let Some(course) = catalog.lookup(course_id) else {
        return CourseQuery::UnknownCourse;
    };

    let grades = ledger.grades_for_course(course_id);
    if grades.is_empty() {
        return CourseQuery::NoGrades { course };
    }

    let scores: Vec<f64> = grades.iter().map(|(_, score)| *score).collect();
    let average = mean(&scores);
    let distribution = Distribution::from_scores(&scores);

    let ranking = rank_entries(&grades)
        .into_iter()
        .enumerate()
        .map(|(i, (student_id, score))| RankEntry {
            rank: i + 1,
            name: directory.lookup(&student_id).map(|s| s.name().to_string()),
            student_id,
            score,
        })
        .collect();

    CourseQuery::Report(CourseReport {
        course,
        average,
        ranking,
        distribution,
    })
}
