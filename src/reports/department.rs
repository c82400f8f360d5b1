//! Department-wide aggregation: GPA mean and per-course enrollment tallies.

use crate::providers::{CourseCatalog, GradeLedger, StudentDirectory};
use crate::reports::transcript::weighted_gpa;
use crate::reports::types::{CourseTally, DepartmentReport, DepartmentSummary};
use std::collections::BTreeMap;

struct CourseAccum {
    course_name: String,
    enrolled: usize,
    score_sum: f64,
}

pub fn department_summary<S, C, G>(
    directory: &S,
    catalog: &C,
    ledger: &G,
    department: &str,
) -> DepartmentReport
where
    S: StudentDirectory,
    C: CourseCatalog,
    G: GradeLedger,
{
    let students = directory.by_department(department);
    if students.is_empty() {
        return DepartmentReport::NoStudents;
    }

    let mut graded_student_count = 0usize;
    let mut gpa_sum = 0.0;
    // BTreeMap keyed by course id so tallies come out in a fixed order.
    let mut tallies: BTreeMap<String, CourseAccum> = BTreeMap::new();

    for student in &students {
        let grades = ledger.grades_for_student(student.student_id());
        if grades.is_empty() {
            continue;
        }

        graded_student_count += 1;
        // A student whose references all fail to resolve has no GPA but
        // still counts toward the graded-student denominator.
        if let Some(gpa) = weighted_gpa(&grades, catalog) {
            gpa_sum += gpa;
        }

        for (course_id, score) in &grades {
            let Some(course) = catalog.lookup(course_id) else {
                continue;
            };
            let acc = tallies.entry(course_id.clone()).or_insert_with(|| CourseAccum {
                course_name: course.name().to_string(),
                enrolled: 0,
                score_sum: 0.0,
            });
            acc.enrolled += 1;
            acc.score_sum += score;
        }
    }

    let mean_gpa = if graded_student_count == 0 {
        None
    } else {
        Some(gpa_sum / graded_student_count as f64)
    };

    let courses = tallies
        .into_iter()
        .map(|(course_id, acc)| CourseTally {
            course_id,
            course_name: acc.course_name,
            enrolled: acc.enrolled,
            mean_score: acc.score_sum / acc.enrolled as f64,
        })
        .collect();

    DepartmentReport::Summary(DepartmentSummary {
        department: department.to_string(),
        student_count: students.len(),
        graded_student_count,
        mean_gpa,
        courses,
    })
}
