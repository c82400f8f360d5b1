//! Per-teacher aggregation across all courses taught.

use crate::providers::{CourseCatalog, GradeLedger};
use crate::reports::distribution::Distribution;
use crate::reports::types::{TeacherCourse, TeacherReport, TeacherSummary};
use crate::reports::utility::mean;

pub fn teacher_summary<C, G>(catalog: &C, ledger: &G, teacher: &str) -> TeacherReport
where
    C: CourseCatalog,
    G: GradeLedger,
{
    let courses = catalog.by_teacher(teacher);
    if courses.is_empty() {
        return TeacherReport::UnknownTeacher;
    }

    let mut total_enrollment = 0usize;
    let mut average_sum = 0.0;
    let mut averaged_courses = 0usize;
    let mut per_course = Vec::with_capacity(courses.len());

    for course in &courses {
        let grades = ledger.grades_for_course(course.course_id());
        let scores: Vec<f64> = grades.iter().map(|(_, score)| *score).collect();

        total_enrollment += scores.len();

        let average = if scores.is_empty() {
            None
        } else {
            Some(mean(&scores))
        };
        if let Some(avg) = average {
            average_sum += avg;
            averaged_courses += 1;
        }

        per_course.push(TeacherCourse {
            course_id: course.course_id().to_string(),
            course_name: course.name().to_string(),
            credit: course.credit(),
            enrollment: scores.len(),
            average,
            distribution: Distribution::from_scores(&scores),
        });
    }

    // Empty courses count as 0 here, but an undefined average cannot enter
    // the average-of-averages, so they leave that denominator.
    let mean_enrollment = total_enrollment as f64 / courses.len() as f64;
    let mean_course_average = if averaged_courses == 0 {
        None
    } else {
        Some(average_sum / averaged_courses as f64)
    };

    TeacherReport::Summary(TeacherSummary {
        teacher: teacher.to_string(),
        course_count: courses.len(),
        courses: per_course,
        mean_enrollment,
        mean_course_average,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, GradeEntry};
    use crate::providers::{MemoryCatalog, MemoryLedger};

    fn providers() -> (MemoryCatalog, MemoryLedger) {
        let catalog = MemoryCatalog::new(vec![
            Course::new("c1", "Algebra", 3.0, "Smith"),
            Course::new("c2", "Geometry", 2.0, "Smith"),
            Course::new("c3", "Calculus", 4.0, "Jones"),
        ]);
        // c1 averages 80, c2 has nobody enrolled
        let ledger = MemoryLedger::new(vec![
            GradeEntry::new("s1", "c1", 90.0),
            GradeEntry::new("s2", "c1", 70.0),
        ]);
        (catalog, ledger)
    }

    #[test]
    fn test_unknown_teacher() {
        let (catalog, ledger) = providers();
        let report = teacher_summary(&catalog, &ledger, "Nobody");
        assert_eq!(report, TeacherReport::UnknownTeacher);
    }

    #[test]
    fn test_empty_course_excluded_from_average_of_averages() {
        let (catalog, ledger) = providers();
        let TeacherReport::Summary(s) = teacher_summary(&catalog, &ledger, "Smith") else {
            panic!("expected a summary");
        };

        assert_eq!(s.course_count, 2);
        // 2 students over 2 courses, the empty one included at 0
        assert_eq!(s.mean_enrollment, 1.0);
        // only c1 has a defined average
        assert_eq!(s.mean_course_average, Some(80.0));
    }

    #[test]
    fn test_per_course_shapes() {
        let (catalog, ledger) = providers();
        let TeacherReport::Summary(s) = teacher_summary(&catalog, &ledger, "Smith") else {
            panic!("expected a summary");
        };

        assert_eq!(s.courses[0].course_id, "c1");
        assert_eq!(s.courses[0].enrollment, 2);
        assert_eq!(s.courses[0].average, Some(80.0));
        assert_eq!(s.courses[0].distribution.excellent, 1);
        assert_eq!(s.courses[0].distribution.medium, 1);

        assert_eq!(s.courses[1].course_id, "c2");
        assert_eq!(s.courses[1].enrollment, 0);
        assert_eq!(s.courses[1].average, None);
        assert_eq!(s.courses[1].distribution.total(), 0);
    }

    #[test]
    fn test_all_courses_empty_means_no_overall_average() {
        let catalog = MemoryCatalog::new(vec![Course::new("c9", "Logic", 2.0, "Riley")]);
        let ledger = MemoryLedger::default();

        let TeacherReport::Summary(s) = teacher_summary(&catalog, &ledger, "Riley") else {
            panic!("expected a summary");
        };
        assert_eq!(s.mean_enrollment, 0.0);
        assert_eq!(s.mean_course_average, None);
    }

    #[test]
    fn test_average_of_averages_is_not_enrollment_weighted() {
        let catalog = MemoryCatalog::new(vec![
            Course::new("c1", "Algebra", 3.0, "Smith"),
            Course::new("c2", "Geometry", 2.0, "Smith"),
        ]);
        // c1: one student at 100; c2: three students at 60
        let ledger = MemoryLedger::new(vec![
            GradeEntry::new("s1", "c1", 100.0),
            GradeEntry::new("s2", "c2", 60.0),
            GradeEntry::new("s3", "c2", 60.0),
            GradeEntry::new("s4", "c2", 60.0),
        ]);

        let TeacherReport::Summary(s) = teacher_summary(&catalog, &ledger, "Smith") else {
            panic!("expected a summary");
        };
        // (100 + 60) / 2, not (100 + 180) / 4
        assert_eq!(s.mean_course_average, Some(80.0));
    }
}
