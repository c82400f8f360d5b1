//! CLI entry point for the gradebook rater tool.
//!
//! Provides one subcommand per engine query: student transcripts, course
//! reports, department summaries, and teacher summaries, all computed from
//! CSV record files and emitted as JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gradebook_rater::output::{RunRecord, append_run_record, print_json, write_json};
use gradebook_rater::providers::{load_catalog, load_directory, load_ledger};
use gradebook_rater::reports::{
    CourseQuery, DepartmentReport, ReportEngine, StudentReport, TeacherReport,
};
use serde::Serialize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gradebook_rater")]
#[command(about = "A tool to compute statistics from academic grade records", long_about = None)]
struct Cli {
    /// Directory containing students.csv, courses.csv, and grades.csv
    #[arg(short, long, default_value = "data", global = true)]
    data_dir: PathBuf,

    /// Write the JSON report to a file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// CSV file to append a run record to
    #[arg(long, global = true)]
    run_log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transcript and weighted GPA for one student
    Transcript {
        #[arg(value_name = "STUDENT_ID")]
        student_id: String,
    },
    /// Ranking, average, and score distribution for one course
    Course {
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
    },
    /// GPA mean and course tallies for one department
    Department {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Course summaries and cross-course means for one teacher
    Teacher {
        #[arg(value_name = "NAME")]
        name: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gradebook_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gradebook_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let directory = load_directory(&cli.data_dir.join("students.csv"))?;
    let catalog = load_catalog(&cli.data_dir.join("courses.csv"))?;
    let ledger = load_ledger(&cli.data_dir.join("grades.csv"))?;
    let engine = ReportEngine::new(&directory, &catalog, &ledger);

    let (kind, subject, status) = match &cli.command {
        Commands::Transcript { student_id } => {
            let report = engine.student_transcript(student_id);
            let status = match &report {
                StudentReport::UnknownStudent => "unknown_student",
                StudentReport::NoGrades { .. } => "no_grades",
                StudentReport::Transcript(_) => "transcript",
            };
            emit(&report, cli.output.as_deref())?;
            ("transcript", student_id.clone(), status)
        }
        Commands::Course { course_id } => {
            let report = engine.course_report(course_id);
            let status = match &report {
                CourseQuery::UnknownCourse => "unknown_course",
                CourseQuery::NoGrades { .. } => "no_grades",
                CourseQuery::Report(_) => "report",
            };
            emit(&report, cli.output.as_deref())?;
            ("course", course_id.clone(), status)
        }
        Commands::Department { name } => {
            let report = engine.department_summary(name);
            let status = match &report {
                DepartmentReport::NoStudents => "no_students",
                DepartmentReport::Summary(_) => "summary",
            };
            emit(&report, cli.output.as_deref())?;
            ("department", name.clone(), status)
        }
        Commands::Teacher { name } => {
            let report = engine.teacher_summary(name);
            let status = match &report {
                TeacherReport::UnknownTeacher => "unknown_teacher",
                TeacherReport::Summary(_) => "summary",
            };
            emit(&report, cli.output.as_deref())?;
            ("teacher", name.clone(), status)
        }
    };

    info!(kind, subject = %subject, status, "Report generated");

    if let Some(run_log) = &cli.run_log {
        append_run_record(run_log, &RunRecord::new(kind, &subject, status))?;
    }

    Ok(())
}

/// Sends a report to a JSON file when `--output` is set, stdout otherwise.
fn emit<T: Serialize>(report: &T, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => write_json(path, report),
        None => print_json(report),
    }
}
