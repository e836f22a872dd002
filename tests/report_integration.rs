mod common;

use std::{fs, process::Command};

use anyhow::Result;

use common::{fixture, EXPECTED_REPORT};
use library_batch::{
    config::ReportConfig,
    core::step::StepStatus,
    item::{logger::LoggerWriter, text::TextItemWriterBuilder},
    library::{load_visitors, query},
    report::run_report_job,
};

#[test]
fn fixture_report_matches_expected_text() -> Result<()> {
    let config = ReportConfig::default().input_path(fixture("visitors.json"));
    let visitors = load_visitors(&config)?;
    let writer = TextItemWriterBuilder::new().from_writer(Vec::new());

    let execution = run_report_job(&visitors, &writer, &config)?;

    let output = String::from_utf8(writer.into_inner()?)?;
    assert_eq!(output, EXPECTED_REPORT);
    assert!(
        execution
            .step_executions
            .iter()
            .all(|step| step.status == StepStatus::Success)
    );
    let names: Vec<&str> = execution
        .step_executions
        .iter()
        .map(|step| step.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "visitor-roster",
            "unique-books",
            "books-by-year",
            "author-check",
            "max-favorites",
            "subscriber-sms",
        ]
    );
    Ok(())
}

#[test]
fn fixture_statistics_hold() -> Result<()> {
    let config = ReportConfig::default().input_path(fixture("visitors.json"));
    let visitors = load_visitors(&config)?;

    let total_favorites: usize = visitors.iter().map(|v| v.favorite_books.len()).sum();

    assert_eq!(query::roster(&visitors).len(), visitors.len());
    assert_eq!(query::books_by_year(&visitors).len(), total_favorites);
    assert_eq!(query::average_favorite_books(&visitors), 2.0);
    assert_eq!(query::max_favorite_books(&visitors), 4);
    assert!(
        visitors
            .iter()
            .all(|v| v.favorite_books.len() <= query::max_favorite_books(&visitors))
    );
    Ok(())
}

#[test]
fn report_can_be_written_to_a_file() -> Result<()> {
    let config = ReportConfig::default().input_path(fixture("visitors.json"));
    let visitors = load_visitors(&config)?;
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("report.txt");

    let writer = TextItemWriterBuilder::new().from_path(&path)?;
    run_report_job(&visitors, &writer, &config)?;
    drop(writer.into_inner()?);

    assert_eq!(fs::read_to_string(&path)?, EXPECTED_REPORT);
    Ok(())
}

#[test]
fn report_can_be_mirrored_into_the_log() -> Result<()> {
    let config = ReportConfig::default()
        .input_path(fixture("visitors.json"))
        .target_author("Bram Stoker");
    let visitors = load_visitors(&config)?;

    let execution = run_report_job(&visitors, &LoggerWriter::new(), &config)?;

    let written: usize = execution
        .step_executions
        .iter()
        .map(|step| step.write_count)
        .sum();
    assert_eq!(written, EXPECTED_REPORT.lines().filter(|l| !l.is_empty()).count());
    Ok(())
}

#[test]
fn binary_prints_report_to_stdout() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_library-report"))
        .arg(fixture("visitors.json"))
        .output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, EXPECTED_REPORT);
    Ok(())
}
