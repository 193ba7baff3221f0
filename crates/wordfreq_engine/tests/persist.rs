use std::fs;

use tempfile::TempDir;
use wordfreq_engine::{PersistError, ReportWriter};

#[test]
fn write_overwrites_existing_content() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("report.txt");
    let writer = ReportWriter::new();

    let first = writer.write(&target, "a much longer first report").unwrap();
    assert_eq!(first, target);
    assert_eq!(fs::read_to_string(&target).unwrap(), "a much longer first report");

    writer.write(&target, "short").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "short");
}

#[test]
fn write_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("nested").join("deeper").join("out.txt");

    assert!(!target.parent().unwrap().exists());
    ReportWriter::new().write(&target, "hello").unwrap();
    assert!(target.parent().unwrap().is_dir());
    assert_eq!(fs::read_to_string(&target).unwrap(), "hello");
}

#[test]
fn directory_destination_is_rejected() {
    let temp = TempDir::new().unwrap();
    let result = ReportWriter::new().write(temp.path(), "data");
    assert!(matches!(result, Err(PersistError::DestinationIsDir(_))));
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let target = file_path.join("report.txt");
    let result = ReportWriter::new().write(&target, "data");
    assert!(matches!(result, Err(PersistError::ReportDir { .. })));
    assert!(!target.exists());
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "x");
}
