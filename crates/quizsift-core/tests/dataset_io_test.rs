//! Flat-file dataset I/O against real temp directories.

use std::fs;

use quizsift_core::dataset::{load_records, write_subset, Record};
use quizsift_core::errors::DatasetError;

#[test]
fn loads_a_json_array_of_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");
    fs::write(
        &path,
        r#"[
            {"question":"How many moons does Mars have?","answer":"2","round":"Jeopardy!"},
            {"question":"Who wrote Hamlet?","answer":"Shakespeare"}
        ]"#,
    )
    .unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].answer, "2");
    assert_eq!(records[0].extra.get("round").unwrap(), "Jeopardy!");
}

#[test]
fn missing_input_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_records(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, DatasetError::ReadFailed { .. }));
}

#[test]
fn malformed_json_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{\"question\": ").unwrap();
    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, DatasetError::MalformedJson { .. }));
}

#[test]
fn written_subset_round_trips_line_by_line() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("subsets").join("numbers_subset.jsonl");

    let records: Vec<Record> = serde_json::from_str(
        r#"[
            {"question":"q one has 1","answer":"1","value":"$200","category":"MATH"},
            {"question":"q two has 2","answer":"2","air_date":"1984-09-10"}
        ]"#,
    )
    .unwrap();
    let refs: Vec<&Record> = records.iter().collect();

    let written = write_subset(&out, &refs).unwrap();
    assert_eq!(written, 2);

    let contents = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    for (line, original) in lines.iter().zip(&records) {
        let reparsed: Record = serde_json::from_str(line).unwrap();
        assert_eq!(&reparsed, original);
    }
}

#[test]
fn writer_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("a").join("b").join("subset.jsonl");
    let record = Record::new("q", "a");
    write_subset(&out, &[&record]).unwrap();
    assert!(out.exists());
}

#[test]
fn empty_subset_writes_an_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.jsonl");
    let written = write_subset(&out, &[]).unwrap();
    assert_eq!(written, 0);
    assert_eq!(fs::read_to_string(&out).unwrap(), "");
}
