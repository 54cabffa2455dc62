#![allow(dead_code)]

#[path = "constants.rs"]
pub mod constants;

use csv::ReaderBuilder;
use std::error::Error;
use std::fs;
use std::path::Path;
use word_counter::{count_top, RankedEntry};

const EXPECTED_PREFIX: &str = "EXPECTED:";
const TOP_PREFIX: &str = "TOP:";
const COMMENT_PREFIX: &str = "COMMENT:";

/// A text fixture with its expected ranking.
///
/// Fixture files hold the text to analyze plus directive lines:
/// - `TOP: <n>` sets the requested number of entries.
/// - `EXPECTED: <word>,<count>` lists one ranked entry, in rank order. Words containing
///   commas or quotes use CSV quoting.
/// - `COMMENT: ...` is ignored.
pub struct Fixture {
    pub text: String,
    pub top_n: usize,
    pub expected: Vec<RankedEntry>,
}

impl Fixture {
    pub fn from_file(file_path: &Path) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(file_path)?;

        let mut text_lines = Vec::new();
        let mut expected_records = String::new();
        let mut top_n = None;

        for line in content.lines() {
            let trimmed = line.trim_start();
            if let Some(record) = trimmed.strip_prefix(EXPECTED_PREFIX) {
                expected_records.push_str(record.trim());
                expected_records.push('\n');
            } else if let Some(n) = trimmed.strip_prefix(TOP_PREFIX) {
                top_n = Some(n.trim().parse()?);
            } else if !trimmed.starts_with(COMMENT_PREFIX) {
                text_lines.push(line);
            }
        }

        let top_n =
            top_n.ok_or_else(|| format!("{}: missing TOP line", file_path.display()))?;

        Ok(Fixture {
            text: text_lines.join("\n"),
            top_n,
            expected: parse_expected(&expected_records)?,
        })
    }
}

fn parse_expected(records: &str) -> Result<Vec<RankedEntry>, Box<dyn Error>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_reader(records.as_bytes());

    let mut expected = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != 2 {
            return Err(format!("Invalid EXPECTED record: {:?}", record).into());
        }
        expected.push((record[0].to_string(), record[1].parse()?));
    }

    Ok(expected)
}

/// Runs `count_top` over a fixture file and asserts the ranking matches its EXPECTED lines.
pub fn run_test_for_file(test_file_path: &Path) {
    let fixture = Fixture::from_file(test_file_path).unwrap_or_else(|e| {
        panic!(
            "{} - Failed to load fixture: {}",
            test_file_path.display(),
            e
        )
    });

    let results = count_top(&fixture.text, fixture.top_n);

    assert_eq!(
        results,
        fixture.expected,
        "{} - Expected: {:?}, but got: {:?}",
        test_file_path.display(),
        fixture.expected,
        results
    );
}
