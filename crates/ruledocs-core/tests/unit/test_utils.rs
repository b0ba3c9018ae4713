//! Shared test utilities for ruledocs-core tests

#![allow(dead_code)] // Test utilities may not all be used in every test file

use ruledocs_core::RuleRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a `rules/` directory inside the temp dir
pub fn create_rules_dir(temp: &TempDir) -> PathBuf {
    let dir = temp.path().join("rules");
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write a rule file into a rules directory
pub fn write_rule(dir: &Path, file_name: &str, content: &str) {
    fs::write(dir.join(file_name), content).unwrap();
}

/// Build a record for a file stem with a generic body
pub fn record(stem: &str) -> RuleRecord {
    record_with_body(stem, "A description line that is long enough to count.\n")
}

/// Build a record for a file stem with the given body
pub fn record_with_body(stem: &str, body: &str) -> RuleRecord {
    RuleRecord::from_source(Path::new(&format!("{stem}.md")), body).unwrap()
}

/// `plugin/rule` labels in collection order
pub fn qualified_names<'a>(records: impl IntoIterator<Item = &'a RuleRecord>) -> Vec<String> {
    records.into_iter().map(RuleRecord::qualified_name).collect()
}
