//! Ordered rule collections and preview truncation

use crate::constants::{MINIMAL_PREVIEW_COUNT, PLUGIN_PRIORITY};
use crate::record::RuleRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// How much of a sorted collection a preview keeps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewLimit {
    /// `ceil(n / 3)` records
    Third,
    /// `ceil(n / 6)` records
    Sixth,
    /// At most two records
    Minimal,
    /// No limit
    #[default]
    All,
}

impl PreviewLimit {
    /// Interpret a configuration value
    ///
    /// Only the literals `third`, `sixth` and `minimal` select a limit. Anything
    /// else, including no value at all, keeps every record.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some("third") => Self::Third,
            Some("sixth") => Self::Sixth,
            Some("minimal") => Self::Minimal,
            _ => Self::All,
        }
    }

    /// Number of records kept out of `len`
    pub fn keep(self, len: usize) -> usize {
        match self {
            Self::Third => len.div_ceil(3),
            Self::Sixth => len.div_ceil(6),
            Self::Minimal => len.min(MINIMAL_PREVIEW_COUNT),
            Self::All => len,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Third => "third",
            Self::Sixth => "sixth",
            Self::Minimal => "minimal",
            Self::All => "all",
        }
    }
}

impl fmt::Display for PreviewLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a plugin in the priority list, `None` when unlisted
pub fn plugin_rank(plugin_name: &str) -> Option<usize> {
    PLUGIN_PRIORITY.iter().position(|p| *p == plugin_name)
}

/// Total order: plugin priority, unlisted plugins alphabetically, rule name, id
fn compare_records(a: &RuleRecord, b: &RuleRecord) -> Ordering {
    let rank = |r: &RuleRecord| plugin_rank(&r.plugin_name).unwrap_or(PLUGIN_PRIORITY.len());

    rank(a)
        .cmp(&rank(b))
        .then_with(|| a.plugin_name.cmp(&b.plugin_name))
        .then_with(|| a.rule_name.cmp(&b.rule_name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Rule records in display order
///
/// An empty collection is how a failed ingestion is reported to consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RuleCollection {
    rules: Vec<RuleRecord>,
}

impl RuleCollection {
    /// Sort records into display order
    pub fn from_records(mut rules: Vec<RuleRecord>) -> Self {
        rules.sort_by(compare_records);
        Self { rules }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleRecord> {
        self.rules.iter()
    }

    pub fn as_slice(&self) -> &[RuleRecord] {
        &self.rules
    }

    /// Find a record by id
    pub fn get(&self, id: &str) -> Option<&RuleRecord> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Distinct plugin names in collection order
    pub fn plugins(&self) -> Vec<&str> {
        let mut plugins: Vec<&str> = Vec::new();
        for rule in &self.rules {
            if plugins.last() != Some(&rule.plugin_name.as_str()) {
                plugins.push(&rule.plugin_name);
            }
        }
        plugins
    }

    /// Keep the prefix selected by `limit`
    pub fn truncated(mut self, limit: PreviewLimit) -> Self {
        let keep = limit.keep(self.rules.len());
        self.rules.truncate(keep);
        self
    }

    pub fn into_vec(self) -> Vec<RuleRecord> {
        self.rules
    }
}

impl IntoIterator for RuleCollection {
    type Item = RuleRecord;
    type IntoIter = std::vec::IntoIter<RuleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<'a> IntoIterator for &'a RuleCollection {
    type Item = &'a RuleRecord;
    type IntoIter = std::slice::Iter<'a, RuleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
