//! Rule Collection Builder
//!
//! Reads every markdown file in a rules directory, turns each one into a
//! [`RuleRecord`], sorts the records and applies the preview limit.

use crate::collection::{PreviewLimit, RuleCollection};
use crate::constants::RULE_FILE_EXTENSION;
use crate::error::{Error, Result};
use crate::record::RuleRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

/// A rule file left out of the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRule {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a successful ingestion pass
#[derive(Debug, Clone, Default)]
pub struct Ingestion {
    /// Sorted and truncated records
    pub collection: RuleCollection,
    /// Files that could not be turned into records
    pub skipped: Vec<SkippedRule>,
}

/// Builds a [`RuleCollection`] from a directory of rule files
#[derive(Debug, Clone)]
pub struct RuleCollectionBuilder {
    rules_dir: PathBuf,
    limit: PreviewLimit,
}

impl RuleCollectionBuilder {
    /// Create a builder for the given rules directory with no preview limit
    pub fn new(rules_dir: impl Into<PathBuf>) -> Self {
        Self {
            rules_dir: rules_dir.into(),
            limit: PreviewLimit::All,
        }
    }

    /// Set the preview limit applied after sorting
    pub fn with_limit(mut self, limit: PreviewLimit) -> Self {
        self.limit = limit;
        self
    }

    pub fn rules_dir(&self) -> &Path {
        &self.rules_dir
    }

    pub fn limit(&self) -> PreviewLimit {
        self.limit
    }

    /// Ingest the directory, reporting directory-level failures as errors
    ///
    /// Files are processed in file name order. A file that cannot be read or whose
    /// frontmatter is malformed is skipped. When two files map to the same id the
    /// first one wins and the later one is skipped.
    pub fn try_build(&self) -> Result<Ingestion> {
        let files = self.discover_rule_files()?;
        debug!(
            dir = %self.rules_dir.display(),
            files = files.len(),
            "Discovered rule files"
        );

        let mut records = Vec::with_capacity(files.len());
        let mut claimed: HashMap<String, PathBuf> = HashMap::new();
        let mut skipped = Vec::new();

        for path in files {
            let record = match load_rule_file(&path) {
                Ok(record) => record,
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "Skipping rule file");
                    skipped.push(SkippedRule {
                        path,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if let Some(owner) = claimed.get(&record.id) {
                warn!(
                    file = %path.display(),
                    id = %record.id,
                    owner = %owner.display(),
                    "Skipping rule file with duplicate id"
                );
                skipped.push(SkippedRule {
                    reason: format!(
                        "duplicate id `{}` already used by {}",
                        record.id,
                        owner.display()
                    ),
                    path,
                });
                continue;
            }

            claimed.insert(record.id.clone(), path);
            records.push(record);
        }

        let total = records.len();
        let collection = RuleCollection::from_records(records).truncated(self.limit);
        info!(
            total,
            shown = collection.len(),
            skipped = skipped.len(),
            limit = %self.limit,
            "Rule collection built"
        );

        Ok(Ingestion {
            collection,
            skipped,
        })
    }

    /// Ingest the directory, collapsing any failure into an empty collection
    pub fn build(&self) -> RuleCollection {
        match self.try_build() {
            Ok(ingestion) => ingestion.collection,
            Err(e) => {
                error!(
                    dir = %self.rules_dir.display(),
                    error = %e,
                    "Failed to load rules"
                );
                RuleCollection::empty()
            }
        }
    }

    /// Markdown files directly inside the rules directory, sorted by name
    fn discover_rule_files(&self) -> Result<Vec<PathBuf>> {
        if !self.rules_dir.is_dir() {
            return Err(Error::RulesDirNotFound {
                path: self.rules_dir.clone(),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.rules_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            if entry.path().is_file() && is_rule_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

/// Build a collection from `rules_dir`, empty on failure
pub fn build_rule_collection(rules_dir: impl Into<PathBuf>, limit: PreviewLimit) -> RuleCollection {
    RuleCollectionBuilder::new(rules_dir).with_limit(limit).build()
}

fn load_rule_file(path: &Path) -> Result<RuleRecord> {
    let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    RuleRecord::from_source(path, &raw)
}

/// Non-hidden `.md` files
fn is_rule_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'));
    !hidden && path.extension().is_some_and(|ext| ext == RULE_FILE_EXTENSION)
}
