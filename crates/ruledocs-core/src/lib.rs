//! Rule Documentation Pipeline
//!
//! Turns a directory of lint-rule markdown files into an ordered collection of
//! rule records ready for display:
//! - Frontmatter splitting (YAML metadata + markdown body)
//! - Rule identity from file names (plugin, rule name, anchor id, docs link)
//! - Leading description extraction and de-duplication
//! - Rewriting of the `::: correct` / `::: incorrect` dialect and option fences
//! - Deterministic ordering and preview truncation
//!
//! # Example
//!
//! ```ignore
//! use ruledocs_core::{PreviewLimit, RuleCollectionBuilder};
//!
//! let rules = RuleCollectionBuilder::new("docs/rules")
//!     .with_limit(PreviewLimit::Third)
//!     .build();
//!
//! for rule in rules.iter() {
//!     println!("{} / {}", rule.plugin_name, rule.rule_name);
//! }
//! ```

pub mod builder;
pub mod collection;
pub mod constants;
pub mod description;
pub mod dialect;
pub mod error;
pub mod frontmatter;
pub mod identity;
pub mod record;

pub use builder::{Ingestion, RuleCollectionBuilder, SkippedRule, build_rule_collection};
pub use collection::{PreviewLimit, RuleCollection, plugin_rank};
pub use description::{extract_description, remove_leading_description};
pub use dialect::transform;
pub use error::{Error, Result};
pub use frontmatter::{Frontmatter, split_frontmatter};
pub use identity::{RuleIdentity, sanitize_id};
pub use record::RuleRecord;
