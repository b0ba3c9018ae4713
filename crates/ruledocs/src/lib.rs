//! # ruledocs
//!
//! Turns a directory of lint rule markdown files into an ordered collection of
//! rule records ready for a documentation site.
//!
//! ## Example
//!
//! ```ignore
//! use ruledocs::{PreviewLimit, build_rule_collection};
//!
//! let rules = build_rule_collection("docs/rules", PreviewLimit::All);
//! for rule in &rules {
//!     println!("{} / {}", rule.plugin_name, rule.rule_name);
//! }
//! ```
//!
//! ## Architecture
//!
//! - `pipeline` - frontmatter, identity, description, dialect and collection building
//! - `infrastructure` - configuration loading and logging
//! - `cli` - the `ruledocs` command line front end

pub mod cli;

/// Rule ingestion pipeline
///
/// Re-exports from the core crate for convenience
pub mod pipeline {
    pub use ruledocs_core::*;
}

/// Infrastructure layer - config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use ruledocs_infrastructure::*;
}

pub use pipeline::{
    Ingestion, PreviewLimit, RuleCollection, RuleCollectionBuilder, RuleRecord,
    build_rule_collection,
};

pub use cli::{Cli, OutputFormat, execute, run};
