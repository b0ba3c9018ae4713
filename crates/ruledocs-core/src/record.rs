//! Rule record: the unit handed to the presentation layer

use crate::description::{extract_description, remove_leading_description};
use crate::dialect::transform;
use crate::error::Result;
use crate::frontmatter::{Frontmatter, split_frontmatter};
use crate::identity::RuleIdentity;
use serde::Serialize;
use std::path::Path;

/// A fully processed rule document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleRecord {
    /// Anchor-safe id, unique within a collection
    pub id: String,
    /// Display name of the plugin (`Built-in` for core rules)
    pub plugin_name: String,
    /// Internal plugin token parsed from the file name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_token: Option<String>,
    pub rule_name: String,
    pub documentation_url: String,
    /// Frontmatter title, falling back to the rule name
    pub title: String,
    /// Frontmatter description, falling back to the first substantial body line
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    /// Markdown body without the leading description, dialect already rewritten
    pub content: String,
    pub frontmatter: Frontmatter,
    /// File the record was read from
    pub source_file: String,
}

impl RuleRecord {
    /// Build a record from a file name and its raw contents
    pub fn from_source(path: &Path, raw: &str) -> Result<Self> {
        let (frontmatter, body) = split_frontmatter(raw).map_err(|e| e.in_file(path))?;
        let identity = RuleIdentity::from_path(path);

        let title = frontmatter
            .title()
            .map_or_else(|| identity.rule_name.clone(), str::to_string);
        let description = frontmatter
            .description()
            .map_or_else(|| extract_description(&body), str::to_string);
        let content = transform(&remove_leading_description(&body, &description));

        Ok(Self {
            id: identity.id,
            plugin_name: identity.plugin_name,
            plugin_token: identity.plugin_token,
            rule_name: identity.rule_name,
            documentation_url: identity.documentation_url,
            title,
            description,
            rule_type: frontmatter.rule_type().map(str::to_string),
            content,
            frontmatter,
            source_file: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        })
    }

    /// `plugin/rule` label used in listings and logs
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.plugin_name, self.rule_name)
    }
}
