//! Rule identity from file names
//!
//! `<rule>.md` is a built-in rule. `<plugin>_<segment>_<segment>.md` belongs to a
//! plugin: the part before the first `_` is the plugin token and the remaining
//! segments form the rule name, joined with `/`.

use crate::constants::{
    BUILT_IN_DOCUMENTATION_TEMPLATE, BUILT_IN_PLUGIN, FALLBACK_DOCUMENTATION_URL, ID_REPLACEMENT,
    PLUGIN_DISPLAY_NAMES, PLUGIN_DOCUMENTATION_TEMPLATES, PLUGIN_SEPARATOR, RULE_NAME_SEPARATOR,
};
use std::path::Path;

/// Identity of a rule derived from its file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleIdentity {
    /// Anchor-safe id (lowercase, `[a-z0-9-_/]` only)
    pub id: String,
    /// Internal plugin token, `None` for built-in rules
    pub plugin_token: Option<String>,
    /// Display name of the plugin
    pub plugin_name: String,
    /// Rule name, `/`-separated for nested namespaces
    pub rule_name: String,
    /// Link to the upstream documentation, `#` when unknown
    pub documentation_url: String,
}

impl RuleIdentity {
    /// Resolve identity from a file stem (extension already stripped)
    pub fn from_stem(stem: &str) -> Self {
        let (plugin_token, rule_name) = match stem.split_once(PLUGIN_SEPARATOR) {
            Some((token, rest)) => (
                Some(token.to_string()),
                rest.split(PLUGIN_SEPARATOR)
                    .collect::<Vec<_>>()
                    .join(RULE_NAME_SEPARATOR),
            ),
            None => (None, stem.to_string()),
        };

        let plugin_name = plugin_token
            .as_deref()
            .map_or(BUILT_IN_PLUGIN, display_name)
            .to_string();
        let documentation_url = documentation_url(plugin_token.as_deref(), &rule_name);

        Self {
            id: sanitize_id(stem),
            plugin_token,
            plugin_name,
            rule_name,
            documentation_url,
        }
    }

    /// Resolve identity from a path, stripping its extension
    pub fn from_path(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_stem(&stem)
    }

    pub fn is_built_in(&self) -> bool {
        self.plugin_token.is_none()
    }
}

/// Display name for a plugin token; unknown tokens are shown as-is
pub fn display_name(token: &str) -> &str {
    PLUGIN_DISPLAY_NAMES
        .iter()
        .find(|(t, _)| *t == token)
        .map_or(token, |(_, name)| name)
}

/// Documentation link for a rule, keyed on the internal plugin token
pub fn documentation_url(plugin_token: Option<&str>, rule_name: &str) -> String {
    let template = match plugin_token {
        None => Some(BUILT_IN_DOCUMENTATION_TEMPLATE),
        Some(token) => PLUGIN_DOCUMENTATION_TEMPLATES
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, template)| *template),
    };

    template.map_or_else(
        || FALLBACK_DOCUMENTATION_URL.to_string(),
        |t| t.replace("{rule}", rule_name),
    )
}

/// Lowercase a stem and replace every character outside `[A-Za-z0-9-_/]` with `-`
pub fn sanitize_id(stem: &str) -> String {
    stem.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/') {
                c.to_ascii_lowercase()
            } else {
                ID_REPLACEMENT
            }
        })
        .collect()
}
