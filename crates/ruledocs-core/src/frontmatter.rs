//! Frontmatter splitting
//!
//! A rule file may open with a YAML block fenced by `---` lines. The block is
//! decoded into a [`Frontmatter`] mapping and the remaining text is the body.

use crate::constants::FRONTMATTER_DELIMITER;
use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Parsed frontmatter mapping, empty when the file has none
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Frontmatter {
    fields: BTreeMap<String, Value>,
}

impl Frontmatter {
    /// Decode a YAML block into a mapping
    ///
    /// Empty input and YAML `null` give an empty mapping. Anything that is not a
    /// mapping is rejected.
    pub fn parse(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        match serde_yaml::from_str::<serde_yaml::Value>(yaml)? {
            serde_yaml::Value::Null => Ok(Self::default()),
            serde_yaml::Value::Mapping(mapping) => {
                let mut fields = BTreeMap::new();
                for (key, value) in mapping {
                    let key = mapping_key(key)?;
                    let value = serde_json::to_value(value).map_err(|e| Error::Frontmatter {
                        file: PathBuf::new(),
                        message: format!("value of `{key}` is not representable: {e}"),
                    })?;
                    fields.insert(key, value);
                }
                Ok(Self { fields })
            }
            other => Err(Error::Frontmatter {
                file: PathBuf::new(),
                message: format!("expected a mapping, found {}", yaml_kind(&other)),
            }),
        }
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// String value for a key, treating blank strings as absent
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.get_str("title")
    }

    pub fn description(&self) -> Option<&str> {
        self.get_str("description")
    }

    pub fn rule_type(&self) -> Option<&str> {
        self.get_str("rule_type")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

/// Split a raw rule file into frontmatter and body
///
/// Without an opening `---` line, or without a closing one, the whole input is
/// returned as the body with an empty mapping.
pub fn split_frontmatter(raw: &str) -> Result<(Frontmatter, String)> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    match locate_block(text) {
        Some((yaml, body)) => Ok((Frontmatter::parse(yaml)?, body.to_string())),
        None => Ok((Frontmatter::default(), raw.to_string())),
    }
}

/// Find the YAML block and the body that follows it
fn locate_block(text: &str) -> Option<(&str, &str)> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != FRONTMATTER_DELIMITER {
        return None;
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == FRONTMATTER_DELIMITER {
            return Some((&text[yaml_start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

fn mapping_key(key: serde_yaml::Value) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        other => Err(Error::Frontmatter {
            file: PathBuf::new(),
            message: format!("unsupported key type: {}", yaml_kind(&other)),
        }),
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "boolean",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged value",
    }
}
