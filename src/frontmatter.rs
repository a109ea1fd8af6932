//! Note frontmatter: typed lookups over the YAML block at the top of a note.

use crate::error::GardenError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Frontmatter key that overrides a note's published path.
pub const DG_PATH_KEY: &str = "dg-path";

/// Default frontmatter key marking a note for publishing.
pub const DEFAULT_PUBLISH_KEY: &str = "dg-publish";

const DELIMITER: &str = "---";

/// Read-only frontmatter map. A note without frontmatter has an empty map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frontmatter {
    fields: BTreeMap<String, Value>,
}

impl Frontmatter {
    pub fn new(fields: BTreeMap<String, Value>) -> Self {
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// String value for `key`; non-string values are `None`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.fields.get(key).and_then(Value::as_bool)
    }

    /// The `dg-path` override, when set to a non-empty string.
    pub fn dg_path(&self) -> Option<&str> {
        self.get_str(DG_PATH_KEY).filter(|p| !p.is_empty())
    }

    pub fn is_marked_for_publishing(&self, publish_key: &str) -> bool {
        self.get_bool(publish_key).unwrap_or(false)
    }

    /// Parse the frontmatter block of a markdown document.
    ///
    /// The document must open with a `---` line; the block ends at the next
    /// `---` line. No block (or an unterminated one) yields an empty map.
    pub fn parse(markdown: &str) -> Result<Self, String> {
        let Some(yaml) = extract_block(markdown) else {
            return Ok(Self::default());
        };
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let fields: Option<BTreeMap<String, Value>> =
            serde_yaml::from_str(yaml).map_err(|e| format!("yaml decode: {}", e))?;
        Ok(Self::new(fields.unwrap_or_default()))
    }

    /// Like [`Frontmatter::parse`], attributing failures to `path`.
    pub fn parse_for(path: &str, markdown: &str) -> Result<Self, GardenError> {
        Self::parse(markdown).map_err(|message| GardenError::Frontmatter {
            path: path.to_string(),
            message,
        })
    }
}

impl FromIterator<(String, Value)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn extract_block(markdown: &str) -> Option<&str> {
    let markdown = markdown.strip_prefix('\u{feff}').unwrap_or(markdown);
    let mut lines = markdown.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != DELIMITER {
        return None;
    }
    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            return Some(&markdown[start..offset]);
        }
        offset += line.len();
    }
    None
}
