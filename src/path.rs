//! Remote path resolution for notes.
//!
//! A note's remote path is either taken from its `dg-path` frontmatter override
//! or derived from its vault path by the first matching rewrite rule.

use crate::frontmatter::Frontmatter;
use crate::types::base_name;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One `prefix:replacement` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    pub prefix: String,
    pub replacement: String,
}

impl RewriteRule {
    pub fn new(prefix: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            replacement: replacement.into(),
        }
    }

    /// Parse a single line. The prefix is the text before the first `:` and
    /// the replacement the segment after it, up to any further `:`. A line
    /// without a `:` gets an empty replacement.
    pub fn parse(line: &str) -> Self {
        let mut segments = line.split(':');
        let prefix = segments.next().unwrap_or(line);
        let replacement = segments.next().unwrap_or("");
        Self::new(prefix, replacement)
    }

    /// Rewritten path when `path` starts with this rule's prefix.
    pub fn apply(&self, path: &str) -> Option<String> {
        path.strip_prefix(self.prefix.as_str())
            .map(|rest| format!("{}{}", self.replacement, rest))
    }
}

impl fmt::Display for RewriteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.replacement)
    }
}

/// Ordered rewrite rules, parsed once from newline-delimited settings text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PathRewriteRules {
    rules: Vec<RewriteRule>,
}

impl PathRewriteRules {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// Parse newline-delimited `prefix:replacement` lines. Blank lines are
    /// skipped: an empty prefix would match every path.
    pub fn parse(text: &str) -> Self {
        let rules = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(RewriteRule::parse)
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply the first rule whose prefix matches; unmatched paths pass through.
    pub fn rewrite(&self, path: &str) -> String {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(path))
            .unwrap_or_else(|| path.to_string())
    }
}

impl From<String> for PathRewriteRules {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<PathRewriteRules> for String {
    fn from(rules: PathRewriteRules) -> Self {
        rules
            .rules
            .iter()
            .map(RewriteRule::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Resolve the remote path of the note at `file_path`.
///
/// With a `dg-path` override the note's base name is always appended to it;
/// a trailing `/` on the override only avoids doubling the separator, so
/// `"garden"` and `"garden/"` both resolve `notes/a.md` to `garden/a.md`.
/// Without an override the rewrite rules apply.
pub fn resolve_path(frontmatter: &Frontmatter, file_path: &str, rules: &PathRewriteRules) -> String {
    match frontmatter.dg_path() {
        Some(dir) => {
            let base = base_name(file_path);
            if dir.ends_with('/') {
                format!("{}{}", dir, base)
            } else {
                format!("{}/{}", dir, base)
            }
        }
        None => rules.rewrite(file_path),
    }
}
