use serde::{Deserialize, Serialize};

/// One syntactic unit of a parsed stylesheet tree.
///
/// Trees arrive pre-parsed from an upstream CSS parser; this crate never
/// tokenizes CSS text itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    Rule(Rule),
    /// A non-CSS block (e.g. a comment or unknown syntax preserved by the
    /// parser). Passed through byte-for-byte, never inspected.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub kind: RuleKind,
    /// Selector list for a style rule, or the prelude of an at-rule
    /// (e.g. `@media screen`).
    pub selectors: Vec<String>,
    pub declarations: Vec<Declaration>,
    /// Nested rules, e.g. the body of a media block. Empty for leaf rules.
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    Style,
    AtRule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    /// Value tokens, split on whitespace upstream (the upstream splitter is
    /// parenthesis-aware, so a function call stays one token).
    pub values: Vec<String>,
}

impl Declaration {
    pub fn new(property: &str, values: &[&str]) -> Self {
        Self {
            property: property.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Reassembled value string used when testing substring patterns.
    pub fn joined_values(&self) -> String {
        self.values.join(" ")
    }
}
