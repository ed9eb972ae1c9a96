//! Generic configuration document tree.
//!
//! The configuration file is parsed once into a [`ConfigNode`] tree. The tree
//! is opaque to everything except the binder and the top-level accessors on
//! [`LintParameters`](super::LintParameters); it keeps mapping keys in file
//! order so that binding visits them in the order the author wrote them.

use serde::{Deserialize, Deserializer};

/// A node of the parsed configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigNode {
    /// An empty value (`key:` or `~`).
    #[default]
    Null,
    /// Any scalar, kept in its textual form.
    Scalar(String),
    /// An ordered mapping of string keys to nodes.
    Mapping(Vec<(String, ConfigNode)>),
    /// An ordered sequence of nodes.
    Sequence(Vec<ConfigNode>),
}

impl ConfigNode {
    /// Parse a YAML document into a node tree.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        Ok(Self::from(value))
    }

    /// Build a scalar node.
    pub fn scalar(text: impl Into<String>) -> Self {
        ConfigNode::Scalar(text.into())
    }

    /// Build a mapping node from key/value pairs, preserving their order.
    pub fn mapping<K: Into<String>>(entries: impl IntoIterator<Item = (K, ConfigNode)>) -> Self {
        ConfigNode::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a sequence node.
    pub fn sequence(items: impl IntoIterator<Item = ConfigNode>) -> Self {
        ConfigNode::Sequence(items.into_iter().collect())
    }

    /// Look up a key in a mapping node.
    ///
    /// Returns `None` for non-mapping nodes and for missing keys.
    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        match self {
            ConfigNode::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Scalar text, if this is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ConfigNode::Scalar(text) => Some(text),
            _ => None,
        }
    }

    /// Mapping entries, if this is a mapping.
    pub fn as_mapping(&self) -> Option<&[(String, ConfigNode)]> {
        match self {
            ConfigNode::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Sequence items, if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[ConfigNode]> {
        match self {
            ConfigNode::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Whether this is the empty value.
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigNode::Null)
    }

    /// Short name of the node kind, used in binding diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigNode::Null => "null",
            ConfigNode::Scalar(_) => "scalar",
            ConfigNode::Mapping(_) => "mapping",
            ConfigNode::Sequence(_) => "sequence",
        }
    }
}

impl From<serde_yaml::Value> for ConfigNode {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => ConfigNode::Null,
            Value::Bool(b) => ConfigNode::Scalar(b.to_string()),
            Value::Number(n) => ConfigNode::Scalar(n.to_string()),
            Value::String(s) => ConfigNode::Scalar(s),
            Value::Sequence(items) => {
                ConfigNode::Sequence(items.into_iter().map(ConfigNode::from).collect())
            }
            Value::Mapping(map) => ConfigNode::Mapping(
                map.into_iter()
                    .map(|(k, v)| (key_text(k), ConfigNode::from(v)))
                    .collect(),
            ),
            Value::Tagged(tagged) => ConfigNode::from(tagged.value),
        }
    }
}

/// Render a mapping key as text. Complex keys fall back to their YAML form.
fn key_text(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Null => "~".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

impl<'de> Deserialize<'de> for ConfigNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_yaml::Value::deserialize(deserializer).map(ConfigNode::from)
    }
}
