//! TemplateContent - the flat dictionary handed to the rendering service.

use serde::Serialize;
use std::collections::BTreeMap;

use super::{ConditionalOrderCourtDetails, CtscContactDetails};

/// A single placeholder value.
///
/// Serialises untagged so the rendering payload holds plain JSON values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TemplateValue {
    Null,
    Text(String),
    Flag(bool),
    List(Vec<String>),
    Contact(CtscContactDetails),
    Court(ConditionalOrderCourtDetails),
}

impl TemplateValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TemplateValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            TemplateValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            TemplateValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, TemplateValue::Null)
    }
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        TemplateValue::Text(value.to_string())
    }
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        TemplateValue::Text(value)
    }
}

impl From<bool> for TemplateValue {
    fn from(value: bool) -> Self {
        TemplateValue::Flag(value)
    }
}

impl From<Vec<String>> for TemplateValue {
    fn from(value: Vec<String>) -> Self {
        TemplateValue::List(value)
    }
}

impl From<CtscContactDetails> for TemplateValue {
    fn from(value: CtscContactDetails) -> Self {
        TemplateValue::Contact(value)
    }
}

impl From<ConditionalOrderCourtDetails> for TemplateValue {
    fn from(value: ConditionalOrderCourtDetails) -> Self {
        TemplateValue::Court(value)
    }
}

impl<T: Into<TemplateValue>> From<Option<T>> for TemplateValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(TemplateValue::Null)
    }
}

/// Ordered placeholder map produced by a template content mapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateContent(BTreeMap<String, TemplateValue>);

impl TemplateContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a placeholder, replacing any earlier value.
    pub fn put(&mut self, key: &str, value: impl Into<TemplateValue>) -> &mut Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Sets a placeholder to `fallback` when the value is absent.
    pub fn put_or(&mut self, key: &str, value: Option<String>, fallback: &str) -> &mut Self {
        let value = value.unwrap_or_else(|| fallback.to_string());
        self.put(key, value)
    }

    /// Copies every entry of `other` into this map.
    pub fn merge(&mut self, other: TemplateContent) -> &mut Self {
        self.0.extend(other.0);
        self
    }

    pub fn get(&self, key: &str) -> Option<&TemplateValue> {
        self.0.get(key)
    }

    /// Text value for `key`, if present and textual.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(TemplateValue::as_text)
    }

    /// Flag value for `key`, if present and boolean.
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(TemplateValue::as_flag)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// JSON object form, as sent to the rendering service.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl IntoIterator for TemplateContent {
    type Item = (String, TemplateValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, TemplateValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
