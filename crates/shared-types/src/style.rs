use crate::error::{StyleError, StyleErrorKind};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Opaque key/value visual properties passed through to a rendered element.
///
/// Serializes as a plain map, so in `config.toml` it reads as
/// `style = { border = "1px solid", padding = "15px" }`. Deserializing also
/// accepts an inline declaration string, `style = "border: 1px solid"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(property.into(), value.into())
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns a copy of `self` with every property of `other` applied on top.
    pub fn merged(&self, other: &StyleMap) -> StyleMap {
        let mut out = self.clone();
        for (k, v) in other.iter() {
            out.insert(k, v);
        }
        out
    }

    /// Parse an inline declaration list. Empty segments (trailing `;`) are skipped.
    pub fn parse(input: &str) -> Result<Self, StyleError> {
        let mut map = StyleMap::new();
        for raw in input.split(';') {
            let decl = raw.trim();
            if decl.is_empty() {
                continue;
            }
            let Some((property, value)) = decl.split_once(':') else {
                return Err(StyleError::new(StyleErrorKind::MissingColon, decl));
            };
            let (property, value) = (property.trim(), value.trim());
            if property.is_empty() {
                return Err(StyleError::new(StyleErrorKind::EmptyProperty, decl));
            }
            if value.is_empty() {
                return Err(StyleError::new(StyleErrorKind::EmptyValue, decl));
            }
            map.insert(property, value);
        }
        Ok(map)
    }

    /// Render as an inline `style` attribute value, e.g. `border: 1px solid; padding: 15px`.
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Like [`StyleMap::to_css`], but `None` when there is nothing to render
    /// so the attribute is omitted entirely.
    pub fn inline(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_css())
        }
    }
}

impl FromStr for StyleMap {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleMap::parse(s)
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        StyleMap(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StyleSource {
    Inline(String),
    Map(BTreeMap<String, String>),
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match StyleSource::deserialize(deserializer)? {
            StyleSource::Map(map) => Ok(map.into_iter().collect()),
            StyleSource::Inline(css) => css.parse().map_err(|e: StyleError| {
                tracing::warn!(error = %e, "rejected inline style");
                serde::de::Error::custom(e)
            }),
        }
    }
}
