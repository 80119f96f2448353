//! Element attributes and their formatting rules.
//!
//! Attributes keep insertion order. Names in [`RAW_TOKENS`] are escape hatches
//! whose value is emitted verbatim, for attributes that do not fit the
//! `name="value"` shape (boolean attributes, namespaced pairs written by
//! hand). Any other name loses a leading [`RAW_PREFIX`] before rendering.

use indexmap::IndexMap;

/// Attribute names whose value is emitted verbatim
pub const RAW_TOKENS: [&str; 4] = ["__raw__", "__r", "__string__", "__s"];

/// Prefix stripped from rendered attribute names
pub const RAW_PREFIX: &str = "__";

/// Ordered attribute map
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, consuming and returning the map
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value`; an existing name keeps its position
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Formats the attributes as they appear inside an opening tag.
    ///
    /// Returns an empty string when there are no attributes, otherwise every
    /// rendered pair preceded by a single space.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.iter() {
            out.push(' ');
            if is_raw(name) {
                out.push_str(value);
            } else {
                out.push_str(name.strip_prefix(RAW_PREFIX).unwrap_or(name));
                out.push_str("=\"");
                out.push_str(value);
                out.push('"');
            }
        }
        out
    }
}

/// Whether `name` is one of the raw sentinel names
pub fn is_raw(name: &str) -> bool {
    RAW_TOKENS.contains(&name)
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}
