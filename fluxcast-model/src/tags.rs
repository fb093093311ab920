use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Resource tag map carried by channels, inputs, and multiplexes.
///
/// Backed by a sorted map so equality is order-insensitive and the debug
/// rendering is deterministic. `insert` is strict: re-adding an existing
/// key is a caller logic error and fails with
/// [`ModelError::DuplicateKey`]. Use [`Tags::overwrite`] when replacing
/// an existing value is intended.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(BTreeMap<String, String>);

impl Tags {
    pub fn new() -> Self {
        Tags(BTreeMap::new())
    }

    /// Add one entry; fails if `key` is already present.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        let key = key.into();
        if self.0.contains_key(&key) {
            return Err(ModelError::duplicate_key(key));
        }
        self.0.insert(key, value.into());
        Ok(())
    }

    /// Add or replace one entry, returning the previous value if any.
    pub fn overwrite(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl From<BTreeMap<String, String>> for Tags {
    fn from(map: BTreeMap<String, String>) -> Self {
        Tags(map)
    }
}

impl FromIterator<(String, String)> for Tags {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Tags(iter.into_iter().collect())
    }
}

impl IntoIterator for Tags {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_rejects_duplicate_keys() {
        let mut tags = Tags::new();
        tags.insert("team", "playout").unwrap();
        let err = tags.insert("team", "ingest").unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateKey {
                key: "team".to_string()
            }
        );
        // First write is untouched.
        assert_eq!(tags.get("team"), Some("playout"));
    }

    #[test]
    fn overwrite_replaces_and_returns_previous() {
        let mut tags = Tags::new();
        tags.insert("env", "staging").unwrap();
        let previous = tags.overwrite("env", "production");
        assert_eq!(previous.as_deref(), Some("staging"));
        assert_eq!(tags.get("env"), Some("production"));
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let mut a = Tags::new();
        a.insert("a", "1").unwrap();
        a.insert("b", "2").unwrap();

        let mut b = Tags::new();
        b.insert("b", "2").unwrap();
        b.insert("a", "1").unwrap();

        assert_eq!(a, b);
    }
}
