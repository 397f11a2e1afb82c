use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::TagError;
use super::config::AWS_TAG_PREFIX;

/// A set of resource tags keyed by tag key.
///
/// Backed by an ordered map so that rendered output and API arguments are
/// deterministic. Ordering carries no meaning for comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeMap<String, String>);

/// Result of reconciling an old tag set against a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagDiff {
    /// Keys present in the old set and absent from the new set.
    pub removed: BTreeSet<String>,
    /// Entries of the new set that are absent from, or differ in, the old set.
    pub updated: TagSet,
}

impl TagDiff {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.updated.is_empty()
    }
}

/// Computes the keys to remove and the tags to set so that a resource
/// tagged with `old` ends up tagged with `new`.
pub fn reconcile(old: &TagSet, new: &TagSet) -> TagDiff {
    TagDiff {
        removed: old.removed(new).0.into_keys().collect(),
        updated: old.updated(new),
    }
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries of `self` whose keys do not appear in `new`.
    pub fn removed(&self, new: &TagSet) -> TagSet {
        self.0
            .iter()
            .filter(|(k, _)| !new.0.contains_key(*k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Entries of `new` that are missing from `self` or carry another value.
    pub fn updated(&self, new: &TagSet) -> TagSet {
        new.0
            .iter()
            .filter(|(k, v)| self.0.get(*k) != Some(*v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn diff(&self, new: &TagSet) -> TagDiff {
        reconcile(self, new)
    }

    /// Drops keys reserved by AWS (`aws:` prefix); callers cannot manage them.
    pub fn ignore_aws(self) -> TagSet {
        self.ignore_prefixes(&[AWS_TAG_PREFIX])
    }

    pub fn ignore_prefixes<S: AsRef<str>>(self, prefixes: &[S]) -> TagSet {
        self.0
            .into_iter()
            .filter(|(k, _)| !prefixes.iter().any(|p| k.starts_with(p.as_ref())))
            .collect()
    }

    pub fn ignore_keys<S: AsRef<str>>(self, keys: &[S]) -> TagSet {
        self.0
            .into_iter()
            .filter(|(k, _)| !keys.iter().any(|ignored| k == ignored.as_ref()))
            .collect()
    }

    /// Converts an untyped JSON document into a tag set.
    ///
    /// `null` decodes to an empty set; anything other than an object of
    /// string values is rejected.
    pub fn from_value(value: &serde_json::Value) -> Result<TagSet, TagError> {
        use serde_json::Value;

        let object = match value {
            Value::Null => return Ok(TagSet::new()),
            Value::Object(object) => object,
            other => {
                return Err(TagError::NotAnObject {
                    kind: value_kind(other),
                });
            }
        };

        object
            .iter()
            .map(|(key, value)| match value {
                Value::String(s) => Ok((key.clone(), s.clone())),
                other => Err(TagError::NonStringValue {
                    key: key.clone(),
                    kind: value_kind(other),
                }),
            })
            .collect()
    }

    pub fn to_hash_map(&self) -> HashMap<String, String> {
        self.0.clone().into_iter().collect()
    }
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TagSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        TagSet(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for TagSet {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<BTreeMap<String, String>> for TagSet {
    fn from(map: BTreeMap<String, String>) -> Self {
        TagSet(map)
    }
}

impl From<HashMap<String, String>> for TagSet {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}
