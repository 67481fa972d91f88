//! The ordered list of published versions stored in `versions.json`.

use serde::Serialize;
use serde_json::Value;

use crate::domain::{error::DomainError, version::VersionKey};

/// Reported by [`VersionList::latest`] when there are no versions.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Ordered sequence of version identifiers.
///
/// Mutators consume the list and hand back the new one so callers can chain
/// `list.add(v).sort()` and decide for themselves when to persist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VersionList(Vec<String>);

impl VersionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from a decoded `versions.json` document.
    ///
    /// Legacy files sometimes hold bare numbers (`[1.0, "2.0.0"]`); scalars
    /// are converted to the text JSON would print for them. Nested arrays,
    /// objects, booleans and nulls are rejected.
    pub fn from_json(value: Value) -> Result<Self, DomainError> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(DomainError::NotAList {
                    found: json_kind(&other),
                });
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(s) => Ok(s),
                Value::Number(n) => Ok(n.to_string()),
                other => Err(DomainError::NonScalarEntry {
                    index,
                    found: json_kind(&other).to_owned(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Two-space indented JSON with a trailing newline.
    pub fn to_json_pretty(&self) -> String {
        // A Vec<String> always serializes.
        let mut out = serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| "[]".into());
        out.push('\n');
        out
    }

    /// Append `version` unless an equal string is already present.
    pub fn add(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        if !self.contains(&version) {
            self.0.push(version);
        }
        self
    }

    /// Drop every entry equal to `version`. Comparison is exact string
    /// equality: `1.0` and `1.0.0` are different versions here.
    pub fn remove(mut self, version: &str) -> Self {
        self.0.retain(|v| v != version);
        self
    }

    /// Newest first. Entries with equal numeric prefixes keep their relative
    /// order.
    pub fn sort(mut self) -> Self {
        self.0
            .sort_by_cached_key(|v| std::cmp::Reverse(VersionKey::parse(v)));
        self
    }

    /// Oldest first, stable.
    pub fn sort_ascending(mut self) -> Self {
        self.0.sort_by_cached_key(|v| VersionKey::parse(v));
        self
    }

    /// The newest version, or [`UNKNOWN_VERSION`] when the list is empty.
    pub fn latest(&self) -> String {
        self.clone()
            .sort()
            .0
            .into_iter()
            .next()
            .unwrap_or_else(|| UNKNOWN_VERSION.to_owned())
    }

    pub fn contains(&self, version: &str) -> bool {
        self.0.iter().any(|v| v == version)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for VersionList {
    fn from(v: Vec<String>) -> Self {
        Self(v)
    }
}

impl<'a> FromIterator<&'a str> for VersionList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_owned).collect())
    }
}

impl IntoIterator for VersionList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a VersionList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The text a raw registry entry is matched on when it is removed.
///
/// Strings compare unquoted, numbers as JSON prints them, `null` as `None`
/// and booleans as `True`/`False`, so hand-edited legacy files still match.
pub fn entry_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "None".to_owned(),
        Value::Bool(true) => "True".to_owned(),
        Value::Bool(false) => "False".to_owned(),
        other => other.to_string(),
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn list(items: &[&str]) -> VersionList {
        items.iter().copied().collect()
    }

    // ── add / remove ──────────────────────────────────────────────────────

    #[test]
    fn add_appends_new_version() {
        assert_eq!(list(&["1.0.0"]).add("2.0.0"), list(&["1.0.0", "2.0.0"]));
    }

    #[test]
    fn add_existing_is_noop() {
        let l = list(&["1.0.0", "2.0.0"]);
        assert_eq!(l.clone().add("1.0.0"), l);
    }

    #[test]
    fn remove_drops_all_equal_entries() {
        let l = list(&["1.0.0", "2.0.0", "1.0.0"]);
        assert_eq!(l.remove("1.0.0"), list(&["2.0.0"]));
    }

    #[test]
    fn remove_uses_exact_string_equality() {
        let l = list(&["1.0", "1.0.0"]);
        assert_eq!(l.remove("1.0.0"), list(&["1.0"]));
    }

    #[test]
    fn add_then_remove_round_trips() {
        let cases: [&[&str]; 3] = [&[], &["1.0.0"], &["3.0", "v1", "2.9.9"]];
        for case in cases {
            let l = list(case);
            assert_eq!(l.clone().add("9.9.9-new").remove("9.9.9-new"), l);
        }
    }

    // ── sort ──────────────────────────────────────────────────────────────

    #[test]
    fn sort_is_descending_numeric() {
        let sorted = list(&["1.0.0", "2.9.9", "2.10.1", "0.1"]).sort();
        assert_eq!(sorted, list(&["2.10.1", "2.9.9", "1.0.0", "0.1"]));
    }

    #[test]
    fn non_numeric_sort_last_in_input_order() {
        let sorted = list(&["beta", "1.0.0", "alpha", "v2"]).sort();
        assert_eq!(sorted, list(&["1.0.0", "beta", "alpha", "v2"]));
    }

    #[test]
    fn equal_prefixes_are_stable() {
        let sorted = list(&["1.0.0-rc1", "1.0", "1.0.0"]).sort();
        assert_eq!(sorted, list(&["1.0.0-rc1", "1.0", "1.0.0"]));
    }

    #[test]
    fn sort_is_idempotent_and_preserves_membership() {
        let l = list(&["0.9", "v1", "10.0.0", "2.0", "nightly", "2.0.0"]);
        let once = l.clone().sort();
        assert_eq!(once.clone().sort(), once);

        let before: HashSet<_> = l.iter().collect();
        let after: HashSet<_> = once.iter().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn ascending_sort() {
        let sorted = list(&["2.0.0", "v1", "1.5"]).sort_ascending();
        assert_eq!(sorted, list(&["v1", "1.5", "2.0.0"]));
    }

    // ── latest ────────────────────────────────────────────────────────────

    #[test]
    fn latest_of_empty_is_unknown() {
        assert_eq!(VersionList::new().latest(), UNKNOWN_VERSION);
    }

    #[test]
    fn latest_picks_highest_regardless_of_order() {
        assert_eq!(list(&["1.0.0", "3.1.0", "2.0.0"]).latest(), "3.1.0");
    }

    // ── JSON ──────────────────────────────────────────────────────────────

    #[test]
    fn from_json_accepts_legacy_numbers() {
        let l = VersionList::from_json(json!([1.5, 2, "3.0.0"])).unwrap();
        assert_eq!(l, list(&["1.5", "2", "3.0.0"]));
    }

    #[test]
    fn from_json_rejects_objects() {
        assert_eq!(
            VersionList::from_json(json!({"versions": []})),
            Err(DomainError::NotAList { found: "object" })
        );
    }

    #[test]
    fn from_json_rejects_nested_entries() {
        assert!(matches!(
            VersionList::from_json(json!(["1.0.0", ["2.0.0"]])),
            Err(DomainError::NonScalarEntry { index: 1, .. })
        ));
    }

    #[test]
    fn entry_text_matches_legacy_scalars() {
        assert_eq!(entry_text(&json!("2.0.0")), "2.0.0");
        assert_eq!(entry_text(&json!(1)), "1");
        assert_eq!(entry_text(&json!(1.5)), "1.5");
        assert_eq!(entry_text(&json!(null)), "None");
        assert_eq!(entry_text(&json!(true)), "True");
    }

    #[test]
    fn pretty_json_is_two_space_with_newline() {
        let text = list(&["2.0.0", "1.0.0"]).to_json_pretty();
        assert_eq!(text, "[\n  \"2.0.0\",\n  \"1.0.0\"\n]\n");
    }

    #[test]
    fn empty_list_serializes_to_brackets() {
        assert_eq!(VersionList::new().to_json_pretty(), "[]\n");
    }
}
