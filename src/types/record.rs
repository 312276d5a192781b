use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ArgValue;

/// A key/value pair read off a `*Property*` annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyPair {
    pub key: String,
    pub value: String,
}

/// One logical output row: a discovered test case and its metadata.
///
/// `None` (or an empty list) means no matching annotation was found, which
/// is distinct from an annotation whose value is an empty string; only the
/// former triggers highlighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseRecord {
    /// Declaring type's simple name.
    pub class_name: String,
    /// Method name, or `"<method> : <label>"` for an expanded case.
    pub test_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_case_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyPair>,
}

/// A case-description item yielded by a data source.
///
/// The property bag may carry `TestCaseId`, `Priority` and `Description`;
/// each is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseItem {
    pub label: String,
    #[serde(default)]
    pub properties: BTreeMap<String, ArgValue>,
}

impl CaseItem {
    /// String form of a bag entry, absent if the key is missing.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<String> {
        self.properties.get(key).map(ToString::to_string)
    }
}
