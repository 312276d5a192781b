//! Reads typed metadata off a member's annotations.
//!
//! Matching is a pure string policy: an annotation participates when its
//! declared type name contains the requested field name (case-sensitive
//! substring, so `"Priority"` matches `PriorityAttribute`). This keeps the
//! reader independent of any one framework's annotation set; the price is
//! that `"Priority"` also matches an unrelated `TestPriorityAttribute`,
//! accepted as framework-level convention.

use crate::types::{Member, PropertyPair, TestCaseRecord, TypeHandle};

/// Field name for the test-case id annotation.
pub const FIELD_TEST_CASE_ID: &str = "TestCaseId";
/// Field name for the priority annotation.
pub const FIELD_PRIORITY: &str = "Priority";
/// Field name for the description annotation.
pub const FIELD_DESCRIPTION: &str = "Description";

const CATEGORY: &str = "Category";
const PROPERTY: &str = "Property";

/// Look up the single annotation matching `field_name` and return the string
/// form of its first constructor-style argument.
///
/// Absent annotation — and an annotation carrying no arguments — both read
/// as `None`, distinct from `Some("")` for an empty-string argument.
#[must_use]
pub fn read_field(member: &Member, field_name: &str) -> Option<String> {
    member
        .annotations
        .iter()
        .find(|a| a.type_name.contains(field_name))
        .and_then(|a| a.first_arg_string())
}

/// Collect every `*Category*` annotation's first argument, in declaration
/// order. An empty result means no category annotation was found.
#[must_use]
pub fn read_categories(member: &Member) -> Vec<String> {
    member
        .annotations
        .iter()
        .filter(|a| a.type_name.contains(CATEGORY))
        .filter_map(|a| a.first_arg_string())
        .collect()
}

/// Collect every `*Property*` annotation's first two arguments as key/value
/// pairs, in declaration order. Annotations with fewer than two arguments
/// contribute nothing.
#[must_use]
pub fn read_properties(member: &Member) -> Vec<PropertyPair> {
    member
        .annotations
        .iter()
        .filter(|a| a.type_name.contains(PROPERTY))
        .filter_map(|a| {
            Some(PropertyPair {
                key: a.arg_string(0)?,
                value: a.arg_string(1)?,
            })
        })
        .collect()
}

/// Build the full metadata record for a plain test case.
#[must_use]
pub fn read_test_case(ty: &TypeHandle, member: &Member) -> TestCaseRecord {
    TestCaseRecord {
        class_name: ty.name.clone(),
        test_name: member.name.clone(),
        test_case_id: read_field(member, FIELD_TEST_CASE_ID),
        categories: read_categories(member),
        priority: read_field(member, FIELD_PRIORITY),
        description: read_field(member, FIELD_DESCRIPTION),
        properties: read_properties(member),
    }
}
