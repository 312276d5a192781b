//! Expands a parameterized test case into one record per yielded data item.

use crate::annotations::{self, FIELD_DESCRIPTION, FIELD_PRIORITY, FIELD_TEST_CASE_ID};
use crate::discover::{DiscoveredCase, CASE_SOURCE_ANNOTATION};
use crate::error::{Result, TestsheetError};
use crate::types::{CaseItem, TestCaseRecord};

/// Expand one parameterized case.
///
/// Reads the source name off the declaring annotation's first argument,
/// resolves it among the declaring type's non-public case sources, yields
/// its items and interprets each as a case description. Categories are a
/// per-method concept and come from the member's annotations; id, priority
/// and description come from each item's property bag.
///
/// # Errors
/// `UnresolvableSource` if the annotation names no source or the name does
/// not resolve, `SourceInvocation` if the resolved source fails, and
/// `MalformedCase` if an item lacks the case-description shape. Any of
/// these abort this one case's expansion, not the whole run.
pub fn expand(case: &DiscoveredCase<'_>) -> Result<Vec<TestCaseRecord>> {
    let source_name = case
        .member
        .annotation(CASE_SOURCE_ANNOTATION)
        .and_then(|a| a.first_arg_string())
        .ok_or_else(|| unresolvable(case, "(unnamed)"))?;

    let source = case
        .ty
        .case_source(&source_name)
        .ok_or_else(|| unresolvable(case, &source_name))?;

    let items = source
        .yield_items()
        .map_err(|message| TestsheetError::SourceInvocation {
            class_name: case.ty.name.clone(),
            source_name: source_name.clone(),
            message,
        })?;

    let categories = annotations::read_categories(case.member);

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let case_item: CaseItem =
            serde_json::from_value(item).map_err(|e| TestsheetError::MalformedCase {
                source_name: source_name.clone(),
                index,
                message: e.to_string(),
            })?;

        records.push(TestCaseRecord {
            class_name: case.ty.name.clone(),
            test_name: format!("{} : {}", case.member.name, case_item.label),
            test_case_id: case_item.property(FIELD_TEST_CASE_ID),
            categories: categories.clone(),
            priority: case_item.property(FIELD_PRIORITY),
            description: case_item.property(FIELD_DESCRIPTION),
            properties: Vec::new(),
        });
    }

    Ok(records)
}

fn unresolvable(case: &DiscoveredCase<'_>, source_name: &str) -> TestsheetError {
    TestsheetError::UnresolvableSource {
        class_name: case.ty.name.clone(),
        method_name: case.member.name.clone(),
        source_name: source_name.to_string(),
    }
}
