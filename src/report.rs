//! Top-level pipeline: discover, read annotations, expand, assemble.

use serde::Serialize;

use crate::types::{ReportGrid, TestCaseRecord, TypeHandle};
use crate::{annotations, assemble, discover, expand};

/// A non-fatal problem encountered while building the report.
///
/// Expansion failures skip the affected parameterized case; the diagnostic
/// records what was skipped so nothing drops silently.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub class_name: String,
    pub method_name: String,
    pub message: String,
}

/// The assembled grid plus any diagnostics.
#[derive(Debug, Serialize)]
pub struct Report {
    pub grid: ReportGrid,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// Build the full report for the supplied types.
///
/// The whole model is rebuilt from scratch on every call; identical input
/// yields an identical report.
#[must_use]
pub fn build_report(types: &[TypeHandle]) -> Report {
    let discovered = discover::discover(types);

    let plain: Vec<TestCaseRecord> = discovered
        .plain
        .iter()
        .map(|case| annotations::read_test_case(case.ty, case.member))
        .collect();

    let mut groups: Vec<Vec<TestCaseRecord>> = Vec::new();
    let mut diagnostics = Vec::new();
    for case in &discovered.parameterized {
        match expand::expand(case) {
            Ok(records) => groups.push(records),
            Err(err) => diagnostics.push(Diagnostic {
                class_name: case.ty.name.clone(),
                method_name: case.member.name.clone(),
                message: err.to_string(),
            }),
        }
    }

    Report {
        grid: assemble::assemble(&plain, &groups),
        diagnostics,
    }
}
