//! Enumerates members of the supplied types and classifies each as a plain
//! test case, a parameterized test case, or neither.

use crate::types::{Member, TypeHandle};

/// Annotation marking a member as a plain test case.
pub const TEST_ANNOTATION: &str = "TestAttribute";
/// Annotation marking a member as data-driven, naming its case source.
pub const CASE_SOURCE_ANNOTATION: &str = "TestCaseSourceAttribute";

/// A classified member together with its declaring type.
#[derive(Debug, Clone, Copy)]
pub struct DiscoveredCase<'a> {
    pub ty: &'a TypeHandle,
    pub member: &'a Member,
}

/// Discovery output. Order within each list is the order types and their
/// members were supplied; user-visible ordering only happens later, in the
/// assembler's sort.
#[derive(Debug, Default)]
pub struct DiscoveredSuite<'a> {
    pub plain: Vec<DiscoveredCase<'a>>,
    pub parameterized: Vec<DiscoveredCase<'a>>,
}

/// Classify every member of every supplied type.
///
/// A member carrying both annotations classifies as plain; members carrying
/// neither are ignored.
#[must_use]
pub fn discover(types: &[TypeHandle]) -> DiscoveredSuite<'_> {
    let mut suite = DiscoveredSuite::default();
    for ty in types {
        for member in &ty.members {
            let case = DiscoveredCase { ty, member };
            if member.has_annotation(TEST_ANNOTATION) {
                suite.plain.push(case);
            } else if member.has_annotation(CASE_SOURCE_ANNOTATION) {
                suite.parameterized.push(case);
            }
        }
    }
    suite
}
