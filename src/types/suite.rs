//! Suite model: the metadata the driver hands to the core.
//!
//! A suite is a list of type handles; each type exposes enumerable members
//! and, per member, the attached annotation instances (type name + ordered
//! constructor-style argument values). Nothing here depends on any one test
//! framework's annotation set — matching against names is a policy applied
//! later, in [`crate::annotations`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// A constructor-style annotation argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Bool(b) => write!(f, "{b}"),
            ArgValue::Int(n) => write!(f, "{n}"),
            ArgValue::Float(x) => write!(f, "{x}"),
            ArgValue::Str(s) => f.write_str(s),
        }
    }
}

/// One annotation attached to a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    /// Declared type name of the annotation (e.g. `PriorityAttribute`).
    pub type_name: String,
    /// Ordered constructor-style argument values.
    #[serde(default)]
    pub args: Vec<ArgValue>,
}

impl Annotation {
    /// String form of the argument at `index`, if present.
    #[must_use]
    pub fn arg_string(&self, index: usize) -> Option<String> {
        self.args.get(index).map(ToString::to_string)
    }

    /// String form of the first constructor-style argument, if present.
    #[must_use]
    pub fn first_arg_string(&self) -> Option<String> {
        self.arg_string(0)
    }
}

/// A member of a type: a method-like handle plus its annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Member {
    /// Whether an annotation with exactly this type name is attached.
    #[must_use]
    pub fn has_annotation(&self, type_name: &str) -> bool {
        self.annotations.iter().any(|a| a.type_name == type_name)
    }

    /// First annotation with exactly this type name.
    #[must_use]
    pub fn annotation(&self, type_name: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.type_name == type_name)
    }
}

/// Callback registered as a case source, invoked at expansion time.
///
/// Returns the yielded case-description items, or a message describing why
/// invocation failed.
pub struct CaseProvider(Box<dyn Fn() -> std::result::Result<Vec<serde_json::Value>, String>>);

impl CaseProvider {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> std::result::Result<Vec<serde_json::Value>, String> + 'static,
    {
        Self(Box::new(f))
    }

    pub fn invoke(&self) -> std::result::Result<Vec<serde_json::Value>, String> {
        (self.0)()
    }
}

impl fmt::Debug for CaseProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CaseProvider(..)")
    }
}

/// A named case source declared on a type.
///
/// Items come either from the manifest (`items`) or from a registered
/// provider; a provider takes precedence. Sources marked `public` exist but
/// are not resolvable by expansion, mirroring a non-public member lookup.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSourceDef {
    pub name: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
    #[serde(skip)]
    pub provider: Option<CaseProvider>,
}

impl CaseSourceDef {
    /// Yield the case-description items for this source.
    pub fn yield_items(&self) -> std::result::Result<Vec<serde_json::Value>, String> {
        match &self.provider {
            Some(provider) => provider.invoke(),
            None => Ok(self.items.clone()),
        }
    }
}

/// A type under inspection: simple name, optional namespace, members, and
/// declared case sources.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeHandle {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub case_sources: Vec<CaseSourceDef>,
}

impl TypeHandle {
    /// Namespace-qualified name, used by the driver's namespace filter.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}.{}", ns, self.name),
            None => self.name.clone(),
        }
    }

    /// Resolve a case source by exact name among this type's non-public
    /// sources.
    #[must_use]
    pub fn case_source(&self, name: &str) -> Option<&CaseSourceDef> {
        self.case_sources.iter().find(|s| s.name == name && !s.public)
    }

    /// Register a provider-backed (non-public) case source.
    pub fn register_source(&mut self, name: impl Into<String>, provider: CaseProvider) {
        self.case_sources.push(CaseSourceDef {
            name: name.into(),
            public: false,
            items: Vec::new(),
            provider: Some(provider),
        });
    }
}

/// A full suite manifest.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Suite {
    #[serde(default)]
    pub types: Vec<TypeHandle>,
}

impl Suite {
    /// Parse a JSON suite manifest.
    ///
    /// # Errors
    /// Returns an error if the manifest is not valid JSON for this shape.
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Keep only types whose qualified name contains `filter`.
    pub fn retain_matching(&mut self, filter: &str) {
        self.types.retain(|t| t.qualified_name().contains(filter));
    }
}
