use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// Scope name used for endpoints the docs list without any OAuth scope.
pub const NO_SCOPE: &str = "(any scope)";

/// A normalized `METHOD /path` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EndpointDescriptor(String);

impl EndpointDescriptor {
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self(descriptor.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The HTTP method token, or the whole descriptor if it has no path part.
    pub fn method(&self) -> &str {
        self.0.split_once(' ').map_or(self.0.as_str(), |(method, _)| method)
    }

    pub fn path(&self) -> &str {
        self.0.split_once(' ').map_or("", |(_, path)| path)
    }
}

impl fmt::Display for EndpointDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One endpoint link from the table of contents: the raw anchor it was read
/// from and the descriptor derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointEntry {
    pub href: String,
    pub descriptor: EndpointDescriptor,
}

// Serialized output only ever carries the descriptor.
impl Serialize for EndpointEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.descriptor.serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeSection {
    pub scope_name: String,
    pub entries: Vec<EndpointEntry>,
}

impl ScopeSection {
    /// Builds a section, substituting [`NO_SCOPE`] for a blank name. Any other
    /// name is kept exactly as the link text reads.
    pub fn new(scope_name: &str, entries: Vec<EndpointEntry>) -> Self {
        let scope_name = if scope_name.trim().is_empty() {
            NO_SCOPE.to_string()
        } else {
            scope_name.to_string()
        };
        Self { scope_name, entries }
    }
}

/// Scope name to endpoints, keyed in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EndpointCatalogue {
    scopes: BTreeMap<String, Vec<EndpointEntry>>,
}

impl EndpointCatalogue {
    pub fn from_sections(sections: impl IntoIterator<Item = ScopeSection>) -> Self {
        let mut scopes = BTreeMap::new();
        for section in sections {
            if scopes.insert(section.scope_name.clone(), section.entries).is_some() {
                warn!(scope = %section.scope_name, "duplicate scope section, keeping the last one");
            }
        }
        Self { scopes }
    }

    pub fn scopes(&self) -> impl Iterator<Item = (&str, &[EndpointEntry])> {
        self.scopes
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    pub fn get(&self, scope: &str) -> Option<&[EndpointEntry]> {
        self.scopes.get(scope).map(Vec::as_slice)
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    pub fn endpoint_count(&self) -> usize {
        self.scopes.values().map(Vec::len).sum()
    }

    /// Rewrites every descriptor in place with `f`.
    pub fn map_descriptors(mut self, f: impl Fn(&str) -> String) -> Self {
        for entry in self.scopes.values_mut().flatten() {
            entry.descriptor = EndpointDescriptor::new(f(entry.descriptor.as_str()));
        }
        self
    }
}
