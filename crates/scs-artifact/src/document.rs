//! Structured Config Document (SCD)
//!
//! An SCD is a YAML mapping with a handful of recognized top-level fields:
//! `status`, `content` and `provenance`. Everything else is carried through
//! untouched. The mapping is insertion-ordered, so overwriting an existing
//! key keeps its position and new keys land at the end.

use crate::hash::ContentHash;
use crate::provenance::Provenance;
use crate::status::{ScdStatus, UnknownStatus};
use serde_yaml::{Mapping, Value};

/// Top-level key holding the review status
pub const STATUS_KEY: &str = "status";
/// Top-level key holding domain-specific fields
pub const CONTENT_KEY: &str = "content";
/// Top-level key holding the provenance record
pub const PROVENANCE_KEY: &str = "provenance";
/// Key inside `content` explaining how the document was produced
pub const GENERATION_NOTE_KEY: &str = "_generation_note";

/// An SCD loaded from or destined for the document store
#[derive(Debug, Clone, PartialEq)]
pub struct ScdDocument {
    root: Mapping,
}

impl ScdDocument {
    /// Wrap an existing mapping
    #[inline]
    #[must_use]
    pub fn new(root: Mapping) -> Self {
        Self { root }
    }

    /// Build from an arbitrary YAML value
    ///
    /// # Errors
    /// Returns [`DocumentError::NotAMapping`] when the top level is a scalar
    /// or sequence.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        match value {
            Value::Mapping(root) => Ok(Self { root }),
            other => Err(DocumentError::NotAMapping(kind_of(&other))),
        }
    }

    /// Parse from YAML text
    ///
    /// # Errors
    /// Returns error on invalid YAML or a non-mapping top level
    pub fn from_yaml(yaml: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_yaml::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Render as block-style YAML
    ///
    /// # Errors
    /// Returns error if a value cannot be serialized
    pub fn to_yaml(&self) -> Result<String, DocumentError> {
        Ok(serde_yaml::to_string(&self.root)?)
    }

    /// Hash of the rendered YAML
    ///
    /// # Errors
    /// Returns error if rendering fails
    pub fn content_hash(&self) -> Result<ContentHash, DocumentError> {
        Ok(ContentHash::compute(self.to_yaml()?.as_bytes()))
    }

    /// Whether the document has no top-level keys
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Underlying mapping
    #[inline]
    #[must_use]
    pub fn as_mapping(&self) -> &Mapping {
        &self.root
    }

    /// Consume into the underlying mapping
    #[inline]
    #[must_use]
    pub fn into_mapping(self) -> Mapping {
        self.root
    }

    /// Top-level field by name
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Value at a dotted path, e.g. `provenance.created_by`
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = current.as_mapping()?.get(segment)?;
        }
        Some(current)
    }

    /// Parsed `status`, if present and a string
    ///
    /// # Errors
    /// Returns error when the string is not a recognized status
    pub fn status(&self) -> Result<Option<ScdStatus>, UnknownStatus> {
        self.get(STATUS_KEY)
            .and_then(Value::as_str)
            .map(str::parse)
            .transpose()
    }

    /// Overwrite `status`
    pub fn set_status(&mut self, status: ScdStatus) {
        self.root
            .insert(STATUS_KEY.into(), Value::String(status.as_str().to_string()));
    }

    /// Parsed `provenance`, if present and well-formed
    #[must_use]
    pub fn provenance(&self) -> Option<Provenance> {
        self.get(PROVENANCE_KEY)
            .cloned()
            .and_then(|v| serde_yaml::from_value(v).ok())
    }

    /// Replace the whole `provenance` block
    ///
    /// # Errors
    /// Returns error if the record cannot be converted to YAML
    pub fn set_provenance(&mut self, provenance: &Provenance) -> Result<(), DocumentError> {
        let value = serde_yaml::to_value(provenance)?;
        self.root.insert(PROVENANCE_KEY.into(), value);
        Ok(())
    }

    /// `content` as a mapping, when it is one
    #[must_use]
    pub fn content(&self) -> Option<&Mapping> {
        self.get(CONTENT_KEY).and_then(Value::as_mapping)
    }

    /// Set `content._generation_note` when `content` is a mapping
    ///
    /// Returns `false` and leaves the document untouched when `content` is
    /// absent or not a mapping.
    pub fn set_generation_note(&mut self, note: impl Into<String>) -> bool {
        match self.root.get_mut(CONTENT_KEY) {
            Some(Value::Mapping(content)) => {
                content.insert(GENERATION_NOTE_KEY.into(), Value::String(note.into()));
                true
            }
            _ => false,
        }
    }
}

impl From<Mapping> for ScdDocument {
    fn from(root: Mapping) -> Self {
        Self::new(root)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Document model errors
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Top-level YAML value is not a mapping
    #[error("SCD top level must be a mapping, found {0}")]
    NotAMapping(&'static str),

    /// YAML encode/decode failure
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
