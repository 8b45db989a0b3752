//! Core types for the transposer
//!
//! - Domain and output configuration
//! - Transposer configuration (roots + catalogue)

use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Documents root relative to the project root
pub const DOCS_DIR: &str = "docs";
/// SCD directory relative to the project root
pub const CONTEXT_DIR: &str = "context/project";

/// One SCD a domain produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputEntry {
    /// SCD filename inside the context root
    pub name: String,
    /// Maintained by hand; counted as generated without any I/O
    #[serde(default)]
    pub manually_managed: bool,
}

impl OutputEntry {
    /// Generated output
    #[inline]
    #[must_use]
    pub fn generated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            manually_managed: false,
        }
    }

    /// Hand-maintained output
    #[inline]
    #[must_use]
    pub fn manual(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            manually_managed: true,
        }
    }
}

/// A domain: one owner, one brief, an ordered list of SCDs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Display name, also used in paths and provenance
    pub name: String,
    /// Owner identity recorded as `created_by`
    pub owner: String,
    /// Brief location relative to the documents root
    pub brief: PathBuf,
    /// SCDs produced from the brief, in processing order
    #[serde(default)]
    pub outputs: Vec<OutputEntry>,
}

impl DomainConfig {
    /// Create domain with no outputs
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        owner: impl Into<String>,
        brief: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            brief: brief.into(),
            outputs: Vec::new(),
        }
    }

    /// Append a generated output
    #[inline]
    #[must_use]
    pub fn with_output(mut self, name: impl Into<String>) -> Self {
        self.outputs.push(OutputEntry::generated(name));
        self
    }

    /// Append a hand-maintained output
    #[inline]
    #[must_use]
    pub fn with_manual_output(mut self, name: impl Into<String>) -> Self {
        self.outputs.push(OutputEntry::manual(name));
        self
    }

    /// `source_document` recorded in provenance
    ///
    /// Always the domain wildcard, never the resolved brief path.
    #[inline]
    #[must_use]
    pub fn source_document(&self) -> String {
        format!("docs/{}/*-brief.md", self.name)
    }
}

/// Transposer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TransposerConfig {
    /// Root briefs are resolved against
    pub docs_root: PathBuf,
    /// Directory holding SCD templates and outputs
    pub context_root: PathBuf,
    /// Domains, owners and outputs
    pub catalog: Catalog,
}

impl TransposerConfig {
    /// Standard layout under `root` with the built-in catalogue
    #[must_use]
    pub fn for_project(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            docs_root: root.join(DOCS_DIR),
            context_root: root.join(CONTEXT_DIR),
            catalog: Catalog::builtin(),
        }
    }

    /// Replace the catalogue
    #[inline]
    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Override the documents root
    #[inline]
    #[must_use]
    pub fn with_docs_root(mut self, docs_root: impl Into<PathBuf>) -> Self {
        self.docs_root = docs_root.into();
        self
    }

    /// Override the context root
    #[inline]
    #[must_use]
    pub fn with_context_root(mut self, context_root: impl Into<PathBuf>) -> Self {
        self.context_root = context_root.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_document_is_wildcard() {
        let domain = DomainConfig::new(
            "security",
            "priya.patel@example.com",
            "security/security-context-brief.md",
        );
        assert_eq!(domain.source_document(), "docs/security/*-brief.md");
    }

    #[test]
    fn builder_keeps_order_and_flags() {
        let domain = DomainConfig::new("d", "o", "d/brief.md")
            .with_manual_output("a.yaml")
            .with_output("b.yaml");
        assert_eq!(
            domain.outputs,
            vec![OutputEntry::manual("a.yaml"), OutputEntry::generated("b.yaml")]
        );
    }

    #[test]
    fn project_layout() {
        let config = TransposerConfig::for_project("/srv/scs");
        assert_eq!(config.docs_root, Path::new("/srv/scs/docs"));
        assert_eq!(config.context_root, Path::new("/srv/scs/context/project"));
        assert_eq!(config.catalog, Catalog::builtin());
    }

    #[test]
    fn output_entry_defaults_to_generated() {
        let entry: OutputEntry = serde_yaml::from_str("name: x.yaml\n").unwrap();
        assert!(!entry.manually_managed);
    }
}
