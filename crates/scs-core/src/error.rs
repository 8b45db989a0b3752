//! Error types for the transposer
//!
//! Recoverable conditions (missing brief, missing template) never surface
//! here; they are recorded in the run report. Everything in this module
//! aborts the run.

use scs_artifact::DocumentError;
use scs_constitutional::{ParseError, StoreError};
use std::path::PathBuf;

/// Catalogue/configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Catalogue file could not be read
    #[error("io error reading catalogue {path}: {source}")]
    Io {
        /// Catalogue path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Catalogue file is not valid YAML for the catalogue shape
    #[error("invalid catalogue: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// Two domains share a name
    #[error("duplicate domain: {0}")]
    DuplicateDomain(String),

    /// Domain without an owner identity
    #[error("domain '{0}' has no owner")]
    EmptyOwner(String),

    /// Brief path escapes the documents root
    #[error("domain '{domain}' brief path must be relative: {path}")]
    AbsoluteBriefPath {
        /// Domain name
        domain: String,
        /// Configured path
        path: PathBuf,
    },

    /// Output name is empty or contains a path separator
    #[error("domain '{domain}' has invalid output name '{name}'")]
    InvalidOutputName {
        /// Domain name
        domain: String,
        /// Output name
        name: String,
    },

    /// Brief is not a Markdown file
    #[error("domain '{domain}' brief must be a Markdown file: {path}")]
    UnsupportedBrief {
        /// Domain name
        domain: String,
        /// Configured path
        path: PathBuf,
    },

    /// Output is not a YAML file
    #[error("domain '{domain}' output '{name}' must be a YAML file")]
    UnsupportedOutput {
        /// Domain name
        domain: String,
        /// Output name
        name: String,
    },

    /// Same output claimed twice
    #[error("output '{name}' claimed by both '{first}' and '{second}'")]
    DuplicateOutput {
        /// Output name
        name: String,
        /// Domain listed first
        first: String,
        /// Domain listed second
        second: String,
    },
}

/// Fatal transposition errors
#[derive(Debug, thiserror::Error)]
pub enum TransposeError {
    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Brief exists but could not be read or parsed
    #[error("brief for domain '{domain}' unreadable: {source}")]
    Brief {
        /// Domain name
        domain: String,
        /// Underlying error
        #[source]
        source: ParseError,
    },

    /// Template load or save failed
    #[error("SCD '{name}': {source}")]
    Store {
        /// Output name
        name: String,
        /// Underlying error
        #[source]
        source: StoreError,
    },

    /// Template could not be stamped
    #[error("SCD '{name}' could not be updated: {source}")]
    Document {
        /// Output name
        name: String,
        /// Underlying error
        #[source]
        source: DocumentError,
    },

    /// Progress output could not be written
    #[error("failed to write progress output: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::DuplicateOutput {
            name: "threat-model.yaml".into(),
            first: "security".into(),
            second: "safety-risk".into(),
        };
        assert_eq!(
            err.to_string(),
            "output 'threat-model.yaml' claimed by both 'security' and 'safety-risk'"
        );
    }

    #[test]
    fn config_converts_into_transpose() {
        let err: TransposeError = ConfigError::EmptyOwner("security".into()).into();
        assert!(matches!(err, TransposeError::Config(ConfigError::EmptyOwner(_))));
    }
}
