//! Parsers for the two external formats the layer reads
//!
//! - SCD templates (YAML) via serde_yaml
//! - Domain briefs (Markdown) via pulldown-cmark

use crate::error::ParseError;
use std::path::Path;

mod markdown;
mod yaml;

pub use markdown::{BriefDocument, BriefParser, Heading};
pub use yaml::ScdParser;

/// Parser trait for converting file content into typed documents
pub trait DocumentParser: Send + Sync + 'static {
    /// The document type this parser produces
    type Output;

    /// Parse content read from `path`
    fn parse(&self, path: &Path, content: &str) -> Result<Self::Output, ParseError>;

    /// Supported file extensions (without dot)
    fn extensions(&self) -> &[&'static str];

    /// Check if this parser can handle the given path
    fn can_parse(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions().contains(&ext))
    }

    /// Reject paths outside [`extensions`](Self::extensions)
    fn ensure_supported(&self, path: &Path) -> Result<(), ParseError> {
        if self.can_parse(path) {
            Ok(())
        } else {
            Err(ParseError::UnsupportedExtension {
                path: path.to_path_buf(),
                expected: self.extensions().to_vec(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_parse_by_extension() {
        let parser = ScdParser;
        assert!(parser.can_parse(Path::new("threat-model.yaml")));
        assert!(parser.can_parse(Path::new("/ctx/threat-model.yml")));
        assert!(!parser.can_parse(Path::new("threat-model.json")));
        assert!(!parser.can_parse(Path::new("threat-model")));

        let parser = BriefParser;
        assert!(parser.can_parse(Path::new("docs/security/security-context-brief.md")));
        assert!(!parser.can_parse(Path::new("docs/security/brief.txt")));
    }

    #[test]
    fn ensure_supported_reports_expected() {
        let err = ScdParser.ensure_supported(Path::new("a.toml")).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnsupportedExtension { ref expected, .. } if expected == &["yaml", "yml"]
        ));
    }
}
