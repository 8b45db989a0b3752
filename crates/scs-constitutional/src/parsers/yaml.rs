//! SCD template parser
//!
//! Uses serde_yaml. A blank file, or one whose top level is a falsy value
//! (null, `false`, zero, `''`, `[]`, `{}`), parses to an empty document;
//! callers decide what an empty template means.

use crate::error::ParseError;
use crate::parsers::DocumentParser;
use scs_artifact::ScdDocument;
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// YAML parser producing [`ScdDocument`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct ScdParser;

impl DocumentParser for ScdParser {
    type Output = ScdDocument;

    fn parse(&self, path: &Path, content: &str) -> Result<ScdDocument, ParseError> {
        if content.trim().is_empty() {
            return Ok(ScdDocument::new(Mapping::new()));
        }

        let value: Value = serde_yaml::from_str(content)
            .map_err(|e| ParseError::syntax_error(path, format!("YAML parse error: {e}")))?;

        if is_falsy(&value) {
            return Ok(ScdDocument::new(Mapping::new()));
        }

        ScdDocument::from_value(value).map_err(|source| ParseError::InvalidDocument {
            path: path.to_path_buf(),
            source,
        })
    }

    fn extensions(&self) -> &[&'static str] {
        &["yaml", "yml"]
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        Value::Tagged(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scs_artifact::ScdStatus;

    fn parse(content: &str) -> Result<ScdDocument, ParseError> {
        ScdParser.parse(Path::new("context/project/x.yaml"), content)
    }

    #[test]
    fn parses_mapping() {
        let doc = parse("status: APPROVED\ncontent:\n  key: value\n").unwrap();
        assert_eq!(doc.status().unwrap(), Some(ScdStatus::Approved));
        assert!(doc.content().is_some());
    }

    #[test]
    fn empty_and_null_are_empty_documents() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("~\n").unwrap().is_empty());
    }

    #[test]
    fn falsy_top_level_is_empty_document() {
        for content in ["[]\n", "{}\n", "false\n", "0\n", "''\n"] {
            assert!(parse(content).unwrap().is_empty(), "{content:?}");
        }
    }

    #[test]
    fn syntax_error_names_path() {
        let err = parse("key: [unclosed\n").unwrap_err();
        match err {
            ParseError::SyntaxError { path, .. } => {
                assert_eq!(path, Path::new("context/project/x.yaml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_empty_sequence_top_level_rejected() {
        let err = parse("- one\n- two\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidDocument { .. }));
    }
}
