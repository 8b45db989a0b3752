//! Domain brief parser
//!
//! Uses pulldown-cmark to pull the outline (title and headings) out of a
//! brief. The brief body is kept verbatim; nothing downstream extracts
//! content from it yet.

use crate::error::ParseError;
use crate::parsers::DocumentParser;
use pulldown_cmark::{Event, Parser as MdParser, Tag, TagEnd};
use scs_artifact::ContentHash;
use std::path::Path;

/// Parsed domain brief
#[derive(Debug, Clone, PartialEq)]
pub struct BriefDocument {
    /// Original source, frontmatter included
    pub source: String,
    /// Document title (first H1)
    pub title: Option<String>,
    /// Headings in document order
    pub headings: Vec<Heading>,
    /// Frontmatter metadata (if any)
    pub metadata: Option<serde_yaml::Value>,
    /// Fingerprint of `source`
    pub checksum: ContentHash,
}

impl BriefDocument {
    /// Length in Unicode scalar values, counting each `\r\n` as one
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.source.chars().count() - self.source.matches("\r\n").count()
    }
}

/// Markdown heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading level (1-6)
    pub level: u8,
    /// Heading text
    pub title: String,
}

/// Markdown parser producing [`BriefDocument`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct BriefParser;

impl BriefParser {
    /// Split leading `---` frontmatter from the body
    fn extract_frontmatter(content: &str) -> (Option<serde_yaml::Value>, &str) {
        if let Some(rest) = content.strip_prefix("---") {
            if let Some(end) = rest.find("\n---") {
                let frontmatter = &rest[..end];
                let body = rest[end + 4..].trim_start_matches(['-', '\r', '\n']);
                if let Ok(value) = serde_yaml::from_str(frontmatter) {
                    return (Some(value), body);
                }
            }
        }
        (None, content)
    }

    fn outline(body: &str) -> Vec<Heading> {
        let mut headings = Vec::new();
        let mut current: Option<Heading> = None;

        for event in MdParser::new(body) {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    current = Some(Heading {
                        level: level as u8,
                        title: String::new(),
                    });
                }
                Event::Text(text) | Event::Code(text) => {
                    if let Some(heading) = current.as_mut() {
                        heading.title.push_str(&text);
                    }
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some(heading) = current.take() {
                        headings.push(heading);
                    }
                }
                _ => {}
            }
        }

        headings
    }
}

impl DocumentParser for BriefParser {
    type Output = BriefDocument;

    fn parse(&self, _path: &Path, content: &str) -> Result<BriefDocument, ParseError> {
        let (metadata, body) = Self::extract_frontmatter(content);
        let headings = Self::outline(body);
        let title = headings
            .iter()
            .find(|h| h.level == 1)
            .map(|h| h.title.clone());

        Ok(BriefDocument {
            source: content.to_string(),
            title,
            headings,
            metadata,
            checksum: ContentHash::compute(content.as_bytes()),
        })
    }

    fn extensions(&self) -> &[&'static str] {
        &["md", "markdown"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> BriefDocument {
        BriefParser
            .parse(Path::new("docs/security/security-context-brief.md"), content)
            .unwrap()
    }

    #[test]
    fn outline_and_title() {
        let brief = parse(
            "# Security Context Brief\n\nIntro.\n\n## Threats\n\nText.\n\n### `OAuth` flows\n",
        );
        assert_eq!(brief.title.as_deref(), Some("Security Context Brief"));
        assert_eq!(brief.headings.len(), 3);
        assert_eq!(brief.headings[2].level, 3);
        assert_eq!(brief.headings[2].title, "OAuth flows");
    }

    #[test]
    fn frontmatter_metadata() {
        let brief = parse("---\nstatus: APPROVED\napproved_on: 2025-12-01\n---\n\n# Safety\n");
        let metadata = brief.metadata.as_ref().unwrap();
        assert_eq!(metadata["status"], "APPROVED");
        assert_eq!(brief.title.as_deref(), Some("Safety"));
    }

    #[test]
    fn char_count_counts_scalars() {
        let brief = parse("# Café ✓\n");
        assert_eq!(brief.char_count(), 9);
        assert!(brief.source.len() > brief.char_count());
    }

    #[test]
    fn crlf_counts_as_one_char() {
        assert_eq!(parse("# A\r\n\r\nBody\r\n").char_count(), 10);
        assert_eq!(parse("# A\n\nBody\n").char_count(), 10);
    }

    #[test]
    fn empty_brief() {
        let brief = parse("");
        assert!(brief.title.is_none());
        assert!(brief.headings.is_empty());
        assert_eq!(brief.char_count(), 0);
    }

    #[test]
    fn checksum_tracks_source() {
        assert_eq!(parse("# A\n").checksum, ContentHash::compute(b"# A\n"));
    }
}
