//! Constitutional Layer - filesystem boundary
//!
//! Provides the trusted boundary for:
//! - Brief → [`BriefDocument`] parsing (ingress)
//! - SCD template → [`ScdDocument`] parsing (ingress)
//! - [`ScdDocument`] → file serialization (egress)

use crate::error::{ParseError, SerializeError, StoreResult};
use crate::parsers::{BriefDocument, BriefParser, DocumentParser, ScdParser};
use crate::store::{BriefSource, SaveReceipt, ScdStore};
use scs_artifact::{ContentHash, ScdDocument};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default maximum file size to parse (bytes)
pub const DEFAULT_MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Constitutional Layer - the only component that touches the filesystem
///
/// Briefs are resolved under `docs_root`; SCDs live flat under
/// `context_root`, addressed purely by filename.
#[derive(Debug, Clone)]
pub struct ConstitutionalLayer {
    docs_root: PathBuf,
    context_root: PathBuf,
    max_file_size: usize,
}

impl ConstitutionalLayer {
    /// Create layer over the given roots
    #[inline]
    #[must_use]
    pub fn new(docs_root: impl Into<PathBuf>, context_root: impl Into<PathBuf>) -> Self {
        Self {
            docs_root: docs_root.into(),
            context_root: context_root.into(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Override the maximum file size
    #[inline]
    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: usize) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    /// Root briefs are resolved against
    #[inline]
    #[must_use]
    pub fn docs_root(&self) -> &Path {
        &self.docs_root
    }

    /// Directory holding SCDs
    #[inline]
    #[must_use]
    pub fn context_root(&self) -> &Path {
        &self.context_root
    }

    /// Canonical location of an SCD
    #[inline]
    #[must_use]
    pub fn scd_path(&self, name: &str) -> PathBuf {
        self.context_root.join(name)
    }

    /// Read a file, mapping "not found" to `None`
    ///
    /// Extensions are gated only once content exists.
    fn read_optional(&self, path: &Path) -> Result<Option<String>, ParseError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ParseError::io_error(path, e)),
        };

        if content.len() > self.max_file_size {
            return Err(ParseError::TooLarge {
                path: path.to_path_buf(),
                size: content.len(),
                max: self.max_file_size,
            });
        }

        Ok(Some(content))
    }
}

impl BriefSource for ConstitutionalLayer {
    fn load_brief(&self, relative: &Path) -> Result<Option<BriefDocument>, ParseError> {
        let path = self.docs_root.join(relative);

        let Some(content) = self.read_optional(&path)? else {
            tracing::debug!(path = %path.display(), "brief not found");
            return Ok(None);
        };
        BriefParser.ensure_supported(&path)?;

        let brief = BriefParser.parse(&path, &content)?;
        tracing::debug!(
            path = %path.display(),
            checksum = %brief.checksum.short(),
            headings = brief.headings.len(),
            "loaded brief"
        );
        Ok(Some(brief))
    }
}

impl ScdStore for ConstitutionalLayer {
    fn load(&self, name: &str) -> StoreResult<Option<ScdDocument>> {
        let path = self.scd_path(name);

        let Some(content) = self.read_optional(&path)? else {
            return Ok(None);
        };
        ScdParser.ensure_supported(&path)?;

        Ok(Some(ScdParser.parse(&path, &content)?))
    }

    fn save(&self, name: &str, document: &ScdDocument) -> StoreResult<SaveReceipt> {
        let path = self.scd_path(name);
        let yaml = document
            .to_yaml()
            .map_err(|source| SerializeError::FormatError {
                path: path.clone(),
                source,
            })?;

        std::fs::write(&path, &yaml).map_err(|e| SerializeError::io_error(&path, e))?;

        let receipt = SaveReceipt {
            bytes: yaml.len(),
            hash: ContentHash::compute(yaml.as_bytes()),
            path,
        };
        tracing::debug!(
            path = %receipt.path.display(),
            bytes = receipt.bytes,
            hash = %receipt.hash.short(),
            "wrote SCD"
        );
        Ok(receipt)
    }
}
