//! Store abstractions over briefs and SCDs
//!
//! The transposer only talks to these traits. [`ConstitutionalLayer`]
//! implements both against the filesystem; tests substitute in-memory
//! stores.
//!
//! [`ConstitutionalLayer`]: crate::ConstitutionalLayer

use crate::error::{ParseError, StoreResult};
use crate::parsers::BriefDocument;
use scs_artifact::{ContentHash, ScdDocument};
use std::path::{Path, PathBuf};

/// Read-only source of domain briefs
pub trait BriefSource {
    /// Load the brief at `relative` (relative to the documents root)
    ///
    /// Returns `Ok(None)` when no file exists there.
    fn load_brief(&self, relative: &Path) -> Result<Option<BriefDocument>, ParseError>;
}

/// Read/write store of SCDs addressed by filename
pub trait ScdStore {
    /// Load the SCD named `name`
    ///
    /// Returns `Ok(None)` when no document exists under that name.
    fn load(&self, name: &str) -> StoreResult<Option<ScdDocument>>;

    /// Persist `document` as `name`, replacing any prior content
    fn save(&self, name: &str, document: &ScdDocument) -> StoreResult<SaveReceipt>;
}

/// What a successful save wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReceipt {
    /// Destination
    pub path: PathBuf,
    /// Bytes written
    pub bytes: usize,
    /// Fingerprint of the bytes written
    pub hash: ContentHash,
}

impl<T: BriefSource + ?Sized> BriefSource for &T {
    fn load_brief(&self, relative: &Path) -> Result<Option<BriefDocument>, ParseError> {
        (**self).load_brief(relative)
    }
}

impl<T: ScdStore + ?Sized> ScdStore for &T {
    fn load(&self, name: &str) -> StoreResult<Option<ScdDocument>> {
        (**self).load(name)
    }

    fn save(&self, name: &str, document: &ScdDocument) -> StoreResult<SaveReceipt> {
        (**self).save(name, document)
    }
}
