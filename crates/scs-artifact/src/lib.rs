//! SCS Artifact Model
//!
//! Typed view over Structured Config Documents (SCDs).
//!
//! # Core Concepts
//!
//! - [`ScdDocument`]: order-preserving YAML mapping with accessors for the
//!   recognized `status`, `content` and `provenance` fields
//! - [`ScdStatus`]: review lifecycle (`DRAFT`, `APPROVED`, `DEPRECATED`)
//! - [`Provenance`]: authorship and update record
//! - [`ContentHash`]: 32-byte Blake3 fingerprint of briefs and documents
//!
//! # Example
//!
//! ```rust
//! use scs_artifact::{ScdDocument, ScdStatus};
//!
//! let mut doc = ScdDocument::from_yaml("status: APPROVED\ncontent: {}\n").unwrap();
//! doc.set_status(ScdStatus::Draft);
//! assert!(doc.set_generation_note("generated"));
//! assert_eq!(doc.status().unwrap(), Some(ScdStatus::Draft));
//! ```

#![warn(unreachable_pub)]

mod document;
mod hash;
mod provenance;
mod status;

pub use document::{
    DocumentError, ScdDocument, CONTENT_KEY, GENERATION_NOTE_KEY, PROVENANCE_KEY, STATUS_KEY,
};
pub use hash::{ContentHash, HashError};
pub use provenance::{format_timestamp, Provenance};
pub use status::{ScdStatus, UnknownStatus};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
