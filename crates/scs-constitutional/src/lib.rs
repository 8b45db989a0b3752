//! SCS Constitutional Layer
//!
//! The trusted boundary between the external world (files) and the typed
//! brief/SCD model.
//!
//! # Core Operations
//!
//! - **Ingress**: parse briefs into [`BriefDocument`] and templates into
//!   [`ScdDocument`](scs_artifact::ScdDocument)
//! - **Egress**: serialize SCDs back to YAML, fully overwriting
//!
//! # Architecture
//!
//! ```text
//! docs/<domain>/<brief>.md ──▶ BriefParser ──▶ BriefDocument
//! context/project/<scd>.yaml ──▶ ScdParser ──▶ ScdDocument ──▶ YAML ──▶ context/project/<scd>.yaml
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use scs_constitutional::{ConstitutionalLayer, ScdStore};
//! use scs_artifact::ScdStatus;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let layer = ConstitutionalLayer::new("docs", "context/project");
//! if let Some(mut doc) = layer.load("threat-model.yaml")? {
//!     doc.set_status(ScdStatus::Draft);
//!     layer.save("threat-model.yaml", &doc)?;
//! }
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod error;
pub mod layer;
pub mod parsers;
pub mod store;

pub use error::{ParseError, SerializeError, StoreError, StoreResult};
pub use layer::{ConstitutionalLayer, DEFAULT_MAX_FILE_SIZE};
pub use parsers::{BriefDocument, BriefParser, DocumentParser, Heading, ScdParser};
pub use store::{BriefSource, SaveReceipt, ScdStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
