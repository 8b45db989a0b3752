//! SCS Core - Brief → SCD Transposer
//!
//! Reads the approved domain briefs and stamps the matching SCD templates
//! with DRAFT status and provenance, standing in for the future
//! `scs generate` command.
//!
//! # Example
//!
//! ```rust,no_run
//! use scs_core::{Transposer, TransposerConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TransposerConfig::for_project(".");
//! let transposer = Transposer::from_config(&config)?;
//!
//! let report = transposer.run(&mut std::io::stdout().lock())?;
//! println!("generated {}/{}", report.generated, report.total);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod catalog;
pub mod clock;
pub mod error;
pub mod report;
pub mod transposer;
pub mod types;

pub use catalog::{Catalog, DEFAULT_AGENT, DEFAULT_APPROVAL_DATE};
pub use clock::{Clock, SystemClock};
pub use error::{ConfigError, TransposeError};
pub use report::{DocumentOutcome, Outcome, TransposeReport};
pub use transposer::{generation_note, rationale, Transposer, NEXT_STEPS};
pub use types::{DomainConfig, OutputEntry, TransposerConfig, CONTEXT_DIR, DOCS_DIR};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving the transposer
    pub use crate::{
        Catalog, Clock, DomainConfig, OutputEntry, TransposeReport, Transposer, TransposerConfig,
    };
    pub use scs_artifact::{Provenance, ScdDocument, ScdStatus};
    pub use scs_constitutional::{BriefSource, ConstitutionalLayer, ScdStore};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
