//! Provenance record attached to every SCD
//!
//! Field order is part of the on-disk format: serde emits struct fields in
//! declaration order, and the YAML writer keeps that order.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Who created an SCD, who touched it last, when, and from what source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// Domain owner identity
    pub created_by: String,
    /// ISO-8601 UTC timestamp with `Z` suffix
    pub created_at: String,
    /// Agent or person that last rewrote the document
    pub last_updated_by: String,
    /// ISO-8601 UTC timestamp with `Z` suffix
    pub last_updated_at: String,
    /// Free-text reason for the last change
    pub rationale: String,
    /// Glob-style path of the originating brief
    pub source_document: String,
}

impl Provenance {
    /// Record where creation and last update share one instant
    #[must_use]
    pub fn stamped(
        created_by: impl Into<String>,
        last_updated_by: impl Into<String>,
        at: DateTime<Utc>,
        rationale: impl Into<String>,
        source_document: impl Into<String>,
    ) -> Self {
        let timestamp = format_timestamp(at);
        Self {
            created_by: created_by.into(),
            created_at: timestamp.clone(),
            last_updated_by: last_updated_by.into(),
            last_updated_at: timestamp,
            rationale: rationale.into(),
            source_document: source_document.into(),
        }
    }
}

/// Render an instant as `YYYY-MM-DDTHH:MM:SS.ffffffZ`
#[inline]
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
