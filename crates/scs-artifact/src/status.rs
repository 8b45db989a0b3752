//! SCD lifecycle status

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review status recorded in an SCD's top-level `status` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScdStatus {
    /// Machine-generated, not yet human-reviewed
    Draft,
    /// Reviewed and accepted by the domain owner
    Approved,
    /// Superseded; kept for history only
    Deprecated,
}

impl ScdStatus {
    /// Literal written to YAML
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Approved => "APPROVED",
            Self::Deprecated => "DEPRECATED",
        }
    }
}

impl fmt::Display for ScdStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScdStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "APPROVED" => Ok(Self::Approved),
            "DEPRECATED" => Ok(Self::Deprecated),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Status string outside the recognized set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown SCD status: '{0}'")]
pub struct UnknownStatus(pub String);
