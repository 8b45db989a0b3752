//! Run report
//!
//! Counts follow the progress output: manually managed outputs count as
//! generated; missing briefs and missing templates count as skipped.

use scs_artifact::ContentHash;
use serde::Serialize;
use std::path::PathBuf;

/// What happened to one configured output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Template stamped and written
    Generated {
        /// Destination
        path: PathBuf,
        /// Fingerprint of the bytes written
        hash: ContentHash,
    },
    /// Listed as hand-maintained; not touched
    ManuallyManaged,
    /// No template under that name
    MissingTemplate,
    /// Domain brief absent; whole domain skipped
    MissingBrief,
}

impl Outcome {
    /// Whether the outcome counts towards "generated"
    #[inline]
    #[must_use]
    pub fn counts_as_generated(&self) -> bool {
        matches!(self, Self::Generated { .. } | Self::ManuallyManaged)
    }
}

/// Outcome for a single (domain, output) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentOutcome {
    /// Owning domain
    pub domain: String,
    /// Output name
    pub name: String,
    /// What happened
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Summary of a transposition run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransposeReport {
    /// Outputs written or manually managed
    pub generated: usize,
    /// Outputs not produced this run
    pub skipped: usize,
    /// Outputs configured across all domains
    pub total: usize,
    /// Per-output outcomes in processing order
    pub documents: Vec<DocumentOutcome>,
}

impl TransposeReport {
    /// Empty report expecting `total` outputs
    #[inline]
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Record one outcome and update the counters
    pub fn record(&mut self, domain: &str, name: &str, outcome: Outcome) {
        if outcome.counts_as_generated() {
            self.generated += 1;
        } else {
            self.skipped += 1;
        }
        self.documents.push(DocumentOutcome {
            domain: domain.to_string(),
            name: name.to_string(),
            outcome,
        });
    }

    /// Outcome recorded for an output name
    #[must_use]
    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.documents
            .iter()
            .find(|d| d.name == name)
            .map(|d| &d.outcome)
    }

    /// Outcomes for one domain
    pub fn for_domain<'a>(&'a self, domain: &'a str) -> impl Iterator<Item = &'a DocumentOutcome> {
        self.documents.iter().filter(move |d| d.domain == domain)
    }

    /// Whether every configured output was produced or manually managed
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.generated == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_follow_outcomes() {
        let mut report = TransposeReport::new(4);
        report.record("business-context", "problem-definition.yaml", Outcome::ManuallyManaged);
        report.record(
            "business-context",
            "business-objectives.yaml",
            Outcome::Generated {
                path: PathBuf::from("context/project/business-objectives.yaml"),
                hash: ContentHash::compute(b"x"),
            },
        );
        report.record("safety-risk", "safety-checklist.yaml", Outcome::MissingTemplate);
        report.record("security", "threat-model.yaml", Outcome::MissingBrief);

        assert_eq!(report.generated, 2);
        assert_eq!(report.skipped, 2);
        assert!(!report.is_complete());
        assert_eq!(report.for_domain("business-context").count(), 2);
        assert_eq!(
            report.outcome("safety-checklist.yaml"),
            Some(&Outcome::MissingTemplate)
        );
    }

    #[test]
    fn json_shape() {
        let mut report = TransposeReport::new(1);
        report.record("safety-risk", "safety-checklist.yaml", Outcome::MissingTemplate);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["generated"], 0);
        assert_eq!(json["skipped"], 1);
        assert_eq!(json["documents"][0]["outcome"], "missing_template");
        assert_eq!(json["documents"][0]["name"], "safety-checklist.yaml");
    }
}
