//! Brief → SCD transposer
//!
//! Walks the catalogue domain by domain, stamps every available SCD
//! template with DRAFT status and a fresh provenance record, and writes it
//! back in place.
//!
//! Content is not extracted from briefs yet; the brief is loaded so that a
//! missing brief skips its domain, and its outline is logged.

use crate::catalog::Catalog;
use crate::clock::{Clock, SystemClock};
use crate::error::TransposeError;
use crate::report::{Outcome, TransposeReport};
use crate::types::{DomainConfig, TransposerConfig};
use scs_artifact::{Provenance, ScdDocument, ScdStatus};
use scs_constitutional::{BriefDocument, BriefSource, ConstitutionalLayer, ScdStore};
use std::io::Write;

const RULE_WIDTH: usize = 80;

/// Manual follow-ups printed after every run
pub const NEXT_STEPS: [&str; 4] = [
    "Review generated SCDs in context/project/",
    "Run validation: scs validate --bundle bundles/project-bundle.yaml",
    "Fix any validation errors",
    "Create versioned bundle snapshot",
];

/// Note inserted into `content._generation_note`
#[must_use]
pub fn generation_note(domain: &str) -> String {
    format!(
        "This SCD was auto-generated from the {domain} domain brief. \
         In production, content would be extracted by AI transposer. \
         For reference implementation, this demonstrates the transposition workflow."
    )
}

/// Provenance rationale for a domain
#[must_use]
pub fn rationale(domain: &str, approval_date: &str) -> String {
    format!("Generated from {domain} brief approved {approval_date}")
}

/// The transposer
///
/// Generic over where briefs come from, where SCDs live and what time it
/// is, so tests can run it against in-memory stores and a frozen clock.
#[derive(Debug, Clone)]
pub struct Transposer<B, S, C = SystemClock> {
    catalog: Catalog,
    briefs: B,
    store: S,
    clock: C,
}

impl Transposer<ConstitutionalLayer, ConstitutionalLayer, SystemClock> {
    /// Filesystem-backed transposer for `config`
    ///
    /// # Errors
    /// Returns error if the catalogue fails validation
    pub fn from_config(config: &TransposerConfig) -> Result<Self, TransposeError> {
        let layer = ConstitutionalLayer::new(&config.docs_root, &config.context_root);
        Self::new(config.catalog.clone(), layer.clone(), layer, SystemClock)
    }
}

impl<B, S, C> Transposer<B, S, C>
where
    B: BriefSource,
    S: ScdStore,
    C: Clock,
{
    /// Create transposer over explicit collaborators
    ///
    /// # Errors
    /// Returns error if the catalogue fails validation
    pub fn new(catalog: Catalog, briefs: B, store: S, clock: C) -> Result<Self, TransposeError> {
        catalog.validate()?;
        Ok(Self {
            catalog,
            briefs,
            store,
            clock,
        })
    }

    /// Catalogue in use
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Process every domain, writing progress to `out`
    ///
    /// Missing briefs and missing templates are recorded and skipped. Any
    /// other failure aborts the run; SCDs already written stay written.
    ///
    /// # Errors
    /// - [`TransposeError::Brief`] if a brief exists but cannot be read
    /// - [`TransposeError::Store`] if a template cannot be read or written
    /// - [`TransposeError::Output`] if `out` fails
    pub fn run<W: Write>(&self, out: &mut W) -> Result<TransposeReport, TransposeError> {
        let mut report = TransposeReport::new(self.catalog.total_outputs());
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(out, "{rule}")?;
        writeln!(out, "SCS AI Transposer - Domain Brief → SCD Generation")?;
        writeln!(out, "{rule}")?;
        writeln!(out)?;

        tracing::info!(
            "Transposing {} domains, {} SCDs",
            self.catalog.domains.len(),
            report.total
        );

        for domain in &self.catalog.domains {
            self.run_domain(domain, &mut report, out)?;
        }

        writeln!(out)?;
        writeln!(out, "{rule}")?;
        writeln!(out, "✅ Transposition complete!")?;
        writeln!(out, "   Generated: {}/{} SCDs", report.generated, report.total)?;
        if report.skipped > 0 {
            writeln!(out, "   Skipped: {} SCDs", report.skipped)?;
        }
        writeln!(out, "{rule}")?;
        writeln!(out)?;
        writeln!(out, "Next steps:")?;
        for (i, step) in NEXT_STEPS.iter().enumerate() {
            writeln!(out, "  {}. {step}", i + 1)?;
        }
        writeln!(out)?;

        tracing::info!(
            "Transposition complete: generated {}/{}, skipped {}",
            report.generated,
            report.total,
            report.skipped
        );
        Ok(report)
    }

    fn run_domain<W: Write>(
        &self,
        domain: &DomainConfig,
        report: &mut TransposeReport,
        out: &mut W,
    ) -> Result<(), TransposeError> {
        writeln!(out, "\n📁 Processing domain: {}", domain.name)?;
        writeln!(out, "   Owner: {}", domain.owner)?;
        writeln!(out, "   SCDs to generate: {}", domain.outputs.len())?;

        let brief = self
            .briefs
            .load_brief(&domain.brief)
            .map_err(|source| TransposeError::Brief {
                domain: domain.name.clone(),
                source,
            })?;

        let Some(brief) = brief else {
            writeln!(out, "   ✗ Brief not found, skipping domain")?;
            tracing::warn!(
                "Brief {} missing; skipping domain {}",
                domain.brief.display(),
                domain.name
            );
            for output in &domain.outputs {
                report.record(&domain.name, &output.name, Outcome::MissingBrief);
            }
            return Ok(());
        };

        writeln!(out, "   ✓ Loaded brief ({} chars)", brief.char_count())?;
        tracing::debug!(
            domain = %domain.name,
            title = brief.title.as_deref().unwrap_or(""),
            headings = brief.headings.len(),
            checksum = %brief.checksum.short(),
            "brief outline"
        );

        for output in &domain.outputs {
            if output.manually_managed {
                writeln!(out, "  ⊘ Skipped: {} (already generated manually)", output.name)?;
                report.record(&domain.name, &output.name, Outcome::ManuallyManaged);
                continue;
            }

            match self.generate(domain, &output.name, &brief)? {
                Some(document) => {
                    let receipt = self.store.save(&output.name, &document).map_err(|source| {
                        TransposeError::Store {
                            name: output.name.clone(),
                            source,
                        }
                    })?;
                    writeln!(out, "  ✓ Generated: {}", output.name)?;
                    report.record(
                        &domain.name,
                        &output.name,
                        Outcome::Generated {
                            path: receipt.path,
                            hash: receipt.hash,
                        },
                    );
                }
                None => {
                    writeln!(out, "Warning: No template found for {}", output.name)?;
                    writeln!(out, "  ✗ Failed: {}", output.name)?;
                    report.record(&domain.name, &output.name, Outcome::MissingTemplate);
                }
            }
        }

        Ok(())
    }

    /// Stamp the template `name` for `domain`
    ///
    /// Returns `Ok(None)` when no template exists, or the template is empty.
    /// Nothing is persisted; the caller saves the result.
    ///
    /// The brief is accepted for the future content-extraction step and is
    /// not consulted yet.
    ///
    /// # Errors
    /// Returns error if the template exists but cannot be read or parsed
    pub fn generate(
        &self,
        domain: &DomainConfig,
        name: &str,
        _brief: &BriefDocument,
    ) -> Result<Option<ScdDocument>, TransposeError> {
        let template = self.store.load(name).map_err(|source| TransposeError::Store {
            name: name.to_string(),
            source,
        })?;

        let mut document = match template {
            Some(document) if !document.is_empty() => document,
            _ => {
                tracing::warn!("No template found for {}", name);
                return Ok(None);
            }
        };

        document.set_status(ScdStatus::Draft);

        let provenance = Provenance::stamped(
            domain.owner.as_str(),
            self.catalog.agent.as_str(),
            self.clock.now(),
            rationale(&domain.name, &self.catalog.approval_date),
            domain.source_document(),
        );
        document
            .set_provenance(&provenance)
            .map_err(|source| TransposeError::Document {
                name: name.to_string(),
                source,
            })?;

        if !document.set_generation_note(generation_note(&domain.name)) {
            tracing::debug!("{} has no content mapping; generation note omitted", name);
        }

        Ok(Some(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use scs_artifact::ContentHash;
    use scs_constitutional::{ParseError, SaveReceipt, StoreResult};
    use serde_yaml::Value;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    struct Frozen;

    impl Clock for Frozen {
        fn now(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap()
        }
    }

    #[derive(Default)]
    struct Briefs(HashMap<PathBuf, String>);

    impl BriefSource for Briefs {
        fn load_brief(&self, relative: &Path) -> Result<Option<BriefDocument>, ParseError> {
            use scs_constitutional::{BriefParser, DocumentParser};
            self.0
                .get(relative)
                .map(|text| BriefParser.parse(relative, text))
                .transpose()
        }
    }

    #[derive(Default)]
    struct Store(RefCell<HashMap<String, ScdDocument>>);

    impl ScdStore for Store {
        fn load(&self, name: &str) -> StoreResult<Option<ScdDocument>> {
            Ok(self.0.borrow().get(name).cloned())
        }

        fn save(&self, name: &str, document: &ScdDocument) -> StoreResult<SaveReceipt> {
            self.0.borrow_mut().insert(name.to_string(), document.clone());
            Ok(SaveReceipt {
                path: PathBuf::from(name),
                bytes: 0,
                hash: ContentHash::default(),
            })
        }
    }

    fn domain() -> DomainConfig {
        DomainConfig::new(
            "safety-risk",
            "james.rodriguez@example.com",
            "safety-risk/safety-and-risk-brief.md",
        )
        .with_output("risk-assessment.yaml")
        .with_output("safety-checklist.yaml")
    }

    fn transposer(store: Store) -> Transposer<Briefs, Store, Frozen> {
        let mut briefs = Briefs::default();
        briefs.0.insert(
            PathBuf::from("safety-risk/safety-and-risk-brief.md"),
            "# Safety & Risk\n".to_string(),
        );
        Transposer::new(Catalog::new(vec![domain()]), briefs, store, Frozen).unwrap()
    }

    fn brief() -> BriefDocument {
        use scs_constitutional::{BriefParser, DocumentParser};
        BriefParser.parse(Path::new("b.md"), "# B\n").unwrap()
    }

    #[test]
    fn generate_stamps_template() {
        let store = Store::default();
        store.0.borrow_mut().insert(
            "risk-assessment.yaml".into(),
            ScdDocument::from_yaml("status: APPROVED\ncontent:\n  risks: []\n").unwrap(),
        );
        let t = transposer(store);

        let doc = t
            .generate(&domain(), "risk-assessment.yaml", &brief())
            .unwrap()
            .unwrap();

        assert_eq!(doc.status().unwrap(), Some(ScdStatus::Draft));
        let provenance = doc.provenance().unwrap();
        assert_eq!(provenance.created_by, "james.rodriguez@example.com");
        assert_eq!(provenance.created_at, "2026-10-19T08:30:00.000000Z");
        assert_eq!(provenance.created_at, provenance.last_updated_at);
        assert_eq!(provenance.last_updated_by, "AI Transposer Script");
        assert_eq!(
            provenance.rationale,
            "Generated from safety-risk brief approved 2025-12-01"
        );
        assert_eq!(provenance.source_document, "docs/safety-risk/*-brief.md");
        assert_eq!(
            doc.get_path("content._generation_note").and_then(Value::as_str),
            Some(generation_note("safety-risk").as_str())
        );
    }

    #[test]
    fn generate_does_not_persist() {
        let store = Store::default();
        store.0.borrow_mut().insert(
            "risk-assessment.yaml".into(),
            ScdDocument::from_yaml("status: APPROVED\n").unwrap(),
        );
        let t = transposer(store);

        t.generate(&domain(), "risk-assessment.yaml", &brief()).unwrap();

        let stored = t.store.0.borrow();
        assert_eq!(
            stored["risk-assessment.yaml"].status().unwrap(),
            Some(ScdStatus::Approved)
        );
    }

    #[test]
    fn missing_or_empty_template_is_none() {
        let store = Store::default();
        store
            .0
            .borrow_mut()
            .insert("safety-checklist.yaml".into(), ScdDocument::new(Default::default()));
        let t = transposer(store);

        assert!(t
            .generate(&domain(), "risk-assessment.yaml", &brief())
            .unwrap()
            .is_none());
        assert!(t
            .generate(&domain(), "safety-checklist.yaml", &brief())
            .unwrap()
            .is_none());
    }

    #[test]
    fn run_counts_and_progress() {
        let store = Store::default();
        store.0.borrow_mut().insert(
            "risk-assessment.yaml".into(),
            ScdDocument::from_yaml("title: Risk\n").unwrap(),
        );
        let t = transposer(store);

        let mut out = Vec::new();
        let report = t.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!((report.generated, report.skipped, report.total), (1, 1, 2));
        assert!(text.contains("📁 Processing domain: safety-risk"));
        assert!(text.contains("   ✓ Loaded brief (16 chars)"));
        assert!(text.contains("  ✓ Generated: risk-assessment.yaml"));
        assert!(text.contains("Warning: No template found for safety-checklist.yaml"));
        assert!(text.contains("  ✗ Failed: safety-checklist.yaml"));
        assert!(text.contains("   Generated: 1/2 SCDs"));
        assert!(text.contains("   Skipped: 1 SCDs"));
        assert!(text.contains("  4. Create versioned bundle snapshot"));
    }

    #[test]
    fn rationale_and_note_name_domain() {
        assert_eq!(
            rationale("security", "2025-12-01"),
            "Generated from security brief approved 2025-12-01"
        );
        assert!(generation_note("security").starts_with(
            "This SCD was auto-generated from the security domain brief. In production,"
        ));
    }
}
