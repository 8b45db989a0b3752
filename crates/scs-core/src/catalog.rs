//! Domain catalogue
//!
//! The built-in catalogue covers the eleven approved domain briefs and the
//! 38 SCDs they feed. A catalogue can also be loaded from YAML:
//!
//! ```yaml
//! domains:
//!   - name: safety-risk
//!     owner: james.rodriguez@example.com
//!     brief: safety-risk/safety-and-risk-brief.md
//!     outputs:
//!       - name: risk-assessment.yaml
//!       - name: safety-checklist.yaml
//!         manually_managed: true
//! ```

use crate::error::ConfigError;
use crate::types::DomainConfig;
use scs_constitutional::{BriefParser, DocumentParser, ScdParser};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Identity recorded as `last_updated_by`
pub const DEFAULT_AGENT: &str = "AI Transposer Script";
/// Brief approval date quoted in the provenance rationale
pub const DEFAULT_APPROVAL_DATE: &str = "2025-12-01";

fn default_agent() -> String {
    DEFAULT_AGENT.to_string()
}

fn default_approval_date() -> String {
    DEFAULT_APPROVAL_DATE.to_string()
}

/// Ordered set of domains plus the stamping constants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Recorded as `last_updated_by`
    #[serde(default = "default_agent")]
    pub agent: String,
    /// Quoted in the rationale
    #[serde(default = "default_approval_date")]
    pub approval_date: String,
    /// Domains in processing order
    pub domains: Vec<DomainConfig>,
}

impl Catalog {
    /// Catalogue with default stamping constants
    #[must_use]
    pub fn new(domains: Vec<DomainConfig>) -> Self {
        Self {
            agent: default_agent(),
            approval_date: default_approval_date(),
            domains,
        }
    }

    /// Parse and validate from YAML text
    ///
    /// # Errors
    /// Returns error on invalid YAML or a catalogue that fails [`validate`](Self::validate)
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let catalog: Self = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read, parse and validate a YAML catalogue file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is invalid
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// Number of SCDs the catalogue expects, manual ones included
    #[must_use]
    pub fn total_outputs(&self) -> usize {
        self.domains.iter().map(|d| d.outputs.len()).sum()
    }

    /// Domain by name
    #[must_use]
    pub fn domain(&self, name: &str) -> Option<&DomainConfig> {
        self.domains.iter().find(|d| d.name == name)
    }

    /// Check structural rules
    ///
    /// # Errors
    /// - duplicate domain names
    /// - empty owners
    /// - absolute or non-Markdown brief paths
    /// - output names that are empty, contain a path separator, or are not YAML
    /// - one output claimed by two domains
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut domains: HashSet<&str> = HashSet::new();
        let mut outputs: HashMap<&str, &str> = HashMap::new();

        for domain in &self.domains {
            if !domains.insert(domain.name.as_str()) {
                return Err(ConfigError::DuplicateDomain(domain.name.clone()));
            }
            if domain.owner.trim().is_empty() {
                return Err(ConfigError::EmptyOwner(domain.name.clone()));
            }
            if domain.brief.is_absolute() {
                return Err(ConfigError::AbsoluteBriefPath {
                    domain: domain.name.clone(),
                    path: domain.brief.clone(),
                });
            }
            if !BriefParser.can_parse(&domain.brief) {
                return Err(ConfigError::UnsupportedBrief {
                    domain: domain.name.clone(),
                    path: domain.brief.clone(),
                });
            }

            for output in &domain.outputs {
                let name = output.name.as_str();
                if name.is_empty() || name.contains(['/', '\\']) {
                    return Err(ConfigError::InvalidOutputName {
                        domain: domain.name.clone(),
                        name: output.name.clone(),
                    });
                }
                if !ScdParser.can_parse(Path::new(name)) {
                    return Err(ConfigError::UnsupportedOutput {
                        domain: domain.name.clone(),
                        name: output.name.clone(),
                    });
                }
                if let Some(first) = outputs.insert(name, domain.name.as_str()) {
                    return Err(ConfigError::DuplicateOutput {
                        name: output.name.clone(),
                        first: first.to_string(),
                        second: domain.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// The eleven approved domains
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            DomainConfig::new(
                "business-context",
                "sarah.chen@example.com",
                "business-context/business-context-opportunity-requirements-brief.md",
            )
            .with_manual_output("problem-definition.yaml")
            .with_manual_output("stakeholders.yaml")
            .with_output("business-objectives.yaml")
            .with_output("opportunity-analysis.yaml")
            .with_output("constraints-and-assumptions.yaml")
            .with_output("success-criteria.yaml"),
            DomainConfig::new(
                "architecture",
                "david.kim@example.com",
                "architecture/architecture-context-tech-brief.med-adherence.md",
            )
            .with_output("system-context.yaml")
            .with_output("tech-stack.yaml")
            .with_output("component-model.yaml")
            .with_output("integration-map.yaml"),
            DomainConfig::new(
                "security",
                "priya.patel@example.com",
                "security/security-context-brief.md",
            )
            .with_output("authn-authz.yaml")
            .with_output("data-protection.yaml")
            .with_output("data-handling.yaml")
            .with_output("threat-model.yaml"),
            DomainConfig::new(
                "compliance-governance",
                "james.rodriguez@example.com",
                "compliance-governance/compliance-and-governance-brief.md",
            )
            .with_output("hipaa-compliance.yaml")
            .with_output("soc2-controls.yaml")
            .with_output("chai-adherence.yaml")
            .with_output("tefca-participation.yaml"),
            DomainConfig::new(
                "data-provenance",
                "david.kim@example.com",
                "data-provenance/data-and-provenance.md",
            )
            .with_output("data-model.yaml")
            .with_output("provenance-tracking.yaml")
            .with_output("retention-policy.yaml"),
            DomainConfig::new(
                "deployment-operations",
                "david.kim@example.com",
                "deployment-operations/deployment-and-operations-brief.md",
            )
            .with_output("infrastructure-definition.yaml")
            .with_output("observability.yaml")
            .with_output("incident-response.yaml"),
            DomainConfig::new(
                "performance-reliability",
                "david.kim@example.com",
                "performance-reliability/performance-and-reliability-brief.md",
            )
            .with_output("response-time.yaml")
            .with_output("availability.yaml")
            .with_output("scalability.yaml")
            .with_output("fault-tolerance.yaml"),
            DomainConfig::new(
                "ethics-ai-accountability",
                "sarah.chen@example.com",
                "ethics-ai-accountability/ethics-and-ai-accountability-brief.md",
            )
            .with_output("ai-usage-policy.yaml")
            .with_output("model-bias.yaml")
            .with_output("audit-trail.yaml"),
            DomainConfig::new(
                "safety-risk",
                "james.rodriguez@example.com",
                "safety-risk/safety-and-risk-brief.md",
            )
            .with_output("risk-assessment.yaml")
            .with_output("safety-checklist.yaml"),
            DomainConfig::new(
                "testing-validation",
                "aisha.williams@example.com",
                "testing-validation/testing-and-validation-brief.md",
            )
            .with_output("test-coverage.yaml")
            .with_output("validation-plan.yaml")
            .with_output("qa-procedures.yaml"),
            DomainConfig::new(
                "usability-accessibility",
                "marcus.johnson@example.com",
                "usability-accessibility/usability-and-accessibility-brief.md",
            )
            .with_output("ux-principles.yaml")
            .with_output("accessibility-compliance.yaml")
            .with_output("error-handling-ux.yaml"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.domains.len(), 11);
        assert_eq!(catalog.total_outputs(), 38);
        assert!(catalog.validate().is_ok());

        let manual: Vec<_> = catalog
            .domains
            .iter()
            .flat_map(|d| &d.outputs)
            .filter(|o| o.manually_managed)
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(manual, ["problem-definition.yaml", "stakeholders.yaml"]);
    }

    #[test]
    fn builtin_owner_lookup() {
        let catalog = Catalog::builtin();
        let domain = catalog.domain("safety-risk").unwrap();
        assert_eq!(domain.owner, "james.rodriguez@example.com");
        assert_eq!(domain.outputs.len(), 2);
        assert!(catalog.domain("marketing").is_none());
    }

    #[test]
    fn yaml_catalogue_with_defaults() {
        let catalog = Catalog::from_yaml(
            r"
domains:
  - name: safety-risk
    owner: james.rodriguez@example.com
    brief: safety-risk/safety-and-risk-brief.md
    outputs:
      - name: risk-assessment.yaml
      - name: safety-checklist.yaml
        manually_managed: true
",
        )
        .unwrap();
        assert_eq!(catalog.agent, DEFAULT_AGENT);
        assert_eq!(catalog.approval_date, DEFAULT_APPROVAL_DATE);
        assert_eq!(catalog.total_outputs(), 2);
        assert!(catalog.domains[0].outputs[1].manually_managed);
    }

    #[test]
    fn rejects_duplicate_domain() {
        let catalog = Catalog::new(vec![
            DomainConfig::new("a", "o", "a/brief.md"),
            DomainConfig::new("a", "o", "a/other-brief.md"),
        ]);
        assert!(matches!(
            catalog.validate(),
            Err(ConfigError::DuplicateDomain(name)) if name == "a"
        ));
    }

    #[test]
    fn rejects_empty_owner() {
        let catalog = Catalog::new(vec![DomainConfig::new("a", "  ", "a/brief.md")]);
        assert!(matches!(catalog.validate(), Err(ConfigError::EmptyOwner(_))));
    }

    #[test]
    fn rejects_path_in_output_name() {
        let catalog = Catalog::new(vec![
            DomainConfig::new("a", "o", "a/brief.md").with_output("../escape.yaml")
        ]);
        assert!(matches!(
            catalog.validate(),
            Err(ConfigError::InvalidOutputName { .. })
        ));
    }

    #[test]
    fn rejects_shared_output() {
        let catalog = Catalog::new(vec![
            DomainConfig::new("a", "o", "a/brief.md").with_output("x.yaml"),
            DomainConfig::new("b", "o", "b/brief.md").with_output("x.yaml"),
        ]);
        assert!(matches!(
            catalog.validate(),
            Err(ConfigError::DuplicateOutput { ref first, ref second, .. })
                if first == "a" && second == "b"
        ));
    }

    #[test]
    fn rejects_non_yaml_output() {
        let catalog = Catalog::new(vec![
            DomainConfig::new("a", "o", "a/a-brief.md").with_output("notes.json")
        ]);
        assert!(matches!(
            catalog.validate(),
            Err(ConfigError::UnsupportedOutput { ref name, .. }) if name == "notes.json"
        ));
    }

    #[test]
    fn rejects_non_markdown_brief() {
        let catalog = Catalog::new(vec![
            DomainConfig::new("a", "o", "a/a-brief.txt").with_output("x.yml")
        ]);
        assert!(matches!(
            catalog.validate(),
            Err(ConfigError::UnsupportedBrief { .. })
        ));
    }

    #[test]
    fn rejects_absolute_brief() {
        let catalog = Catalog::new(vec![DomainConfig::new("a", "o", "/etc/brief.md")]);
        assert!(matches!(
            catalog.validate(),
            Err(ConfigError::AbsoluteBriefPath { .. })
        ));
    }
}
