//! Testing utilities for SCS workspace
//!
//! Shared fixtures: a throwaway project tree, a frozen clock, an in-memory
//! SCD store that records every access, and a small catalogue.

#![allow(missing_docs)]

use chrono::{DateTime, TimeZone, Utc};
use scs_artifact::{ContentHash, ScdDocument};
use scs_constitutional::{SaveReceipt, ScdStore, StoreResult};
use scs_core::{Catalog, Clock, DomainConfig, TransposerConfig};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Clock stuck at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        Self(Utc.with_ymd_and_hms(year, month, day, hour, min, sec).unwrap())
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::at(2026, 10, 19, 9, 0, 0)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// In-memory SCD store that logs loads and saves
#[derive(Debug, Default)]
pub struct RecordingStore {
    documents: RefCell<HashMap<String, ScdDocument>>,
    loads: RefCell<Vec<String>>,
    saves: RefCell<Vec<String>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(self, name: &str, yaml: &str) -> Self {
        self.documents
            .borrow_mut()
            .insert(name.to_string(), ScdDocument::from_yaml(yaml).unwrap());
        self
    }

    pub fn document(&self, name: &str) -> Option<ScdDocument> {
        self.documents.borrow().get(name).cloned()
    }

    pub fn loads(&self) -> Vec<String> {
        self.loads.borrow().clone()
    }

    pub fn saves(&self) -> Vec<String> {
        self.saves.borrow().clone()
    }

    pub fn touched(&self, name: &str) -> bool {
        self.loads.borrow().iter().any(|n| n == name)
            || self.saves.borrow().iter().any(|n| n == name)
    }
}

impl ScdStore for RecordingStore {
    fn load(&self, name: &str) -> StoreResult<Option<ScdDocument>> {
        self.loads.borrow_mut().push(name.to_string());
        Ok(self.documents.borrow().get(name).cloned())
    }

    fn save(&self, name: &str, document: &ScdDocument) -> StoreResult<SaveReceipt> {
        self.saves.borrow_mut().push(name.to_string());
        let yaml = document.to_yaml().unwrap();
        self.documents
            .borrow_mut()
            .insert(name.to_string(), document.clone());
        Ok(SaveReceipt {
            path: PathBuf::from(name),
            bytes: yaml.len(),
            hash: ContentHash::compute(yaml.as_bytes()),
        })
    }
}

/// Two-domain catalogue
///
/// - `safety-risk`: `risk-assessment.yaml`, `safety-checklist.yaml`
/// - `security`: `threat-model.yaml` (manually managed), `authn-authz.yaml`
pub fn fixture_catalog() -> Catalog {
    Catalog::new(vec![
        DomainConfig::new(
            "safety-risk",
            "james.rodriguez@example.com",
            "safety-risk/safety-and-risk-brief.md",
        )
        .with_output("risk-assessment.yaml")
        .with_output("safety-checklist.yaml"),
        DomainConfig::new(
            "security",
            "priya.patel@example.com",
            "security/security-context-brief.md",
        )
        .with_manual_output("threat-model.yaml")
        .with_output("authn-authz.yaml"),
    ])
}

/// Project tree on disk (`docs/`, `context/project/`) removed on drop
pub struct TempProject {
    dir: TempDir,
}

impl TempProject {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(scs_core::DOCS_DIR)).unwrap();
        std::fs::create_dir_all(dir.path().join(scs_core::CONTEXT_DIR)).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self, catalog: Catalog) -> TransposerConfig {
        TransposerConfig::for_project(self.root()).with_catalog(catalog)
    }

    pub fn brief_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root().join(scs_core::DOCS_DIR).join(relative)
    }

    pub fn scd_path(&self, name: &str) -> PathBuf {
        self.root().join(scs_core::CONTEXT_DIR).join(name)
    }

    pub fn write_brief(&self, relative: impl AsRef<Path>, text: &str) -> &Self {
        let path = self.brief_path(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, text).unwrap();
        self
    }

    pub fn write_template(&self, name: &str, yaml: &str) -> &Self {
        std::fs::write(self.scd_path(name), yaml).unwrap();
        self
    }

    pub fn read_scd(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.scd_path(name)).ok()
    }

    pub fn load_scd(&self, name: &str) -> Option<ScdDocument> {
        self.read_scd(name)
            .map(|yaml| ScdDocument::from_yaml(&yaml).unwrap())
    }
}

impl Default for TempProject {
    fn default() -> Self {
        Self::new()
    }
}
