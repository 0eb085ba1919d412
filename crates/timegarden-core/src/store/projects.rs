//! The project ledger: names, statuses, and accrued work seconds.
//!
//! Projects are never deleted, only status-transitioned. Slots gate how many
//! active projects can exist at once; slot upgrades are bought with currency.
//! The whole store round-trips through a single JSON blob at
//! `projects.json` in the data directory.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::currency::CurrencyLedger;
use super::data_dir;
use crate::error::StoreError;

/// Currency credited when a project is created.
pub const ADDED_PROJECT_VALUE: u64 = 10;
/// Currency forfeited when a project is abandoned.
pub const ABANDONED_PROJECT_COST: u64 = 10;

const PROJECTS_FILE: &str = "projects.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Abandoned,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub status: ProjectStatus,
    /// Accrued work time; overwritten (never incremented) by the session
    /// engine while a work stage runs.
    pub total_seconds_spent: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectStore {
    projects: Vec<Project>,
    max_projects: usize,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            max_projects: 1,
        }
    }

    // ── Persistence ──────────────────────────────────────────────────

    /// Load from the default data directory, falling back to an empty store
    /// when no file exists yet.
    pub fn load() -> Result<Self, StoreError> {
        Self::load_from(Self::path()?)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(_) => Ok(Self::new()),
        }
    }

    pub fn save(&self) -> Result<(), StoreError> {
        self.save_to(Self::path()?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    fn path() -> Result<PathBuf, StoreError> {
        Ok(data_dir()?.join(PROJECTS_FILE))
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn active_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
    }

    pub fn max_projects(&self) -> usize {
        self.max_projects
    }

    /// Price of the next slot: `(max_projects + 1) * 10`.
    pub fn slot_upgrade_cost(&self) -> u64 {
        (self.max_projects as u64 + 1) * 10
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Create a project in an open slot. Credits the ledger for starting
    /// something new.
    pub fn add(&mut self, name: &str, ledger: &mut CurrencyLedger) -> Result<&Project, StoreError> {
        if self.active_projects().count() >= self.max_projects {
            return Err(StoreError::SlotsFull {
                max: self.max_projects,
            });
        }
        let idx = self.projects.len();
        self.projects.push(Project {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            status: ProjectStatus::Active,
            total_seconds_spent: 0,
            created_at: Utc::now(),
        });
        ledger.credit(ADDED_PROJECT_VALUE);
        Ok(&self.projects[idx])
    }

    /// Give up on a project. The penalty debits the ledger, flooring at zero.
    pub fn abandon(&mut self, id: &str, ledger: &mut CurrencyLedger) -> Result<(), StoreError> {
        self.get_mut(id)?.status = ProjectStatus::Abandoned;
        ledger.debit(ABANDONED_PROJECT_COST);
        Ok(())
    }

    pub fn complete(&mut self, id: &str) -> Result<(), StoreError> {
        self.get_mut(id)?.status = ProjectStatus::Completed;
        Ok(())
    }

    pub fn rename(&mut self, id: &str, name: &str) -> Result<(), StoreError> {
        self.get_mut(id)?.name = name.to_string();
        Ok(())
    }

    /// Overwrite a project's accrued seconds. Idempotent: the session engine
    /// always passes the full new total, never an increment. Unknown ids are
    /// ignored; the engine treats a vanished subject as an invalidation.
    pub fn record_total_seconds(&mut self, id: &str, total_seconds: u64) {
        if let Some(project) = self.projects.iter_mut().find(|p| p.id == id) {
            project.total_seconds_spent = total_seconds;
        }
    }

    /// Buy one more project slot with currency.
    pub fn upgrade_slots(&mut self, ledger: &mut CurrencyLedger) -> Result<(), StoreError> {
        let cost = self.slot_upgrade_cost();
        if ledger.balance() < cost {
            return Err(StoreError::CannotAfford {
                cost,
                balance: ledger.balance(),
            });
        }
        ledger.debit(cost);
        self.max_projects += 1;
        Ok(())
    }

    /// Merge an exported project list into this store, skipping ids already
    /// present and widening the slot count to fit the imported active
    /// projects. Returns how many projects were added.
    pub fn merge_imported(&mut self, incoming: Vec<Project>) -> usize {
        let mut added = 0;
        for project in incoming {
            if self.get(&project.id).is_none() {
                self.projects.push(project);
                added += 1;
            }
        }
        let active = self.active_projects().count();
        if active > self.max_projects {
            self.max_projects = active;
        }
        added
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Project, StoreError> {
        self.projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::UnknownProject(id.to_string()))
    }
}
