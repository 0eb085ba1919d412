//! The virtual currency balance.
//!
//! A single non-negative integer: session rewards and project bonuses credit
//! it, penalties and slot upgrades debit it. Debits floor at zero rather
//! than going negative. Persisted as a small JSON blob at `currency.json`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::StoreError;

const CURRENCY_FILE: &str = "currency.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrencyLedger {
    balance: u64,
}

impl CurrencyLedger {
    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn credit(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Remove currency, flooring at zero.
    pub fn debit(&mut self, amount: u64) {
        self.balance = self.balance.saturating_sub(amount);
    }

    /// Load from the default data directory; a missing file is an empty
    /// balance.
    pub fn load() -> Result<Self, StoreError> {
        Self::load_from(Self::path()?)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(_) => Ok(Self::default()),
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
        Ok(data_dir()?.join(CURRENCY_FILE))
    }
}
