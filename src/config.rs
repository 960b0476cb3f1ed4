use std::{fs, path::Path};
use serde::{Serialize, Deserialize};
use anyhow::{self, Context};

use crate::core::{Account, Amount, ApprovalPolicy, AlwaysApprove, LoanCeiling};
use crate::core::account::DEFAULT_LOCALE;

/// Settings applied to accounts opened from the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    pub locale: String,
    /// Largest loan that will be approved. Unlimited when absent.
    pub max_loan: Option<Amount>
}

impl Default for BankConfig {
    fn default() -> Self {
        BankConfig { locale: DEFAULT_LOCALE.to_owned(), max_loan: None }
    }
}

impl BankConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        let config = toml::from_str(&file_content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }

    pub fn policy(&self) -> Box<dyn ApprovalPolicy> {
        match self.max_loan {
            Some(max) => Box::new(LoanCeiling::new(max)),
            None => Box::new(AlwaysApprove)
        }
    }

    pub fn open_account(&self, owner: &str, currency: &str, pin: u32) -> Account {
        Account::new(owner, currency, pin)
            .with_locale(&self.locale)
            .with_boxed_policy(self.policy())
    }
}
