use serde::{Serialize, Deserialize};

use crate::core::{Account, Amount};

/// Read-only copy of an account's public state. The pin is never included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub owner: String,
    pub currency: String,
    pub locale: String,
    pub movements: Vec<Amount>
}

impl From<&Account> for Statement {
    fn from(account: &Account) -> Self {
        Statement {
            owner: account.owner().to_owned(),
            currency: account.currency().to_owned(),
            locale: account.locale().to_owned(),
            movements: account.movements().to_vec()
        }
    }
}

impl Statement {
    pub fn deposits(&self) -> impl Iterator<Item = Amount> + '_ {
        self.movements.iter().copied().filter(|amount| *amount > 0.0)
    }

    pub fn withdrawals(&self) -> impl Iterator<Item = Amount> + '_ {
        self.movements.iter().copied().filter(|amount| *amount < 0.0)
    }
}
