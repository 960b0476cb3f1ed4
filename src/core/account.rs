use std::fmt;

use tracing::{debug, info};

use crate::core::policy::{ApprovalPolicy, AlwaysApprove};

pub type Amount = f64;

pub const DEFAULT_LOCALE: &str = "en-US";

/// Access credential held by an account. Never compared and never shown.
pub struct Pin(pub u32);

impl From<u32> for Pin {
    fn from(value: u32) -> Self {
        Pin(value)
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pin(****)")
    }
}

/// A single owner's account with a private, append-only ledger.
///
/// Every mutator returns the account it was called on, so calls chain:
///
/// ```
/// use bankist::Account;
///
/// let mut account = Account::new("Jonas", "EUR", 1111);
/// account.deposit(250.0).withdraw(140.0).request_loan(1000.0);
/// assert_eq!(account.movements(), &[250.0, -140.0, 1000.0]);
/// ```
pub struct Account {
    owner: String,
    currency: String,
    locale: String,
    pin: Pin,
    movements: Vec<Amount>,
    policy: Box<dyn ApprovalPolicy>
}

impl Account {
    pub fn new(owner: &str, currency: &str, pin: u32) -> Account {
        info!("Thanks for opening an account, {}", owner);

        return Account {
            owner: owner.to_owned(),
            currency: currency.to_owned(),
            locale: DEFAULT_LOCALE.to_owned(),
            pin: Pin::from(pin),
            movements: Vec::new(),
            policy: Box::new(AlwaysApprove)
        };
    }

    /// Replaces the loan approval policy.
    pub fn with_policy(self, policy: impl ApprovalPolicy + 'static) -> Account {
        self.with_boxed_policy(Box::new(policy))
    }

    pub fn with_boxed_policy(mut self, policy: Box<dyn ApprovalPolicy>) -> Account {
        self.policy = policy;
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Account {
        self.locale = locale.to_owned();
        self
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Full transaction history in the order it happened.
    ///
    /// The slice borrows the account, so the ledger cannot be changed
    /// through it. Use `to_vec()` for an owned snapshot.
    pub fn movements(&self) -> &[Amount] {
        &self.movements
    }

    /// Most recent movement, if any.
    pub fn latest(&self) -> Option<Amount> {
        self.movements.last().copied()
    }

    /// Appends `amount` as given. Negative amounts are accepted.
    pub fn deposit(&mut self, amount: Amount) -> &mut Account {
        self.movements.push(amount);
        self
    }

    /// Records `-amount`. No funds check is made.
    pub fn withdraw(&mut self, amount: Amount) -> &mut Account {
        self.deposit(-amount)
    }

    pub(crate) fn approve_loan(&self, amount: Amount) -> bool {
        self.policy.approve(amount)
    }

    /// Deposits `amount` when the policy approves it. A refused request
    /// leaves the ledger untouched.
    pub fn request_loan(&mut self, amount: Amount) -> &mut Account {
        if self.approve_loan(amount) {
            self.deposit(amount);
            info!("Loan approved");
        } else {
            debug!("Loan of {} refused for {}", amount, self.owner);
        }
        self
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): [", self.owner, self.currency)?;
        for (idx, amount) in self.movements.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", amount)?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("owner", &self.owner)
            .field("currency", &self.currency)
            .field("locale", &self.locale)
            .field("pin", &self.pin)
            .field("movements", &self.movements)
            .finish_non_exhaustive()
    }
}
