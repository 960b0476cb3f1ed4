use std::fmt;
use std::str::FromStr;

use crate::core::account::{Account, Amount};
use crate::core::error::{OperationError, OperationResult};

/// One account mutation in textual form, e.g. `deposit=250`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Operation {
    Deposit(Amount),
    Withdraw(Amount),
    Loan(Amount)
}

impl Operation {
    pub fn apply<'a>(&self, account: &'a mut Account) -> &'a mut Account {
        match *self {
            Self::Deposit(amount) => account.deposit(amount),
            Self::Withdraw(amount) => account.withdraw(amount),
            Self::Loan(amount) => account.request_loan(amount)
        }
    }

    /// Applies each operation in order.
    pub fn apply_all<'a>(operations: &[Operation], account: &'a mut Account) -> &'a mut Account {
        operations.iter().fold(account, |account, op| op.apply(account))
    }
}

impl FromStr for Operation {
    type Err = OperationError;

    fn from_str(s: &str) -> OperationResult<Self> {
        let (kind, raw_amount) = match s.split_once('=') {
            Some((kind, raw_amount)) => (kind, raw_amount.trim()),
            None => (s, "")
        };

        let build: fn(Amount) -> Operation = match kind.trim().to_ascii_lowercase().as_str() {
            "deposit" => Self::Deposit,
            "withdraw" => Self::Withdraw,
            "loan" => Self::Loan,
            other => return Err(OperationError::UnknownKind(other.to_owned()))
        };

        if raw_amount.is_empty() {
            return Err(OperationError::MissingAmount(s.to_owned()));
        }

        let amount: Amount = raw_amount.parse()
            .map_err(|source| OperationError::InvalidAmount { input: raw_amount.to_owned(), source })?;
        return Ok(build(amount));
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit(amount) => write!(f, "deposit={}", amount),
            Self::Withdraw(amount) => write!(f, "withdraw={}", amount),
            Self::Loan(amount) => write!(f, "loan={}", amount)
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::core::{Account, LoanCeiling, Operation, OperationError};
    use rstest::rstest;

    #[rstest]
    #[case("deposit=250", Operation::Deposit(250.0))]
    #[case("withdraw=140", Operation::Withdraw(140.0))]
    #[case("loan=1000", Operation::Loan(1000.0))]
    #[case("Deposit = 12.5", Operation::Deposit(12.5))]
    #[case("WITHDRAW=-3", Operation::Withdraw(-3.0))]
    fn parses(#[case] input: &str, #[case] expected: Operation) {
        assert_eq!(input.parse::<Operation>().unwrap(), expected);
    }

    #[rstest]
    #[case("transfer=10")]
    #[case("transfer=abc")]
    #[case("Transfer")]
    fn unknown_kind(#[case] input: &str) {
        let res = input.parse::<Operation>();
        assert!(matches!(res, Err(OperationError::UnknownKind(kind)) if kind == "transfer"));
    }

    #[rstest]
    #[case("deposit")]
    #[case("deposit=")]
    #[case("loan=  ")]
    fn missing_amount(#[case] input: &str) {
        let res = input.parse::<Operation>();
        assert!(matches!(res, Err(OperationError::MissingAmount(..))));
    }

    #[test]
    fn invalid_amount() {
        let err = "deposit=lots".parse::<Operation>().unwrap_err();
        assert!(matches!(&err, OperationError::InvalidAmount { input, .. } if input == "lots"));
        assert!(err.to_string().starts_with("invalid amount \"lots\""));
    }

    #[test]
    fn display_parses_back() {
        let op = Operation::Withdraw(35.0);
        assert_eq!(op.to_string(), "withdraw=35");
        assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
    }

    #[test]
    fn replays_jonas_scenario() {
        let ops: Vec<Operation> = ["deposit=250", "withdraw=140", "deposit=350", "deposit=100", "loan=1000"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        let mut account = Account::new("Jonas", "EUR", 1111);
        Operation::apply_all(&ops, &mut account);

        assert_eq!(account.movements(), &[250.0, -140.0, 350.0, 100.0, 1000.0]);
    }

    #[test]
    fn refused_loan_operation_keeps_chain() {
        let mut account = Account::new("Jonas", "EUR", 1111).with_policy(LoanCeiling::new(10.0));
        Operation::Loan(50.0).apply(&mut account).deposit(1.0);
        assert_eq!(account.movements(), &[1.0]);
    }
}
