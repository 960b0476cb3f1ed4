use crate::core::account::Amount;

/// Decides whether a loan request is granted.
///
/// Accounts hold one policy for their whole lifetime; swap behaviour by
/// injecting a different policy rather than by wrapping the account.
pub trait ApprovalPolicy: Send + Sync {
    fn approve(&self, amount: Amount) -> bool;
}

/// Grants every request. This is what a fresh account uses.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AlwaysApprove;

impl ApprovalPolicy for AlwaysApprove {
    fn approve(&self, _amount: Amount) -> bool {
        true
    }
}

/// Grants requests up to and including `max`.
///
/// Opt-in only: an account never gets a ceiling unless one is injected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanCeiling {
    pub max: Amount
}

impl LoanCeiling {
    pub fn new(max: Amount) -> LoanCeiling {
        LoanCeiling { max }
    }
}

impl ApprovalPolicy for LoanCeiling {
    fn approve(&self, amount: Amount) -> bool {
        amount <= self.max
    }
}

impl<F> ApprovalPolicy for F
where
    F: Fn(Amount) -> bool + Send + Sync
{
    fn approve(&self, amount: Amount) -> bool {
        self(amount)
    }
}


#[cfg(test)]
mod tests {
    use super::{ApprovalPolicy, AlwaysApprove, LoanCeiling};
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(1000.0)]
    #[case(-50.0)]
    #[case(f64::MAX)]
    fn always_approve_grants_anything(#[case] amount: f64) {
        assert!(AlwaysApprove.approve(amount));
    }

    #[rstest]
    #[case(4999.0, true)]
    #[case(5000.0, true)]
    #[case(5000.5, false)]
    #[case(25000.0, false)]
    fn ceiling_is_inclusive(#[case] amount: f64, #[case] granted: bool) {
        let policy = LoanCeiling::new(5000.0);
        assert_eq!(policy.approve(amount), granted);
    }

    #[test]
    fn closures_are_policies() {
        let even_hundreds = |amount: f64| amount % 100.0 == 0.0;
        assert!(even_hundreds.approve(300.0));
        assert!(!even_hundreds.approve(350.0));

        let boxed: Box<dyn ApprovalPolicy> = Box::new(|_: f64| false);
        assert!(!boxed.approve(1.0));
    }
}
