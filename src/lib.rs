mod core;
pub mod config;
pub mod statement;

pub use crate::core::{Account, Amount, Pin, SharedAccount, Operation, OperationError};
pub use crate::core::{ApprovalPolicy, AlwaysApprove, LoanCeiling};
pub use crate::core::{account, policy, shared, operation, error};
pub use crate::config::BankConfig;
pub use crate::statement::Statement;
