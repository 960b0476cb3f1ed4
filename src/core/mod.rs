pub mod account;
pub mod policy;
pub mod shared;
pub mod operation;
pub mod error;

pub use account::{Account, Amount, Pin};
pub use policy::{ApprovalPolicy, AlwaysApprove, LoanCeiling};
pub use shared::SharedAccount;
pub use operation::Operation;
pub use error::{OperationError, OperationResult};
