// Bank Accounts - Core Library
// Exposes the account model and the driver script for the CLI and tests

pub mod config;
pub mod entities;
pub mod error;
pub mod money;
pub mod script;

// Re-export commonly used types
pub use config::AccountPolicy;
pub use entities::{
    Account, AccountKind, AccountSnapshot, BankAccount, Debit,
    SavingsAccount, ChequingAccount,
};
pub use error::{AccountError, AccountResult};
pub use money::format_usd;
pub use script::ScriptSummary;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
