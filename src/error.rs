// ⚠️ Account Errors - Typed rejections
//
// Display strings are the exact console diagnostics the boolean
// operations print when they reject a request.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// Opening balance under the policy minimum (account still opens at 0.00)
    #[error("Account Warning: Initial balance invalid (set to $0.00).")]
    InitialBalanceRejected { requested: Decimal, minimum: Decimal },

    /// Base debit rule: non-positive amount or more than the balance
    #[error("Debit amount exceeded account balance or is invalid.")]
    DebitRejected { amount: Decimal, balance: Decimal },

    /// Chequing debit rule: amount + fee over the balance, or non-positive amount
    #[error("Chequing Debit Failed: Insufficient funds or invalid amount.")]
    ChequingDebitRejected {
        amount: Decimal,
        fee: Decimal,
        balance: Decimal,
    },

    #[error("Deposit amount must be positive: {amount}")]
    InvalidDeposit { amount: Decimal },

    #[error("Invalid account policy: {0}")]
    Config(String),
}

pub type AccountResult<T> = Result<T, AccountError>;

impl AccountError {
    /// True for both debit rules (base and chequing)
    pub fn is_debit_rejection(&self) -> bool {
        matches!(
            self,
            AccountError::DebitRejected { .. } | AccountError::ChequingDebitRejected { .. }
        )
    }
}

impl From<serde_json::Error> for AccountError {
    fn from(err: serde_json::Error) -> Self {
        AccountError::Config(err.to_string())
    }
}
