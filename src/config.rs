// ⚙️ Account Policy - Opening balance rules as data

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AccountResult;

/// Rules applied when an account is opened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountPolicy {
    /// Smallest accepted opening balance; anything lower opens at 0.00
    #[serde(default = "default_minimum_opening_balance")]
    pub minimum_opening_balance: Decimal,
}

fn default_minimum_opening_balance() -> Decimal {
    Decimal::new(100_000, 2)
}

impl Default for AccountPolicy {
    fn default() -> Self {
        AccountPolicy {
            minimum_opening_balance: default_minimum_opening_balance(),
        }
    }
}

impl AccountPolicy {
    /// Parse a policy from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> AccountResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn accepts_opening(&self, initial_balance: Decimal) -> bool {
        initial_balance >= self.minimum_opening_balance
    }
}
