// 🏦 Savings Account - Interest-bearing account
//
// Withdrawals follow the base rule. Interest is computed on demand and
// only affects the balance once the caller deposits it.

use rust_decimal::Decimal;
use std::io::{self, Write};

use super::account::{Account, AccountKind, BankAccount};
use crate::config::AccountPolicy;

#[derive(Debug, Clone)]
pub struct SavingsAccount {
    core: Account,

    /// Decimal fraction (0.045 = 4.5%), accepted as given
    interest_rate: Decimal,
}

impl SavingsAccount {
    pub fn new(initial_balance: Decimal, interest_rate: Decimal) -> Self {
        Self::new_to(initial_balance, interest_rate, &mut io::stdout().lock())
    }

    pub fn new_to(initial_balance: Decimal, interest_rate: Decimal, out: &mut dyn Write) -> Self {
        Self::new_with(initial_balance, interest_rate, &AccountPolicy::default(), out)
    }

    pub fn new_with(
        initial_balance: Decimal,
        interest_rate: Decimal,
        policy: &AccountPolicy,
        out: &mut dyn Write,
    ) -> Self {
        SavingsAccount {
            core: Account::new_with(initial_balance, policy, out),
            interest_rate,
        }
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Interest on the current balance (`balance * rate`); does not mutate
    pub fn calculate_interest(&self) -> Decimal {
        self.core.balance() * self.interest_rate
    }
}

impl BankAccount for SavingsAccount {
    fn core(&self) -> &Account {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Account {
        &mut self.core
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Savings
    }
}
