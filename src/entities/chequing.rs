// 🧾 Chequing Account - Flat fee per successful withdrawal
//
// Overrides the debit rule: the fee is added to the amount and the
// whole total must be covered. A rejected debit never charges the fee.

use rust_decimal::Decimal;
use std::io::{self, Write};

use super::account::{Account, AccountKind, BankAccount, Debit};
use crate::config::AccountPolicy;
use crate::error::{AccountError, AccountResult};

#[derive(Debug, Clone)]
pub struct ChequingAccount {
    core: Account,

    /// Charged on every successful withdrawal, accepted as given
    transaction_fee: Decimal,
}

impl ChequingAccount {
    pub fn new(initial_balance: Decimal, transaction_fee: Decimal) -> Self {
        Self::new_to(initial_balance, transaction_fee, &mut io::stdout().lock())
    }

    pub fn new_to(initial_balance: Decimal, transaction_fee: Decimal, out: &mut dyn Write) -> Self {
        Self::new_with(initial_balance, transaction_fee, &AccountPolicy::default(), out)
    }

    pub fn new_with(
        initial_balance: Decimal,
        transaction_fee: Decimal,
        policy: &AccountPolicy,
        out: &mut dyn Write,
    ) -> Self {
        ChequingAccount {
            core: Account::new_with(initial_balance, policy, out),
            transaction_fee,
        }
    }

    pub fn transaction_fee(&self) -> Decimal {
        self.transaction_fee
    }
}

impl BankAccount for ChequingAccount {
    fn core(&self) -> &Account {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Account {
        &mut self.core
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Chequing
    }

    /// Fails when `amount + fee > balance` or `amount <= 0`
    fn debit(&mut self, amount: Decimal) -> AccountResult<Debit> {
        let balance = self.core.balance();
        let total = amount + self.transaction_fee;

        if total > balance || amount <= Decimal::ZERO {
            tracing::info!(
                account = %self.core.id,
                %amount,
                fee = %self.transaction_fee,
                %balance,
                "chequing debit rejected"
            );
            return Err(AccountError::ChequingDebitRejected {
                amount,
                fee: self.transaction_fee,
                balance,
            });
        }

        let balance_after = balance - total;
        self.core.set_balance(balance_after);
        tracing::debug!(
            account = %self.core.id,
            %amount,
            fee = %self.transaction_fee,
            balance = %balance_after,
            "chequing debit"
        );

        Ok(Debit {
            amount,
            fee: Some(self.transaction_fee),
            balance_after,
        })
    }
}
