// 💳 Account Entity - Base balance holder + the BankAccount trait
//
// Account is the shared core every specialized account composes.
// BankAccount is the common interface: deposit is fixed, the debit rule
// has a base implementation that specialized accounts may override.
// Callers holding `&mut dyn BankAccount` always get the concrete rule.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use uuid::Uuid;

use crate::config::AccountPolicy;
use crate::error::{AccountError, AccountResult};
use crate::money::format_usd;

// ============================================================================
// ACCOUNT KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    /// Plain account using the base debit rule
    Base,

    /// Interest-bearing account
    Savings,

    /// Fee-per-withdrawal account
    Chequing,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Base => "Account",
            AccountKind::Savings => "SavingsAccount",
            AccountKind::Chequing => "ChequingAccount",
        }
    }
}

// ============================================================================
// DEBIT RECEIPT
// ============================================================================

/// Result of a successful debit
#[derive(Debug, Clone, PartialEq)]
pub struct Debit {
    /// Amount requested by the caller
    pub amount: Decimal,

    /// Fee charged on top of the amount (chequing only)
    pub fee: Option<Decimal>,

    /// Balance after the debit was applied
    pub balance_after: Decimal,
}

impl Debit {
    /// Total taken from the balance
    pub fn total(&self) -> Decimal {
        self.amount + self.fee.unwrap_or(Decimal::ZERO)
    }

    /// Console confirmation for this debit, if the rule prints one
    pub fn notice(&self) -> Option<String> {
        self.fee.map(|fee| {
            format!("Chequing Debit Successful. Fee charged: {}.", format_usd(fee))
        })
    }
}

// ============================================================================
// ACCOUNT CORE
// ============================================================================

/// Base account: identity plus a mutable balance
///
/// `balance` is private; it changes through deposit/debit or the
/// unvalidated `set_balance` escape hatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Stable identity (UUID v4)
    pub id: Uuid,

    /// When the account was opened
    pub opened_at: DateTime<Utc>,

    balance: Decimal,
}

impl Default for Account {
    /// Default construction: zero balance, no validation, no warning
    fn default() -> Self {
        Account {
            id: Uuid::new_v4(),
            opened_at: Utc::now(),
            balance: Decimal::ZERO,
        }
    }
}

impl Account {
    /// Open an account, validating against the default policy
    ///
    /// Returns the rejection instead of opening at zero.
    pub fn try_new(initial_balance: Decimal) -> AccountResult<Self> {
        Self::try_new_with(initial_balance, &AccountPolicy::default())
    }

    pub fn try_new_with(initial_balance: Decimal, policy: &AccountPolicy) -> AccountResult<Self> {
        if !policy.accepts_opening(initial_balance) {
            return Err(AccountError::InitialBalanceRejected {
                requested: initial_balance,
                minimum: policy.minimum_opening_balance,
            });
        }

        Ok(Account {
            balance: initial_balance,
            ..Account::default()
        })
    }

    /// Open an account; an invalid balance opens at 0.00 with a warning on stdout
    pub fn new(initial_balance: Decimal) -> Self {
        Self::new_to(initial_balance, &mut io::stdout().lock())
    }

    /// Same as `new`, writing the warning to `out`
    pub fn new_to(initial_balance: Decimal, out: &mut dyn Write) -> Self {
        Self::new_with(initial_balance, &AccountPolicy::default(), out)
    }

    /// Open with an explicit policy; never fails
    pub fn new_with(initial_balance: Decimal, policy: &AccountPolicy, out: &mut dyn Write) -> Self {
        match Self::try_new_with(initial_balance, policy) {
            Ok(account) => account,
            Err(err) => {
                tracing::warn!(
                    requested = %initial_balance,
                    minimum = %policy.minimum_opening_balance,
                    "opening balance rejected, account opened at zero"
                );
                emit_notice(out, &err.to_string());
                Account::default()
            }
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Overwrite the balance (no validation)
    pub fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }

    /// Deposit a positive amount, returning the new balance
    pub fn try_deposit(&mut self, amount: Decimal) -> AccountResult<Decimal> {
        if amount <= Decimal::ZERO {
            tracing::debug!(account = %self.id, %amount, "deposit rejected");
            return Err(AccountError::InvalidDeposit { amount });
        }

        self.balance += amount;
        tracing::debug!(account = %self.id, %amount, balance = %self.balance, "deposit");
        Ok(self.balance)
    }

    /// Deposit; false (and no message) for non-positive amounts
    pub fn deposit(&mut self, amount: Decimal) -> bool {
        self.try_deposit(amount).is_ok()
    }

    /// Base debit rule: fails when `amount > balance` or `amount <= 0`
    pub fn debit(&mut self, amount: Decimal) -> AccountResult<Debit> {
        if amount > self.balance || amount <= Decimal::ZERO {
            tracing::info!(account = %self.id, %amount, balance = %self.balance, "debit rejected");
            return Err(AccountError::DebitRejected {
                amount,
                balance: self.balance,
            });
        }

        self.balance -= amount;
        tracing::debug!(account = %self.id, %amount, balance = %self.balance, "debit");
        Ok(Debit {
            amount,
            fee: None,
            balance_after: self.balance,
        })
    }
}

// ============================================================================
// BANK ACCOUNT TRAIT
// ============================================================================

/// Common interface over every account type
///
/// Implementors expose their `Account` core; `debit` is the overridable
/// withdrawal rule and `withdraw` always routes through it.
pub trait BankAccount {
    fn core(&self) -> &Account;

    fn core_mut(&mut self) -> &mut Account;

    fn kind(&self) -> AccountKind;

    fn balance(&self) -> Decimal {
        self.core().balance()
    }

    fn set_balance(&mut self, balance: Decimal) {
        self.core_mut().set_balance(balance);
    }

    fn deposit(&mut self, amount: Decimal) -> bool {
        self.core_mut().deposit(amount)
    }

    /// Withdrawal rule; defaults to the base account rule
    fn debit(&mut self, amount: Decimal) -> AccountResult<Debit> {
        self.core_mut().debit(amount)
    }

    /// Withdraw, writing the rule's diagnostic or confirmation to `out`
    fn withdraw_to(&mut self, amount: Decimal, out: &mut dyn Write) -> bool {
        match self.debit(amount) {
            Ok(debit) => {
                if let Some(notice) = debit.notice() {
                    emit_notice(out, &notice);
                }
                true
            }
            Err(err) => {
                emit_notice(out, &err.to_string());
                false
            }
        }
    }

    /// Withdraw, printing diagnostics to stdout
    fn withdraw(&mut self, amount: Decimal) -> bool {
        self.withdraw_to(amount, &mut io::stdout().lock())
    }

    fn snapshot(&self) -> AccountSnapshot {
        let core = self.core();
        AccountSnapshot {
            id: core.id,
            kind: self.kind(),
            balance: core.balance(),
            opened_at: core.opened_at,
        }
    }
}

impl BankAccount for Account {
    fn core(&self) -> &Account {
        self
    }

    fn core_mut(&mut self) -> &mut Account {
        self
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Base
    }
}

/// Write one diagnostic line; a broken sink never changes an operation's outcome
pub(crate) fn emit_notice(out: &mut dyn Write, line: &str) {
    if let Err(err) = writeln!(out, "{}", line) {
        tracing::warn!(error = %err, notice = line, "failed to write account notice");
    }
}

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Point-in-time, serializable view of any account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub id: Uuid,
    pub kind: AccountKind,
    pub balance: Decimal,
    pub opened_at: DateTime<Utc>,
}

impl fmt::Display for AccountSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.kind.as_str(), self.id, format_usd(self.balance))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn open(initial: Decimal) -> (Account, String) {
        let mut out: Vec<u8> = Vec::new();
        let account = Account::new_to(initial, &mut out);
        (account, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_account_creation_valid_balance() {
        let (account, printed) = open(dec!(1000.00));
        assert_eq!(account.balance(), dec!(1000.00));
        assert!(printed.is_empty());

        let (account, _) = open(dec!(2500));
        assert_eq!(account.balance(), dec!(2500));
    }

    #[test]
    fn test_account_creation_invalid_balance_warns() {
        let (account, printed) = open(dec!(999.99));
        assert_eq!(account.balance(), Decimal::ZERO);
        assert_eq!(printed, "Account Warning: Initial balance invalid (set to $0.00).\n");

        let (account, printed) = open(dec!(-50));
        assert_eq!(account.balance(), Decimal::ZERO);
        assert!(!printed.is_empty());
    }

    #[test]
    fn test_try_new_reports_rejection() {
        let err = Account::try_new(dec!(10)).unwrap_err();
        assert_eq!(
            err,
            AccountError::InitialBalanceRejected {
                requested: dec!(10),
                minimum: dec!(1000),
            }
        );
        assert!(Account::try_new(dec!(1000)).is_ok());
    }

    #[test]
    fn test_custom_policy() {
        let policy = AccountPolicy {
            minimum_opening_balance: dec!(100),
        };
        let mut out: Vec<u8> = Vec::new();
        let account = Account::new_with(dec!(150), &policy, &mut out);
        assert_eq!(account.balance(), dec!(150));
        assert!(out.is_empty());
    }

    #[test]
    fn test_default_account_is_zero_and_silent() {
        let account = Account::default();
        assert_eq!(account.balance(), Decimal::ZERO);
        assert_eq!(account.kind(), AccountKind::Base);
    }

    #[test]
    fn test_set_balance_is_unvalidated() {
        let mut account = Account::default();
        account.set_balance(dec!(-42.10));
        assert_eq!(account.balance(), dec!(-42.10));
    }

    #[test]
    fn test_deposit() {
        let (mut account, _) = open(dec!(1000));

        assert!(account.deposit(dec!(250.50)));
        assert_eq!(account.balance(), dec!(1250.50));

        assert!(!account.deposit(Decimal::ZERO));
        assert!(!account.deposit(dec!(-5)));
        assert_eq!(account.balance(), dec!(1250.50));

        assert_eq!(
            account.try_deposit(dec!(-1)),
            Err(AccountError::InvalidDeposit { amount: dec!(-1) })
        );
    }

    #[test]
    fn test_base_withdraw_success() {
        let (mut account, _) = open(dec!(1000));
        let mut out: Vec<u8> = Vec::new();

        assert!(account.withdraw_to(dec!(1000), &mut out));
        assert_eq!(account.balance(), Decimal::ZERO);
        // Base rule prints nothing on success
        assert!(out.is_empty());
    }

    #[test]
    fn test_base_withdraw_rejections() {
        let (mut account, _) = open(dec!(1000));

        for amount in [dec!(1000.01), Decimal::ZERO, dec!(-10)] {
            let mut out: Vec<u8> = Vec::new();
            assert!(!account.withdraw_to(amount, &mut out));
            assert_eq!(account.balance(), dec!(1000));
            assert_eq!(
                String::from_utf8(out).unwrap(),
                "Debit amount exceeded account balance or is invalid.\n"
            );
        }
    }

    #[test]
    fn test_debit_receipt() {
        let (mut account, _) = open(dec!(1500));
        let debit = account.debit(dec!(200)).unwrap();
        assert_eq!(debit.amount, dec!(200));
        assert_eq!(debit.fee, None);
        assert_eq!(debit.total(), dec!(200));
        assert_eq!(debit.balance_after, dec!(1300));
        assert!(debit.notice().is_none());
    }

    #[test]
    fn test_snapshot_display_and_json() {
        let (account, _) = open(dec!(1234.5));
        let snapshot = account.snapshot();
        assert_eq!(snapshot.kind, AccountKind::Base);
        assert_eq!(snapshot.balance, dec!(1234.5));
        assert_eq!(snapshot.to_string(), format!("Account {}: $1234.50", account.id));

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: AccountSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_stdout_variants() {
        let mut account = Account::new(dec!(1000));
        let as_trait: &mut dyn BankAccount = &mut account;
        assert!(as_trait.withdraw(dec!(400)));
        assert!(!as_trait.withdraw(dec!(601)));

        as_trait.set_balance(dec!(5));
        assert_eq!(as_trait.balance(), dec!(5));
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_broken_sink_does_not_change_outcome() {
        let (mut account, _) = open(dec!(1000));
        assert!(!account.withdraw_to(dec!(5000), &mut BrokenSink));
        assert!(account.withdraw_to(dec!(10), &mut BrokenSink));
        assert_eq!(account.balance(), dec!(990));
    }
}
