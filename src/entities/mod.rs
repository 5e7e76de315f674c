// Entity Models - Account hierarchy
//
// Account holds the balance; SavingsAccount and ChequingAccount compose it
// and plug into the shared BankAccount trait.

pub mod account;
pub mod savings;
pub mod chequing;

pub use account::{Account, AccountKind, AccountSnapshot, BankAccount, Debit};
pub use savings::SavingsAccount;
pub use chequing::ChequingAccount;
