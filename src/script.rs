// 📜 Driver Script - Fixed walkthrough of both account types
//
// One savings account and one chequing account, a hardcoded sequence of
// operations, and a balance line after every step.

use rust_decimal::Decimal;
use std::io::{self, Write};

use crate::entities::{BankAccount, ChequingAccount, SavingsAccount};
use crate::money::format_usd;

/// Final balances after the script ran
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptSummary {
    pub savings_balance: Decimal,
    pub savings_interest: Decimal,
    pub chequing_balance: Decimal,
}

/// Run the script, writing the whole transcript to `out`
pub fn run(out: &mut dyn Write) -> io::Result<ScriptSummary> {
    tracing::info!("inheritance test program started");
    writeln!(out, "--- Inheritance Test Program ---")?;

    // Savings
    writeln!(out, "\n*** Testing SavingsAccount ***")?;

    let mut savings = SavingsAccount::new_to(Decimal::new(2000_00, 2), Decimal::new(45, 3), out);
    writeln!(out, "Initial Savings Balance: {}", format_usd(savings.balance()))?;

    savings.deposit(Decimal::new(500_00, 2));
    writeln!(out, "Balance after $500 Deposit: {}", format_usd(savings.balance()))?;

    let interest = savings.calculate_interest();
    writeln!(out, "Calculated Interest Earned: {}", format_usd(interest))?;

    savings.deposit(interest);
    writeln!(
        out,
        "Final Savings Balance (after interest added): {}",
        format_usd(savings.balance())
    )?;

    savings.withdraw_to(Decimal::new(100_00, 2), out);
    writeln!(out, "Balance after $100 Withdraw: {}", format_usd(savings.balance()))?;

    // Chequing
    writeln!(out, "\n*** Testing ChequingAccount ***")?;

    let mut chequing = ChequingAccount::new_to(Decimal::new(1000_00, 2), Decimal::new(5_00, 2), out);
    writeln!(
        out,
        "Initial Chequing Balance (Fee: {}): {}",
        format_usd(chequing.transaction_fee()),
        format_usd(chequing.balance())
    )?;

    // 50.00 + 5.00 fee
    chequing.withdraw_to(Decimal::new(50_00, 2), out);
    writeln!(out, "Balance after $50 Debit: {}", format_usd(chequing.balance()))?;

    // 1000.00 + 5.00 fee exceeds 945.00
    chequing.withdraw_to(Decimal::new(1000_00, 2), out);
    writeln!(
        out,
        "Balance after Failed Debit Attempt: {}",
        format_usd(chequing.balance())
    )?;

    writeln!(out, "\n--- Test Program Complete ---")?;
    tracing::info!(
        savings = %savings.balance(),
        chequing = %chequing.balance(),
        "inheritance test program complete"
    );

    Ok(ScriptSummary {
        savings_balance: savings.balance(),
        savings_interest: interest,
        chequing_balance: chequing.balance(),
    })
}
