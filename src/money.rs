// 💵 Money - Fixed two-decimal currency display
//
// All amounts are rust_decimal::Decimal so arithmetic stays exact
// (2500 × 0.045 is 112.50, not 112.49999...).

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places shown for every monetary value
pub const DISPLAY_SCALE: u32 = 2;

/// Round an amount to display precision (half away from zero)
pub fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as dollars with exactly two decimals
///
/// Example: 2000 → "$2000.00", 112.500 → "$112.50"
pub fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", to_cents(amount))
}

// ============================================================================
// TESTS
// ============================================================================
