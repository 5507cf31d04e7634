use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Parse a user-typed amount. Accepts `,` as the decimal separator.
pub(crate) fn parse_amount(text: &str) -> Result<Decimal> {
    let cleaned = text.trim().replace(',', ".");
    let amount = Decimal::from_str(&cleaned)
        .map_err(|_| Error::Validation(format!("'{}' is not a valid amount", text.trim())))?;
    ensure_positive(amount, "amount")?;
    Ok(amount)
}

pub(crate) fn ensure_positive(amount: Decimal, what: &str) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(Error::Validation(format!("{what} must be greater than zero")));
    }
    Ok(())
}

/// Round half away from zero to 2 decimal places, the way SQLite's ROUND does.
pub(crate) fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Always exactly two decimal digits with `.` as separator, e.g. `15.50`.
pub(crate) fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", round_cents(amount))
}
