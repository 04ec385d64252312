//! Raw form field handling shared by the services
//!
//! Inputs arrive exactly as typed. A form is rejected as a whole when any
//! required field is missing or blank; only then are values parsed.

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, MoneyParseError};

/// Date format accepted on input
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Trimmed value of a field, or `None` when it is missing or blank
pub fn filled(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Fail with the form's "Please fill all ... fields" message unless every
/// field is filled
pub fn require_all(form: &str, fields: &[&Option<String>]) -> FinanceResult<()> {
    if fields.iter().all(|field| filled(field).is_some()) {
        Ok(())
    } else {
        Err(FinanceError::missing_fields(form))
    }
}

/// Largest amount a single record may carry
///
/// Keeps ledger totals far inside the `i64` range of `Money`.
pub const MAX_AMOUNT: Money = Money::from_units(1_000_000_000_000);

/// Parse an amount that must be strictly positive and at most [`MAX_AMOUNT`]
pub fn parse_amount(raw: &str) -> FinanceResult<Money> {
    match Money::parse(raw) {
        Ok(amount) if amount > MAX_AMOUNT => Err(FinanceError::Validation(format!(
            "Amount must be at most {}, got '{}'",
            MAX_AMOUNT,
            raw.trim()
        ))),
        Ok(amount) if amount.is_positive() => Ok(amount),
        Err(e @ MoneyParseError::TooPrecise(_)) => Err(FinanceError::Validation(e.to_string())),
        _ => Err(FinanceError::invalid_amount(raw)),
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(raw: &str) -> FinanceResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), INPUT_DATE_FORMAT)
        .map_err(|_| FinanceError::invalid_date(raw))
}

/// Value of a field already checked by [`require_all`]
pub(crate) fn value(field: &Option<String>) -> &str {
    filled(field).unwrap_or_default()
}
