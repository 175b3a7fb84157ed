use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Rejections of a typed birth date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Fecha inválida. Use el formato AAAA-MM-DD.")]
    Invalid,
    #[error("La fecha no puede estar en el futuro.")]
    InFuture,
}

/// Parse a birth date typed as `YYYY-MM-DD`, rejecting future dates.
pub fn parse_birth_date(input: &str, today: NaiveDate) -> Result<NaiveDate, DateError> {
    let date =
        NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| DateError::Invalid)?;
    if date > today {
        return Err(DateError::InFuture);
    }
    Ok(date)
}

/// Whole years completed between `birth` and `today`, month/day aware.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

/// Display format used across lists and details (`dd/mm/yyyy`).
pub fn format_display(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
