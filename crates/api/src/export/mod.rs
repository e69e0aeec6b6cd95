//! Project report builders: a spreadsheet and a PDF snapshot.
//!
//! Both walk the same [`ProjectExportRow`] slice the repository
//! produces, so column content stays identical across formats.
//!
//! [`ProjectExportRow`]: sirius_db::models::project::ProjectExportRow

use chrono::NaiveDate;

pub mod pdf;
pub mod xlsx;

/// Placeholder for a project without a responsible user.
pub(crate) const UNASSIGNED: &str = "Sin asignar";

/// Dates print day-first in the reports.
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `$` plus thousands separators: `1234567.5` at two decimals prints as
/// `$1,234,567.50`.
pub(crate) fn format_currency(amount: f64, decimals: usize) -> String {
    let formatted = format!("{amount:.decimals$}");
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    match frac_part {
        Some(frac) => format!("${sign}{grouped}.{frac}"),
        None => format!("${sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(1234567.89, 2), "$1,234,567.89");
        assert_eq!(format_currency(1000.0, 2), "$1,000.00");
        assert_eq!(format_currency(999.0, 2), "$999.00");
    }

    #[test]
    fn currency_zero_decimals() {
        assert_eq!(format_currency(500000.0, 0), "$500,000");
        assert_eq!(format_currency(0.0, 0), "$0");
    }

    #[test]
    fn currency_small_and_zero_amounts() {
        assert_eq!(format_currency(0.0, 2), "$0.00");
        assert_eq!(format_currency(7.5, 2), "$7.50");
    }

    #[test]
    fn currency_negative_amount_keeps_sign_after_symbol() {
        assert_eq!(format_currency(-1234.5, 2), "$-1,234.50");
    }

    #[test]
    fn currency_rounds_to_requested_decimals() {
        assert_eq!(format_currency(999.999, 2), "$1,000.00");
    }

    #[test]
    fn date_prints_day_first() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(format_date(date), "09/03/2025");
    }
}
