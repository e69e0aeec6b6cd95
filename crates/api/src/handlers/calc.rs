//! Handler for the budget-total AJAX helper.

use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::middleware::auth::AuthUser;

/// Request body for `POST /ajax/calcular-total/`. Absent fields count
/// as zero, matching the form widget that posts whatever was typed.
#[derive(Debug, Deserialize)]
pub struct CalcRequest {
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub iva: f64,
}

/// POST /ajax/calcular-total/
///
/// Sum subtotal and tax for the budget form preview. The result is a
/// string with exactly two decimals.
pub async fn total(AuthUser(_identity): AuthUser, Json(input): Json<CalcRequest>) -> Json<Value> {
    Json(json!({ "total": format_total(input.subtotal, input.iva) }))
}

fn format_total(subtotal: f64, iva: f64) -> String {
    format!("{:.2}", subtotal + iva)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_to_two_decimals() {
        assert_eq!(format_total(100.0, 19.0), "119.00");
        assert_eq!(format_total(0.1, 0.2), "0.30");
    }

    #[test]
    fn zero_inputs_format_as_zero() {
        assert_eq!(format_total(0.0, 0.0), "0.00");
    }

    #[test]
    fn fractional_cents_round_half_to_even_adjacent() {
        // f64 formatting rounds to nearest; 1.005 is stored slightly
        // below so it prints 1.00.
        assert_eq!(format_total(1.005, 0.0), "1.00");
        assert_eq!(format_total(1.006, 0.0), "1.01");
    }
}
