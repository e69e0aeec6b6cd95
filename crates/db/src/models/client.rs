//! Client entity model and DTOs.

use serde::{Deserialize, Serialize};
use sirius_core::types::{ClientType, DbId, Timestamp};
use sqlx::FromRow;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub rut: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[sqlx(try_from = "String")]
    pub client_type: ClientType,
    pub active: bool,
    pub registered_at: Timestamp,
}

impl Client {
    /// Display form used by the report exporters: `"{name} - {rut}"`.
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.name, self.rut)
    }
}

/// Create/edit payload. Edits re-submit the full field set, so one DTO
/// serves both operations; `active` is not settable here (soft delete
/// owns it).
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInput {
    pub name: String,
    pub rut: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub client_type: ClientType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn display_name_joins_name_and_rut() {
        let client = Client {
            id: 1,
            name: "Acme".into(),
            rut: "12345678-9".into(),
            email: "a@acme.cl".into(),
            phone: "+56911112222".into(),
            address: "Av. Siempre Viva 123".into(),
            client_type: ClientType::Company,
            active: true,
            registered_at: Utc::now(),
        };
        assert_eq!(client.display_name(), "Acme - 12345678-9");
    }
}
