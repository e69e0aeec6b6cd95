//! Shared identifier/timestamp aliases and the domain value enums.
//!
//! Enums are stored as their snake_case wire string in TEXT columns and
//! carry the Spanish display label shown in customer-facing exports.

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

macro_rules! define_string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($wire:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            /// Stored/wire form of the value.
            pub fn as_str(self) -> &'static str {
                match self { $( Self::$variant => $wire ),+ }
            }

            /// Spanish display label (report exporters).
            pub fn label(self) -> &'static str {
                match self { $( Self::$variant => $label ),+ }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok(Self::$variant), )+
                    other => Err(crate::error::CoreError::Internal(format!(
                        "Unknown {} value: {other}",
                        stringify!($name),
                    ))),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = crate::error::CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

define_string_enum! {
    /// Client segment.
    ClientType {
        Company => ("company", "Empresa"),
        Individual => ("individual", "Particular"),
        Government => ("government", "Gobierno"),
    }
}

define_string_enum! {
    /// Service catalog line.
    ServiceKind {
        Electrical => ("electrical", "Instalaciones Eléctricas"),
        Fire => ("fire", "Sistemas de Detección de Incendios"),
        Construction => ("construction", "Construcción"),
        Software => ("software", "Programación"),
    }
}

define_string_enum! {
    /// Project lifecycle status.
    ProjectStatus {
        Quoted => ("quoted", "Cotizado"),
        Approved => ("approved", "Aprobado"),
        InProgress => ("in_progress", "En Proceso"),
        Completed => ("completed", "Completado"),
        Cancelled => ("cancelled", "Cancelado"),
        Paused => ("paused", "Pausado"),
    }
}

define_string_enum! {
    /// Project priority.
    ProjectPriority {
        Low => ("low", "Baja"),
        Medium => ("medium", "Media"),
        High => ("high", "Alta"),
        Urgent => ("urgent", "Urgente"),
    }
}

define_string_enum! {
    /// Budget review status.
    BudgetStatus {
        Pending => ("pending", "Pendiente"),
        Review => ("review", "En Revisión"),
        Approved => ("approved", "Aprobado"),
        Rejected => ("rejected", "Rechazado"),
    }
}

define_string_enum! {
    /// Incident classification.
    IncidentKind {
        Technical => ("technical", "Técnica"),
        Administrative => ("administrative", "Administrativa"),
        Client => ("client", "Del Cliente"),
        Vendor => ("vendor", "Del Proveedor"),
        Quality => ("quality", "Control de Calidad"),
    }
}

define_string_enum! {
    /// Incident priority. Top level is `critical`, not `urgent`.
    IncidentPriority {
        Low => ("low", "Baja"),
        Medium => ("medium", "Media"),
        High => ("high", "Alta"),
        Critical => ("critical", "Crítica"),
    }
}

define_string_enum! {
    /// Incident lifecycle status.
    IncidentStatus {
        Open => ("open", "Abierta"),
        InProgress => ("in_progress", "En Proceso"),
        Resolved => ("resolved", "Resuelta"),
        Closed => ("closed", "Cerrada"),
    }
}

define_string_enum! {
    /// Profile role driving the access filter and staff gates.
    UserRole {
        Admin => ("admin", "Administrador"),
        Client => ("client", "Cliente"),
        Employee => ("employee", "Empleado"),
        Contractor => ("contractor", "Contratista"),
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Quoted
    }
}

impl Default for ProjectPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Default for BudgetStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl Default for IncidentStatus {
    fn default() -> Self {
        Self::Open
    }
}

impl Default for IncidentPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_round_trip() {
        assert_eq!(ProjectStatus::InProgress.as_str(), "in_progress");
        assert_eq!(
            "in_progress".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::InProgress
        );
    }

    #[test]
    fn unknown_wire_value_rejected() {
        assert!("en_proceso".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn serde_uses_wire_form() {
        let json = serde_json::to_string(&ClientType::Government).unwrap();
        assert_eq!(json, "\"government\"");
        let back: ClientType = serde_json::from_str("\"government\"").unwrap();
        assert_eq!(back, ClientType::Government);
    }

    #[test]
    fn labels_are_spanish_display_forms() {
        assert_eq!(ProjectStatus::InProgress.label(), "En Proceso");
        assert_eq!(ProjectPriority::Urgent.label(), "Urgente");
        assert_eq!(ServiceKind::Fire.label(), "Sistemas de Detección de Incendios");
    }

    #[test]
    fn defaults_match_data_model() {
        assert_eq!(ProjectStatus::default(), ProjectStatus::Quoted);
        assert_eq!(BudgetStatus::default(), BudgetStatus::Pending);
        assert_eq!(IncidentStatus::default(), IncidentStatus::Open);
        assert_eq!(UserRole::default(), UserRole::Client);
    }
}
