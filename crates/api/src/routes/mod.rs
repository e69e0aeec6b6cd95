pub mod accounts;
pub mod budgets;
pub mod calc;
pub mod clients;
pub mod health;
pub mod home;
pub mod incidents;
pub mod projects;
pub mod services;

use axum::Router;

use crate::state::AppState;

/// Build the business route tree. Paths are mounted at the root and
/// keep their trailing slashes.
///
/// Route hierarchy:
///
/// ```text
/// /                              dashboard (public, reduced when anonymous)
///
/// /registro/                     register account (public)
/// /login/                        login (public)
/// /perfil/                       own profile (GET show, POST update)
///
/// /clientes/                     list clients (paginated)
/// /clientes/crear/               create client
/// /clientes/{id}/editar/         edit client
/// /clientes/{id}/eliminar/       deactivate client (staff only)
///
/// /servicios/                    list active services
/// /servicios/crear/              create service (staff only)
/// /servicios/{id}/editar/        edit service
/// /servicios/{id}/eliminar/      deactivate service (staff only)
///
/// /proyectos/                    list projects (scoped, filtered, paginated)
/// /proyectos/crear/              create project
/// /proyectos/exportar-excel/     spreadsheet download (scoped, filtered)
/// /proyectos/exportar-pdf/       PDF download (scoped snapshot)
/// /proyectos/{id}/               project detail with linked collections
/// /proyectos/{id}/editar/        edit project
///
/// /presupuestos/                 list budgets (scoped, paginated)
/// /presupuestos/crear/           create budget (auto-numbered)
/// /presupuestos/{id}/            budget detail
///
/// /incidencias/                  list incidents (filtered, paginated)
/// /incidencias/crear/            report incident
/// /incidencias/{id}/resolver/    update resolution status
///
/// /ajax/calcular-total/          budget total preview (POST)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(home::router())
        .merge(accounts::router())
        .merge(clients::router())
        .merge(services::router())
        .merge(projects::router())
        .merge(budgets::router())
        .merge(incidents::router())
        .merge(calc::router())
}
