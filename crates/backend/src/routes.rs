use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{handlers, system};

/// Every API route of the service. Static files are added by `main`.
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM ROUTES
        // ========================================
        .route("/api/system/auth/login", post(system::handlers::auth::login))
        .route(
            "/api/system/navigation",
            get(system::handlers::navigation::sections),
        )
        // ========================================
        // REGISTRY ROUTES (no server-side role check)
        // ========================================
        // A001 Animals
        .route(
            "/api/animals",
            get(handlers::a001_animal::list).post(handlers::a001_animal::create),
        )
        .route(
            "/api/animals/:id",
            get(handlers::a001_animal::get_by_id)
                .put(handlers::a001_animal::update)
                .delete(handlers::a001_animal::delete),
        )
        // A002 Health checks
        .route(
            "/api/health-checks",
            get(handlers::a002_health_check::list).post(handlers::a002_health_check::create),
        )
        .route(
            "/api/health-checks/:id",
            get(handlers::a002_health_check::get_by_id)
                .put(handlers::a002_health_check::update)
                .delete(handlers::a002_health_check::delete),
        )
        // A003 Conservation projects
        .route(
            "/api/conservation-projects",
            get(handlers::a003_conservation_project::list)
                .post(handlers::a003_conservation_project::create),
        )
        .route(
            "/api/conservation-projects/:id",
            get(handlers::a003_conservation_project::get_by_id)
                .put(handlers::a003_conservation_project::update)
                .delete(handlers::a003_conservation_project::delete),
        )
        // A004 Tickets
        .route(
            "/api/tickets",
            get(handlers::a004_ticket::list).post(handlers::a004_ticket::create),
        )
        .route(
            "/api/tickets/:id",
            get(handlers::a004_ticket::get_by_id)
                .put(handlers::a004_ticket::update)
                .delete(handlers::a004_ticket::delete),
        )
        // A005 Staff
        .route(
            "/api/staff",
            get(handlers::a005_staff_member::list).post(handlers::a005_staff_member::create),
        )
        .route(
            "/api/staff/:id",
            get(handlers::a005_staff_member::get_by_id)
                .put(handlers::a005_staff_member::update)
                .delete(handlers::a005_staff_member::delete),
        )
        // A006 Reports
        .route(
            "/api/reports",
            get(handlers::a006_report::list).post(handlers::a006_report::create),
        )
        .route(
            "/api/reports/:id",
            get(handlers::a006_report::get_by_id)
                .put(handlers::a006_report::update)
                .delete(handlers::a006_report::delete),
        )
        .route(
            "/api/reports/:id/download",
            post(handlers::a006_report::record_download),
        )
        .route("/api/report-templates", get(handlers::a006_report::templates))
        // A007 Veterinary inventory
        .route(
            "/api/inventory",
            get(handlers::a007_inventory_item::list).post(handlers::a007_inventory_item::create),
        )
        .route(
            "/api/inventory/:id",
            get(handlers::a007_inventory_item::get_by_id)
                .put(handlers::a007_inventory_item::update)
                .delete(handlers::a007_inventory_item::delete),
        )
        // ========================================
        // EXPORT
        // ========================================
        .route("/api/export/:entity", get(handlers::export::export))
        .with_state(state)
}
