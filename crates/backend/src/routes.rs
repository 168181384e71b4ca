use std::path::PathBuf;

use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::handlers;
use crate::system;

/// Конфигурация всех роутов приложения
pub fn configure_routes(static_dir: Option<PathBuf>) -> Router {
    let router = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 COMPANIES
        // ========================================
        .route("/api/companies", get(handlers::a001_company::list))
        .route(
            "/api/companies/options",
            get(handlers::a001_company::options),
        )
        // ========================================
        // A002 STORES
        // ========================================
        .route("/api/stores", get(handlers::a002_store::list))
        .route("/api/stores/options", get(handlers::a002_store::options))
        .route("/api/stores/:id", delete(handlers::a002_store::delete))
        // ========================================
        // A003 FILTER INSTALLATIONS
        // ========================================
        .route(
            "/api/installations",
            get(handlers::a003_filter_installation::list),
        )
        .route(
            "/api/installations/qr/:code",
            get(handlers::a003_filter_installation::get_by_qr),
        )
        // ========================================
        // A004 MAINTENANCE SCHEDULES
        // ========================================
        .route(
            "/api/schedules",
            get(handlers::a004_maintenance_schedule::list),
        );

    // Страницы UI (/stores?..., /installations/qr/...) отдаются как index.html
    let router = match static_dir {
        Some(dir) => {
            let index = dir.join("index.html");
            router.fallback_service(ServeDir::new(dir).not_found_service(ServeFile::new(index)))
        }
        None => router,
    };

    router.layer(middleware::from_fn(
        system::middleware::request_logger::request_logger,
    ))
}
