//! API router

use std::sync::Arc;
use std::time::Instant;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::modules::{analytics, brands, health, import, models, vehicles, AppState};

/// Create the API router with all routes
pub fn create_api_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let brand_routes = Router::new()
        .route(
            "/",
            get(brands::handlers::list_brands).post(brands::handlers::create_brand),
        )
        .route(
            "/{id}",
            get(brands::handlers::get_brand)
                .put(brands::handlers::update_brand)
                .delete(brands::handlers::delete_brand),
        )
        .with_state(state.clone());

    let model_routes = Router::new()
        .route(
            "/",
            get(models::handlers::list_models).post(models::handlers::create_model),
        )
        .route(
            "/{id}",
            get(models::handlers::get_model)
                .put(models::handlers::update_model)
                .delete(models::handlers::delete_model),
        )
        .with_state(state.clone());

    let vehicle_routes = Router::new()
        .route(
            "/",
            get(vehicles::handlers::list_vehicles).post(vehicles::handlers::create_vehicle),
        )
        .route(
            "/{id}",
            get(vehicles::handlers::get_vehicle)
                .put(vehicles::handlers::update_vehicle)
                .delete(vehicles::handlers::delete_vehicle),
        )
        .route("/{id}/status", put(vehicles::handlers::update_vehicle_status))
        .with_state(state.clone());

    let analytics_routes = Router::new()
        .route("/brands", get(analytics::handlers::brand_analytics))
        .route("/fleet-efficiency", get(analytics::handlers::fleet_efficiency))
        .route("/fleet-emissions", get(analytics::handlers::fleet_emissions))
        .route("/fleet-composition", get(analytics::handlers::fleet_composition))
        .route("/fleet-operational", get(analytics::handlers::fleet_operational))
        .with_state(state.clone());

    let import_routes = Router::new()
        .route("/", post(import::handlers::import_csv))
        .route("/seed", post(import::handlers::seed))
        .with_state(state.clone());

    let health_state = health::handlers::HealthState {
        db: state.db.clone(),
        started_at: Arc::new(Instant::now()),
    };
    let health_routes = Router::new()
        .route("/health", get(health::handlers::health_check))
        .with_state(health_state);

    // Build router
    Router::new()
        .merge(health_routes)
        .nest("/api/v1/brands", brand_routes)
        .nest("/api/v1/models", model_routes)
        .nest("/api/v1/vehicles", vehicle_routes)
        .nest("/api/v1/analytics", analytics_routes)
        .nest("/api/v1/import", import_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
