//! API Router with Swagger UI

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{BookingService, EmptyHistoryPolicy, TrackingService};
use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::MessageResponse;
use crate::interfaces::http::modules::{bookings, health, metrics, request_id, tracking};

/// Long-lived handles the router is built from
pub struct RouterDeps {
    pub repos: Arc<dyn RepositoryProvider>,
    pub db: DatabaseConnection,
    pub prometheus_handle: PrometheusHandle,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        tracking::get_tracking,
        tracking::get_tracking_by_number,
        bookings::create_booking,
        bookings::get_booking,
    ),
    components(
        schemas(
            MessageResponse,
            health::HealthResponse,
            health::ComponentHealth,
            tracking::TrackingResponse,
            tracking::TrackingHistoryDto,
            bookings::CreateBookingRequest,
            bookings::CreateBookingResponse,
            bookings::BookingDto,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Tracking", description = "Shipment tracking lookup with status history"),
        (name = "Bookings", description = "Transport service booking requests"),
    ),
    info(
        title = "TransportCo API",
        version = "1.0.0",
        description = "Shipment tracking and booking endpoints for the TransportCo website",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(deps: RouterDeps, app_cfg: &AppConfig) -> Router {
    let tracking_state = tracking::TrackingAppState {
        tracking: Arc::new(TrackingService::new(
            deps.repos.clone(),
            EmptyHistoryPolicy::from_flag(app_cfg.tracking.report_shipments_without_history),
        )),
    };

    let booking_state = bookings::BookingAppState {
        bookings: Arc::new(BookingService::new(
            deps.repos,
            app_cfg.booking.reference_prefix.clone(),
        )),
    };

    let health_state = health::HealthState {
        db: deps.db,
        started_at: Arc::new(Instant::now()),
    };

    let metrics_state = metrics::MetricsState {
        handle: deps.prometheus_handle,
    };

    // Public website endpoints: any origin may call them
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let tracking_routes = Router::new()
        .route("/", get(tracking::get_tracking))
        .route("/{tracking_number}", get(tracking::get_tracking_by_number))
        .with_state(tracking_state);

    let booking_routes = Router::new()
        .route("/", post(bookings::create_booking))
        .route("/{booking_reference}", get(bookings::get_booking))
        .with_state(booking_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health & metrics
        .route("/health", get(health::health_check).with_state(health_state))
        .route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(metrics_state),
        )
        // API
        .nest("/api/v1/tracking", tracking_routes)
        .nest("/api/v1/bookings", booking_routes)
        // Middleware
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
