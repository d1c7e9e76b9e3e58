use crate::handlers::{
    accounts::{
        create_account, delete_account, get_account, get_accounts, get_user_accounts,
        update_account,
    },
    health::health_check,
    root::root,
    users::{create_user, delete_user, get_user, get_users},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::get,
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        // Account routes, with and without the trailing slash
        .route("/accounts", get(get_accounts).post(create_account))
        .route("/accounts/", get(get_accounts).post(create_account))
        .route("/accounts/user/:user_id", get(get_user_accounts))
        .route(
            "/accounts/:account_id",
            get(get_account).patch(update_account).delete(delete_account),
        )
        // User routes
        .route("/users", get(get_users).post(create_user))
        .route("/users/", get(get_users).post(create_user))
        .route("/users/:user_id", get(get_user).delete(delete_user))
        // Swagger UI
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()));

    // The Prometheus recorder is process-global, so tests build routers without it
    #[cfg(not(test))]
    let router = {
        let (prometheus_layer, metric_handle) = axum_prometheus::PrometheusMetricLayer::pair();
        router
            .route("/metrics", get(move || async move { metric_handle.render() }))
            .layer(prometheus_layer)
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
