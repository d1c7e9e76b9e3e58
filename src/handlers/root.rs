use std::collections::BTreeMap;

use axum::response::Json;
use crate::schemas::RootResponse;

/// Route groups mounted by the router, by name.
const SERVICES: [(&str, &str); 3] = [
    ("accounts", "/accounts"),
    ("health", "/health"),
    ("users", "/users"),
];

/// Service metadata
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses(
        (status = 200, description = "Service name, docs location and mounted routes", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    let services: BTreeMap<String, String> = SERVICES
        .iter()
        .map(|(name, path)| (name.to_string(), path.to_string()))
        .collect();

    Json(RootResponse {
        message: "Social Media Content Forwarder API".to_string(),
        docs: "/docs".to_string(),
        services,
    })
}
