use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::{Health, Message};

use crate::openapi::ApiDoc;
use crate::state::ServerState;
use crate::swift_codes;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn ping() -> Json<Message> {
    Json(Message::new("pong"))
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: probes, API document and the
/// swift code routes.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let probes = Router::new()
        .route("/ping", get(ping))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let api = Router::new()
        .route("/v1/swift-codes", get(swift_codes::list).post(swift_codes::create))
        .route(
            "/v1/swift-codes/:swift_code",
            get(swift_codes::get).delete(swift_codes::delete),
        )
        .route("/v1/swift-codes/country/:country_iso2", get(swift_codes::by_country));

    probes
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request, method and path included
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx and friends
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
