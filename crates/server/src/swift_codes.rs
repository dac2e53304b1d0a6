use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use service::swift_codes::domain::{CountrySwiftCodes, CreateSwiftCodeInput, SwiftCodeDetails, SwiftCodeRecord};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

pub const CREATED_MESSAGE: &str = "Swift code entry created successfully";
pub const DELETED_MESSAGE: &str = "Swift code entry deleted successfully";

#[utoipa::path(
    get, path = "/v1/swift-codes", tag = "swift-codes",
    responses(
        (status = 200, description = "All records", body = [crate::openapi::SwiftCodeRecordDoc]),
        (status = 500, description = "Failed to fetch data")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<SwiftCodeRecord>>, JsonApiError> {
    let records = state
        .swift_codes
        .list_all()
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to fetch data"))?;
    Ok(Json(records))
}

#[utoipa::path(
    get, path = "/v1/swift-codes/{swift_code}", tag = "swift-codes",
    params(("swift_code" = String, Path, description = "Bank identifier")),
    responses(
        (status = 200, description = "Record, with branches for headquarters", body = crate::openapi::SwiftCodeDetailsDoc),
        (status = 404, description = "Swift code not found"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(swift_code): Path<String>,
) -> Result<Json<SwiftCodeDetails>, JsonApiError> {
    let details = state
        .swift_codes
        .get_by_swift_code(&swift_code)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Database error"))?;
    Ok(Json(details))
}

#[utoipa::path(
    get, path = "/v1/swift-codes/country/{country_iso2}", tag = "swift-codes",
    params(("country_iso2" = String, Path, description = "ISO 3166-1 alpha-2 country code, matched exactly")),
    responses(
        (status = 200, description = "Records of the country", body = crate::openapi::CountrySwiftCodesDoc),
        (status = 500, description = "Failed to fetch data")
    )
)]
pub async fn by_country(
    State(state): State<ServerState>,
    Path(country_iso2): Path<String>,
) -> Result<Json<CountrySwiftCodes>, JsonApiError> {
    let summary = state
        .swift_codes
        .get_by_country(&country_iso2)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to fetch data"))?;
    info!(country = %country_iso2, count = summary.swift_codes.len(), "list swift codes by country");
    Ok(Json(summary))
}

#[utoipa::path(
    post, path = "/v1/swift-codes", tag = "swift-codes",
    request_body = crate::openapi::CreateSwiftCodeInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Malformed payload or bad identifier length"),
        (status = 500, description = "Insert failed, including duplicates")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateSwiftCodeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), JsonApiError> {
    let Json(input) = payload?;
    state
        .swift_codes
        .create(input)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to insert new swift code entry"))?;
    Ok((StatusCode::CREATED, Json(Message::new(CREATED_MESSAGE))))
}

#[utoipa::path(
    delete, path = "/v1/swift-codes/{swift_code}", tag = "swift-codes",
    params(("swift_code" = String, Path, description = "Bank identifier, 8 or 11 characters")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Bad identifier length"),
        (status = 404, description = "Swift code not found"),
        (status = 500, description = "Failed to delete swift code")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(swift_code): Path<String>,
) -> Result<Json<Message>, JsonApiError> {
    state
        .swift_codes
        .delete(&swift_code)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to delete swift code"))?;
    Ok(Json(Message::new(DELETED_MESSAGE)))
}
