use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::{Result, RosterError};
use crate::logic::{decode, DepartmentOperations, EmployeeOperations, Validator};
use crate::model::{DepartmentResponse, EmployeeResponse, Id};
use crate::store::traits::Store;

/// Process-wide state shared by every handler: the store and the validation rules.
pub struct AppContext<S> {
    pub store: S,
    pub validator: Validator,
}

impl<S: Store> AppContext<S> {
    pub fn new(store: S, validator: Validator) -> Self {
        Self { store, validator }
    }
}

pub type AppState<S> = Arc<AppContext<S>>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailedResponse {
    pub message: String,
    pub validation_messages: Vec<String>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.to_string(),
        }
    }
}

/// HTTP status for each fault kind. Conflicts answer 400, matching the published interface.
pub fn status_code(error: &RosterError) -> StatusCode {
    match error {
        RosterError::MalformedRequest { .. }
        | RosterError::ValidationFailed(_)
        | RosterError::Conflict(_)
        | RosterError::InvalidRoute
        | RosterError::InvalidId(_) => StatusCode::BAD_REQUEST,
        RosterError::NotFound(_) => StatusCode::NOT_FOUND,
        RosterError::InternalInconsistency(_) | RosterError::InvalidState(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status = status_code(&self);
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::debug!("Request rejected ({}): {}", status, self);
        }

        let message = self.to_string();
        match self {
            RosterError::ValidationFailed(validation_messages) => (
                status,
                Json(ValidationFailedResponse {
                    message,
                    validation_messages,
                }),
            )
                .into_response(),
            _ => (status, Json(ErrorResponse::new(status, &message))).into_response(),
        }
    }
}

/// Parse an `{id}` path segment.
pub fn parse_id(value: &str) -> Result<Id> {
    value
        .parse::<Id>()
        .map_err(|_| RosterError::InvalidId(value.to_string()))
}

/// `includeDepartment=true` (key and value compared ignoring case, value trimmed).
/// The last occurrence in the query string wins.
pub fn include_department(params: &[(String, String)]) -> bool {
    params
        .iter()
        .rev()
        .find(|(key, _)| key.eq_ignore_ascii_case("includeDepartment"))
        .map(|(_, value)| value.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

pub async fn invalid_route() -> RosterError {
    RosterError::InvalidRoute
}

// Departments

pub async fn list_departments<S: Store>(
    State(ctx): State<AppState<S>>,
) -> Result<Json<Vec<DepartmentResponse>>> {
    DepartmentOperations::list(&ctx.store).map(Json)
}

pub async fn get_department<S: Store>(
    Path(id): Path<String>,
    State(ctx): State<AppState<S>>,
) -> Result<Json<DepartmentResponse>> {
    DepartmentOperations::get(&ctx.store, parse_id(&id)?).map(Json)
}

pub async fn create_department<S: Store>(
    State(ctx): State<AppState<S>>,
    body: Bytes,
) -> Result<Json<DepartmentResponse>> {
    let request = decode(&body)?;
    DepartmentOperations::create(&ctx.store, &ctx.validator, request).map(Json)
}

pub async fn update_department<S: Store>(
    Path(id): Path<String>,
    State(ctx): State<AppState<S>>,
    body: Bytes,
) -> Result<Json<DepartmentResponse>> {
    let id = parse_id(&id)?;
    let request = decode(&body)?;
    DepartmentOperations::update(&ctx.store, &ctx.validator, id, request).map(Json)
}

pub async fn delete_department<S: Store>(
    Path(id): Path<String>,
    State(ctx): State<AppState<S>>,
) -> Result<StatusCode> {
    DepartmentOperations::delete(&ctx.store, parse_id(&id)?)?;
    Ok(StatusCode::OK)
}

pub async fn list_department_employees<S: Store>(
    Path(id): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    State(ctx): State<AppState<S>>,
) -> Result<Json<Vec<EmployeeResponse>>> {
    EmployeeOperations::list_for_department(
        &ctx.store,
        parse_id(&id)?,
        include_department(&params),
    )
    .map(Json)
}

// Employees

pub async fn list_employees<S: Store>(
    Query(params): Query<Vec<(String, String)>>,
    State(ctx): State<AppState<S>>,
) -> Result<Json<Vec<EmployeeResponse>>> {
    EmployeeOperations::list(&ctx.store, include_department(&params)).map(Json)
}

pub async fn get_employee<S: Store>(
    Path(id): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    State(ctx): State<AppState<S>>,
) -> Result<Json<EmployeeResponse>> {
    EmployeeOperations::get(&ctx.store, parse_id(&id)?, include_department(&params)).map(Json)
}

pub async fn create_employee<S: Store>(
    State(ctx): State<AppState<S>>,
    body: Bytes,
) -> Result<Json<EmployeeResponse>> {
    let request = decode(&body)?;
    EmployeeOperations::create(&ctx.store, &ctx.validator, request).map(Json)
}

pub async fn update_employee<S: Store>(
    Path(id): Path<String>,
    State(ctx): State<AppState<S>>,
    body: Bytes,
) -> Result<Json<EmployeeResponse>> {
    let id = parse_id(&id)?;
    let request = decode(&body)?;
    EmployeeOperations::update(&ctx.store, &ctx.validator, id, request).map(Json)
}

pub async fn delete_employee<S: Store>(
    Path(id): Path<String>,
    State(ctx): State<AppState<S>>,
) -> Result<StatusCode> {
    EmployeeOperations::delete(&ctx.store, parse_id(&id)?)?;
    Ok(StatusCode::OK)
}
