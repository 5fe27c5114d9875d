//! # REST API for Novenas
//!
//! JSON endpoints mirroring the HTML forms.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::{
    NovenaListResponse, RegisterDonationRequest, RegisterDonationResponse, RegisterNovenaRequest,
    RegisterNovenaResponse,
};
use tokio::task;
use tracing::info;

use super::{parse_novena_id, ApiError};
use crate::AppState;

/// List all novenas
pub async fn list_novenas(State(state): State<AppState>) -> Json<NovenaListResponse> {
    info!("GET /api/novenas");

    let novenas = state.novena_service.list_novenas();
    info!("Found {} novenas", novenas.len());

    Json(NovenaListResponse { novenas })
}

/// Get a novena by ID
pub async fn get_novena(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/novenas/{}", raw_id);

    let id = parse_novena_id(&raw_id)?;
    let novena = state
        .novena_service
        .get_novena(id)
        .ok_or(ApiError::NotFound(id))?;

    Ok(Json(novena))
}

/// Register a novena; an existing name is returned unchanged with 200
pub async fn create_novena(
    State(state): State<AppState>,
    Json(request): Json<RegisterNovenaRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/novenas - request: {:?}", request);

    let service = state.novena_service.clone();
    let result = task::spawn_blocking(move || service.register_novena(request.into())).await??;
    let (status, success_message) = if result.created {
        (StatusCode::CREATED, "Novena created successfully")
    } else {
        (StatusCode::OK, "Novena already exists")
    };

    Ok((
        status,
        Json(RegisterNovenaResponse {
            novena: result.novena,
            created: result.created,
            success_message: success_message.to_string(),
        }),
    ))
}

/// Register a donation, creating its novena on first use
pub async fn create_donation(
    State(state): State<AppState>,
    Json(request): Json<RegisterDonationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/donations - request: {:?}", request);

    let service = state.novena_service.clone();
    let novena =
        task::spawn_blocking(move || service.register_donation(request.into())).await??;

    Ok((
        StatusCode::CREATED,
        Json(RegisterDonationResponse {
            novena,
            success_message: "Donation registered successfully".to_string(),
        }),
    ))
}
