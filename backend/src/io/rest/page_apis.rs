//! # HTML Page Endpoints
//!
//! Browser-facing routes. Form submissions register through the novena
//! service and re-render the same form with a confirmation.

use axum::{
    extract::{Path, State},
    response::Html,
    Form,
};
use shared::{RegisterDonationRequest, RegisterNovenaRequest};
use tokio::task;
use tracing::info;

use super::{pages, parse_novena_id, ApiError};
use crate::AppState;

/// GET /
pub async fn home() -> Html<String> {
    info!("GET /");
    Html(pages::home_page())
}

/// GET /list
pub async fn list_page(State(state): State<AppState>) -> Html<String> {
    info!("GET /list");
    let novenas = state.novena_service.list_novenas();
    Html(pages::novena_list_page(&novenas))
}

/// GET /novena-cad
pub async fn novena_form() -> Html<String> {
    info!("GET /novena-cad");
    Html(pages::novena_form_page(None))
}

/// POST /novena-cad
pub async fn submit_novena(
    State(state): State<AppState>,
    Form(request): Form<RegisterNovenaRequest>,
) -> Result<Html<String>, ApiError> {
    info!("POST /novena-cad - request: {:?}", request);

    let service = state.novena_service.clone();
    let result = task::spawn_blocking(move || service.register_novena(request.into())).await??;
    let message = if result.created {
        format!("Novena cadastrada: {} (ID {})", result.novena.name, result.novena.id)
    } else {
        format!("A novena {} já existe (ID {})", result.novena.name, result.novena.id)
    };

    Ok(Html(pages::novena_form_page(Some(&message))))
}

/// GET /donation-cad
pub async fn donation_form() -> Html<String> {
    info!("GET /donation-cad");
    Html(pages::donation_form_page(None))
}

/// POST /donation-cad
pub async fn submit_donation(
    State(state): State<AppState>,
    Form(request): Form<RegisterDonationRequest>,
) -> Result<Html<String>, ApiError> {
    info!("POST /donation-cad - request: {:?}", request);

    let service = state.novena_service.clone();
    let novena =
        task::spawn_blocking(move || service.register_donation(request.into())).await??;
    let message = format!("Doação registrada na novena {} (ID {})", novena.name, novena.id);

    Ok(Html(pages::donation_form_page(Some(&message))))
}

/// GET /print-novena/:id
pub async fn print_novena(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, ApiError> {
    info!("GET /print-novena/{}", raw_id);

    let id = parse_novena_id(&raw_id)?;
    let novena = state
        .novena_service
        .get_novena(id)
        .ok_or(ApiError::NotFound(id))?;

    Ok(Html(pages::novena_print_page(&novena)))
}
