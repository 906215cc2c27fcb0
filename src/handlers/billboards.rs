use axum::{extract::State, response::Json};
use common::BillboardListResponse;
use tracing::{debug, instrument};

use crate::schemas::AppState;

/// List every billboard in the catalogue
#[utoipa::path(
    get,
    path = "/api/billboards",
    tag = "billboards",
    responses(
        (status = 200, description = "Billboards retrieved successfully", body = BillboardListResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_billboards(State(state): State<AppState>) -> Json<BillboardListResponse> {
    debug!("Returning {} billboards", state.billboards.len());

    Json(BillboardListResponse {
        success: true,
        data: state.billboards.as_ref().clone(),
        message: None,
    })
}
