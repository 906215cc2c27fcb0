use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use common::{
    BillboardDto, DetailedData, ErrorResponse, HistoricalData, PredictionResponse,
};
use compute::{
    default_impression_model,
    error::ComputeError,
    impressions::{historical_summary, prediction_data},
};
use model::{FORECAST_DAYS, PAST_DAYS};
use tracing::{debug, error, info, instrument, warn};

use crate::catalog::find_billboard;
use crate::schemas::AppState;

type ErrorReply = (StatusCode, Json<ErrorResponse>);

/// Get the 60-day history and 7-day impression forecast of a billboard
#[utoipa::path(
    get,
    path = "/api/predict/{billboard_id}",
    tag = "predictions",
    params(
        ("billboard_id" = String, Path, description = "Billboard code (e.g. B001) or numeric id"),
    ),
    responses(
        (status = 200, description = "Prediction computed successfully", body = PredictionResponse),
        (status = 404, description = "Billboard not found", body = ErrorResponse),
        (status = 500, description = "Prediction failed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_prediction(
    Path(billboard_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<PredictionResponse>, ErrorReply> {
    let Some(billboard) = find_billboard(&state.billboards, &billboard_id) else {
        warn!("Billboard {} not found", billboard_id);
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Billboard not found")),
        ));
    };

    match build_prediction(&state, billboard) {
        Ok(response) => {
            info!("Prediction computed for {}", response.billboard_id);
            Ok(Json(response))
        }
        Err(e) => {
            error!("Failed to compute prediction for {}: {}", billboard_id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to get prediction data")),
            ))
        }
    }
}

fn build_prediction(
    state: &AppState,
    billboard: &BillboardDto,
) -> Result<PredictionResponse, ComputeError> {
    let impressions = default_impression_model(state.today);
    debug!("Computing prediction for {} as of {}", billboard.billboard_id, impressions.today());

    let history = impressions.history(billboard.id, PAST_DAYS)?;
    let forecast = impressions.forecast(&history, FORECAST_DAYS)?;

    let past_60_days = history.iter().map(|day| day.impressions).collect();
    let predicted_7_days = forecast.iter().map(|day| day.predicted_impressions).collect();
    let summary = historical_summary(&history);

    Ok(PredictionResponse {
        success: true,
        billboard_id: billboard.billboard_id.clone(),
        billboard: Some(billboard.clone()),
        past_60_days,
        predicted_7_days,
        detailed_data: DetailedData {
            historical_data: HistoricalData {
                data: history,
                summary,
            },
            prediction: prediction_data(forecast),
        },
        message: None,
    })
}
