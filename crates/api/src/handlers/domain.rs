use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use dnsrecon_application::use_cases::ReconError;
use dnsrecon_domain::DomainData;
use tracing::{error, instrument, warn};

/// Best-effort `DomainData` for one domain.
///
/// No free client within the checkout timeout is a 503 with an empty body;
/// failing to get a second client for the retry is a 500.
#[instrument(skip(state), name = "api_get_domain")]
pub async fn get_domain(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<DomainData>, (StatusCode, String)> {
    match state.recon.execute(&domain).await {
        Ok(data) => Ok(Json(data)),
        Err(ReconError::PoolExhausted(e)) => {
            warn!(error = %e, "No DNS client available");
            Err((StatusCode::SERVICE_UNAVAILABLE, String::new()))
        }
        Err(e @ ReconError::RetryTimeout(_)) => {
            error!(error = %e, "Retry with second client failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
