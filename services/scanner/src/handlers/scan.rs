use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use types::report::ScanReport;

#[derive(Debug, Deserialize)]
pub struct ScanParams {
    pub url: Option<String>,
}

/// Run one accessibility scan against the target URL.
///
/// 200 with `{issues, summary}` on success; 400 on missing/invalid input;
/// 500 when the browser or the audit fails.
pub async fn run_scan(
    State(state): State<AppState>,
    Query(params): Query<ScanParams>,
) -> Result<Json<ScanReport>, AppError> {
    let raw_url = params.url.ok_or(AppError::MissingUrl)?;

    // Browser processes are heavy; hold a permit for the whole scan.
    let _permit = state
        .scan_permits
        .acquire()
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("scan permits closed: {e}")))?;

    let issues = state.orchestrator.scan(&raw_url).await?;
    Ok(Json(ScanReport::new(issues)))
}
