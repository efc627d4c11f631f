use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::modules::employees::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApplicationError> {
    let png = state.render_chart.handle().await?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
