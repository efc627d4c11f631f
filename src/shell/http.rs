use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::employees::use_cases::render_hours_chart::inbound::http as chart_http;
use crate::modules::employees::use_cases::view_employee_hours::inbound::http as view_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(view_http::handle))
        .route("/chart", get(chart_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
