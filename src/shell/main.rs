use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use employee_time_tracker::modules::employees::adapters::outbound::remote_api::RemoteTimeEntryApi;
use employee_time_tracker::modules::employees::use_cases::render_hours_chart::handler::RenderHoursChartHandler;
use employee_time_tracker::modules::employees::use_cases::view_employee_hours::handler::ViewEmployeeHoursHandler;
use employee_time_tracker::shell::config::AppConfig;
use employee_time_tracker::shell::http::router;
use employee_time_tracker::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let source = Arc::new(RemoteTimeEntryApi::new(
        config.api_url.clone(),
        config.api_key.clone(),
    ));

    let state = AppState {
        view_hours: Arc::new(ViewEmployeeHoursHandler::new(
            source.clone(),
            config.reject_negative_durations,
        )),
        render_chart: Arc::new(RenderHoursChartHandler::new(
            source,
            config.reject_negative_durations,
        )),
    };

    let app = router(state);
    let addr: SocketAddr = config.bind_address.parse()?;
    tracing::info!("employee hours report: http://{addr}/");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
