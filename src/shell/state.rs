use std::sync::Arc;

use crate::modules::employees::use_cases::render_hours_chart::handler::RenderHoursChartHandler;
use crate::modules::employees::use_cases::view_employee_hours::handler::ViewEmployeeHoursHandler;

#[derive(Clone)]
pub struct AppState {
    pub view_hours: Arc<ViewEmployeeHoursHandler>,
    pub render_chart: Arc<RenderHoursChartHandler>,
}
