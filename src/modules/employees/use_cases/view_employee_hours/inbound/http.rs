use axum::extract::State;
use axum::response::Html;
use minijinja::{Environment, context};
use serde::Serialize;

use crate::modules::employees::core::aggregate::AggregatedEmployee;
use crate::modules::employees::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

static EMPLOYEES_TEMPLATE: &str = include_str!("employees.html");

#[derive(Serialize)]
struct EmployeeRow {
    name: String,
    hours: String,
}

pub async fn handle(State(state): State<AppState>) -> Result<Html<String>, ApplicationError> {
    let employees = state.view_hours.handle().await?;
    render_table(&employees)
        .map(Html)
        .map_err(|cause| ApplicationError::Unexpected(cause.to_string()))
}

fn render_table(employees: &[AggregatedEmployee]) -> Result<String, minijinja::Error> {
    let rows: Vec<EmployeeRow> = employees
        .iter()
        .map(|employee| EmployeeRow {
            name: employee.employee_name.clone(),
            hours: format!("{:.2}", employee.total_worked_hours),
        })
        .collect();

    let mut env = Environment::new();
    env.add_template("employees", EMPLOYEES_TEMPLATE)?;
    env.get_template("employees")?
        .render(context! { employees => rows })
}
