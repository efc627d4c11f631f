use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::employees::adapters::outbound::in_memory::InMemoryTimeEntrySource;
use crate::modules::employees::core::ports::TimeEntrySource;
use crate::modules::employees::use_cases::render_hours_chart::handler::RenderHoursChartHandler;
use crate::modules::employees::use_cases::view_employee_hours::handler::ViewEmployeeHoursHandler;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::records::{TimeEntryRecordBuilder, ts};

const ALICE: &str = "11111111-1111-1111-1111-111111111111";
const BOB: &str = "22222222-2222-2222-2222-222222222222";

fn make_state(source: InMemoryTimeEntrySource) -> AppState {
    let source: Arc<dyn TimeEntrySource + Send + Sync> = Arc::new(source);
    AppState {
        view_hours: Arc::new(ViewEmployeeHoursHandler::new(source.clone(), false)),
        render_chart: Arc::new(RenderHoursChartHandler::new(source, false)),
    }
}

async fn get_root(state: AppState) -> (StatusCode, String) {
    let response = router(state)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn it_should_render_the_aggregated_hours_table() {
    let source = InMemoryTimeEntrySource::new();
    source
        .preload(vec![
            TimeEntryRecordBuilder::new()
                .id(ALICE)
                .employee_name("Alice")
                .start_time_utc(ts("2022-02-22T09:00:00"))
                .end_time_utc(ts("2022-02-22T17:00:00"))
                .build(),
            TimeEntryRecordBuilder::new()
                .id(ALICE)
                .employee_name("Alice")
                .start_time_utc(ts("2022-02-22T18:00:00"))
                .end_time_utc(ts("2022-02-22T19:00:00"))
                .build(),
        ])
        .await;

    let (status, body) = get_root(make_state(source)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<td>Alice</td>"));
    assert!(body.contains("9.00"));
}

#[tokio::test]
async fn it_should_order_rows_by_total_hours_descending() {
    let source = InMemoryTimeEntrySource::new();
    source
        .preload(vec![
            TimeEntryRecordBuilder::new()
                .id(BOB)
                .employee_name("Bob")
                .start_time_utc(ts("2022-02-22T09:00:00"))
                .end_time_utc(ts("2022-02-22T11:30:00"))
                .build(),
            TimeEntryRecordBuilder::new()
                .id(ALICE)
                .employee_name("Alice")
                .start_time_utc(ts("2022-02-22T09:00:00"))
                .end_time_utc(ts("2022-02-22T18:00:00"))
                .build(),
        ])
        .await;

    let (status, body) = get_root(make_state(source)).await;
    assert_eq!(status, StatusCode::OK);
    let alice_at = body.find("Alice").expect("Alice row missing");
    let bob_at = body.find("Bob").expect("Bob row missing");
    assert!(alice_at < bob_at);
}

#[tokio::test]
async fn it_should_render_a_headers_only_table_when_upstream_is_empty() {
    let (status, body) = get_root(make_state(InMemoryTimeEntrySource::new())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<th>Employee</th>"));
    assert!(!body.contains("<td>"));
}

#[tokio::test]
async fn it_should_return_400_with_the_upstream_status_code() {
    let mut source = InMemoryTimeEntrySource::new();
    source.fail_with_status(500);

    let (status, body) = get_root(make_state(source)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Failed to retrieve data. Status code: 500");
}

#[tokio::test]
async fn it_should_return_400_when_the_source_is_offline() {
    let mut source = InMemoryTimeEntrySource::new();
    source.toggle_offline();

    let (status, body) = get_root(make_state(source)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("time entry source offline"));
}
