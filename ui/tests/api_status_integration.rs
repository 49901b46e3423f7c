//! Health indicator in the top bar.

mod common;

use common::{TestCtx, backend};
use ministack_business::APIAvailability;
use ministack_ui::utils::colors::{COLOR_AMBER, COLOR_GREEN};
use ministack_ui::widgets;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn healthy_backend_turns_the_dot_green() {
    let mut ctx = TestCtx::new(backend().await, |ui, state| {
        state.sync();
        widgets::api_status(&state.api_status, ui);
    })
    .await;

    ctx.harness_mut().state_mut().check_api_status();
    ctx.harness_mut().step();
    ctx.wait_for_backend().await;

    let harness = ctx.harness_mut();
    let status = harness.state().api_status.state();
    assert!(matches!(
        status.api_availability(),
        APIAvailability::Available(_)
    ));
    let (tooltip, color) = widgets::api_status_info(status);
    assert!(tooltip.contains("api: running"));
    assert!(tooltip.contains("database: healthy"));
    assert_eq!(color, COLOR_GREEN);
}

#[tokio::test]
async fn database_error_turns_the_dot_amber() {
    let _ = env_logger::builder().is_test(true).try_init();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "running",
            "database": "error: connection refused",
            "timestamp": "2024-05-01T12:00:00",
        })))
        .mount(&server)
        .await;

    let mut ctx = TestCtx::new(server, |ui, state| {
        state.sync();
        widgets::api_status(&state.api_status, ui);
    })
    .await;

    ctx.harness_mut().state_mut().check_api_status();
    ctx.harness_mut().step();
    ctx.wait_for_backend().await;

    let status = ctx.harness_mut().state().api_status.state();
    assert!(matches!(
        status.api_availability(),
        APIAvailability::Available(_)
    ));
    let (tooltip, color) = widgets::api_status_info(status);
    assert!(tooltip.contains("database: error: connection refused"));
    assert_eq!(color, COLOR_AMBER);
}

#[tokio::test]
async fn failing_backend_turns_the_dot_red() {
    let _ = env_logger::builder().is_test(true).try_init();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = TestCtx::new(server, |ui, state| {
        state.sync();
        widgets::api_status(&state.api_status, ui);
    })
    .await;

    ctx.harness_mut().state_mut().check_api_status();
    ctx.harness_mut().state_mut().check_api_status();
    ctx.harness_mut().step();
    ctx.wait_for_backend().await;

    let status = ctx.harness_mut().state().api_status.state();
    match status.api_availability() {
        APIAvailability::Unavailable((_, err)) => assert!(err.contains("503")),
        _ => panic!("expected the backend to be reported unavailable"),
    }
}
