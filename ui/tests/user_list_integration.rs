//! Loading, refreshing and deleting users through the full app window.

mod common;

use common::{TestCtx, backend, users_json};
use kittest::Queryable;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn users_are_loaded_when_the_app_starts() {
    let server = backend().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(users_json(&[(1, "Ada"), (2, "Bo")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = TestCtx::new_app(server).await;
    ctx.harness_mut().step();
    ctx.wait_for_backend().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("Users (2)").is_some());
    assert!(harness.query_by_label("Ada").is_some());
    assert!(harness.query_by_label("bo@example.com").is_some());
    assert!(harness.query_by_label("ID: 2").is_some());
    assert!(
        harness
            .query_by_label_contains("Joined: 2024-05-01")
            .is_some()
    );
}

#[tokio::test]
async fn refresh_button_fetches_again() {
    let server = backend().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_json(&[(1, "Ada")])))
        .expect(2)
        .mount(&server)
        .await;

    let mut ctx = TestCtx::new_app(server).await;
    ctx.harness_mut().step();
    ctx.wait_for_backend().await;

    ctx.harness_mut().get_by_label("Refresh").click();
    ctx.harness_mut().step();
    ctx.wait_for_backend().await;

    assert!(ctx.harness_mut().query_by_label("Users (1)").is_some());
}

#[tokio::test]
async fn empty_list_shows_hint() {
    let server = backend().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let mut ctx = TestCtx::new_app(server).await;
    ctx.harness_mut().step();
    ctx.wait_for_backend().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("Users (0)").is_some());
    assert!(
        harness
            .query_by_label_contains("No users found")
            .is_some()
    );
}

#[tokio::test]
async fn failed_load_shows_error_banner() {
    let server = backend().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut ctx = TestCtx::new_app(server).await;
    ctx.harness_mut().step();
    ctx.wait_for_backend().await;

    let harness = ctx.harness_mut();
    assert!(
        harness
            .query_by_label("Failed to load the user list.")
            .is_some()
    );
    assert!(harness.query_by_label("Refresh").is_some());
}

#[tokio::test]
async fn delete_button_removes_user_and_refreshes() {
    let server = backend().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_json(&[(42, "Ada")])))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/users/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = TestCtx::new_app(server).await;
    ctx.harness_mut().step();
    ctx.wait_for_backend().await;
    assert!(ctx.harness_mut().query_by_label("Users (1)").is_some());

    ctx.harness_mut().get_by_label("Delete").click();
    ctx.harness_mut().step();
    ctx.wait_for_backend().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("User deleted successfully.").is_some());
    assert!(harness.query_by_label("Users (0)").is_some());
}
