use std::time::Duration;

use egui_kittest::Harness;
use ministack_ui::MinistackApp;
use ministack_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a, T = State> {
    mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Let in-flight requests resolve and render their outcomes, including
    /// follow-up refreshes.
    pub async fn wait_for_backend(&mut self) {
        for _ in 0..3 {
            tokio::time::sleep(Duration::from_millis(100)).await;
            self.harness.step();
        }
    }
}

impl<'a> TestCtx<'a, State> {
    /// Harness around a single widget. The closure is responsible for calling
    /// `State::sync`.
    #[allow(unused)]
    pub async fn new(
        mock_server: MockServer,
        app: impl FnMut(&mut egui::Ui, &mut State) + 'a,
    ) -> Self {
        let state = State::test(mock_server.uri()).expect("state should build");
        let harness = Harness::new_ui_state(app, state);

        Self {
            mock_server,
            harness,
        }
    }
}

impl TestCtx<'static, MinistackApp> {
    #[allow(unused)]
    pub async fn new_app(mock_server: MockServer) -> Self {
        let state = State::test(mock_server.uri()).expect("state should build");
        let app = MinistackApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }
}

/// Mock server with a healthy `/health` endpoint already mounted.
pub async fn backend() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "running",
            "database": "healthy",
            "timestamp": "2024-05-01T12:00:00",
        })))
        .mount(&mock_server)
        .await;

    mock_server
}

#[allow(unused)]
pub fn users_json(users: &[(i64, &str)]) -> serde_json::Value {
    serde_json::Value::Array(
        users
            .iter()
            .map(|(id, name)| {
                serde_json::json!({
                    "id": id,
                    "name": name,
                    "email": format!("{}@example.com", name.to_lowercase()),
                    "created_at": "2024-05-01T12:00:00",
                })
            })
            .collect(),
    )
}
