use std::time::Duration;

use egui_kittest::Harness;
use profiles_business::test_utils::sample_users_json;
use profiles_ui::ProfilesApp;
use profiles_ui::state::State;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Time the ehttp thread gets to reach the mock server between frames.
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 200;

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, ProfilesApp>,
}

impl<'a> TestCtx<'a> {
    /// App against a server answering with `count` sample users.
    pub async fn new_app(count: usize) -> Self {
        Self::with_response(ResponseTemplate::new(200).set_body_json(sample_users_json(count)))
            .await
    }

    #[allow(unused)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        Self::with_response(ResponseTemplate::new(status_code)).await
    }

    pub async fn with_response(response: ResponseTemplate) -> Self {
        let mock_server = Self::start_server().await;
        Self::users_mock(response).mount(&mock_server).await;
        Self::with_server(mock_server)
    }

    /// Answers the first two requests (one per source) with `initial`, every later
    /// one with `later`.
    #[allow(unused)]
    pub async fn with_later_response(initial: ResponseTemplate, later: ResponseTemplate) -> Self {
        let mock_server = Self::start_server().await;
        Self::users_mock(initial)
            .up_to_n_times(2)
            .mount(&mock_server)
            .await;
        Self::users_mock(later).mount(&mock_server).await;
        Self::with_server(mock_server)
    }

    async fn start_server() -> MockServer {
        let _ = env_logger::builder().is_test(true).try_init();
        MockServer::start().await
    }

    fn users_mock(response: ResponseTemplate) -> Mock {
        Mock::given(method("GET"))
            .and(path("/api/"))
            .and(query_param("results", "10"))
            .respond_with(response)
    }

    fn with_server(mock_server: MockServer) -> Self {
        let state = State::test(mock_server.uri());
        let app = ProfilesApp::new(state);
        // Tall enough that both tables render every row.
        let harness = Harness::builder()
            .with_size(egui::vec2(1200.0, 2400.0))
            .build_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, ProfilesApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, ProfilesApp> {
        &self.harness
    }

    #[allow(unused)]
    pub async fn request_count(&self) -> usize {
        self.mock_server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }

    /// Steps frames while the network catches up.
    pub async fn settle(&mut self) {
        self.harness.step();
        tokio::time::sleep(Duration::from_millis(DEFAULT_NETWORK_WAIT_MS)).await;
        for _ in 0..10 {
            self.harness.step();
        }
    }
}
