use campusdesk_ui::state::AppState;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Roles granted by the mocked `currentUser` endpoint.
#[allow(unused)]
pub enum MockUser {
    Admin,
    Regular,
}

/// Start a mock backend with the ambient endpoints mounted and build an
/// [`AppState`] pointing at it.
pub async fn setup_state(user: MockUser) -> (MockServer, AppState) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    let roles = match user {
        MockUser::Admin => serde_json::json!(["ROLE_ADMIN", "ROLE_USER"]),
        MockUser::Regular => serde_json::json!(["ROLE_USER"]),
    };

    Mock::given(method("GET"))
        .and(path("/api/currentUser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": { "email": "phtcon@example.edu", "fullName": "Phill Conrad" },
            "roles": roles,
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/systemInfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "commitId": "abc1234"
        })))
        .mount(&mock_server)
        .await;

    let state = AppState::test(mock_server.uri());
    (mock_server, state)
}
