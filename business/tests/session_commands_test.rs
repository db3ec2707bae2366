//! Integration tests for the current-user query and the backend health probe.

use std::time::Duration;

use campusdesk_business::{
    BackendAvailability, BackendStatus, BusinessConfig, FetchCurrentUser, PingBackend, Role,
    SessionCache,
};
use campusdesk_states::StateCtx;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup_ctx() -> (MockServer, StateCtx) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    let mut ctx = StateCtx::new();
    ctx.add_state(BusinessConfig::new(mock_server.uri()));
    ctx.register_compute::<SessionCache>();
    ctx.register_compute::<BackendStatus>();

    (mock_server, ctx)
}

async fn sync_until(ctx: &mut StateCtx, done: impl Fn(&StateCtx) -> bool) {
    for _ in 0..100 {
        ctx.sync();
        if done(ctx) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("condition not reached before timeout");
}

#[tokio::test]
async fn test_current_user_roles_gate_admin_checks() {
    let (mock_server, mut ctx) = setup_ctx().await;

    Mock::given(method("GET"))
        .and(path("/api/currentUser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": {
                "email": "phtcon@example.edu",
                "fullName": "Phill Conrad"
            },
            "roles": ["ROLE_USER", "ROLE_ADMIN"]
        })))
        .mount(&mock_server)
        .await;

    ctx.dispatch(FetchCurrentUser);
    sync_until(&mut ctx, |ctx| {
        ctx.cached::<SessionCache>()
            .is_some_and(|session| session.user().is_some())
    })
    .await;

    let session = ctx.cached::<SessionCache>().unwrap();
    let user = session.user().unwrap();
    assert_eq!(user.email, "phtcon@example.edu");
    assert!(user.has_role(Role::Admin));
    assert!(session.is_admin());
}

#[tokio::test]
async fn test_unauthenticated_response_leaves_an_error() {
    let (mock_server, mut ctx) = setup_ctx().await;

    Mock::given(method("GET"))
        .and(path("/api/currentUser"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    ctx.dispatch(FetchCurrentUser);
    sync_until(&mut ctx, |ctx| {
        ctx.cached::<SessionCache>()
            .is_some_and(|session| session.status.error_message().is_some())
    })
    .await;

    let session = ctx.cached::<SessionCache>().unwrap();
    assert!(!session.is_admin());
    assert_eq!(
        session.status.error_message(),
        Some("API returned status: 403")
    );
}

#[tokio::test]
async fn test_ping_reports_backend_commit() {
    let (mock_server, mut ctx) = setup_ctx().await;

    Mock::given(method("GET"))
        .and(path("/api/systemInfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "commitId": "abc1234"
        })))
        .mount(&mock_server)
        .await;

    ctx.dispatch(PingBackend);
    sync_until(&mut ctx, |ctx| {
        ctx.cached::<BackendStatus>()
            .is_some_and(|status| status.availability != BackendAvailability::Checking)
    })
    .await;

    let status = ctx.cached::<BackendStatus>().unwrap();
    assert_eq!(
        status.availability,
        BackendAvailability::Available {
            commit: Some("abc1234".to_owned())
        }
    );
}
