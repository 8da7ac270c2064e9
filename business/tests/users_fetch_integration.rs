//! Both users sources against a mock random-user server over real HTTP.

#![cfg(not(target_arch = "wasm32"))]

use std::sync::Arc;
use std::time::Duration;

use profiles_business::{
    DirectUserSource, EhttpFetcher, FetchState, ProfilesConfig, QueryUserSource, SourceView,
    UserSource, register,
};
use profiles_states::StateCtx;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn jane_doe() -> serde_json::Value {
    serde_json::json!({
        "results": [{
            "login": { "uuid": "a1" },
            "name": { "first": "Jane", "last": "Doe" },
            "email": "j@x.com",
            "phone": "555",
            "location": { "country": "US" },
            "picture": { "thumbnail": "http://x/p.png" }
        }]
    })
}

async fn setup(response: ResponseTemplate) -> (MockServer, StateCtx) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("results", "10"))
        .respond_with(response)
        .mount(&mock_server)
        .await;

    let mut ctx = StateCtx::new();
    register(
        &mut ctx,
        ProfilesConfig::new(mock_server.uri()),
        FetchState::new(Arc::new(EhttpFetcher)),
    );
    (mock_server, ctx)
}

/// Polls until `done` holds or roughly two seconds pass.
async fn settle(
    source: &mut impl UserSource,
    ctx: &mut StateCtx,
    done: impl Fn(&SourceView<'_>) -> bool,
) {
    for _ in 0..40 {
        source.poll(ctx);
        if done(&source.current(ctx)) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

#[tokio::test]
async fn direct_source_publishes_example_record() {
    let (_server, mut ctx) = setup(ResponseTemplate::new(200).set_body_json(jane_doe())).await;
    let mut source = DirectUserSource::new();

    source.activate(&mut ctx);
    settle(&mut source, &mut ctx, |view| {
        view.users().is_some_and(|users| !users.is_empty())
    })
    .await;

    let users = source.current(&ctx).users().expect("direct source is always ready");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Jane Doe");
    assert_eq!(users[0].email, "j@x.com");
    assert_eq!(users[0].phone, "555");
    assert_eq!(users[0].country, "US");
    assert_eq!(users[0].picture_url, "http://x/p.png");
}

#[tokio::test]
async fn direct_source_swallows_server_error() {
    let (_server, mut ctx) = setup(ResponseTemplate::new(500)).await;
    let mut source = DirectUserSource::new();

    source.activate(&mut ctx);
    tokio::time::sleep(Duration::from_millis(300)).await;
    source.poll(&mut ctx);

    assert_eq!(source.current(&ctx), SourceView::Ready(&[]));
}

#[tokio::test]
async fn query_source_reaches_ready() {
    let (server, mut ctx) = setup(ResponseTemplate::new(200).set_body_json(jane_doe())).await;
    let mut source = QueryUserSource::new();

    source.activate(&mut ctx);
    assert_eq!(source.current(&ctx), SourceView::Loading);
    settle(&mut source, &mut ctx, |view| matches!(view, SourceView::Ready(_))).await;

    let users = source.current(&ctx).users().expect("ready");
    assert_eq!(users[0].id, "a1");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1, "one request per query key");
}

#[tokio::test]
async fn query_source_reports_malformed_body() {
    let (_server, mut ctx) = setup(
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [{ "email": "x" }] })),
    )
    .await;
    let mut source = QueryUserSource::new();

    source.activate(&mut ctx);
    settle(&mut source, &mut ctx, |view| matches!(view, SourceView::Error(_))).await;

    match source.current(&ctx) {
        SourceView::Error(message) => assert!(message.starts_with("malformed response")),
        other => panic!("expected error, got {other:?}"),
    }
}
