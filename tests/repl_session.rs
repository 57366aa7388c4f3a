//! End-to-end prompt sessions against a mock search endpoint.

use std::sync::{Arc, Mutex};

use searchit::render::NO_RESULTS;
use searchit_client::{ClientConfig, HttpBackend, Notifier, PagerConfig, ResultsPager};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Clone, Default)]
struct Alerts(Arc<Mutex<Vec<String>>>);

impl Notifier for Alerts {
    fn alert(&self, message: &str) {
        self.0.lock().expect("lock").push(message.to_owned());
    }
}

async fn mount_page(server: &MockServer, query: &str, page: u32, total_pages: u32) {
    let results: Vec<_> = (0..2)
        .map(|i| {
            json!({
                "title": format!("{query} p{page} #{i}"),
                "url": format!("https://example.com/{page}/{i}"),
                "snippet": "snippet",
            })
        })
        .collect();
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", query))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": results,
            "page": page,
            "total_pages": total_pages,
        })))
        .mount(server)
        .await;
}

async fn run_session(
    server: &MockServer,
    script: &str,
) -> (String, Alerts, ResultsPager<HttpBackend, Alerts>) {
    run_session_at(server, &PagerConfig::default(), script).await
}

async fn run_session_at(
    server: &MockServer,
    ui: &PagerConfig,
    script: &str,
) -> (String, Alerts, ResultsPager<HttpBackend, Alerts>) {
    let client = ClientConfig {
        endpoint: format!("{}/search", server.uri()),
        timeout_seconds: 5,
        user_agent: None,
    };
    let alerts = Alerts::default();
    let mut pager = ResultsPager::new(
        HttpBackend::new(&client).expect("backend"),
        alerts.clone(),
        ui,
    )
    .expect("pager");

    let mut output: Vec<u8> = Vec::new();
    searchit::repl::run(&mut pager, script.as_bytes(), &mut output)
        .await
        .expect("session");
    (String::from_utf8(output).expect("utf8"), alerts, pager)
}

#[tokio::test]
async fn search_then_page_forward_and_back() {
    let server = MockServer::start().await;
    for page in 1..=3 {
        mount_page(&server, "rust", page, 3).await;
    }

    let (out, alerts, pager) = run_session(&server, "rust\n:n\n:n\n:back\n:url\n:q\n").await;

    assert!(out.contains("rust p1 #0"));
    assert!(out.contains("(1)  2  3  [Next]"));
    assert!(out.contains("[Previous]  1  2  (3)"));
    assert!(out.contains("http://localhost:3000/?q=rust&page=2"));
    assert_eq!(pager.state().current_page, 2);
    assert!(alerts.0.lock().expect("lock").is_empty());
}

#[tokio::test]
async fn empty_result_set_prints_notice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [],
            "page": 1,
            "total_pages": 0,
        })))
        .mount(&server)
        .await;

    let (out, _, pager) = run_session(&server, "zzzz\n").await;
    assert!(out.contains(NO_RESULTS));
    assert!(pager.window().is_empty());
}

#[tokio::test]
async fn failed_request_alerts_and_keeps_prompt_running() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (out, alerts, pager) = run_session(&server, "rust\n:help\n").await;
    assert_eq!(alerts.0.lock().expect("lock").len(), 1);
    assert!(pager.state().results.is_empty());
    assert!(out.contains(":page N"));
}

#[tokio::test]
async fn bad_commands_are_reported_without_requests() {
    let server = MockServer::start().await;
    let (out, _, pager) = run_session(&server, ":page x\n:wat\n:page 3\n:q\n").await;

    assert!(out.contains("error: not a page number: x"));
    assert!(out.contains("error: unknown command :wat"));
    assert!(!pager.state().searched);
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn open_url_without_query_resets() {
    let server = MockServer::start().await;
    mount_page(&server, "rust", 1, 1).await;

    let (_, _, pager) =
        run_session(&server, "rust\n:open http://localhost:3000/?page=4\n").await;
    assert_eq!(pager.state(), &searchit_client::SearchState::default());
}

#[tokio::test]
async fn page_url_with_query_loads_before_first_prompt() {
    let server = MockServer::start().await;
    mount_page(&server, "rust", 2, 4).await;

    let ui = PagerConfig {
        page_url: "http://localhost:3000/?q=rust&page=2".into(),
        ..PagerConfig::default()
    };
    let (out, alerts, pager) = run_session_at(&server, &ui, "").await;

    assert!(out.starts_with("Loading...\nrust p2 #0"));
    assert!(out.contains("[Previous]  1  (2)  3  4  [Next]"));
    assert!(out.ends_with("> "));
    assert_eq!(pager.state().query, "rust");
    assert_eq!(pager.state().current_page, 2);
    assert_eq!(pager.history().len(), 1);
    assert!(alerts.0.lock().expect("lock").is_empty());
    assert_eq!(server.received_requests().await.unwrap_or_default().len(), 1);
}

#[tokio::test]
async fn page_url_without_query_starts_at_prompt() {
    let server = MockServer::start().await;
    let (out, _, _) = run_session(&server, "").await;

    assert_eq!(out, "> ");
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
