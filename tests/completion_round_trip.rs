#![allow(clippy::unwrap_used)]
//! Turn controller tests against a mocked completion endpoint.
//!
//! These go through the real HTTP client, so they cover the request body,
//! the bearer header, and every failure path the controller swallows.

use bavard::chat::{SubmitOutcome, Turn, TurnController};
use bavard::completion::{CompletionBackend, CompletionClient, CompletionError, Message};
use bavard::session::SessionContext;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gpt-3.5-turbo-0613";

fn answer(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    }))
}

fn client(server: &MockServer) -> CompletionClient {
    CompletionClient::new(server.uri(), MODEL.to_string(), Some("sk-test".to_string()))
}

fn context() -> SessionContext {
    SessionContext::new("Alice", "la cuisine").unwrap()
}

#[tokio::test]
async fn test_answer_is_appended_and_input_cleared() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({ "model": MODEL })))
        .respond_with(answer("Bonjour!"))
        .expect(1)
        .mount(&server)
        .await;

    let controller = TurnController::new(context(), client(&server));
    controller.set_input("Comment vas-tu?");

    assert_eq!(controller.submit().await, SubmitOutcome::Answered);
    assert_eq!(
        controller.transcript().turns(),
        &[Turn::user("Comment vas-tu?"), Turn::assistant("Bonjour!")]
    );
    assert_eq!(controller.pending_input(), "");
}

#[tokio::test]
async fn test_request_carries_single_user_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(answer("ok"))
        .mount(&server)
        .await;

    let controller = TurnController::new(context(), client(&server));
    controller.set_input("Une recette?");
    controller.submit().await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body: serde_json::Value = requests[0].body_json().unwrap();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "user");

    let content = messages[0]["content"].as_str().unwrap();
    assert!(content.starts_with("Agis comme un chat bot qui répond aux question de Alice."));
    assert!(content.ends_with("La thématique est la cuisineUne recette?"));
}

#[tokio::test]
async fn test_server_error_leaves_state_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    let controller = TurnController::new(context(), client(&server));
    controller.set_input("test");

    assert_eq!(controller.submit().await, SubmitOutcome::Failed);
    assert!(controller.transcript().is_empty());
    assert_eq!(controller.pending_input(), "test");
}

#[tokio::test]
async fn test_missing_content_leaves_state_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let controller = TurnController::new(context(), client(&server));
    controller.set_input("test");

    assert_eq!(controller.submit().await, SubmitOutcome::Failed);
    assert!(controller.transcript().is_empty());
    assert_eq!(controller.pending_input(), "test");
}

#[tokio::test]
async fn test_unreachable_endpoint_leaves_state_unchanged() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let controller = TurnController::new(
        context(),
        CompletionClient::new(uri, MODEL.to_string(), None),
    );
    controller.set_input("test");

    assert_eq!(controller.submit().await, SubmitOutcome::Failed);
    assert!(controller.transcript().is_empty());
    assert_eq!(controller.pending_input(), "test");
}

#[tokio::test]
async fn test_retry_after_failure_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(answer("Enfin!"))
        .mount(&server)
        .await;

    let controller = TurnController::new(context(), client(&server));
    controller.set_input("Tu es là?");

    assert_eq!(controller.submit().await, SubmitOutcome::Failed);
    assert_eq!(controller.submit().await, SubmitOutcome::Answered);
    assert_eq!(
        controller.transcript().render_lines(),
        vec!["Vous : Tu es là?", "Réponse de l'IA : Enfin!"]
    );
}

#[tokio::test]
async fn test_client_reports_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let err = client(&server)
        .complete(&[Message::user("salut")])
        .await
        .unwrap_err();

    match err {
        CompletionError::Status { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_without_key_sends_no_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(answer("ok"))
        .mount(&server)
        .await;

    let client = CompletionClient::new(server.uri(), MODEL.to_string(), None);
    assert_eq!(client.complete(&[Message::user("salut")]).await.unwrap(), "ok");

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}
