//! Integration tests for the backend-facing commands against a mock server.
//!
//! The binary blocks the test thread, so the mock server needs its own
//! worker threads (`multi_thread` flavor).

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::{TempDir, tempdir};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn maia(home: &TempDir, server: &MockServer) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("maia");
    cmd.env("MAIA_HOME", home.path())
        .env("MAIA_API_URL", server.uri())
        .env_remove("MAIA_LOG");
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sessions_list_prints_sessions() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();
    Mock::given(method("GET"))
        .and(path("/api/sessions/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"session_id": "a", "title": "Chat A"},
            {"session_id": "b", "title": "Chat B"}
        ])))
        .mount(&server)
        .await;

    maia(&home, &server)
        .args(["sessions", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a  Chat A"))
        .stdout(predicate::str::contains("b  Chat B"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sessions_list_reports_http_error() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();
    Mock::given(method("GET"))
        .and(path("/api/sessions/list"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    maia(&home, &server)
        .args(["sessions", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 500"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sessions_new_uses_default_title() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();
    Mock::given(method("POST"))
        .and(path("/api/sessions/create"))
        .and(body_json(json!({"title": "Novo Chat"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"session_id": "s1", "title": "Novo Chat"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    maia(&home, &server)
        .args(["sessions", "new"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created session s1 (Novo Chat)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_history_prints_transcript() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();
    Mock::given(method("GET"))
        .and(path("/api/chat/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"role": "user", "parts": [{"text": "oi"}]},
            {"role": "model", "parts": [{"text": "Olá!"}]}
        ])))
        .mount(&server)
        .await;

    maia(&home, &server)
        .args(["history", "s1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Você: oi"))
        .stdout(predicate::str::contains("Maia: Olá!"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_send_prints_reply() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();
    Mock::given(method("GET"))
        .and(path("/api/chat/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/chat/s1"))
        .and(body_json(json!({"user_prompt": "oi"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "updated_history": [
                {"role": "user", "parts": [{"text": "oi"}]},
                {"role": "model", "parts": [{"text": "Olá!"}]}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    maia(&home, &server)
        .args(["send", "s1", "oi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maia: Olá!"))
        .stdout(predicate::str::contains("Você").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_send_prints_only_new_reply_when_history_fails() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();
    Mock::given(method("GET"))
        .and(path("/api/chat/s1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/chat/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "updated_history": [
                {"role": "user", "parts": [{"text": "pergunta antiga"}]},
                {"role": "model", "parts": [{"text": "resposta antiga"}]},
                {"role": "user", "parts": [{"text": "oi"}]},
                {"role": "model", "parts": [{"text": "Olá!"}]}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    maia(&home, &server)
        .args(["send", "s1", "oi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maia: Olá!"))
        .stdout(predicate::str::contains("resposta antiga").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_send_failure_prints_fallback() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();
    Mock::given(method("GET"))
        .and(path("/api/chat/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/chat/s1"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    maia(&home, &server)
        .args(["send", "s1", "oi"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Desculpe, não consegui me conectar ao backend.",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_send_blank_prompt_fails_without_request() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();
    Mock::given(method("GET"))
        .and(path("/api/chat/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/chat/s1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    maia(&home, &server)
        .args(["send", "s1", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("prompt is empty"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_legacy_mode_round_trip() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(json!({"user_prompt": "oi", "history": []})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "maia_response": "Olá!",
            "updated_history": [
                {"role": "user", "parts": [{"text": "oi"}]},
                {"role": "model", "parts": [{"text": "Olá!"}]}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    maia(&home, &server)
        .arg("legacy")
        .write_stdin("oi\n\n:q\nnever sent\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Maia: Olá!"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_legacy_mode_prints_maia_response() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "maia_response": "Encontrei três resultados.",
            "updated_history": [
                {"role": "user", "parts": [{"text": "pesquise"}]},
                {"role": "model", "parts": [{"function_call": {"name": "pesquisar_na_internet", "args": {}}}]}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    maia(&home, &server)
        .arg("legacy")
        .write_stdin("pesquise\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Maia: Encontrei três resultados."))
        .stdout(predicate::str::contains("pesquisar_na_internet").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_status_prints_backend_status() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "Maia online"})))
        .mount(&server)
        .await;

    maia(&home, &server)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Maia online"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_url_flag_overrides_env() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("maia")
        .env("MAIA_HOME", home.path())
        .env("MAIA_API_URL", "http://127.0.0.1:1")
        .args(["status", "--api-url"])
        .arg(server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn test_chat_rejects_invalid_route() {
    let home = tempdir().unwrap();

    cargo_bin_cmd!("maia")
        .env("MAIA_HOME", home.path())
        .args(["chat", "/chat/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a session id or route"));
}

#[test]
fn test_chat_requires_terminal() {
    let home = tempdir().unwrap();

    cargo_bin_cmd!("maia")
        .env("MAIA_HOME", home.path())
        .args(["chat", "s1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
