use axum::{extract::Path, routing::post, Json, Router};
use serde_json::{json, Value};
use std::fs;
use std::process::Output;
use tempfile::tempdir;
use tokio::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_docs-agent");

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Fake generation service that answers with the prompt it received
fn echo_model() -> Router {
    Router::new().route(
        "/v1beta/models/:action",
        post(|Path(_action): Path<String>, Json(body): Json<Value>| async move {
            let prompt = body["contents"][0]["parts"][0]["text"].clone();
            Json(json!({ "candidates": [{ "content": { "parts": [{ "text": prompt }] } }] }))
        }),
    )
}

fn agent() -> Command {
    let mut cmd = Command::new(BIN);
    for var in [
        "GEMINI_API_KEY",
        "TAVILY_API_KEY",
        "AGENT_MODE",
        "DOCS_DIR",
        "GEMINI_MODEL",
        "GEMINI_BASE_URL",
        "TAVILY_BASE_URL",
        "GENERATION_MAX_RETRIES",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("RUST_LOG", "off");
    // Keep a developer's .env out of the run.
    cmd.current_dir(std::env::temp_dir());
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[tokio::test]
async fn missing_generation_key_fails_before_answering() {
    let output = agent()
        .args(["--mode", "offline", "what is a graph?"])
        .output()
        .await
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr(&output).contains("GEMINI_API_KEY"));
    assert!(stdout(&output).is_empty());
}

#[tokio::test]
async fn missing_mode_is_a_usage_error() {
    let output = agent()
        .env("GEMINI_API_KEY", "k")
        .arg("what is a graph?")
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Usage"));
}

#[tokio::test]
async fn missing_query_is_a_usage_error() {
    let output = agent().args(["--mode", "offline"]).output().await.unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[tokio::test]
async fn offline_answers_from_ranked_documents() {
    let base = serve(echo_model()).await;
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "StateGraph is used for state management").unwrap();
    fs::write(dir.path().join("b.txt"), "MessageGraph is used for messages").unwrap();
    fs::write(dir.path().join("c.txt"), "LangChain builds LLM apps").unwrap();

    let output = agent()
        .env("GEMINI_API_KEY", "k")
        .env("GEMINI_BASE_URL", &base)
        .env("AGENT_MODE", "offline")
        .env("DOCS_DIR", dir.path())
        .args(["--top-k", "1", "state management"])
        .output()
        .await
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let answer = stdout(&output);
    assert!(answer.contains("StateGraph is used for state management"));
    assert!(!answer.contains("MessageGraph"));
}

#[tokio::test]
async fn offline_with_empty_directory_fails() {
    let base = serve(echo_model()).await;
    let dir = tempdir().unwrap();

    let output = agent()
        .env("GEMINI_API_KEY", "k")
        .env("GEMINI_BASE_URL", &base)
        .args(["--mode", "offline", "--data-dir"])
        .arg(dir.path())
        .arg("anything")
        .output()
        .await
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr(&output).contains("no .txt documents"));
}

#[tokio::test]
async fn online_without_search_key_still_answers() {
    let base = serve(echo_model()).await;

    let output = agent()
        .env("GEMINI_API_KEY", "k")
        .env("GEMINI_BASE_URL", &base)
        .args(["--mode", "online", "What is a checkpointer?"])
        .output()
        .await
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let answer = stdout(&output);
    assert!(answer.contains("Question: What is a checkpointer?"));
    assert!(!answer.contains("Web search context"));
}

#[tokio::test]
async fn env_file_supplies_generation_key() {
    let base = serve(echo_model()).await;
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".env"),
        "GEMINI_API_KEY=from-dotenv\nAGENT_MODE=online\nGEMINI_BASE_URL=http://127.0.0.1:9\n",
    )
    .unwrap();

    let output = agent()
        .current_dir(dir.path())
        .env("GEMINI_BASE_URL", &base)
        .arg("What is a checkpointer?")
        .output()
        .await
        .unwrap();

    // Key and mode come from .env; the exported base URL beats the file's.
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Question: What is a checkpointer?"));
}
