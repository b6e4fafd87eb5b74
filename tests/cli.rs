use std::process::{Output, Stdio};

use pretty_assertions::assert_eq;
use tokio::process::Command;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

async fn run_ghactivity(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ghactivity"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("GHA_GITHUB_API_URL")
        .env_remove("GHA_REQUEST_TIMEOUT")
        .env_remove("GHA_TELEMETRY_URL")
        .stdin(Stdio::null())
        .output()
        .await
        .expect("should run ghactivity")
}

async fn mock_status(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/users/octocat/events"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn missing_username_prints_usage_and_exits_1() {
    let output = run_ghactivity(&[]).await;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Usage: ghactivity <username>\nExample: ghactivity octocat\n"
    );
}

#[tokio::test]
async fn fetch_failures_print_only_the_error_line() {
    let cases = [
        (404, "Error: User 'octocat' not found.\n"),
        (403, "Error: API rate limit exceeded. Please try again later.\n"),
        (500, "Error: Unable to fetch data (HTTP 500)\n"),
    ];

    for (status, expected) in cases {
        let server = mock_status(status).await;
        let uri = server.uri();
        let output = run_ghactivity(&["--github-api-url", &uri, "octocat"]).await;

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
        assert_eq!(String::from_utf8_lossy(&output.stderr), "");
    }
}

#[tokio::test]
async fn malformed_event_prints_only_the_error_line() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/users/octocat/events"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"type":"PushEvent","repo":{"name":"octocat/hello-world"},"payload":{}}]"#,
            "application/json",
        ))
        .mount(&server)
        .await;
    let uri = server.uri();

    let output = run_ghactivity(&["--github-api-url", &uri, "octocat", "ignored"]).await;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Error: Malformed PushEvent payload: missing field `commits`\n"
    );
    assert_eq!(String::from_utf8_lossy(&output.stderr), "");
}
