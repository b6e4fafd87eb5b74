use pretty_assertions::assert_eq;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

use crate::{activity, config::Config, service::ServiceHandler};

use super::models::EventRecord;

const EVENTS_SAMPLE: &str = include_str!("./events_sample.json");

const EXPECTED_REPORT: &str = "Recent GitHub Activity:
----------------------------------------
- Pushed 2 commits to octocat/Hello-World
- Opened a new issue in octocat/Hello-World: \"Found a bug when rendering very long titles in the...\"
- Merged a pull request in octocat/Hello-World: \"Add contributing guide\"
- Created branch 'feature/docs' in octocat/Spoon-Knife
- Published release 'v1.0.0' in octocat/Spoon-Knife
- Starred rust-lang/rust
- Performed public action in octocat/Spoon-Knife
";

async fn test_services() -> (MockServer, ServiceHandler) {
    let mut config = Config::empty();
    let server = MockServer::start().await;
    config.set_github_api_url(server.uri());

    let services = ServiceHandler::new_defaults(&config).unwrap();
    (server, services)
}

#[test]
fn test_parse_events_sample() {
    let events: Vec<EventRecord> = serde_json::from_str(EVENTS_SAMPLE).expect("should deserialize");
    let lines = activity::format_events(&events).expect("should format");

    assert_eq!(lines.len(), events.len());
}

#[tokio::test]
async fn test_user_activity_report() {
    let (server, services) = test_services().await;

    Mock::given(matchers::method("GET"))
        .and(matchers::path("/users/octocat/events"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(EVENTS_SAMPLE, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(
        activity::user_activity(&services, "octocat").await.unwrap(),
        EXPECTED_REPORT
    );
}

#[tokio::test]
async fn test_user_activity_user_not_found() {
    let (server, services) = test_services().await;

    Mock::given(matchers::method("GET"))
        .and(matchers::path("/users/octocat/events"))
        .respond_with(ResponseTemplate::new(404).set_body_raw(
            r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let err = activity::user_activity(&services, "octocat")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Error: User 'octocat' not found.");
}

#[tokio::test]
async fn test_user_activity_rate_limited() {
    let (server, services) = test_services().await;

    Mock::given(matchers::method("GET"))
        .and(matchers::path("/users/octocat/events"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let err = activity::user_activity(&services, "octocat")
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error: API rate limit exceeded. Please try again later."
    );
}
