use serde::{de::IgnoredAny, Deserialize};
use serde_json::Value;

/// One entry of the `/users/{username}/events` response, kept as raw JSON.
///
/// Fields are only checked when the record is turned into an
/// [`Event`](crate::activity::Event).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct EventRecord(Value);

impl EventRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The `type` tag, when present and a string.
    pub fn kind(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// The `payload` object, or `null` when absent.
    pub fn payload(&self) -> &Value {
        self.0.get("payload").unwrap_or(&Value::Null)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for EventRecord {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: Repository,
}

#[derive(Debug, Deserialize)]
pub struct Repository {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PushPayload {
    pub commits: Vec<IgnoredAny>,
}

#[derive(Debug, Deserialize)]
pub struct IssuesPayload {
    pub action: String,
    pub issue: Issue,
}

#[derive(Debug, Deserialize)]
pub struct Issue {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatePayload {
    pub ref_type: String,
    #[serde(rename = "ref")]
    pub reference: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeletePayload {
    pub ref_type: String,
    #[serde(rename = "ref")]
    pub reference: String,
}

#[derive(Debug, Deserialize)]
pub struct PullRequestPayload {
    pub action: String,
    pub pull_request: PullRequest,
}

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub title: String,
    pub merged: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ReleasePayload {
    pub action: String,
    pub release: Release,
}

#[derive(Debug, Deserialize)]
pub struct Release {
    pub name: Option<String>,
    pub tag_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ActionPayload {
    pub action: String,
}

#[derive(Debug, Deserialize)]
pub struct MemberPayload {
    pub action: String,
    pub member: Member,
}

#[derive(Debug, Deserialize)]
pub struct Member {
    pub login: String,
}
