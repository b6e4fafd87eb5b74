use serde::Deserialize;
use serde_json::Value;

use crate::backends::github::{
    ActionPayload, CreatePayload, DeletePayload, Envelope, EventRecord, IssuesPayload,
    MemberPayload, PullRequestPayload, PushPayload, ReleasePayload,
};

use super::MalformedEventError;

/// A validated event: the repository it happened in and what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub repo: String,
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Push {
        commit_count: usize,
    },
    Issues {
        action: String,
        title: String,
    },
    Watch,
    Fork,
    Create(CreatedRef),
    Delete {
        ref_type: String,
        reference: String,
    },
    PullRequest {
        action: String,
        title: String,
        merged: bool,
    },
    Release {
        action: String,
        name: String,
    },
    IssueComment,
    PullRequestReview {
        action: String,
    },
    Member {
        action: String,
        login: String,
    },
    /// Any tag outside the catalog, kept verbatim.
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatedRef {
    Repository,
    Branch(String),
    Tag(String),
    Other(String),
}

impl TryFrom<&EventRecord> for Event {
    type Error = MalformedEventError;

    fn try_from(record: &EventRecord) -> Result<Self, Self::Error> {
        let envelope =
            Envelope::deserialize(record.as_value()).map_err(MalformedEventError::MalformedRecord)?;
        let kind = EventKind::parse(&envelope.kind, record.payload())?;

        Ok(Self {
            repo: envelope.repo.name,
            kind,
        })
    }
}

impl EventKind {
    fn parse(kind: &str, payload: &Value) -> Result<Self, MalformedEventError> {
        let parsed = match kind {
            "PushEvent" => {
                let p: PushPayload = parse_payload(kind, payload)?;
                Self::Push {
                    commit_count: p.commits.len(),
                }
            }
            "IssuesEvent" => {
                let p: IssuesPayload = parse_payload(kind, payload)?;
                Self::Issues {
                    action: p.action,
                    title: p.issue.title,
                }
            }
            "WatchEvent" => Self::Watch,
            "ForkEvent" => Self::Fork,
            "CreateEvent" => {
                let p: CreatePayload = parse_payload(kind, payload)?;
                let created = match p.ref_type.as_str() {
                    "repository" => CreatedRef::Repository,
                    "branch" => CreatedRef::Branch(required_ref(kind, p.reference)?),
                    "tag" => CreatedRef::Tag(required_ref(kind, p.reference)?),
                    other => CreatedRef::Other(other.to_owned()),
                };
                Self::Create(created)
            }
            "DeleteEvent" => {
                let p: DeletePayload = parse_payload(kind, payload)?;
                Self::Delete {
                    ref_type: p.ref_type,
                    reference: p.reference,
                }
            }
            "PullRequestEvent" => {
                let p: PullRequestPayload = parse_payload(kind, payload)?;
                let merged = match (p.action.as_str(), p.pull_request.merged) {
                    ("closed", None) => {
                        return Err(MalformedEventError::MissingPayloadField(
                            kind.into(),
                            "pull_request.merged",
                        ))
                    }
                    (_, merged) => merged.unwrap_or(false),
                };
                Self::PullRequest {
                    action: p.action,
                    title: p.pull_request.title,
                    merged,
                }
            }
            "ReleaseEvent" => {
                let p: ReleasePayload = parse_payload(kind, payload)?;
                let name = p
                    .release
                    .name
                    .filter(|n| !n.is_empty())
                    .or(p.release.tag_name)
                    .ok_or_else(|| {
                        MalformedEventError::MissingPayloadField(kind.into(), "release.tag_name")
                    })?;
                Self::Release {
                    action: p.action,
                    name,
                }
            }
            "IssueCommentEvent" => Self::IssueComment,
            "PullRequestReviewEvent" => {
                let p: ActionPayload = parse_payload(kind, payload)?;
                Self::PullRequestReview { action: p.action }
            }
            "MemberEvent" => {
                let p: MemberPayload = parse_payload(kind, payload)?;
                Self::Member {
                    action: p.action,
                    login: p.member.login,
                }
            }
            other => Self::Other(other.to_owned()),
        };

        Ok(parsed)
    }
}

fn required_ref(kind: &str, reference: Option<String>) -> Result<String, MalformedEventError> {
    reference.ok_or_else(|| MalformedEventError::MissingPayloadField(kind.into(), "ref"))
}

fn parse_payload<'a, T: Deserialize<'a>>(
    kind: &str,
    payload: &'a Value,
) -> Result<T, MalformedEventError> {
    T::deserialize(payload).map_err(|e| MalformedEventError::MalformedPayload(kind.into(), e))
}
