use std::{borrow::Cow, fmt};

use crate::backends::github::EventRecord;

use super::{
    event::{CreatedRef, Event, EventKind},
    MalformedEventError,
};

const TITLE_MAX_CHARS: usize = 50;

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repo = &self.repo;

        match &self.kind {
            EventKind::Push { commit_count } => {
                let plural = if *commit_count == 1 { "" } else { "s" };
                write!(f, "Pushed {} commit{} to {}", commit_count, plural, repo)
            }
            EventKind::Issues { action, title } => match action.as_str() {
                "opened" => write!(
                    f,
                    "Opened a new issue in {}: \"{}\"",
                    repo,
                    truncate_title(title)
                ),
                "closed" => write!(
                    f,
                    "Closed an issue in {}: \"{}\"",
                    repo,
                    truncate_title(title)
                ),
                "reopened" => write!(
                    f,
                    "Reopened an issue in {}: \"{}\"",
                    repo,
                    truncate_title(title)
                ),
                other => write!(f, "{} an issue in {}", capitalize(other), repo),
            },
            EventKind::Watch => write!(f, "Starred {}", repo),
            EventKind::Fork => write!(f, "Forked {}", repo),
            EventKind::Create(created) => match created {
                CreatedRef::Repository => write!(f, "Created repository {}", repo),
                CreatedRef::Branch(name) => write!(f, "Created branch '{}' in {}", name, repo),
                CreatedRef::Tag(name) => write!(f, "Created tag '{}' in {}", name, repo),
                CreatedRef::Other(ref_type) => write!(f, "Created {} in {}", ref_type, repo),
            },
            EventKind::Delete {
                ref_type,
                reference,
            } => write!(f, "Deleted {} '{}' in {}", ref_type, reference, repo),
            EventKind::PullRequest {
                action,
                title,
                merged,
            } => match (action.as_str(), *merged) {
                ("opened", _) => write!(
                    f,
                    "Opened a new pull request in {}: \"{}\"",
                    repo,
                    truncate_title(title)
                ),
                ("closed", true) => write!(
                    f,
                    "Merged a pull request in {}: \"{}\"",
                    repo,
                    truncate_title(title)
                ),
                ("closed", false) => write!(
                    f,
                    "Closed a pull request in {}: \"{}\"",
                    repo,
                    truncate_title(title)
                ),
                ("reopened", _) => write!(
                    f,
                    "Reopened a pull request in {}: \"{}\"",
                    repo,
                    truncate_title(title)
                ),
                (other, _) => write!(f, "{} a pull request in {}", capitalize(other), repo),
            },
            EventKind::Release { action, name } => write!(
                f,
                "{} release '{}' in {}",
                capitalize(action),
                name,
                repo
            ),
            EventKind::IssueComment => write!(f, "Commented on an issue in {}", repo),
            EventKind::PullRequestReview { action } => write!(
                f,
                "{} a pull request review in {}",
                capitalize(action),
                repo
            ),
            EventKind::Member { action, login } => write!(
                f,
                "{} {} as a collaborator to {}",
                capitalize(action),
                login,
                repo
            ),
            EventKind::Other(kind) => write!(
                f,
                "Performed {} action in {}",
                kind.replace("Event", "").to_lowercase(),
                repo
            ),
        }
    }
}

/// Turns one raw record into its display line.
pub fn format_event(record: &EventRecord) -> Result<String, MalformedEventError> {
    Event::try_from(record).map(|event| event.to_string())
}

/// Formats every record, in order. The first malformed record aborts the batch.
pub fn format_events(records: &[EventRecord]) -> Result<Vec<String>, MalformedEventError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            format_event(record).map_err(|e| {
                tracing::debug!(
                    message = "Malformed event",
                    index = index,
                    kind = record.kind().unwrap_or_default(),
                    error = %e
                );
                e
            })
        })
        .collect()
}

/// Keeps titles up to 50 characters, longer ones are cut and suffixed with `...`.
fn truncate_title(title: &str) -> Cow<'_, str> {
    match title.char_indices().nth(TITLE_MAX_CHARS) {
        None => Cow::Borrowed(title),
        Some((cut, _)) => Cow::Owned(format!("{}...", &title[..cut])),
    }
}

/// Upper-cases the first character, leaves the rest untouched.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
