mod error;
mod event;
mod formatter;
mod render;

pub use self::error::MalformedEventError;
pub use self::event::{CreatedRef, Event, EventKind};
pub use self::formatter::{format_event, format_events};
pub use self::render::render;

use crate::{error::ErrorCode, service::ServiceHandler};

/// Fetches the events of `username` and renders the activity report.
#[tracing::instrument(skip(services))]
pub async fn user_activity(
    services: &ServiceHandler,
    username: &str,
) -> Result<String, ErrorCode> {
    let records = services.events().fetch_events(username).await?;
    let lines = format_events(&records)?;

    Ok(render(&lines))
}

/// Text printed for a run: the report, or the terminal `Error:` line.
pub async fn activity_output(services: &ServiceHandler, username: &str) -> String {
    match user_activity(services, username).await {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(
                message = "Could not display activity",
                internal_code = e.internal_code(),
                username = username
            );
            format!("{}\n", e)
        }
    }
}
