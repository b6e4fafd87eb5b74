use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    backends::github::{self, EventRecord, FetchError},
    config::Config,
};

/// Anything able to list the recent public events of a user.
#[async_trait]
pub trait EventSource: std::fmt::Debug + Send + Sync {
    async fn fetch_events(&self, username: &str) -> Result<Vec<EventRecord>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ServiceHandler {
    event_source: Arc<dyn EventSource>,
}

impl ServiceHandler {
    pub fn new(event_source: Arc<dyn EventSource>) -> Self {
        Self { event_source }
    }

    pub fn new_defaults(config: &Config) -> Result<Self, FetchError> {
        Ok(Self {
            event_source: Arc::new(github::Client::new(config)?),
        })
    }

    pub fn events(&self) -> &dyn EventSource {
        self.event_source.as_ref()
    }
}
