use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, StatusCode};
use url::Url;

use crate::{app_info::user_agent, config::Config, service::EventSource};

use super::{error::FetchError, models::EventRecord};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

#[derive(Debug)]
pub struct Client {
    api_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let http = reqwest::ClientBuilder::new()
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.request_timeout())
            .user_agent(user_agent())
            .build()
            .map_err(|e| FetchError::TransportError(e.to_string()))?;

        Ok(Self {
            api_url: config.github_api_url().to_owned(),
            http,
        })
    }

    fn events_url(&self, username: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.api_url)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(&["users", username, "events"]);

        Ok(url)
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch_events(&self, username: &str) -> Result<Vec<EventRecord>, FetchError> {
        let url = self
            .events_url(username)
            .map_err(|e| FetchError::TransportError(e.to_string()))?;

        let resp = self
            .http
            .get(url)
            .header(header::ACCEPT, GITHUB_ACCEPT)
            .send()
            .await
            .map_err(|e| FetchError::TransportError(e.to_string()))?;

        match resp.status() {
            StatusCode::OK => {
                let events: Vec<EventRecord> = resp
                    .json()
                    .await
                    .map_err(|e| FetchError::TransportError(e.to_string()))?;

                tracing::info!(
                    message = "Events fetched",
                    username = username,
                    count = events.len()
                );

                Ok(events)
            }
            StatusCode::NOT_FOUND => Err(FetchError::NotFound {
                username: username.to_owned(),
            }),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
                tracing::debug!(
                    message = "Rate limited",
                    username = username,
                    status = resp.status().as_u16()
                );
                Err(FetchError::RateLimited)
            }
            other => {
                tracing::debug!(
                    message = "Unexpected status code",
                    username = username,
                    status = other.as_u16()
                );
                Err(FetchError::HttpError(other.as_u16()))
            }
        }
    }
}

#[async_trait]
impl EventSource for Client {
    async fn fetch_events(&self, username: &str) -> Result<Vec<EventRecord>, FetchError> {
        Client::fetch_events(self, username).await
    }
}
