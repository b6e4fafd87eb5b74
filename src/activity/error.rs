use thiserror::Error;

#[derive(Debug, Error)]
pub enum MalformedEventError {
    #[error("Malformed event record: {0}")]
    MalformedRecord(#[source] serde_json::Error),

    #[error("Malformed {0} payload: {1}")]
    MalformedPayload(String, #[source] serde_json::Error),

    #[error("Malformed {0} payload: missing field `{1}`")]
    MissingPayloadField(String, &'static str),
}
