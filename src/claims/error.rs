use thiserror::Error;

/// Errors raised while reading token claims.
#[derive(Debug, Error)]
pub enum ClaimsError {
    #[error("claims payload is not valid JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
    #[error("claims payload must be a JSON object")]
    NotAnObject,
}

impl ClaimsError {
    pub(crate) fn json(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}
