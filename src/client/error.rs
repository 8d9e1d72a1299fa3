/// Failure modes surfaced by the remote resource client.
///
/// Validation is not modeled here: required fields are forwarded as-is and
/// the server is the only validator, so a rejected payload comes back as a
/// plain `Network` failure carrying the server's message.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Not found")]
    NotFound,

    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
