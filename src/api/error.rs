#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no signed in user")]
    MissingCredentials,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),
}
