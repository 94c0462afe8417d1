use thiserror::Error;

/// Failure to obtain the country list.
#[derive(Error, Debug)]
pub enum NetError {
    /// Connection, TLS or body transfer failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Unexpected response status: {0}")]
    Status(u16),

    /// The body was not a JSON array.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The server returned an empty list.
    #[error("Country list is empty")]
    EmptyDataset,
}
