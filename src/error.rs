/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum AddrGenError {
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Non-success HTTP status code with raw response body.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// Response body was not valid JSON.
    #[error("decode error: {0}")]
    Decode(String),
    /// Response parsed as JSON but failed shape validation
    /// (`status != "ok"` or no `address` field).
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
    /// Country code outside the supported table. Detected before any
    /// network activity.
    #[error("unsupported country code '{0}'")]
    UnknownCountry(String),
    /// Filesystem error while writing the output file.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
