use thiserror::Error;
use trust_dns_resolver::error::ResolveError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Batch aborted by a signal before every host was looked up.
    #[error("resolution cancelled after {completed} of {total} hosts")]
    Cancelled { completed: usize, total: usize },

    #[error("failed to build resolver: {0}")]
    Resolver(#[from] ResolveError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(String),
}

impl Error {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled { .. })
    }
}
