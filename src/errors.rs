use astra::Response;

/// Errors originating from request handling (routing, resolution)
/// or downstream layers (origin API, domain cache).
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    /// The origin API has no account for the requested domain.
    #[error("Domain not configured")]
    DomainNotConfigured,
    /// The domain resolved but the account record does not exist.
    #[error("Account not found")]
    AccountNotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// Network, status or decoding failure while talking to the origin API.
    #[error("Lookup Error: {0}")]
    Lookup(String),
    #[error("Cache Error: {0}")]
    Cache(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
