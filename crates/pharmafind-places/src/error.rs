use thiserror::Error;

/// Errors returned by the place search and place-detail providers.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("rate limited by places API (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid places base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// Failures resolving the searcher's own position.
///
/// Kept apart from [`PlacesError`] so callers can tell a permission problem
/// from a network one.
#[derive(Debug, Error)]
pub enum GeolocationError {
    #[error("location access was denied; please allow location access")]
    PermissionDenied,

    #[error("location unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Geolocation(#[from] GeolocationError),

    #[error("places search failed: {0}")]
    Search(#[from] PlacesError),
}
