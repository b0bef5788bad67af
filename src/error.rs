use std::fmt;

/// Failures the widget can run into. None of them are fatal to the host page:
/// callers log them and degrade (empty carousel, unsaved favorite, no widget).
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    Network(String),
    /// The feed answered with a non-success HTTP status.
    Status(u16),
    /// A body or stored value could not be decoded.
    Parse(String),
    /// The key-value store rejected a write or is unavailable.
    Storage(String),
    /// A required browser object (window, document, head) is missing.
    Dom(String),
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselError::Network(msg) => write!(f, "Network error: {}", msg),
            CarouselError::Status(code) => write!(f, "Product feed returned HTTP {}", code),
            CarouselError::Parse(msg) => write!(f, "Failed to parse products: {}", msg),
            CarouselError::Storage(msg) => write!(f, "Storage error: {}", msg),
            CarouselError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for CarouselError {}

impl From<serde_json::Error> for CarouselError {
    fn from(e: serde_json::Error) -> Self {
        CarouselError::Parse(e.to_string())
    }
}
