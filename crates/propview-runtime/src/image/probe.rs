use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::{Error, Result};

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a single probe did not produce an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// Connection, DNS, TLS or timeout failure
    Network(String),
    /// Non-success HTTP status
    Status(u16),
    /// Response body is not an image (content type attached)
    NotAnImage(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Network(msg) => write!(f, "network error: {}", msg),
            ProbeError::Status(code) => write!(f, "HTTP {}", code),
            ProbeError::NotAnImage(content_type) => {
                write!(f, "not an image (content type '{}')", content_type)
            }
        }
    }
}

impl std::error::Error for ProbeError {}

/// Speculative fetch that reports whether a URL serves an image.
///
/// Implementations block; callers run them off the render path.
pub trait ImageProbe: Send + Sync {
    fn probe(&self, url: &str) -> std::result::Result<(), ProbeError>;
}

impl<F> ImageProbe for F
where
    F: Fn(&str) -> std::result::Result<(), ProbeError> + Send + Sync,
{
    fn probe(&self, url: &str) -> std::result::Result<(), ProbeError> {
        self(url)
    }
}

/// Probe over HTTP(S): success status and an `image/*` content type
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("propview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Probe(ProbeError::Network(e.to_string())))?;
        Ok(Self { client })
    }
}

impl ImageProbe for HttpProbe {
    fn probe(&self, url: &str) -> std::result::Result<(), ProbeError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ProbeError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        if !content_type.starts_with("image/") {
            return Err(ProbeError::NotAnImage(content_type.to_string()));
        }

        log::debug!("probe ok: {} ({})", url, content_type);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closures_are_probes() {
        let always_503 =
            |_: &str| -> std::result::Result<(), ProbeError> { Err(ProbeError::Status(503)) };
        assert_eq!(always_503.probe("https://x/a.jpg"), Err(ProbeError::Status(503)));
    }

    #[test]
    fn test_relative_url_is_network_error() {
        let probe = HttpProbe::new(Duration::from_millis(50)).unwrap();
        assert!(matches!(probe.probe("/uploads/a.jpg"), Err(ProbeError::Network(_))));
    }

    #[test]
    fn test_probe_error_display() {
        assert_eq!(ProbeError::Status(404).to_string(), "HTTP 404");
        assert_eq!(
            ProbeError::NotAnImage("text/html".to_string()).to_string(),
            "not an image (content type 'text/html')"
        );
    }
}
