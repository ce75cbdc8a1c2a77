use serde::{Deserialize, Serialize};
use url::Url;

use super::transform::Transform;

/// Strategy for a transformation-capable image host.
///
/// Responsibilities:
/// - Recognize URLs served by the host (substring match on the configured pattern)
/// - Inject width/quality/format parameters using the host's URL convention
///
/// URLs the host does not recognize pass through unchanged.
pub trait ImageHost: Send + Sync {
    /// Short identifier used in logs and config
    fn id(&self) -> &'static str;

    fn recognizes(&self, url: &str) -> bool;

    /// Apply a transform to a URL already known to belong to this host
    fn apply(&self, url: &str, transform: &Transform) -> String;

    fn transform(&self, url: &str, transform: &Transform) -> String {
        if transform.is_empty() || !self.recognizes(url) {
            return url.to_string();
        }
        self.apply(url, transform)
    }
}

// --- Path segment convention ---

/// Hosts that take transformations as a path segment after the URL endpoint,
/// e.g. `https://ik.imagekit.io/acme/tr:w-640,q-80,f-webp/listings/a.jpg`.
#[derive(Debug, Clone)]
pub struct PathSegmentHost {
    pattern: String,
}

impl PathSegmentHost {
    const PREFIX: &'static str = "tr:";

    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    fn segment(transform: &Transform) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(width) = transform.width {
            parts.push(format!("w-{}", width));
        }
        if let Some(quality) = transform.quality {
            parts.push(format!("q-{}", quality));
        }
        if let Some(format) = transform.format {
            parts.push(format!("f-{}", format));
        }
        format!("{}{}", Self::PREFIX, parts.join(","))
    }
}

impl ImageHost for PathSegmentHost {
    fn id(&self) -> &'static str {
        "path-segment"
    }

    fn recognizes(&self, url: &str) -> bool {
        !self.pattern.is_empty() && url.contains(&self.pattern)
    }

    fn apply(&self, url: &str, transform: &Transform) -> String {
        // scheme://host/endpoint/[tr:...]/rest
        let Some(scheme_end) = url.find("://").map(|i| i + 3) else {
            return url.to_string();
        };
        let Some(host_end) = url[scheme_end..].find('/').map(|i| scheme_end + i + 1) else {
            return url.to_string();
        };
        let Some(endpoint_end) = url[host_end..].find('/').map(|i| host_end + i + 1) else {
            return url.to_string();
        };

        let (head, rest) = url.split_at(endpoint_end);
        let rest = match rest.strip_prefix(Self::PREFIX) {
            // Replace an existing transformation segment
            Some(after) => match after.find('/') {
                Some(i) => &after[i + 1..],
                None => return url.to_string(),
            },
            None => rest,
        };
        if rest.is_empty() {
            return url.to_string();
        }

        format!("{}{}/{}", head, Self::segment(transform), rest)
    }
}

// --- Query parameter convention ---

/// Hosts that take `w`, `q` and `fm` query parameters (imgix style)
#[derive(Debug, Clone)]
pub struct QueryParamHost {
    pattern: String,
}

impl QueryParamHost {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl ImageHost for QueryParamHost {
    fn id(&self) -> &'static str {
        "query-param"
    }

    fn recognizes(&self, url: &str) -> bool {
        !self.pattern.is_empty() && url.contains(&self.pattern)
    }

    fn apply(&self, url: &str, transform: &Transform) -> String {
        let Ok(mut parsed) = Url::parse(url) else {
            return url.to_string();
        };

        let mut params: Vec<(String, String)> = parsed
            .query_pairs()
            .filter(|(key, _)| !matches!(&**key, "w" | "q" | "fm"))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        if let Some(width) = transform.width {
            params.push(("w".to_string(), width.to_string()));
        }
        if let Some(quality) = transform.quality {
            params.push(("q".to_string(), quality.to_string()));
        }
        if let Some(format) = transform.format {
            params.push(("fm".to_string(), format.to_string()));
        }

        parsed.query_pairs_mut().clear().extend_pairs(params);
        parsed.to_string()
    }
}

// --- No transformation ---

/// Local assets or hosts without a transformation API
#[derive(Debug, Clone, Default)]
pub struct NoTransformHost;

impl ImageHost for NoTransformHost {
    fn id(&self) -> &'static str {
        "none"
    }

    fn recognizes(&self, _url: &str) -> bool {
        false
    }

    fn apply(&self, url: &str, _transform: &Transform) -> String {
        url.to_string()
    }
}

// --- Configuration ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostKind {
    PathSegment,
    QueryParam,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    pub kind: HostKind,
    #[serde(default)]
    pub pattern: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            kind: HostKind::PathSegment,
            pattern: "ik.imagekit.io".to_string(),
        }
    }
}

impl HostConfig {
    pub fn build(&self) -> Box<dyn ImageHost> {
        match self.kind {
            HostKind::PathSegment => Box::new(PathSegmentHost::new(self.pattern.clone())),
            HostKind::QueryParam => Box::new(QueryParamHost::new(self.pattern.clone())),
            HostKind::None => Box::new(NoTransformHost),
        }
    }
}
