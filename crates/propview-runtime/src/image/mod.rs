//! Image resolution for listing pages.
//!
//! - `transform`/`host`: URL derivation for transformation-capable hosts
//! - `pipeline`: placeholder, retry policy and variant rules in one place
//! - `candidate`: the resolution state machine and the render-time guard
//! - `probe`/`loader`: network probing and the threaded driver

mod candidate;
mod host;
mod loader;
mod pipeline;
mod probe;
mod transform;

pub use candidate::{
    Generation, ImageCandidate, ImageCommand, ImageEvent, ImageSources, ImageState, RenderGuard,
};
pub use host::{HostConfig, HostKind, ImageHost, NoTransformHost, PathSegmentHost, QueryParamHost};
pub use loader::ImageLoader;
pub use pipeline::{
    DEFAULT_BREAKPOINTS, DEFAULT_FALLBACK_QUALITY, DEFAULT_MAX_RETRIES, DEFAULT_PLACEHOLDER_URL,
    DEFAULT_PRELOAD_QUALITY, DEFAULT_RETRY_DELAY, ImagePipeline, RetryPolicy, primary_image,
};
pub use probe::{DEFAULT_PROBE_TIMEOUT, HttpProbe, ImageProbe, ProbeError};
pub use transform::{ImageFormat, Transform, with_retry_param};
