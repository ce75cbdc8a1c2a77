pub mod config;
pub mod error;
pub mod image;

pub use config::{Config, ImageConfig, resolve_config_path};
pub use error::{Error, Result};
pub use image::{
    HostConfig, HostKind, HttpProbe, ImageCandidate, ImageCommand, ImageEvent, ImageFormat,
    ImageHost, ImageLoader, ImagePipeline, ImageProbe, ImageSources, ImageState, ProbeError,
    RenderGuard, RetryPolicy, primary_image, with_retry_param,
};
