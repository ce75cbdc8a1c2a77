use std::time::Duration;

use propview_types::ImageDescriptor;

use super::host::{ImageHost, PathSegmentHost};
use super::transform::{ImageFormat, Transform};
use crate::config::ImageConfig;

pub const DEFAULT_PLACEHOLDER_URL: &str = "/images/property-placeholder.svg";
pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(300);
pub const DEFAULT_PRELOAD_QUALITY: u8 = 80;
pub const DEFAULT_FALLBACK_QUALITY: u8 = 85;
pub const DEFAULT_BREAKPOINTS: [u32; 4] = [320, 640, 1024, 1920];

/// Bounded retry schedule for image probes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the initial attempt
    pub max_retries: u32,
    /// Fixed wait before each retry
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// Initial attempt plus retries
    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }
}

/// URL derivation rules for listing images.
pub struct ImagePipeline {
    host: Box<dyn ImageHost>,
    placeholder_url: String,
    retry: RetryPolicy,
    preload_quality: u8,
    fallback_quality: u8,
    breakpoints: Vec<u32>,
}

impl Default for ImagePipeline {
    fn default() -> Self {
        Self::new(Box::new(PathSegmentHost::new("ik.imagekit.io")))
    }
}

impl ImagePipeline {
    pub fn new(host: Box<dyn ImageHost>) -> Self {
        Self {
            host,
            placeholder_url: DEFAULT_PLACEHOLDER_URL.to_string(),
            retry: RetryPolicy::default(),
            preload_quality: DEFAULT_PRELOAD_QUALITY,
            fallback_quality: DEFAULT_FALLBACK_QUALITY,
            breakpoints: DEFAULT_BREAKPOINTS.to_vec(),
        }
    }

    pub fn from_config(config: &ImageConfig) -> Self {
        Self {
            host: config.host.build(),
            placeholder_url: config.placeholder_url.clone(),
            retry: RetryPolicy::new(
                config.max_retries,
                Duration::from_millis(config.retry_delay_ms),
            ),
            preload_quality: config.preload_quality,
            fallback_quality: config.fallback_quality,
            breakpoints: config.breakpoints.clone(),
        }
    }

    pub fn with_placeholder(mut self, url: impl Into<String>) -> Self {
        self.placeholder_url = url.into();
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn host(&self) -> &dyn ImageHost {
        self.host.as_ref()
    }

    pub fn placeholder_url(&self) -> &str {
        &self.placeholder_url
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    pub fn optimized_url(&self, url: &str, format: ImageFormat, quality: u8) -> String {
        self.host
            .transform(url, &Transform::new().format(format).quality(quality))
    }

    pub fn sized_url(&self, url: &str, width: u32, format: ImageFormat, quality: u8) -> String {
        self.host.transform(
            url,
            &Transform::new().width(width).format(format).quality(quality),
        )
    }

    /// Variant probed first and shown once loaded
    pub fn preload_url(&self, url: &str) -> String {
        self.optimized_url(url, ImageFormat::Webp, self.preload_quality)
    }

    /// Variant for clients without webp support
    pub fn fallback_url(&self, url: &str) -> String {
        self.optimized_url(url, ImageFormat::Jpg, self.fallback_quality)
    }

    /// `srcset` with one webp candidate per breakpoint.
    ///
    /// URLs the host does not recognize come back unchanged, which is itself
    /// a valid single-candidate `srcset`.
    pub fn responsive_src_set(&self, url: &str) -> String {
        if !self.host.recognizes(url) {
            return url.to_string();
        }
        self.breakpoints
            .iter()
            .map(|width| {
                format!(
                    "{} {}w",
                    self.sized_url(url, *width, ImageFormat::Webp, self.preload_quality),
                    width
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Image shown first: lowest `order`, earliest position on ties
pub fn primary_image(images: &[ImageDescriptor]) -> Option<&ImageDescriptor> {
    images.iter().min_by_key(|image| image.order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::NoTransformHost;

    #[test]
    fn test_preload_and_fallback_variants() {
        let pipeline = ImagePipeline::default();
        let url = "https://ik.imagekit.io/acme/l/1.jpg";
        assert_eq!(
            pipeline.preload_url(url),
            "https://ik.imagekit.io/acme/tr:q-80,f-webp/l/1.jpg"
        );
        assert_eq!(
            pipeline.fallback_url(url),
            "https://ik.imagekit.io/acme/tr:q-85,f-jpg/l/1.jpg"
        );
    }

    #[test]
    fn test_src_set_for_recognized_host() {
        let pipeline = ImagePipeline::default();
        let srcset = pipeline.responsive_src_set("https://ik.imagekit.io/acme/a.jpg");
        let candidates: Vec<&str> = srcset.split(", ").collect();
        assert_eq!(candidates.len(), 4);
        assert_eq!(
            candidates[0],
            "https://ik.imagekit.io/acme/tr:w-320,q-80,f-webp/a.jpg 320w"
        );
        assert!(candidates[3].ends_with(" 1920w"));
    }

    #[test]
    fn test_unrecognized_urls_unchanged() {
        let pipeline = ImagePipeline::new(Box::new(NoTransformHost));
        let url = "/uploads/house.png";
        assert_eq!(pipeline.optimized_url(url, ImageFormat::Webp, 80), url);
        assert_eq!(pipeline.responsive_src_set(url), url);
    }

    #[test]
    fn test_primary_image_by_order() {
        let images = vec![
            ImageDescriptor::new("b.jpg", 2),
            ImageDescriptor::new("a.jpg", 1),
            ImageDescriptor::new("c.jpg", 1),
        ];
        assert_eq!(primary_image(&images).map(|i| i.url.as_str()), Some("a.jpg"));
        assert!(primary_image(&[]).is_none());
    }

    #[test]
    fn test_retry_policy_attempts() {
        assert_eq!(RetryPolicy::default().max_attempts(), 3);
    }
}
