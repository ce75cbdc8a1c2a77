use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Output encoding requested from the image host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Webp,
    Jpg,
    Png,
    Avif,
    Auto,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Webp => "webp",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Avif => "avif",
            ImageFormat::Auto => "auto",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "webp" => Ok(ImageFormat::Webp),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpg),
            "png" => Ok(ImageFormat::Png),
            "avif" => Ok(ImageFormat::Avif),
            "auto" => Ok(ImageFormat::Auto),
            other => Err(format!("unsupported image format: {}", other)),
        }
    }
}

/// Transformation parameters; unset parameters are left to the host's defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transform {
    pub width: Option<u32>,
    pub quality: Option<u8>,
    pub format: Option<ImageFormat>,
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality.clamp(1, 100));
        self
    }

    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.quality.is_none() && self.format.is_none()
    }
}

/// Set `retry=N` on a URL so a repeated probe bypasses any cached failure.
///
/// Absolute URLs have an existing `retry` pair replaced; relative asset paths
/// get the parameter appended textually.
pub fn with_retry_param(url: &str, attempt: u32) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            let kept: Vec<(String, String)> = parsed
                .query_pairs()
                .filter(|(key, _)| key != "retry")
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect();
            {
                let mut pairs = parsed.query_pairs_mut();
                pairs.clear();
                for (key, value) in &kept {
                    pairs.append_pair(key, value);
                }
                pairs.append_pair("retry", &attempt.to_string());
            }
            parsed.to_string()
        }
        Err(_) => {
            let (base, fragment) = match url.find('#') {
                Some(index) => url.split_at(index),
                None => (url, ""),
            };
            let separator = if base.contains('?') { '&' } else { '?' };
            format!("{}{}retry={}{}", base, separator, attempt, fragment)
        }
    }
}
