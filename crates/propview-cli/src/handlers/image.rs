use crate::presentation::{ImageUrlViewModel, emit};
use crate::types::OutputFormat;
use anyhow::Result;
use propview_runtime::{Config, ImageFormat, ImagePipeline};

pub fn handle(
    url: &str,
    image_format: ImageFormat,
    quality: u8,
    width: Option<u32>,
    srcset: bool,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let pipeline = ImagePipeline::from_config(&config.image);
    let host = pipeline.host();

    let transformed = match width {
        Some(width) => pipeline.sized_url(url, width, image_format, quality),
        None => pipeline.optimized_url(url, image_format, quality),
    };

    let model = ImageUrlViewModel {
        input: url.to_string(),
        host: host.id(),
        recognized: host.recognizes(url),
        url: transformed,
        srcset: srcset.then(|| pipeline.responsive_src_set(url)),
    };

    emit(&model, format)
}
