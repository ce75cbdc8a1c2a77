use super::load_record;
use crate::presentation::{ImageVariants, ShowViewModel, emit};
use crate::types::OutputFormat;
use anyhow::Result;
use propview_engine::detail_view;
use propview_runtime::{Config, ImagePipeline, primary_image};
use std::path::Path;

pub fn handle(path: &Path, config: &Config, format: OutputFormat) -> Result<()> {
    let record = load_record(path)?;
    let pipeline = ImagePipeline::from_config(&config.image);

    let image = primary_image(&record.images).map(|image| ImageVariants {
        original: image.url.clone(),
        preload_url: pipeline.preload_url(&image.url),
        fallback_url: pipeline.fallback_url(&image.url),
        srcset: pipeline.responsive_src_set(&image.url),
    });

    let model = ShowViewModel {
        detail: detail_view(&record),
        image,
        placeholder_url: pipeline.placeholder_url().to_string(),
    };

    emit(&model, format)
}
