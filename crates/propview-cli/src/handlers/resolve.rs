use super::load_record;
use crate::presentation::{ResolveViewModel, emit};
use crate::types::OutputFormat;
use anyhow::Result;
use propview_runtime::{Config, HttpProbe, ImageCandidate, ImageLoader, ImagePipeline};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub fn handle(path: &Path, config: &Config, format: OutputFormat) -> Result<()> {
    let record = load_record(path)?;
    let pipeline = ImagePipeline::from_config(&config.image);
    let candidate = ImageCandidate::new(record.title.clone(), &record.images, &pipeline);

    let probe_timeout = Duration::from_millis(config.image.probe_timeout_ms);
    let probe = HttpProbe::new(probe_timeout)?;
    let mut loader = ImageLoader::new(candidate, Arc::new(probe));

    // every attempt may use its full timeout plus the retry delay
    let retry = pipeline.retry_policy();
    let budget = (probe_timeout + retry.delay) * retry.max_attempts() + Duration::from_secs(1);

    loader.start()?;
    let state = loader.wait(budget)?;
    if !state.is_terminal() {
        log::warn!("image resolution for '{}' did not finish in {:?}", record.title, budget);
        loader.cancel();
    }

    let candidate = loader.candidate();
    let model = ResolveViewModel {
        title: record.title.clone(),
        state,
        attempts: candidate.attempts(),
        display_url: candidate.display_url().map(str::to_string),
        sources: candidate.sources().cloned(),
    };

    emit(&model, format)
}
