use std::fmt;
use std::time::Duration;

use propview_types::ImageDescriptor;
use serde::Serialize;

use super::pipeline::{ImagePipeline, RetryPolicy, primary_image};
use super::transform::with_retry_param;

/// Resolution state of a record's primary image.
///
/// `Empty`, `Loaded` and `ExhaustedFallback` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageState {
    /// No images on the record: placeholder
    Empty,
    /// Initial probe in flight
    Preloading,
    /// Probe failed; `attempt` retries issued or scheduled so far
    Retrying { attempt: u32 },
    Loaded,
    /// Retry bound reached: placeholder
    ExhaustedFallback,
}

impl ImageState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ImageState::Empty | ImageState::Loaded | ImageState::ExhaustedFallback
        )
    }
}

impl fmt::Display for ImageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageState::Empty => write!(f, "empty"),
            ImageState::Preloading => write!(f, "preloading"),
            ImageState::Retrying { attempt } => write!(f, "retrying (attempt {})", attempt),
            ImageState::Loaded => write!(f, "loaded"),
            ImageState::ExhaustedFallback => write!(f, "exhausted, placeholder"),
        }
    }
}

/// Identity of one candidate lifetime. Events carrying an older generation are stale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Inputs to the state machine, produced by whoever executes its commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageEvent {
    ProbeLoaded { generation: Generation },
    ProbeFailed { generation: Generation, reason: String },
    RetryElapsed { generation: Generation },
}

impl ImageEvent {
    pub fn generation(&self) -> Generation {
        match self {
            ImageEvent::ProbeLoaded { generation }
            | ImageEvent::ProbeFailed { generation, .. }
            | ImageEvent::RetryElapsed { generation } => *generation,
        }
    }
}

/// Side effects requested by the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageCommand {
    /// Fetch `url` off the render path and report `ProbeLoaded` or `ProbeFailed`
    Probe { url: String, generation: Generation },
    /// Report `RetryElapsed` after `delay`
    ScheduleRetry { delay: Duration, generation: Generation },
}

/// Format variants offered to `<picture>`-style negotiation once loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSources {
    pub webp: String,
    pub jpg: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Nothing,
    Probe,
    Timer,
}

/// In-flight resolution of one record's primary image.
///
/// Pure state machine: it never performs I/O. `start` and `handle` return the
/// commands the caller must execute, and every event is checked against the
/// current generation before it may change state.
#[derive(Debug, Clone)]
pub struct ImageCandidate {
    title: String,
    sources: Option<ImageSources>,
    placeholder_url: String,
    retry: RetryPolicy,
    state: ImageState,
    pending: Pending,
    attempts: u32,
    generation: Generation,
    cancelled: bool,
}

impl ImageCandidate {
    pub fn new(
        title: impl Into<String>,
        images: &[ImageDescriptor],
        pipeline: &ImagePipeline,
    ) -> Self {
        let sources = primary_image(images).map(|image| ImageSources {
            webp: pipeline.preload_url(&image.url),
            jpg: pipeline.fallback_url(&image.url),
        });
        let state = if sources.is_some() {
            ImageState::Preloading
        } else {
            ImageState::Empty
        };

        Self {
            title: title.into(),
            sources,
            placeholder_url: pipeline.placeholder_url().to_string(),
            retry: pipeline.retry_policy(),
            state,
            pending: Pending::Nothing,
            attempts: 0,
            generation: Generation::default(),
            cancelled: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> ImageState {
        self.state
    }

    /// Probes issued so far, the initial one included
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn placeholder_url(&self) -> &str {
        &self.placeholder_url
    }

    /// Issue the initial probe. Calling it again, or on a candidate without
    /// images, yields no commands.
    pub fn start(&mut self) -> Vec<ImageCommand> {
        if self.cancelled || self.state != ImageState::Preloading || self.attempts > 0 {
            return Vec::new();
        }
        let Some(url) = self.sources.as_ref().map(|s| s.webp.clone()) else {
            return Vec::new();
        };
        self.attempts = 1;
        self.pending = Pending::Probe;
        vec![ImageCommand::Probe {
            url,
            generation: self.generation,
        }]
    }

    /// Advance the machine with one event
    pub fn handle(&mut self, event: ImageEvent) -> Vec<ImageCommand> {
        if self.cancelled || event.generation() != self.generation {
            log::trace!(
                "ignoring stale image event for '{}': {:?}",
                self.title,
                event
            );
            return Vec::new();
        }

        match (self.pending, event) {
            (Pending::Probe, ImageEvent::ProbeLoaded { .. }) => {
                self.pending = Pending::Nothing;
                self.state = ImageState::Loaded;
                Vec::new()
            }
            (Pending::Probe, ImageEvent::ProbeFailed { reason, .. }) => {
                self.on_probe_failed(&reason)
            }
            (Pending::Timer, ImageEvent::RetryElapsed { .. }) => self.on_retry_elapsed(),
            (_, event) => {
                log::trace!(
                    "ignoring unexpected image event for '{}' in {:?}: {:?}",
                    self.title,
                    self.state,
                    event
                );
                Vec::new()
            }
        }
    }

    fn on_probe_failed(&mut self, reason: &str) -> Vec<ImageCommand> {
        let retries_used = self.attempts.saturating_sub(1);
        if retries_used < self.retry.max_retries {
            self.pending = Pending::Timer;
            self.state = ImageState::Retrying {
                attempt: retries_used + 1,
            };
            return vec![ImageCommand::ScheduleRetry {
                delay: self.retry.delay,
                generation: self.generation,
            }];
        }

        self.pending = Pending::Nothing;
        self.state = ImageState::ExhaustedFallback;
        log::warn!(
            "image for '{}' failed after {} attempts ({}); using placeholder",
            self.title,
            self.attempts,
            reason
        );
        Vec::new()
    }

    fn on_retry_elapsed(&mut self) -> Vec<ImageCommand> {
        let ImageState::Retrying { attempt } = self.state else {
            self.pending = Pending::Nothing;
            return Vec::new();
        };
        let Some(webp) = self.sources.as_ref().map(|s| s.webp.as_str()) else {
            self.pending = Pending::Nothing;
            return Vec::new();
        };

        let url = with_retry_param(webp, attempt);
        self.attempts += 1;
        self.pending = Pending::Probe;
        vec![ImageCommand::Probe {
            url,
            generation: self.generation,
        }]
    }

    /// Tear the candidate down. Events already in flight become stale.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.pending = Pending::Nothing;
        self.generation = self.generation.next();
    }

    /// URL to render now; `None` while loading (skeleton shown)
    pub fn display_url(&self) -> Option<&str> {
        match self.state {
            ImageState::Empty | ImageState::ExhaustedFallback => Some(&self.placeholder_url),
            ImageState::Loaded => self.sources.as_ref().map(|s| s.webp.as_str()),
            ImageState::Preloading | ImageState::Retrying { .. } => None,
        }
    }

    /// Webp and jpg variants, only once the probe succeeded
    pub fn sources(&self) -> Option<&ImageSources> {
        match self.state {
            ImageState::Loaded => self.sources.as_ref(),
            _ => None,
        }
    }
}

// ==========================================
// Render-time guard
// ==========================================

/// Second line of defense on the element actually rendered.
///
/// Independent of the preload probe: the rendered request can fail even after
/// the probe succeeded. Switches to the placeholder once and never again, so a
/// broken placeholder cannot cause an error loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderGuard {
    src: String,
    placeholder: String,
    fell_back: bool,
}

impl RenderGuard {
    pub fn new(src: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            placeholder: placeholder.into(),
            fell_back: false,
        }
    }

    /// Guard for whatever the candidate currently displays; `None` while loading
    pub fn for_candidate(candidate: &ImageCandidate) -> Option<Self> {
        candidate
            .display_url()
            .map(|src| Self::new(src, candidate.placeholder_url()))
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn has_fallen_back(&self) -> bool {
        self.fell_back
    }

    /// Render error on the current `src`. Returns true when `src` changed.
    pub fn on_error(&mut self) -> bool {
        if self.fell_back || self.src == self.placeholder {
            return false;
        }
        self.src = self.placeholder.clone();
        self.fell_back = true;
        true
    }
}
