//! Image probes that answer from a script instead of the network.

use propview_runtime::{ImageProbe, ProbeError};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

type Outcome = Result<(), ProbeError>;

/// Mock network: pops one scripted outcome per probe, then repeats `fallback`.
///
/// Records every URL it was asked for.
pub struct ScriptedProbe {
    script: Mutex<VecDeque<Outcome>>,
    fallback: Outcome,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl ScriptedProbe {
    pub fn new(script: Vec<Outcome>, fallback: Outcome) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn always_failing() -> Self {
        Self::new(Vec::new(), Err(ProbeError::Status(503)))
    }

    pub fn always_loading() -> Self {
        Self::new(Vec::new(), Ok(()))
    }

    /// Fail `times` probes, then succeed
    pub fn failing_times(times: usize) -> Self {
        Self::new(
            vec![Err(ProbeError::Network("connection reset".to_string())); times],
            Ok(()),
        )
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl ImageProbe for ScriptedProbe {
    fn probe(&self, url: &str) -> Result<(), ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut urls) = self.urls.lock() {
            urls.push(url.to_string());
        }
        self.script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_else(|| self.fallback.clone())
    }
}
