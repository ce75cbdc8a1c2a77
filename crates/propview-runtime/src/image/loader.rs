use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError, channel};
use std::time::{Duration, Instant};

use super::candidate::{ImageCandidate, ImageCommand, ImageEvent, ImageState};
use super::probe::ImageProbe;
use crate::Result;

/// Drives an [`ImageCandidate`] with real threads.
///
/// Each probe and each retry timer runs on its own named worker thread and
/// reports back through a channel. Results are applied only from `poll`/`wait`
/// on the owning thread. Workers check the liveness flag before sending, so
/// nothing reaches a loader that was cancelled or dropped.
pub struct ImageLoader {
    candidate: ImageCandidate,
    probe: Arc<dyn ImageProbe>,
    tx: Sender<ImageEvent>,
    rx: Receiver<ImageEvent>,
    alive: Arc<AtomicBool>,
}

impl ImageLoader {
    pub fn new(candidate: ImageCandidate, probe: Arc<dyn ImageProbe>) -> Self {
        let (tx, rx) = channel();
        Self {
            candidate,
            probe,
            tx,
            rx,
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn candidate(&self) -> &ImageCandidate {
        &self.candidate
    }

    pub fn state(&self) -> ImageState {
        self.candidate.state()
    }

    /// Kick off the initial probe (no-op for candidates without images)
    pub fn start(&mut self) -> Result<ImageState> {
        let commands = self.candidate.start();
        self.dispatch(commands)?;
        Ok(self.candidate.state())
    }

    /// Apply every event received so far without blocking
    pub fn poll(&mut self) -> Result<ImageState> {
        loop {
            match self.rx.try_recv() {
                Ok(event) => self.apply(event)?,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        Ok(self.candidate.state())
    }

    /// Block until the candidate is terminal or `timeout` passes.
    ///
    /// Returns the state reached, which is non-terminal on timeout.
    pub fn wait(&mut self, timeout: Duration) -> Result<ImageState> {
        let deadline = Instant::now() + timeout;
        while !self.candidate.state().is_terminal() && !self.candidate.is_cancelled() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            match self.rx.recv_timeout(remaining) {
                Ok(event) => self.apply(event)?,
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        Ok(self.candidate.state())
    }

    /// Stop acting on outstanding work. Threads already running finish
    /// silently.
    pub fn cancel(&mut self) {
        self.alive.store(false, Ordering::SeqCst);
        self.candidate.cancel();
    }

    fn apply(&mut self, event: ImageEvent) -> Result<()> {
        let commands = self.candidate.handle(event);
        self.dispatch(commands)
    }

    fn dispatch(&self, commands: Vec<ImageCommand>) -> Result<()> {
        for command in commands {
            match command {
                ImageCommand::Probe { url, generation } => {
                    let probe = Arc::clone(&self.probe);
                    let tx = self.tx.clone();
                    let alive = Arc::clone(&self.alive);
                    std::thread::Builder::new()
                        .name("image-probe".to_string())
                        .spawn(move || {
                            let event = match probe.probe(&url) {
                                Ok(()) => ImageEvent::ProbeLoaded { generation },
                                Err(err) => ImageEvent::ProbeFailed {
                                    generation,
                                    reason: err.to_string(),
                                },
                            };
                            if alive.load(Ordering::SeqCst) {
                                let _ = tx.send(event);
                            }
                        })?;
                }
                ImageCommand::ScheduleRetry { delay, generation } => {
                    let tx = self.tx.clone();
                    let alive = Arc::clone(&self.alive);
                    std::thread::Builder::new()
                        .name("image-retry-timer".to_string())
                        .spawn(move || {
                            std::thread::sleep(delay);
                            if alive.load(Ordering::SeqCst) {
                                let _ = tx.send(ImageEvent::RetryElapsed { generation });
                            }
                        })?;
                }
            }
        }
        Ok(())
    }
}

impl Drop for ImageLoader {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}
