//! The playback manager and its worker loop.
//!
//! Shared state is limited to the current-utterance slot and an occupancy
//! counter; neither is held across a suspension point, so `speak` and
//! status queries stay non-blocking while the worker sleeps through
//! playback.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use synth::{Synthesizer, Voice};
use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::SpeechError;

/// Status value reported whenever no utterance is playing and none is
/// queued.
pub const DONE: &str = "done";

/// One unit of text submitted for playback.
///
/// Created by the caller, consumed exactly once by the worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackRequest {
    pub text: String,
    pub voice: Voice,
}

/// Serializes speech requests onto a single background worker.
///
/// One manager serves the whole host process: constructed once at startup,
/// torn down once via [`shutdown`](Self::shutdown). Whether a
/// [`Synthesizer`] is bound is decided at construction and never changes
/// afterwards.
pub struct SpeechManager {
    /// `Some` exactly when a synthesis backend was bound at construction.
    queue: Option<mpsc::UnboundedSender<PlaybackRequest>>,
    current: Arc<Mutex<String>>,
    /// Queued plus active jobs; zero means the worker is idle.
    pending: Arc<AtomicUsize>,
    interrupt: Arc<Notify>,
    stop: Arc<Notify>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl SpeechManager {
    /// Create a manager around an optionally bound synthesis backend.
    ///
    /// Never fails: a missing backend is a normal configuration in which
    /// every request still succeeds but no audio plays. With a backend
    /// present this must be called from within a Tokio runtime, which the
    /// worker task is spawned on.
    pub fn new(synth: Option<Arc<dyn Synthesizer>>) -> Self {
        let current = Arc::new(Mutex::new(DONE.to_string()));
        let pending = Arc::new(AtomicUsize::new(0));
        let interrupt = Arc::new(Notify::new());
        let stop = Arc::new(Notify::new());

        let (queue, worker) = match synth {
            Some(synth) => {
                let (tx, rx) = mpsc::unbounded_channel();
                let worker = spawn_worker(
                    synth,
                    rx,
                    current.clone(),
                    pending.clone(),
                    interrupt.clone(),
                    stop.clone(),
                );
                (Some(tx), Some(worker))
            }
            None => (None, None),
        };

        Self {
            queue,
            current,
            pending,
            interrupt,
            stop,
            worker: Mutex::new(worker),
        }
    }

    /// Build a manager from the [`synth::probe`] environment cascade.
    pub fn from_env() -> Self {
        Self::new(synth::probe())
    }

    /// Whether a synthesis backend is bound to this process.
    pub fn synthesis_available(&self) -> bool {
        self.queue.is_some()
    }

    /// Queue `text` for playback with `voice` and return immediately.
    ///
    /// Playback happens on the background worker in strict submission
    /// order. Without a backend the utterance is recorded as spoken on the
    /// spot (empty text records as [`DONE`]); the only surfaced failure is
    /// a queue that no longer accepts jobs.
    pub fn speak(&self, text: impl Into<String>, voice: Voice) -> Result<(), SpeechError> {
        let text = text.into();
        let Some(queue) = &self.queue else {
            info!(text = %text, voice = %voice, "no synthesis backend; recording utterance unplayed");
            let recorded = if text.is_empty() { DONE.to_string() } else { text };
            *self.current.lock().unwrap() = recorded;
            return Ok(());
        };

        self.pending.fetch_add(1, Ordering::SeqCst);
        queue.send(PlaybackRequest { text, voice }).map_err(|_| {
            self.pending.fetch_sub(1, Ordering::SeqCst);
            SpeechError::QueueRejected
        })
    }

    /// The text currently being spoken, or [`DONE`] when idle.
    ///
    /// Non-blocking and callable from anywhere. In queue-backed operation
    /// the occupancy count is the authoritative idle signal: an empty queue
    /// with an idle worker reports [`DONE`] regardless of the raw slot
    /// value. Without a backend the last recorded utterance stays visible
    /// until the next one arrives.
    pub fn current_utterance(&self) -> String {
        if self.queue.is_some() && self.pending.load(Ordering::SeqCst) == 0 {
            return DONE.to_string();
        }
        self.current.lock().unwrap().clone()
    }

    /// Whether any utterance is playing or waiting to play.
    pub fn speaking(&self) -> bool {
        self.queue.is_some() && self.pending.load(Ordering::SeqCst) > 0
    }

    /// Abandon the utterance currently playing, if any.
    ///
    /// The worker returns to idle and keeps serving queued jobs; callers
    /// never observe an error. A no-op when nothing is playing; an early
    /// interrupt must not cancel a future utterance.
    pub fn interrupt(&self) {
        self.interrupt.notify_waiters();
    }

    /// Stop the worker, discarding queued utterances.
    ///
    /// The active utterance is interrupted rather than drained; callers
    /// that want a drain can poll [`current_utterance`](Self::current_utterance)
    /// for [`DONE`] first. After shutdown every `speak` call is rejected.
    pub async fn shutdown(&self) {
        self.stop.notify_one();
        let worker = self.worker.lock().unwrap().take();
        if let Some(worker) = worker {
            if worker.await.is_err() {
                warn!("speech worker terminated abnormally");
            }
        }
        self.pending.store(0, Ordering::SeqCst);
        *self.current.lock().unwrap() = DONE.to_string();
    }
}

impl Drop for SpeechManager {
    fn drop(&mut self) {
        // Resource hygiene for hosts that never call `shutdown`.
        if let Some(worker) = self.worker.lock().unwrap().take() {
            worker.abort();
        }
    }
}

fn spawn_worker(
    synth: Arc<dyn Synthesizer>,
    mut queue: mpsc::UnboundedReceiver<PlaybackRequest>,
    current: Arc<Mutex<String>>,
    pending: Arc<AtomicUsize>,
    interrupt: Arc<Notify>,
    stop: Arc<Notify>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let job = tokio::select! {
                _ = stop.notified() => break,
                job = queue.recv() => match job {
                    Some(job) => job,
                    None => break,
                },
            };

            *current.lock().unwrap() = job.text.clone();
            info!(text = %job.text, voice = %job.voice, "speaking");

            let mut stopped = false;
            tokio::select! {
                _ = stop.notified() => {
                    debug!("shutdown during playback; discarding the queue");
                    stopped = true;
                }
                _ = interrupt.notified() => {
                    debug!(text = %job.text, "utterance interrupted");
                }
                res = synth.speak(&job.text, &job.voice) => {
                    if let Err(err) = res {
                        // The worker outlives backend failures.
                        warn!(error = %err, text = %job.text, "synthesis failed; skipping utterance");
                    }
                }
            }

            *current.lock().unwrap() = DONE.to_string();
            pending.fetch_sub(1, Ordering::SeqCst);

            if stopped {
                break;
            }
        }
        debug!("speech worker stopped");
    })
}
