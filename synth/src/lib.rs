//! Pluggable speech-synthesis backends.
//!
//! A [`Synthesizer`] turns text into played-back speech. Implementations
//! must be `Send` and `Sync` so a single instance can be shared with the
//! playback worker, and they must tolerate their `speak` future being
//! dropped mid-flight: the scheduler cancels playback by abandoning the
//! future, never by poking backend internals.
//!
//! Binding a backend is the capability check. [`probe`] attempts it once at
//! startup; a `None` result means the host has no synthesis and the
//! scheduler degrades to tracking utterances without audio.

use async_trait::async_trait;
use thiserror::Error;

mod pacing;
mod probe;
mod remote;
mod simulate;
mod voice;

pub use pacing::playback_estimate;
pub use probe::probe;
pub use remote::RemoteSynthesizer;
pub use simulate::SimulatedSynthesizer;
pub use voice::Voice;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("synthesis backend failure: {0}")]
    Backend(String),
}

/// Convenience result type used throughout this crate.
pub type Result<T> = std::result::Result<T, SynthError>;

#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Render `text` with `voice` and play it to completion.
    ///
    /// The returned future resolves once playback has finished, real or
    /// simulated. Errors describe a failed rendering attempt; the text is
    /// considered consumed either way.
    async fn speak(&self, text: &str, voice: &Voice) -> Result<()>;
}
