//! Speech playback scheduling.
//!
//! [`SpeechManager`] accepts text-to-speech requests from a host scripting
//! environment, serializes them onto one background worker so utterances
//! play strictly in submission order, and answers status queries without
//! ever blocking on playback. When the host has no synthesis backend the
//! manager degrades to tracking utterances silently, so calling scripts
//! never branch on audio availability:
//!
//! ```
//! use speech::SpeechManager;
//! use synth::Voice;
//!
//! let manager = SpeechManager::new(None);
//! manager.speak("Hello", Voice::default()).unwrap();
//! assert_eq!(manager.current_utterance(), "Hello");
//! ```

use thiserror::Error;

mod manager;

pub use manager::{PlaybackRequest, SpeechManager, DONE};
pub use synth::{Synthesizer, Voice};

#[derive(Debug, Error)]
pub enum SpeechError {
    /// The playback queue is no longer accepting utterances.
    #[error("speech queue rejected the utterance")]
    QueueRejected,
}
