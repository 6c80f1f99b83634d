use std::env;
use std::sync::Arc;

use tracing::{info, warn};

use crate::{RemoteSynthesizer, SimulatedSynthesizer, Synthesizer};

/// Attempt to bind a synthesis backend from the environment.
///
/// Checked in order:
/// 1. `TTS_URL`: a Coqui-style synthesis server.
/// 2. `TTS_SIMULATE`: the no-audio simulator.
///
/// Returns `None` when neither is configured. Absence is a normal setup,
/// not an error; the caller is expected to keep accepting speech requests
/// and simply never play them.
pub fn probe() -> Option<Arc<dyn Synthesizer>> {
    if let Ok(url) = env::var("TTS_URL") {
        info!(%url, "speech synthesis server configured");
        return Some(Arc::new(RemoteSynthesizer::new(url)));
    }
    if env::var("TTS_SIMULATE").is_ok() {
        info!("using simulated speech synthesis");
        return Some(Arc::new(SimulatedSynthesizer));
    }
    warn!("no speech synthesis backend configured; utterances will be tracked but not played");
    None
}
