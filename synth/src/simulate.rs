use async_trait::async_trait;
use tokio::time::sleep;
use tracing::debug;

use crate::pacing::playback_estimate;
use crate::{Result, Synthesizer, Voice};

/// Backend that produces elapsed time instead of audio.
///
/// Suspends for [`playback_estimate`] of the text so the scheduler observes
/// realistic pacing. Stands in wherever only scheduling behavior matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedSynthesizer;

#[async_trait]
impl Synthesizer for SimulatedSynthesizer {
    async fn speak(&self, text: &str, voice: &Voice) -> Result<()> {
        let duration = playback_estimate(text);
        debug!(voice = %voice, ms = duration.as_millis() as u64, "simulating playback");
        sleep(duration).await;
        Ok(())
    }
}
