use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tokio::time::sleep;
use tracing::debug;

use crate::pacing::playback_estimate;
use crate::{Result, Synthesizer, Voice};

/// [`Synthesizer`] backed by a Coqui-style HTTP synthesis server.
///
/// Audio rendering stays on the server side; this client fetches the
/// synthesized bytes and paces for the estimated duration so queued
/// utterances do not pile onto each other.
#[derive(Clone)]
pub struct RemoteSynthesizer {
    url: String,
    client: Client,
}

impl RemoteSynthesizer {
    /// Create a new client targeting `url` (e.g. `http://localhost:5002`).
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }
}

#[derive(Serialize)]
struct SpeakRequest<'a> {
    text: &'a str,
    speaker_id: &'a str,
}

#[async_trait]
impl Synthesizer for RemoteSynthesizer {
    async fn speak(&self, text: &str, voice: &Voice) -> Result<()> {
        let payload = SpeakRequest {
            text,
            speaker_id: voice.id(),
        };
        let res = self
            .client
            .post(format!("{}/api/tts", self.url))
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;
        let audio = res.bytes().await?;
        debug!(voice = %voice, bytes = audio.len(), "synthesis response received");

        sleep(playback_estimate(text)).await;
        Ok(())
    }
}
