use std::time::Duration;

/// Shortest playback any utterance gets, empty text included.
const FLOOR: Duration = Duration::from_millis(500);

/// Reading speed behind the estimate: 150 words per minute at an average
/// of five characters per word.
const CHARS_PER_MINUTE: u64 = 750;

/// Estimated playback duration for `text`.
///
/// Monotonic in text length and floored at half a second. This is a
/// placeholder heuristic; a backend that reports real durations should be
/// preferred over it wherever one exists.
pub fn playback_estimate(text: &str) -> Duration {
    let paced = Duration::from_millis(text.len() as u64 * 60_000 / CHARS_PER_MINUTE);
    paced.max(FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_short_utterances() {
        assert_eq!(playback_estimate(""), Duration::from_millis(500));
        assert_eq!(playback_estimate(&"x".repeat(6)), Duration::from_millis(500));
    }

    #[test]
    fn grows_past_the_floor() {
        // 6 chars pace to 480ms and clamp; 7 chars pace past the floor.
        assert_eq!(playback_estimate(&"x".repeat(7)), Duration::from_millis(560));
        assert_eq!(playback_estimate(&"x".repeat(750)), Duration::from_secs(60));
    }

    #[test]
    fn monotonic_in_length() {
        let mut last = Duration::ZERO;
        for len in 0..100 {
            let d = playback_estimate(&"x".repeat(len));
            assert!(d >= last, "estimate shrank at length {len}");
            last = d;
        }
    }
}
