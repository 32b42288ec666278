//! Timing and melody constants for the feedback cues.

use std::time::Duration;

/// Notes of the magician alert melody, in Hz.
pub const MAGIC_NOTES: [u32; 7] = [660, 880, 990, 1320, 1100, 990, 660];

/// How long each note sounds.
pub const NOTE_DURATION: Duration = Duration::from_millis(100);

/// How many times the melody repeats per alert.
pub const MELODY_REPEATS: usize = 3;

/// How long an acknowledged role's LED stays lit.
pub const LED_HOLD: Duration = Duration::from_secs(1);

/// Wall time of the complete alert melody.
pub fn melody_duration() -> Duration {
    NOTE_DURATION * (MAGIC_NOTES.len() * MELODY_REPEATS) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_melody_duration_is_bounded() {
        // 7 notes x 3 repeats x 100ms
        assert_eq!(melody_duration(), Duration::from_millis(2100));
    }
}
