//! Tone definitions.
//!
//! Each tone is a plain oscillator whose gain ramps exponentially from
//! [`PEAK_GAIN`] to [`FLOOR_GAIN`] over the tone's duration, the same curve
//! Web Audio's `exponentialRampToValueAtTime` produces. The host reads the
//! ramp's endpoints from [`Tone::gain_at`] and lets Web Audio fill in the
//! curve between them.

#[cfg(test)]
#[path = "audio_test.rs"]
mod audio_test;

use crate::consts::{FLOOR_GAIN, PEAK_GAIN};

/// A fixed-frequency tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f64,
    pub duration_s: f64,
}

impl Tone {
    /// Played on a correct match (C5).
    pub const SUCCESS: Tone = Tone { frequency_hz: 523.0, duration_s: 0.4 };

    /// Played on a wrong match.
    pub const ERROR: Tone = Tone { frequency_hz: 200.0, duration_s: 0.3 };

    /// Envelope gain `t` seconds after the tone starts.
    ///
    /// Clamped to the peak before the start and to the floor after the end.
    #[must_use]
    pub fn gain_at(&self, t: f64) -> f64 {
        if t <= 0.0 || self.duration_s <= 0.0 {
            return PEAK_GAIN;
        }
        if t >= self.duration_s {
            return FLOOR_GAIN;
        }
        PEAK_GAIN * (FLOOR_GAIN / PEAK_GAIN).powf(t / self.duration_s)
    }
}
