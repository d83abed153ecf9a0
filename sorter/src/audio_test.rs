use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn tone_constants() {
    assert!(close(Tone::SUCCESS.frequency_hz, 523.0));
    assert!(close(Tone::SUCCESS.duration_s, 0.4));
    assert!(close(Tone::ERROR.frequency_hz, 200.0));
    assert!(close(Tone::ERROR.duration_s, 0.3));
}

#[test]
fn envelope_starts_at_peak_and_ends_at_floor() {
    let tone = Tone::SUCCESS;
    assert!(close(tone.gain_at(0.0), PEAK_GAIN));
    assert!(close(tone.gain_at(tone.duration_s), FLOOR_GAIN));
}

#[test]
fn envelope_is_clamped_outside_the_tone() {
    let tone = Tone::ERROR;
    assert!(close(tone.gain_at(-1.0), PEAK_GAIN));
    assert!(close(tone.gain_at(5.0), FLOOR_GAIN));
}

#[test]
fn envelope_midpoint_is_geometric_mean() {
    let tone = Tone::SUCCESS;
    let mid = tone.gain_at(tone.duration_s / 2.0);
    assert!(close(mid, (PEAK_GAIN * FLOOR_GAIN).sqrt()));
}

#[test]
fn envelope_decreases_monotonically() {
    let tone = Tone::ERROR;
    let mut last = tone.gain_at(0.0);
    for step in 1..=30 {
        let g = tone.gain_at(f64::from(step) * 0.01);
        assert!(g < last, "gain rose at step {step}");
        last = g;
    }
}
