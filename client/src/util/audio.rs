//! Web Audio playback for game tones.
//!
//! The `AudioContext` is created lazily on the first user gesture and kept
//! for the lifetime of the page. Every failure (no Web Audio support, a
//! context the browser refuses to start, a node that cannot be created) is
//! logged and otherwise ignored: the game stays playable without sound.

use sorter::audio::Tone;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsValue;
#[cfg(feature = "hydrate")]
use web_sys::{AudioContext, AudioScheduledSourceNode};

#[cfg(feature = "hydrate")]
thread_local! {
    static CONTEXT: RefCell<Option<AudioContext>> = const { RefCell::new(None) };
}

/// Create the shared audio context if it does not exist yet.
pub fn ensure() {
    #[cfg(feature = "hydrate")]
    CONTEXT.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return;
        }
        match AudioContext::new() {
            Ok(ctx) => {
                log::debug!("audio context created");
                *slot = Some(ctx);
            }
            Err(e) => log::warn!("audio not supported: {e:?}"),
        }
    });
}

/// Play `tone` now. Does nothing until [`ensure`] has created a context.
pub fn play(tone: Tone) {
    #[cfg(feature = "hydrate")]
    CONTEXT.with(|slot| {
        let slot = slot.borrow();
        let Some(ctx) = slot.as_ref() else {
            return;
        };
        if let Err(e) = schedule(ctx, tone) {
            log::warn!("audio playback failed: {e:?}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = tone;
    }
}

/// Oscillator -> gain -> destination, with an exponential fade-out.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation)]
fn schedule(ctx: &AudioContext, tone: Tone) -> Result<(), JsValue> {
    let oscillator = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    let now = ctx.current_time();
    let end = now + tone.duration_s;
    oscillator.frequency().set_value_at_time(tone.frequency_hz as f32, now)?;
    gain.gain().set_value_at_time(tone.gain_at(0.0) as f32, now)?;
    gain.gain().exponential_ramp_to_value_at_time(tone.gain_at(tone.duration_s) as f32, end)?;

    AudioScheduledSourceNode::start_with_when(&oscillator, now)?;
    AudioScheduledSourceNode::stop_with_when(&oscillator, end)?;
    Ok(())
}
