//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (Web Audio, timers, touch
//! hit-testing) from components so the components stay declarative and the
//! pure helpers stay testable without a browser.

pub mod audio;
pub mod effects;
pub mod one_shot;
pub mod styles;
pub mod touch;
