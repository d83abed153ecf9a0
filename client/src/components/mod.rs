//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the game chrome and drag surfaces while reading and
//! writing the shared `RwSignal<GameCore>` context.

pub mod celebration;
pub mod feedback_banner;
pub mod hole_board;
pub mod score_board;
pub mod shape_tray;
pub mod sound_toggle;
