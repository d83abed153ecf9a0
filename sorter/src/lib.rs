//! Game rules for the shape sorter.
//!
//! This crate holds everything the browser game decides on its own: which
//! shapes exist, how a tray is dealt, how drag and touch gestures resolve
//! against holes, and which feedback each outcome produces. It never touches
//! the DOM. The Leptos host forwards raw gestures to [`game::GameCore`] and
//! applies the [`game::Effect`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`game`] | Game state, gesture handling, and emitted effects |
//! | [`shape`] | The shape catalog (kind, glyph, color) |
//! | [`deck`] | Dealing and shuffling the tray |
//! | [`input`] | Screen geometry and the gesture state machine |
//! | [`audio`] | Tone definitions and the gain envelope |
//! | [`feedback`] | Banner messages shown after a drop |
//! | [`consts`] | Shared timing and envelope constants |
//! | [`error`] | Error types |

pub mod audio;
pub mod consts;
pub mod deck;
pub mod error;
pub mod feedback;
pub mod game;
pub mod input;
pub mod shape;
