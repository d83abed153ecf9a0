//! Dealing the tray.
//!
//! A deal holds [`COPIES_PER_KIND`] pieces of every catalog kind in random
//! order. Piece ids carry the round they were dealt in plus their dealt
//! position; the position also drives the staggered entrance animation.

#[cfg(test)]
#[path = "deck_test.rs"]
mod deck_test;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::consts::{COPIES_PER_KIND, PIECE_STAGGER_S};
use crate::shape::ShapeKind;

/// Number of pieces in a full deal.
pub const DECK_SIZE: usize = ShapeKind::ALL.len() * COPIES_PER_KIND;

/// Identifier of a piece, unique across deals.
///
/// `round` is the game the piece was dealt in and `index` its position in
/// that deal, so a piece from a previous game never shares an id with one
/// from the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId {
    pub round: u64,
    pub index: usize,
}

impl PieceId {
    #[must_use]
    pub const fn new(round: u64, index: usize) -> Self {
        Self { round, index }
    }
}

/// A draggable shape sitting in the tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: ShapeKind,
}

impl Piece {
    /// Entrance animation delay in seconds, staggered by dealt position.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn animation_delay_s(&self) -> f64 {
        self.id.index as f64 * PIECE_STAGGER_S
    }
}

/// Deal a shuffled tray for game `round` using `rng`.
pub fn deal<R: Rng + ?Sized>(round: u64, rng: &mut R) -> Vec<Piece> {
    let mut kinds: Vec<ShapeKind> = ShapeKind::ALL
        .iter()
        .flat_map(|&kind| std::iter::repeat_n(kind, COPIES_PER_KIND))
        .collect();
    kinds.shuffle(rng);
    kinds
        .into_iter()
        .enumerate()
        .map(|(i, kind)| Piece { id: PieceId::new(round, i), kind })
        .collect()
}

/// Deal a tray for `round` from a fixed seed. Equal seeds produce equal trays.
#[must_use]
pub fn deal_seeded(round: u64, seed: u64) -> Vec<Piece> {
    let mut rng = SmallRng::seed_from_u64(seed);
    deal(round, &mut rng)
}
