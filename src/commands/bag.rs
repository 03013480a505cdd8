//! The tile bag
//!
//! Standard Bananagrams ships 144 tiles with fixed per-letter counts; the
//! double game doubles every count. Used by the benchmark command to draw
//! realistic random hands.

use crate::core::{Hand, Letter, ALPHABET_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;

/// Per-letter tile counts of the standard 144-tile game, A through Z
pub const STANDARD_TILE_COUNTS: [u8; ALPHABET_SIZE] = [
    13, 3, 3, 6, 18, 3, 4, 3, 12, 2, 2, 5, 3, 8, 11, 3, 2, 9, 6, 9, 6, 3, 3, 2, 3, 2,
];

/// Total tiles in the standard bag
pub const STANDARD_TILE_TOTAL: usize = 144;

/// Draw a hand of `tiles` tiles from a freshly shuffled bag
///
/// Draws without replacement; asking for more tiles than the bag holds
/// returns the whole bag.
pub fn draw_hand<R: Rng + ?Sized>(rng: &mut R, tiles: usize, double_bag: bool) -> Hand {
    let mut bag: Vec<Letter> = Vec::with_capacity(if double_bag {
        STANDARD_TILE_TOTAL * 2
    } else {
        STANDARD_TILE_TOTAL
    });
    for (letter, &count) in STANDARD_TILE_COUNTS.iter().enumerate() {
        let count = if double_bag { count * 2 } else { count };
        for _ in 0..count {
            bag.push(letter as Letter);
        }
    }
    bag.shuffle(rng);

    let mut hand = Hand::new();
    for &letter in bag.iter().take(tiles) {
        hand.add(letter);
    }
    hand
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_bag_has_144_tiles() {
        let total: usize = STANDARD_TILE_COUNTS.iter().map(|&c| c as usize).sum();
        assert_eq!(total, STANDARD_TILE_TOTAL);
    }

    #[test]
    fn draw_respects_requested_size() {
        let mut rng = rand::rng();
        assert_eq!(draw_hand(&mut rng, 21, false).total(), 21);
        assert_eq!(draw_hand(&mut rng, 0, false).total(), 0);
    }

    #[test]
    fn draw_caps_at_bag_size() {
        let mut rng = rand::rng();
        assert_eq!(draw_hand(&mut rng, 500, false).total(), STANDARD_TILE_TOTAL);
        assert_eq!(
            draw_hand(&mut rng, 500, true).total(),
            STANDARD_TILE_TOTAL * 2
        );
    }

    #[test]
    fn draw_never_exceeds_per_letter_supply() {
        let mut rng = rand::rng();
        let hand = draw_hand(&mut rng, STANDARD_TILE_TOTAL, false);
        for (letter, &limit) in STANDARD_TILE_COUNTS.iter().enumerate() {
            assert!(hand.count(letter as Letter) <= limit);
        }
    }
}
