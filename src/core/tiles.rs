use crate::domain::model::{LetterCount, PlayerMode, TileDistribution, WordsByLength};

/// Every letter that occurs at all gets at least this many tiles.
pub const MIN_TILES_PER_LETTER: u64 = 2;

pub fn count_letters(words: &WordsByLength) -> LetterCount {
    let mut counts = LetterCount::new();
    for word in words.words() {
        for c in word.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
    }
    counts
}

/// Scales letter frequencies to the tile budget of `mode`.
///
/// Counting is case-sensitive; keys are upper-cased only here, so if both
/// `A` and `a` occur, `a` (later in sort order) decides the value of `"A"`.
pub fn letter_distribution(words: &WordsByLength, mode: PlayerMode) -> TileDistribution {
    let counts = count_letters(words);
    let num_letters = words.num_letters();
    let budget = mode.tile_budget();

    let mut distribution = TileDistribution::new();
    if num_letters == 0 {
        return distribution;
    }

    for (letter, count) in counts {
        let share = (count as f64 / num_letters as f64 * budget as f64).floor() as u64;
        distribution.insert(letter.to_uppercase().collect(), share.max(MIN_TILES_PER_LETTER));
    }
    distribution
}
