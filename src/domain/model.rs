use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kept words bucketed by character count, buckets in ascending length.
///
/// Within a bucket words keep the order they were read in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordsByLength {
    buckets: BTreeMap<usize, Vec<String>>,
}

impl WordsByLength {
    pub(crate) fn from_buckets(buckets: BTreeMap<usize, Vec<String>>) -> Self {
        Self { buckets }
    }

    pub fn get(&self, length: usize) -> Option<&[String]> {
        self.buckets.get(&length).map(Vec::as_slice)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.buckets.values().flatten().map(String::as_str)
    }

    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().copied()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn word_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Total characters over all kept words.
    pub fn num_letters(&self) -> usize {
        self.buckets
            .iter()
            .map(|(len, words)| len * words.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Raw per-character counts, case as read.
pub type LetterCount = BTreeMap<char, u64>;

/// Upper-cased letter to number of tiles.
pub type TileDistribution = BTreeMap<String, u64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerMode {
    SinglePlayer,
    Multiplayer,
}

impl PlayerMode {
    pub const ALL: [PlayerMode; 2] = [PlayerMode::Multiplayer, PlayerMode::SinglePlayer];

    pub fn tile_budget(self) -> u64 {
        match self {
            PlayerMode::SinglePlayer => 72,
            PlayerMode::Multiplayer => 144,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            PlayerMode::SinglePlayer => "tilesSinglePlayer.json",
            PlayerMode::Multiplayer => "tilesMultiplayer.json",
        }
    }
}

#[derive(Debug, Clone)]
pub struct WordFile {
    pub length: usize,
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub words_by_length: WordsByLength,
    pub word_files: Vec<WordFile>,
    pub single_player_tiles: TileDistribution,
    pub multiplayer_tiles: TileDistribution,
}

impl TransformResult {
    pub fn tiles(&self, mode: PlayerMode) -> &TileDistribution {
        match mode {
            PlayerMode::SinglePlayer => &self.single_player_tiles,
            PlayerMode::Multiplayer => &self.multiplayer_tiles,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub output_path: String,
    pub files_written: Vec<String>,
}
