//! High score leaderboard
//!
//! Kept in memory for the current session, tracks top 10 games.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
    /// Ticks the game lasted
    pub ticks: u64,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// A game that ate nothing is never listed; otherwise it needs a free
    /// slot or to beat the current last place.
    pub fn qualifies(&self, score: u32) -> bool {
        score > 0
            && (self.entries.len() < MAX_HIGH_SCORES
                || self.entries.last().is_some_and(|last| score > last.score))
    }

    /// Record a game that just ended. Returns its 1-based rank, or `None`
    /// when it falls off the table.
    pub fn add_score(&mut self, score: u32, ticks: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        // Equal scores keep the earlier game ahead
        let slot = self.entries.partition_point(|e| e.score >= score);
        self.entries.insert(slot, HighScoreEntry { score, ticks });
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(slot + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}
