//! Player roster - name/score records that outlive a single session
//!
//! The roster is an explicit value passed between the game loop and the
//! game-over screen, never ambient state. On disk it is a JSON array of
//! records; the trailing "NEW PLAYER" slot exists only in memory and is
//! never saved.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default records file next to the binary
pub const RECORDS_FILE: &str = "records.dat";

/// Name of the reserved in-memory slot
pub const NEW_PLAYER_SLOT: &str = "NEW PLAYER";

/// One persisted player record.
///
/// Field names are capitalized in the JSON for compatibility with existing
/// records files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Score")]
    pub score: u32,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Best-player list plus the reserved new-player slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: Vec<PlayerRecord>,
}

impl Roster {
    /// Built-in roster used when no records file exists yet
    pub fn new() -> Self {
        let mut players: Vec<PlayerRecord> = (1..=5)
            .map(|i| PlayerRecord::new(format!("Player{}", i), 0))
            .collect();
        players.push(PlayerRecord::new(NEW_PLAYER_SLOT, 0));
        Self { players }
    }

    /// Load records from a JSON file, appending the reserved slot.
    ///
    /// A missing file is not an error; the default roster is returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read records from {}", path.display()))?;
        let mut players: Vec<PlayerRecord> = serde_json::from_str(&data)
            .with_context(|| format!("malformed records file {}", path.display()))?;
        players.push(PlayerRecord::new(NEW_PLAYER_SLOT, 0));
        Ok(Self { players })
    }

    /// Save all records except the reserved slot
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let persisted = &self.players[..self.players.len() - 1];
        let data = serde_json::to_string(persisted).context("failed to encode records")?;
        fs::write(path, data)
            .with_context(|| format!("failed to write records to {}", path.display()))?;
        Ok(())
    }

    /// Sort descending by score (best players first)
    pub fn sort(&mut self) {
        self.players.sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// Record a finished session's score for the named player.
    ///
    /// Keeps the player's best score; an unknown name takes over the
    /// reserved slot and a fresh slot is appended behind it.
    pub fn record_score(&mut self, name: &str, score: u32) {
        if let Some(player) = self.players.iter_mut().find(|p| p.name == name) {
            if score > player.score {
                player.score = score;
            }
            return;
        }
        let last = self.players.len() - 1;
        self.players[last] = PlayerRecord::new(name, score);
        self.players.push(PlayerRecord::new(NEW_PLAYER_SLOT, 0));
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Best score currently on the roster
    pub fn best_score(&self) -> u32 {
        self.players.iter().map(|p| p.score).max().unwrap_or(0)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
