use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    token: OutcomeToken,
    revealed: bool,
}

impl Tile {
    pub fn token(&self) -> &OutcomeToken {
        &self.token
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    NotStarted,
    InProgress,
    Complete,
}

impl RoundState {
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::NotStarted
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundProgress {
    pub revealed: usize,
    pub total: usize,
    pub is_complete: bool,
}

impl RoundProgress {
    pub const fn remaining(&self) -> usize {
        self.total - self.revealed
    }
}

impl fmt::Display for RoundProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} flipped", self.revealed, self.total)
    }
}

/// Shuffled row of tiles for one round. Positions never move once dealt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    pub fn new(mut tokens: Vec<OutcomeToken>, rng: &mut impl RandomSource) -> Self {
        shuffle(&mut tokens, rng);
        let tiles = tokens
            .into_iter()
            .map(|token| Tile {
                token,
                revealed: false,
            })
            .collect();
        Self { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, position: usize) -> Result<&Tile> {
        self.tiles.get(position).ok_or(GameError::IndexOutOfRange {
            position,
            len: self.tiles.len(),
        })
    }

    pub fn reveal(&mut self, position: usize) -> Result<RevealOutcome> {
        let len = self.tiles.len();
        let tile = self
            .tiles
            .get_mut(position)
            .ok_or(GameError::IndexOutOfRange { position, len })?;

        if tile.revealed {
            return Ok(RevealOutcome::AlreadyRevealed);
        }
        tile.revealed = true;

        let signal = match tile.token {
            OutcomeToken::Loser => Some(RevealSignal::LoserFound),
            OutcomeToken::Winner => Some(RevealSignal::WinnerFound),
            OutcomeToken::Team(_) | OutcomeToken::Safe | OutcomeToken::NotWinner => None,
        };
        let token = tile.token.clone();

        Ok(RevealOutcome::Revealed(Reveal {
            position,
            token,
            signal,
            completes_round: self.progress().is_complete,
        }))
    }

    pub fn progress(&self) -> RoundProgress {
        let revealed = self.tiles.iter().filter(|tile| tile.revealed).count();
        let total = self.tiles.len();
        RoundProgress {
            revealed,
            total,
            is_complete: revealed == total,
        }
    }

    pub fn state(&self) -> RoundState {
        let progress = self.progress();
        if progress.is_complete {
            RoundState::Complete
        } else if progress.revealed == 0 {
            RoundState::NotStarted
        } else {
            RoundState::InProgress
        }
    }

    /// Positions that are still face down, in board order.
    pub fn hidden_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| !tile.revealed)
            .map(|(position, _)| position)
    }
}
