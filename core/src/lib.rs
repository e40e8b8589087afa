#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use palette::*;
pub use partition::*;
pub use random::*;
pub use token::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod palette;
mod partition;
mod random;
mod token;
mod types;

/// Game variant selected before a round starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    Teams,
    SingleLoser,
    SingleWinner,
}

impl Mode {
    pub const fn needs_teams(self) -> bool {
        matches!(self, Self::Teams)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::Teams
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub mode: Mode,
    pub participants: Count,
    /// Only meaningful for [`Mode::Teams`].
    pub teams: Count,
}

impl RoundConfig {
    pub const fn new_unchecked(mode: Mode, participants: Count, teams: Count) -> Self {
        Self {
            mode,
            participants,
            teams,
        }
    }

    /// Clamps raw user input into a legal configuration.
    pub fn new(mode: Mode, participants: Count, teams: Count) -> Self {
        let participants = participants.clamp(MIN_PARTICIPANTS, MAX_PARTICIPANTS);
        let teams = teams.clamp(MIN_TEAMS, MAX_TEAMS).min(participants);
        Self::new_unchecked(mode, participants, teams)
    }

    /// Picks a plausible headcount for a quick game, and a team count that
    /// leaves every team with at least two players where possible.
    pub fn randomized(mode: Mode, rng: &mut impl RandomSource) -> Self {
        let participants = RANDOM_PARTICIPANTS_MIN
            + rng.next_below(usize::from(RANDOM_PARTICIPANTS_MAX - RANDOM_PARTICIPANTS_MIN) + 1)
                as Count;
        let teams = if mode.needs_teams() {
            let max_teams = (participants / 2).max(MIN_TEAMS).min(RANDOM_TEAMS_MAX);
            MIN_TEAMS + rng.next_below(usize::from(max_teams - MIN_TEAMS) + 1) as Count
        } else {
            DEFAULT_TEAMS
        };
        Self::new(mode, participants, teams)
    }

    pub fn validate(&self) -> Result<()> {
        use ConfigIssue::*;

        if self.participants < MIN_PARTICIPANTS {
            return Err(GameError::InvalidConfig(TooFewParticipants));
        }
        if self.participants > MAX_PARTICIPANTS {
            return Err(GameError::InvalidConfig(TooManyParticipants));
        }
        if self.mode.needs_teams() {
            if self.teams < MIN_TEAMS {
                return Err(GameError::InvalidConfig(TooFewTeams));
            }
            if self.teams > MAX_TEAMS {
                return Err(GameError::InvalidConfig(TooManyTeams));
            }
            if self.teams > self.participants {
                return Err(GameError::InvalidConfig(MoreTeamsThanParticipants));
            }
        }
        Ok(())
    }

    pub const fn total_tiles(&self) -> usize {
        self.participants as usize
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new_unchecked(Mode::default(), DEFAULT_PARTICIPANTS, DEFAULT_TEAMS)
    }
}

/// Decisive moment announced when a single tile settles the round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealSignal {
    LoserFound,
    WinnerFound,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reveal {
    pub position: usize,
    pub token: OutcomeToken,
    pub signal: Option<RevealSignal>,
    /// Set when this was the last hidden tile on the board.
    pub completes_round: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RevealOutcome {
    AlreadyRevealed,
    Revealed(Reveal),
}

impl RevealOutcome {
    pub const fn has_update(&self) -> bool {
        match self {
            Self::AlreadyRevealed => false,
            Self::Revealed(_) => true,
        }
    }

    pub fn signal(&self) -> Option<RevealSignal> {
        match self {
            Self::AlreadyRevealed => None,
            Self::Revealed(reveal) => reveal.signal,
        }
    }
}
