use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::Color;

/// Fieldless tag of an [`OutcomeToken`], handy for counting and comparing
/// boards without caring about team labels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Team(u8),
    Safe,
    Loser,
    NotWinner,
    Winner,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAssignment {
    /// 0-based, stable for the whole round.
    pub index: u8,
    pub label: String,
    pub color: Color,
}

/// Hidden outcome dealt to one participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutcomeToken {
    Team(TeamAssignment),
    Safe,
    Loser,
    NotWinner,
    Winner,
}

impl OutcomeToken {
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Team(team) => TokenKind::Team(team.index),
            Self::Safe => TokenKind::Safe,
            Self::Loser => TokenKind::Loser,
            Self::NotWinner => TokenKind::NotWinner,
            Self::Winner => TokenKind::Winner,
        }
    }

    pub fn team(&self) -> Option<&TeamAssignment> {
        match self {
            Self::Team(team) => Some(team),
            _ => None,
        }
    }
}
