use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("fewer than 2 participants")]
    TooFewParticipants,
    #[error("more than 200 participants")]
    TooManyParticipants,
    #[error("fewer than 2 teams")]
    TooFewTeams,
    #[error("more than 20 teams")]
    TooManyTeams,
    #[error("more teams than participants")]
    MoreTeamsThanParticipants,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid round config: {0}")]
    InvalidConfig(ConfigIssue),
    #[error("Tile {position} is out of range for a board of {len} tiles")]
    IndexOutOfRange { position: usize, len: usize },
}

pub type Result<T> = core::result::Result<T, GameError>;
