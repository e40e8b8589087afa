/// Count type used for participant and team counts.
pub type Count = u8;

pub const MIN_PARTICIPANTS: Count = 2;
pub const MAX_PARTICIPANTS: Count = 200;
pub const DEFAULT_PARTICIPANTS: Count = 10;

pub const MIN_TEAMS: Count = 2;
pub const MAX_TEAMS: Count = 20;
pub const DEFAULT_TEAMS: Count = 2;

/// Bounds used when picking numbers for a quick randomized round.
pub const RANDOM_PARTICIPANTS_MIN: Count = 6;
pub const RANDOM_PARTICIPANTS_MAX: Count = 30;
pub const RANDOM_TEAMS_MAX: Count = 6;
