use anyhow::Context;
use clap::ValueEnum;
use schoolyard_core as game;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Mode names as players type them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ModeChoice {
    Teams,
    Loser,
    Winner,
}

impl From<ModeChoice> for game::Mode {
    fn from(choice: ModeChoice) -> Self {
        match choice {
            ModeChoice::Teams => game::Mode::Teams,
            ModeChoice::Loser => game::Mode::SingleLoser,
            ModeChoice::Winner => game::Mode::SingleWinner,
        }
    }
}

/// Defaults for the setup screen. Counts are stored raw and only clamped when
/// a round is set up, so a hand-edited file can't produce an illegal round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub mode: ModeChoice,
    pub participants: u32,
    pub teams: u32,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: ModeChoice::Teams,
            participants: game::DEFAULT_PARTICIPANTS.into(),
            teams: game::DEFAULT_TEAMS.into(),
            color: true,
        }
    }
}

impl Settings {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = Self::parse(&text)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        log::debug!("loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub(crate) fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub(crate) fn round_config(&self) -> game::RoundConfig {
        game::RoundConfig::new(
            self.mode.into(),
            saturate(self.participants),
            saturate(self.teams),
        )
    }
}

fn saturate(raw: u32) -> game::Count {
    game::Count::try_from(raw).unwrap_or(game::Count::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::parse("").unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(
            settings.round_config(),
            game::RoundConfig::new_unchecked(game::Mode::Teams, 10, 2)
        );
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings = Settings::parse("mode = \"loser\"\nparticipants = 7\n").unwrap();

        assert_eq!(settings.mode, ModeChoice::Loser);
        assert_eq!(settings.teams, 2);
        assert!(settings.color);
        assert_eq!(settings.round_config().mode, game::Mode::SingleLoser);
        assert_eq!(settings.round_config().participants, 7);
    }

    #[test]
    fn out_of_range_counts_are_clamped() {
        let settings = Settings {
            participants: 5000,
            teams: 1,
            ..Settings::default()
        };

        let config = settings.round_config();
        assert_eq!(config.participants, game::MAX_PARTICIPANTS);
        assert_eq!(config.teams, game::MIN_TEAMS);
    }

    #[test]
    fn teams_never_exceed_players() {
        let settings = Settings {
            participants: 3,
            teams: 12,
            ..Settings::default()
        };

        assert_eq!(settings.round_config().teams, 3);
    }

    #[test]
    fn unknown_mode_is_an_error() {
        assert!(Settings::parse("mode = \"everyone\"").is_err());
    }
}
