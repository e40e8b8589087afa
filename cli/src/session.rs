use schoolyard_core as game;
use std::io::{BufRead, Write};

use crate::view;
use game::{RandomSource, Reveal, RevealOutcome, Round, RoundConfig};

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    /// 0-based tile position.
    Reveal(usize),
    RevealAll,
    PlayAgain,
    Quit,
}

impl Msg {
    /// Reads one line of player input. Tile numbers are 1-based on screen and
    /// anything outside the board is treated as unrecognized.
    pub(crate) fn parse(input: &str, tiles: usize) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "a" | "all" => Some(Self::RevealAll),
            "r" | "again" => Some(Self::PlayAgain),
            "q" | "quit" | "exit" => Some(Self::Quit),
            other => match other.parse::<usize>() {
                Ok(number) if (1..=tiles).contains(&number) => Some(Self::Reveal(number - 1)),
                _ => None,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Update {
    Revealed(Vec<Reveal>),
    AlreadyRevealed(usize),
    Reshuffled,
    Quit,
}

/// Everything the front end holds between inputs: the round being played,
/// the random source it deals from, and display preferences.
#[derive(Debug)]
pub(crate) struct Session<R> {
    round: Round,
    rng: R,
    color: bool,
}

impl<R: RandomSource> Session<R> {
    pub(crate) fn start(config: RoundConfig, mut rng: R, color: bool) -> game::Result<Self> {
        let round = Round::start(config, &mut rng)?;
        Ok(Self { round, rng, color })
    }

    pub(crate) fn round(&self) -> &Round {
        &self.round
    }

    pub(crate) fn update(&mut self, msg: Msg) -> game::Result<Update> {
        Ok(match msg {
            Msg::Reveal(position) => match self.round.reveal(position)? {
                RevealOutcome::AlreadyRevealed => Update::AlreadyRevealed(position),
                RevealOutcome::Revealed(reveal) => Update::Revealed(vec![reveal]),
            },
            Msg::RevealAll => Update::Revealed(self.round.reveal_all()?),
            Msg::PlayAgain => {
                self.round.replay(&mut self.rng)?;
                Update::Reshuffled
            }
            Msg::Quit => Update::Quit,
        })
    }

    fn render_round(&self, out: &mut impl Write) -> anyhow::Result<()> {
        writeln!(out, "{}", view::render_header(&self.round))?;
        write!(out, "{}", view::render_board(&self.round, self.color))?;
        Ok(())
    }

    fn render_update(&self, update: &Update, out: &mut impl Write) -> anyhow::Result<()> {
        match update {
            Update::Revealed(reveals) => {
                for reveal in reveals {
                    let text = view::reveal_text(&reveal.token);
                    writeln!(
                        out,
                        "Tile {}: {} {}",
                        reveal.position + 1,
                        view::paint(&text.top, text.accent, self.color),
                        text.sub
                    )?;
                    if let Some(signal) = reveal.signal {
                        writeln!(out, ">> {}", view::toast_for(signal))?;
                    }
                }
            }
            Update::AlreadyRevealed(position) => {
                writeln!(out, "Tile {} is already flipped.", position + 1)?;
            }
            Update::Reshuffled => writeln!(out, ">> Shuffled.")?,
            Update::Quit => return Ok(()),
        }

        self.render_round(out)?;
        if self.round.is_complete() {
            if self.round.config().mode.needs_teams() {
                write!(out, "{}", view::render_team_summary(&self.round, self.color))?;
            }
            writeln!(out, "All tiles flipped. 'r' to play again, 'q' to quit.")?;
        }
        Ok(())
    }

    /// Drives the round from line-based input until the player quits or the
    /// input ends.
    pub(crate) fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
        self.render_round(out)?;
        for line in input.lines() {
            let line = line?;
            let Some(msg) = Msg::parse(&line, self.round.board().len()) else {
                log::trace!("unrecognized input: {:?}", line);
                writeln!(
                    out,
                    "Type a tile number 1-{}, 'a' to flip the rest, 'r' to play again, or 'q' to quit.",
                    self.round.board().len()
                )?;
                continue;
            };

            log::debug!("input: {:?}", msg);
            let update = self.update(msg)?;
            if update == Update::Quit {
                break;
            }
            self.render_update(&update, out)?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::{Mode, RoundState, SeededRandom, TokenKind};

    fn session(config: RoundConfig) -> Session<SeededRandom> {
        Session::start(config, SeededRandom::seed_from_u64(21), false).unwrap()
    }

    fn play(session: &mut Session<SeededRandom>, input: &str) -> String {
        let mut out = Vec::new();
        session.run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_accepts_numbers_and_commands() {
        assert_eq!(Msg::parse("1", 5), Some(Msg::Reveal(0)));
        assert_eq!(Msg::parse(" 5 \n", 5), Some(Msg::Reveal(4)));
        assert_eq!(Msg::parse("A", 5), Some(Msg::RevealAll));
        assert_eq!(Msg::parse("again", 5), Some(Msg::PlayAgain));
        assert_eq!(Msg::parse("q", 5), Some(Msg::Quit));
    }

    #[test]
    fn parse_rejects_tiles_off_the_board() {
        assert_eq!(Msg::parse("0", 5), None);
        assert_eq!(Msg::parse("6", 5), None);
        assert_eq!(Msg::parse("-1", 5), None);
        assert_eq!(Msg::parse("flip", 5), None);
    }

    #[test]
    fn double_tap_reports_already_flipped() {
        let mut session = session(RoundConfig::new(Mode::SingleLoser, 5, 2));

        let first = session.update(Msg::Reveal(0)).unwrap();
        assert!(matches!(first, Update::Revealed(ref reveals) if reveals.len() == 1));
        assert_eq!(session.update(Msg::Reveal(0)).unwrap(), Update::AlreadyRevealed(0));
        assert_eq!(session.round().progress().revealed, 1);
    }

    #[test]
    fn play_again_resets_the_board() {
        let mut session = session(RoundConfig::new(Mode::Teams, 6, 3));
        session.update(Msg::RevealAll).unwrap();
        assert_eq!(session.round().state(), RoundState::Complete);

        assert_eq!(session.update(Msg::PlayAgain).unwrap(), Update::Reshuffled);
        assert_eq!(session.round().state(), RoundState::NotStarted);
    }

    #[test]
    fn run_plays_a_loser_round_to_the_end() {
        let mut session = session(RoundConfig::new(Mode::SingleLoser, 3, 2));

        let output = play(&mut session, "1\n1\nnope\na\nq\n");

        assert!(output.contains("Tile 1 is already flipped."));
        assert!(output.contains("Type a tile number 1-3"));
        assert!(output.contains(">> Certified L."));
        assert!(output.contains("[3 / 3 flipped]"));
        assert!(output.contains("All tiles flipped."));
    }

    #[test]
    fn run_prints_team_summary_when_done() {
        let mut session = session(RoundConfig::new(Mode::Teams, 4, 2));

        let output = play(&mut session, "a\n");

        assert!(output.contains("Team Violet: 2\nTeam Teal: 2\n"));
    }

    #[test]
    fn run_reshuffles_on_request() {
        let mut session = session(RoundConfig::new(Mode::SingleWinner, 4, 2));

        let output = play(&mut session, "2\nr\n");

        assert!(output.contains(">> Shuffled."));
        assert!(output.ends_with("  4: TAP\n"));
        let winners = session
            .round()
            .board()
            .tiles()
            .iter()
            .filter(|t| t.token().kind() == TokenKind::Winner)
            .count();
        assert_eq!(winners, 1);
    }

    #[test]
    fn run_stops_at_quit() {
        let mut session = session(RoundConfig::new(Mode::SingleLoser, 4, 2));

        play(&mut session, "q\n1\n");

        assert_eq!(session.round().progress().revealed, 0);
    }
}
