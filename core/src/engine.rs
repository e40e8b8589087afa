use alloc::vec::Vec;

use crate::*;

/// One round of play: the validated config plus the board currently dealt
/// from it. Owned by whoever drives the game.
#[derive(Clone, Debug, PartialEq)]
pub struct Round {
    config: RoundConfig,
    palette: Palette,
    board: Board,
}

impl Round {
    pub fn start(config: RoundConfig, rng: &mut impl RandomSource) -> Result<Self> {
        Self::start_with_palette(config, Palette::DEFAULT, rng)
    }

    pub fn start_with_palette(
        config: RoundConfig,
        palette: Palette,
        rng: &mut impl RandomSource,
    ) -> Result<Self> {
        let board = deal(config, &palette, rng)?;
        log::debug!("round started: {:?}", config);
        Ok(Self {
            config,
            palette,
            board,
        })
    }

    /// Deals a fresh board from the same config, discarding the current one.
    pub fn replay(&mut self, rng: &mut impl RandomSource) -> Result<()> {
        self.board = deal(self.config, &self.palette, rng)?;
        log::debug!("round reshuffled: {:?}", self.config);
        Ok(())
    }

    pub fn config(&self) -> RoundConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> RoundState {
        self.board.state()
    }

    pub fn progress(&self) -> RoundProgress {
        self.board.progress()
    }

    pub fn is_complete(&self) -> bool {
        self.state().is_complete()
    }

    pub fn reveal(&mut self, position: usize) -> Result<RevealOutcome> {
        let outcome = self.board.reveal(position)?;
        match &outcome {
            RevealOutcome::AlreadyRevealed => {
                log::trace!("tile {} already revealed", position);
            }
            RevealOutcome::Revealed(reveal) => {
                log::trace!("tile {} revealed: {:?}", position, reveal.token.kind());
                if reveal.completes_round {
                    log::debug!("round complete, {}", self.board.progress());
                }
            }
        }
        Ok(outcome)
    }

    /// Reveals every remaining tile in board order.
    pub fn reveal_all(&mut self) -> Result<Vec<Reveal>> {
        let hidden: Vec<usize> = self.board.hidden_positions().collect();
        let mut reveals = Vec::with_capacity(hidden.len());
        for position in hidden {
            if let RevealOutcome::Revealed(reveal) = self.reveal(position)? {
                reveals.push(reveal);
            }
        }
        Ok(reveals)
    }
}

fn deal(config: RoundConfig, palette: &Palette, rng: &mut impl RandomSource) -> Result<Board> {
    let tokens = partition_with_palette(config, palette)?;
    Ok(Board::new(tokens, rng))
}
