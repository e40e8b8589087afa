use alloc::{format, string::ToString, vec, vec::Vec};

use crate::*;

/// Deals one token per participant using the default team palette.
pub fn partition(config: RoundConfig) -> Result<Vec<OutcomeToken>> {
    partition_with_palette(config, &Palette::DEFAULT)
}

pub fn partition_with_palette(config: RoundConfig, palette: &Palette) -> Result<Vec<OutcomeToken>> {
    config.validate()?;

    let n = usize::from(config.participants);
    let tokens = match config.mode {
        Mode::Teams => deal_teams(n, config.teams, palette),
        Mode::SingleLoser => deal_one_odd(n, OutcomeToken::Safe, OutcomeToken::Loser),
        Mode::SingleWinner => deal_one_odd(n, OutcomeToken::NotWinner, OutcomeToken::Winner),
    };
    debug_assert_eq!(tokens.len(), n);
    Ok(tokens)
}

fn deal_teams(n: usize, teams: Count, palette: &Palette) -> Vec<OutcomeToken> {
    let t = usize::from(teams);
    let base = n / t;
    let remainder = n % t;

    let mut tokens = Vec::with_capacity(n);
    for index in 0..teams {
        // leftovers go to the lowest indices, i.e. palette order
        let size = base + usize::from(usize::from(index) < remainder);
        let assignment = team_assignment(index, palette);
        tokens.extend(vec![OutcomeToken::Team(assignment); size]);
    }
    tokens
}

fn team_assignment(index: u8, palette: &Palette) -> TeamAssignment {
    match palette.get(usize::from(index)) {
        Some(style) => TeamAssignment {
            index,
            label: style.name.to_string(),
            color: style.color,
        },
        None => TeamAssignment {
            index,
            label: format!("Team {}", u16::from(index) + 1),
            color: Color::NEUTRAL,
        },
    }
}

fn deal_one_odd(n: usize, common: OutcomeToken, odd: OutcomeToken) -> Vec<OutcomeToken> {
    let mut tokens = vec![common; n - 1];
    tokens.push(odd);
    tokens
}

/// Member count per team index. Non-team tokens are ignored.
pub fn team_sizes(tokens: &[OutcomeToken]) -> Vec<usize> {
    let mut sizes = Vec::new();
    for team in tokens.iter().filter_map(OutcomeToken::team) {
        let index = usize::from(team.index);
        if sizes.len() <= index {
            sizes.resize(index + 1, 0);
        }
        sizes[index] += 1;
    }
    sizes
}
