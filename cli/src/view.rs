use schoolyard_core as game;
use std::fmt::Write;

use game::{Color, Mode, OutcomeToken, RevealSignal, Round};

const TILES_PER_ROW: usize = 5;

pub(crate) struct ModeMeta {
    pub title: &'static str,
    pub emoji: &'static str,
    pub hint: &'static str,
}

pub(crate) const fn mode_meta(mode: Mode) -> ModeMeta {
    match mode {
        Mode::Teams => ModeMeta {
            title: "Pick Teams",
            emoji: "🎨",
            hint: "Flip a tile to find your team.",
        },
        Mode::SingleLoser => ModeMeta {
            title: "Pick a Loser",
            emoji: "💩",
            hint: "Flip until someone takes the L.",
        },
        Mode::SingleWinner => ModeMeta {
            title: "Pick a Winner",
            emoji: "👑",
            hint: "Flip until someone gets the W.",
        },
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RevealText {
    pub top: String,
    pub sub: &'static str,
    pub accent: Color,
}

pub(crate) fn reveal_text(token: &OutcomeToken) -> RevealText {
    let (top, sub, accent) = match token {
        OutcomeToken::Team(team) => (team.label.clone(), "That's your team. No whining.", team.color),
        OutcomeToken::Loser => ("💩 CERTIFIED L".into(), "Oof. That's you.", Color(0xff3b6b)),
        OutcomeToken::Safe => ("✅ SAFE".into(), "Not you. This time.", Color(0x44d07b)),
        OutcomeToken::Winner => ("👑 WINNER".into(), "Big W energy.", Color(0xfacc15)),
        OutcomeToken::NotWinner => ("😎 NOT YOU".into(), "Try again.", Color(0x60a5fa)),
    };
    RevealText { top, sub, accent }
}

pub(crate) const fn toast_for(signal: RevealSignal) -> &'static str {
    match signal {
        RevealSignal::LoserFound => "Certified L.",
        RevealSignal::WinnerFound => "Winner!",
    }
}

/// Wraps `text` in a 24-bit ANSI foreground color when `color` is set.
pub(crate) fn paint(text: &str, accent: Color, color: bool) -> String {
    if color {
        let (r, g, b) = accent.rgb();
        format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

pub(crate) fn render_header(round: &Round) -> String {
    let meta = mode_meta(round.config().mode);
    format!(
        "{} {}  [{}]\n{}",
        meta.emoji,
        meta.title,
        round.progress(),
        meta.hint
    )
}

pub(crate) fn render_board(round: &Round, color: bool) -> String {
    let mut out = String::new();
    for (row, tiles) in round.board().tiles().chunks(TILES_PER_ROW).enumerate() {
        for (col, tile) in tiles.iter().enumerate() {
            let number = row * TILES_PER_ROW + col + 1;
            let face = if tile.is_revealed() {
                let text = reveal_text(tile.token());
                paint(&text.top, text.accent, color)
            } else {
                "TAP".to_string()
            };
            if col > 0 {
                out.push_str("  ");
            }
            // writing to a String cannot fail
            let _ = write!(out, "{number:>3}: {face}");
        }
        out.push('\n');
    }
    out
}

/// One line per team in palette order, e.g. `Team Violet: 4`.
pub(crate) fn render_team_summary(round: &Round, color: bool) -> String {
    let tokens: Vec<OutcomeToken> = round
        .board()
        .tiles()
        .iter()
        .map(|tile| tile.token().clone())
        .collect();
    let sizes = game::team_sizes(&tokens);

    let mut out = String::new();
    for (index, size) in sizes.iter().enumerate() {
        let Some(team) = tokens
            .iter()
            .filter_map(OutcomeToken::team)
            .find(|team| usize::from(team.index) == index)
        else {
            continue;
        };
        let _ = writeln!(out, "{}: {}", paint(&team.label, team.color, color), size);
    }
    out
}
