use core::fmt;
use serde::{Deserialize, Serialize};

/// 24-bit RGB color, displayed as `#rrggbb`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    /// Used for teams past the end of the palette.
    pub const NEUTRAL: Self = Self(0xffffff);

    pub const fn rgb(self) -> (u8, u8, u8) {
        let [_, r, g, b] = self.0.to_be_bytes();
        (r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0xffffff)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TeamStyle {
    pub name: &'static str,
    pub color: Color,
}

impl TeamStyle {
    pub const fn new(name: &'static str, color: u32) -> Self {
        Self {
            name,
            color: Color(color),
        }
    }
}

/// Ordered team styles. Position in the palette is also the order in which
/// teams receive the leftover members of an uneven split.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    styles: &'static [TeamStyle],
}

const DEFAULT_STYLES: [TeamStyle; 8] = [
    TeamStyle::new("Team Violet", 0x7c5cff),
    TeamStyle::new("Team Teal", 0x2dd4bf),
    TeamStyle::new("Team Pink", 0xff3b6b),
    TeamStyle::new("Team Lime", 0xa3e635),
    TeamStyle::new("Team Blue", 0x60a5fa),
    TeamStyle::new("Team Orange", 0xfb923c),
    TeamStyle::new("Team Yellow", 0xfacc15),
    TeamStyle::new("Team Red", 0xf87171),
];

impl Palette {
    pub const DEFAULT: Self = Self::new(&DEFAULT_STYLES);

    pub const fn new(styles: &'static [TeamStyle]) -> Self {
        Self { styles }
    }

    pub const fn len(&self) -> usize {
        self.styles.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn get(&self, team_index: usize) -> Option<&TeamStyle> {
        self.styles.get(team_index)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
