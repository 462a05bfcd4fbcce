use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Rank and suit counts share one sweep.
pub const RANK_SUIT_VALUES: &[u32] = &[1, 2, 4, 13, 26, 52];

pub const PILE_VALUES: &[u32] = &[
    2, 4, 5, 8, 9, 10, 15, 20, 22, 25, 28, 30, 32, 35, 38, 40, 42, 45, 50, 52,
];

pub const DECK_SIZE_VALUES: &[u32] = &[
    5, 14, 30, 52, 60, 85, 120, 132, 175, 750, 3000, 6900, 12200, 15525, 19000, 43125, 76500,
    120000, 172500, 307000, 480000,
];

pub const SEED_VALUES: &[u32] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// An experimental dimension swept by the benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    Pile,
    DeckSize,
    Suit,
    Rank,
    Seed,
}

impl Axis {
    /// Subdirectory name under each variant's results directory.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Axis::Pile => "pile",
            Axis::DeckSize => "decksize",
            Axis::Suit => "suit",
            Axis::Rank => "rank",
            Axis::Seed => "seed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Axis::Pile => "Number of Piles",
            Axis::DeckSize => "Number of Cards",
            Axis::Suit => "Number of Suits",
            Axis::Rank => "Number of Ranks",
            Axis::Seed => "Seed Generator",
        }
    }

    /// The values swept along this axis, in plotting order.
    pub fn values(&self) -> &'static [u32] {
        match self {
            Axis::Pile => PILE_VALUES,
            Axis::DeckSize => DECK_SIZE_VALUES,
            Axis::Suit | Axis::Rank => RANK_SUIT_VALUES,
            Axis::Seed => SEED_VALUES,
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}
