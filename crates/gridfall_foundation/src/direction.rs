//! Compass and vertical directions for room links.

use std::fmt;

/// A direction in which a room may link to another room.
///
/// `None` is a sentinel: it is never used as a real link, and asking a room
/// for its `None` portal always comes up empty. It exists so that failed
/// direction parsing can flow through the ordinary "you cannot go that way"
/// path instead of being special-cased at every call site.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Sentinel for "no direction". Never a real link.
    None,
    /// North.
    North,
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
}

impl Direction {
    /// The real (linkable) directions, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::North,
        Self::East,
        Self::South,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// Returns the opposite direction, for bidirectional authoring.
    ///
    /// Nothing enforces symmetry; one-way portals are legal. The sentinel
    /// mirrors to itself.
    #[must_use]
    pub const fn mirror(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// The lowercase name, as used in running text ("You go north.").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Resolves a case-insensitive prefix to a real direction.
    ///
    /// The first declaration-order match wins; the prefixes of the six real
    /// directions do not overlap, so single letters are always enough.
    /// Never yields the `None` sentinel; an empty or unmatched word gives
    /// `Option::None`.
    #[must_use]
    pub fn parse_prefix(word: &str) -> Option<Self> {
        if word.is_empty() {
            return None;
        }
        let wanted = word.to_lowercase();
        Self::ALL.into_iter().find(|d| d.name().starts_with(&wanted))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
            Self::Up => "Up",
            Self::Down => "Down",
        };
        write!(f, "{name}")
    }
}
