use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::Combine;

/// Unique identifier of a physical UNO card, in the range 1..=108.
///
/// IDs 1-100 are the colored cards, grouped 25 per color (1-25 red,
/// 26-50 green, 51-75 blue, 76-100 yellow). Within a group, slot
/// `id % 25` encodes the face: 0 is the single rank-0 card, 1-18 encode
/// ranks 1-9 twice, 19-20 skip, 21-22 reverse, 23-24 draw-two. IDs
/// 101-104 are wild, 105-108 wild-draw-four.
pub type CardId = u8;

pub const MIN_CARD_ID: CardId = 1;
pub const MAX_CARD_ID: CardId = 108;
pub const DECK_SIZE: usize = 108;
pub const CARDS_PER_COLOR: CardId = 25;
pub const COLORED_CARD_COUNT: CardId = 100;
pub const INITIAL_HAND_SIZE: usize = 7;
pub const MAX_RANK: u8 = 9;

/// One of the four real card colors. The wild family has no color, which
/// is expressed as `Option<Color>` throughout the crate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Stable position of the color within [`Color::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Blue => 2,
            Color::Yellow => 3,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
        };
        f.write_str(name)
    }
}

/// The face of a card: a rank or one of the five symbols.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Numbered card with rank 0..=9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Face {
    /// Returns true for rank cards.
    #[inline]
    pub fn is_number(self) -> bool {
        matches!(self, Face::Number(_))
    }

    /// Returns the rank when available.
    #[inline]
    pub fn rank(self) -> Option<u8> {
        match self {
            Face::Number(rank) => Some(rank),
            _ => None,
        }
    }

    /// Returns true for the colorless wild family.
    #[inline]
    pub fn is_wild_family(self) -> bool {
        matches!(self, Face::Wild | Face::WildDrawFour)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Number(rank) => write!(f, "{rank}"),
            Face::Skip => f.write_str("skip"),
            Face::Reverse => f.write_str("reverse"),
            Face::DrawTwo => f.write_str("draw2"),
            Face::Wild => f.write_str("wild"),
            Face::WildDrawFour => f.write_str("wildDraw4"),
        }
    }
}

/// Decoded attributes of a card. `color` is `None` for the wild family
/// until a player declares one.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Description {
    pub color: Option<Color>,
    pub face: Face,
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "{color} {}", self.face),
            None => write!(f, "{}", self.face),
        }
    }
}

/// Decodes a card ID into its description. Pure and total over 1..=108;
/// IDs outside that range are a caller bug.
pub fn describe(card: CardId) -> Description {
    debug_assert!(
        (MIN_CARD_ID..=MAX_CARD_ID).contains(&card),
        "card id {card} out of range"
    );
    if card > COLORED_CARD_COUNT {
        let face = if card <= COLORED_CARD_COUNT + 4 {
            Face::Wild
        } else {
            Face::WildDrawFour
        };
        return Description { color: None, face };
    }

    let color = match (card - 1) / CARDS_PER_COLOR {
        0 => Color::Red,
        1 => Color::Green,
        2 => Color::Blue,
        _ => Color::Yellow,
    };
    let slot = card % CARDS_PER_COLOR;
    let face = match slot {
        0 => Face::Number(0),
        1..=18 => Face::Number(if slot <= 9 { slot } else { slot - 9 }),
        19 | 20 => Face::Skip,
        21 | 22 => Face::Reverse,
        _ => Face::DrawTwo,
    };
    Description {
        color: Some(color),
        face,
    }
}

/// Returns true when the card is wild or wild-draw-four.
#[inline]
pub fn is_wild_family(card: CardId) -> bool {
    card > COLORED_CARD_COUNT
}

/// Builds the full 108-card deck in deterministic order (unshuffled).
pub fn full_deck() -> Vec<CardId> {
    (MIN_CARD_ID..=MAX_CARD_ID).collect()
}

/// Synthesizes the description of a composite two-card play.
///
/// Both cards must be rank cards of the same color and the combined rank
/// must land on a physically existing value (0..=9, no wraparound);
/// subtraction uses the absolute difference. Returns `None` when the pair
/// cannot be combined.
pub fn combine_pair(first: CardId, second: CardId, combine: Combine) -> Option<Description> {
    let a = describe(first);
    let b = describe(second);
    let color = a.color?;
    if b.color != Some(color) {
        return None;
    }
    let (Face::Number(x), Face::Number(y)) = (a.face, b.face) else {
        return None;
    };
    let rank = match combine {
        Combine::Add => x + y,
        Combine::Sub => x.abs_diff(y),
    };
    if rank > MAX_RANK {
        return None;
    }
    Some(Description {
        color: Some(color),
        face: Face::Number(rank),
    })
}
