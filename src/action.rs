use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::CardId;

/// Zero-based index of a player within the session.
pub type PlayerId = usize;

/// How two rank cards are combined in a composite play.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Combine {
    /// Ranks are summed.
    Add,
    /// Absolute difference of the ranks; card order does not matter.
    Sub,
}

/// Action a player can take on their turn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnAction {
    /// Play a single card from the hand.
    PlayOwned(CardId),
    /// Play two same-color rank cards as one synthesized card.
    PlayPair {
        first: CardId,
        second: CardId,
        combine: Combine,
    },
    /// Draw exactly one card and attempt to play it immediately.
    DrawAndPlay,
    /// Pass the turn, absorbing any stacked penalty draw.
    Skip,
}

/// Label describing the most recently resolved action, kept on the rule
/// state for front ends.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ActionLabel {
    None,
    PlayOwnedSingle,
    PlayOwnedPair,
    DrawAndPlay { played: bool },
    Skip,
}

impl fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionLabel::None => f.write_str("None"),
            ActionLabel::PlayOwnedSingle => f.write_str("Play Owned (1)"),
            ActionLabel::PlayOwnedPair => f.write_str("Play Owned (2)"),
            ActionLabel::DrawAndPlay { played: true } => f.write_str("Draw & Play (OK)"),
            ActionLabel::DrawAndPlay { played: false } => f.write_str("Draw & Play (FAIL)"),
            ActionLabel::Skip => f.write_str("Skip"),
        }
    }
}
