use thiserror::Error;

use crate::action::PlayerId;
use crate::card::CardId;

/// Errors that can occur when manipulating the session state.
///
/// Illegal plays are not errors: legality checks return `false` and
/// committing entry points report [`crate::game::TurnOutcome::Rejected`],
/// leaving the caller free to retry.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("not the specified player's turn")]
    NotPlayersTurn,
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("game is already over")]
    GameOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Details of API misuse by a front end.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("card {0} is not in the player's hand")]
    CardNotInHand(CardId),
    #[error("a wild color declaration is pending")]
    ColorPending,
    #[error("no wild color declaration is pending")]
    NoColorPending,
}
