use crate::action::TurnAction;
use crate::card::{CardId, Color};
use crate::state::GameStateView;

/// Interface for defining player decision logic, AI or human-backed.
pub trait Strategy {
    /// Decide the action for the current turn. `legal_cards` holds the
    /// hand cards that are playable under the current state, in hand
    /// order; implementations must return an action that is legal for the
    /// presented state.
    fn choose_turn(&mut self, view: &GameStateView, legal_cards: &[CardId]) -> TurnAction;

    /// Declare a color after playing a wild-family card.
    fn declare_color(&mut self, view: &GameStateView) -> Color;
}
