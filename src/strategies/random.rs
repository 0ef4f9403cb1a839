use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::TurnAction;
use crate::card::{CardId, Color};
use crate::state::GameStateView;
use crate::strategies::forced_turn_action;
use crate::strategy::Strategy;

/// Baseline strategy: a uniform-random legal card and a uniform-random
/// declared color.
pub struct NaiveStrategy<R: Rng> {
    rng: R,
}

impl<R: Rng> NaiveStrategy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for NaiveStrategy<R> {
    fn choose_turn(&mut self, view: &GameStateView, legal_cards: &[CardId]) -> TurnAction {
        if let Some(action) = forced_turn_action(view, legal_cards) {
            return action;
        }
        let card = legal_cards
            .choose(&mut self.rng)
            .copied()
            .expect("at least one legal card must be available");
        TurnAction::PlayOwned(card)
    }

    fn declare_color(&mut self, _view: &GameStateView) -> Color {
        *Color::ALL
            .choose(&mut self.rng)
            .expect("color set is never empty")
    }
}
