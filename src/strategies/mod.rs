pub mod heuristic;
pub mod human;
pub mod random;
pub mod registry;

pub use heuristic::HeuristicStrategy;
pub use human::HumanStrategy;
pub use random::NaiveStrategy;
pub use registry::{create_strategy_from_spec, label_for_spec};

use crate::action::TurnAction;
use crate::card::CardId;
use crate::rules::SkipLevel;
use crate::state::GameStateView;

/// Shared action-decision skeleton: skip when unconditionally skipped or
/// when a pending penalty cannot be countered, draw when nothing is
/// playable, otherwise leave the card choice to the strategy (`None`).
pub(crate) fn forced_turn_action(
    view: &GameStateView,
    legal_cards: &[CardId],
) -> Option<TurnAction> {
    if matches!(view.skip_level, SkipLevel::Skip) {
        return Some(TurnAction::Skip);
    }
    if legal_cards.is_empty() {
        if view.skip_level.is_pending() {
            return Some(TurnAction::Skip);
        }
        return Some(TurnAction::DrawAndPlay);
    }
    None
}
