use crate::action::TurnAction;
use crate::card::{CardId, Color, Face, describe};
use crate::state::GameStateView;
use crate::strategies::forced_turn_action;
use crate::strategy::Strategy;

/// Number of color buckets in the weighting tables: the colorless wild
/// bucket (index 0) plus the four real colors.
const COLOR_BUCKETS: usize = 5;

/// Score granted by how well-stocked the card's color bucket is, from the
/// most-held color (rank 0) down to the least-held.
const COLOR_RANK_SCORE: [i32; COLOR_BUCKETS] = [8, 6, 4, 2, 1];

/// Hand size of the next player at or below which the strategy switches
/// to maximizing damage.
const PRESSURE_HAND_SIZE: usize = 2;

/// Rule-based strategy that plays "sensible" moves without search.
///
/// In plain English:
/// - Rank the four colors by how much weighted value the hand holds in
///   each; prefer discarding into well-stocked colors.
/// - In the common case, shed rank cards (0 first) and hold wilds back.
/// - Once the next player is down to two cards, switch to damage:
///   draw-two first, then reverse, then the wild family.
/// - Declare the most-held real color after a wild play.
pub struct HeuristicStrategy;

impl HeuristicStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Contribution of a held card to its color bucket. Higher means the
    /// color is more valuable to keep matchable.
    fn holding_weight(face: Face) -> i32 {
        match face {
            Face::Skip => 5,
            Face::DrawTwo => 6,
            Face::Reverse => 4,
            Face::Number(0) => 2,
            Face::Wild | Face::WildDrawFour => 1,
            Face::Number(_) => 4,
        }
    }

    /// Content bonus in the common case: shed rank cards, conserve the
    /// wild family.
    fn common_bonus(face: Face) -> i32 {
        match face {
            Face::Skip => 3,
            Face::DrawTwo => 2,
            Face::Reverse => 4,
            Face::Number(0) => 15,
            Face::Wild | Face::WildDrawFour => 1,
            Face::Number(_) => 12,
        }
    }

    /// Content bonus when the next player holds two cards or fewer:
    /// maximize damage before they can go out.
    fn pressure_bonus(face: Face) -> i32 {
        match face {
            Face::Skip => 3,
            Face::DrawTwo => 15,
            Face::Reverse => 12,
            Face::Number(0) => 2,
            Face::Wild | Face::WildDrawFour => 8,
            Face::Number(_) => 1,
        }
    }

    /// Weighted holdings per color bucket; bucket 0 is colorless.
    fn color_weights(hand: &[CardId]) -> [i32; COLOR_BUCKETS] {
        let mut weights = [0i32; COLOR_BUCKETS];
        for &card in hand {
            let desc = describe(card);
            let bucket = desc.color.map(|color| color.index() + 1).unwrap_or(0);
            weights[bucket] += Self::holding_weight(desc.face);
        }
        weights
    }

    /// Bucket indices ordered from most-held to least-held; ties keep the
    /// lower bucket first.
    fn color_ranking(hand: &[CardId]) -> [usize; COLOR_BUCKETS] {
        let weights = Self::color_weights(hand);
        let mut ranking = [0usize, 1, 2, 3, 4];
        ranking.sort_by_key(|&bucket| -weights[bucket]);
        ranking
    }

    fn score_card(card: CardId, ranking: &[usize; COLOR_BUCKETS], pressure: bool) -> i32 {
        let desc = describe(card);
        let bucket = desc.color.map(|color| color.index() + 1).unwrap_or(0);
        let rank = ranking
            .iter()
            .position(|&candidate| candidate == bucket)
            .unwrap_or(COLOR_BUCKETS - 1);
        let bonus = if pressure {
            Self::pressure_bonus(desc.face)
        } else {
            Self::common_bonus(desc.face)
        };
        COLOR_RANK_SCORE[rank] + bonus
    }

    /// First maximal-score card in candidate order.
    fn best_card(view: &GameStateView, legal_cards: &[CardId]) -> CardId {
        let ranking = Self::color_ranking(&view.hand);
        let next_hand_size = view
            .players
            .get(view.next_player)
            .map(|player| player.hand_size)
            .unwrap_or(usize::MAX);
        let pressure = next_hand_size <= PRESSURE_HAND_SIZE;

        let mut best = legal_cards[0];
        let mut best_score = i32::MIN;
        for &card in legal_cards {
            let score = Self::score_card(card, &ranking, pressure);
            if score > best_score {
                best = card;
                best_score = score;
            }
        }
        best
    }
}

impl Default for HeuristicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for HeuristicStrategy {
    fn choose_turn(&mut self, view: &GameStateView, legal_cards: &[CardId]) -> TurnAction {
        if let Some(action) = forced_turn_action(view, legal_cards) {
            return action;
        }
        TurnAction::PlayOwned(Self::best_card(view, legal_cards))
    }

    fn declare_color(&mut self, view: &GameStateView) -> Color {
        let ranking = Self::color_ranking(&view.hand);
        // A hand stacked with wilds can rank the colorless bucket first;
        // fall through to the best real color.
        let bucket = if ranking[0] == 0 { ranking[1] } else { ranking[0] };
        Color::ALL[bucket - 1]
    }
}
