use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::action::ActionLabel;
use crate::card::{CardId, COLORED_CARD_COUNT, Color, Description, Face, MIN_CARD_ID, describe};

/// Pending obligation on the next player.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum SkipLevel {
    /// No obligation.
    None,
    /// A draw-two is pending; a draw-two or wild-draw-four counters it.
    DrawTwo,
    /// A wild-draw-four is pending; only a wild-draw-four counters it.
    WildDrawFour,
    /// A skip is pending; nothing counters it.
    Skip,
}

impl SkipLevel {
    /// Returns true for every level except [`SkipLevel::None`].
    #[inline]
    pub fn is_pending(self) -> bool {
        !matches!(self, SkipLevel::None)
    }
}

/// The match-state machine: judges whether each play is legal and mutates
/// the shared state on committed plays.
///
/// A play is legal when the card satisfies any one of the matchable color,
/// number, or symbol, subject to the current skip level, which is always
/// evaluated first. One instance exists per session, owned by it and
/// passed explicitly into player operations.
pub struct RuleEngine {
    matchable_color: Option<Color>,
    matchable_number: Option<u8>,
    matchable_symbol: Option<Face>,
    previous_card: Description,
    previous_action: ActionLabel,
    skip_level: SkipLevel,
    penalty_draw: usize,
    clockwise: bool,
}

impl RuleEngine {
    /// Creates the match state with a uniformly random numbered colored
    /// card as the implicit first play. The first round can only be
    /// matched by color or number.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let card = rng.gen_range(MIN_CARD_ID..=COLORED_CARD_COUNT);
            let desc = describe(card);
            if let Face::Number(rank) = desc.face {
                return Self {
                    matchable_color: desc.color,
                    matchable_number: Some(rank),
                    matchable_symbol: None,
                    previous_card: desc,
                    previous_action: ActionLabel::None,
                    skip_level: SkipLevel::None,
                    penalty_draw: 0,
                    clockwise: true,
                };
            }
        }
    }

    /// Read-only legality check for a single card from `hand`.
    ///
    /// Never mutates state, so front ends and strategies may probe freely.
    pub fn is_valid_play(&self, hand: &[CardId], card: CardId) -> bool {
        self.is_valid_description(hand, describe(card))
    }

    /// Validates and, on success, commits a single-card play.
    pub fn commit_play(&mut self, hand: &[CardId], card: CardId) -> bool {
        self.commit_description(hand, describe(card))
    }

    /// Description-level legality check, shared by composite plays.
    pub fn is_valid_description(&self, hand: &[CardId], desc: Description) -> bool {
        match self.skip_level {
            SkipLevel::Skip => false,
            SkipLevel::WildDrawFour => {
                desc.face == Face::WildDrawFour && self.draw_four_legal(hand)
            }
            SkipLevel::DrawTwo => match desc.face {
                Face::DrawTwo => true,
                Face::WildDrawFour => self.draw_four_legal(hand),
                _ => false,
            },
            SkipLevel::None => self.matches_open_state(hand, desc),
        }
    }

    /// Description-level validate-and-commit, shared by composite plays.
    pub fn commit_description(&mut self, hand: &[CardId], desc: Description) -> bool {
        let valid = self.is_valid_description(hand, desc);
        if valid {
            self.apply_play(desc);
        }
        valid
    }

    fn matches_open_state(&self, hand: &[CardId], desc: Description) -> bool {
        // Wild is unconditional.
        if matches!(desc.face, Face::Wild) {
            return true;
        }
        if desc.color.is_some() && desc.color == self.matchable_color {
            return true;
        }
        let attr_match = match desc.face {
            Face::Number(rank) => self.matchable_number == Some(rank),
            face => self.matchable_symbol == Some(face),
        };
        if attr_match {
            return true;
        }
        // Wild-draw-four last: only playable without a matchable-color card.
        matches!(desc.face, Face::WildDrawFour) && self.draw_four_legal(hand)
    }

    /// A wild-draw-four may only be played when the hand holds no card of
    /// the currently matchable color. Colorless cards never block.
    pub fn draw_four_legal(&self, hand: &[CardId]) -> bool {
        hand.iter().all(|&card| {
            let color = describe(card).color;
            color.is_none() || color != self.matchable_color
        })
    }

    fn apply_play(&mut self, desc: Description) {
        // Wild-family plays leave the color undeclared until the player
        // follows up with declare_color.
        self.matchable_color = desc.color;
        self.previous_card = desc;
        match desc.face {
            Face::Number(rank) => {
                self.skip_level = SkipLevel::None;
                self.matchable_number = Some(rank);
                self.matchable_symbol = None;
            }
            Face::Skip => {
                self.skip_level = SkipLevel::Skip;
                self.matchable_symbol = Some(Face::Skip);
                self.matchable_number = None;
            }
            Face::DrawTwo => {
                self.skip_level = SkipLevel::DrawTwo;
                self.penalty_draw += 2;
                self.matchable_symbol = Some(Face::DrawTwo);
                self.matchable_number = None;
            }
            Face::WildDrawFour => {
                self.skip_level = SkipLevel::WildDrawFour;
                self.penalty_draw += 4;
                self.matchable_symbol = None;
                self.matchable_number = None;
            }
            Face::Reverse => {
                self.clockwise = !self.clockwise;
                self.skip_level = SkipLevel::None;
                self.matchable_symbol = Some(Face::Reverse);
                self.matchable_number = None;
            }
            Face::Wild => {
                // Skip level is left untouched.
                self.matchable_symbol = None;
                self.matchable_number = None;
            }
        }
        debug_assert!(self.skip_level != SkipLevel::Skip || self.penalty_draw == 0);
        debug_assert!(
            !matches!(self.skip_level, SkipLevel::DrawTwo | SkipLevel::WildDrawFour)
                || self.penalty_draw > 0
        );
    }

    /// Resolves a pending wild-family play with the declared color, also
    /// rewriting the previous card's color. Must be followed up after
    /// every committed wild play.
    pub fn declare_color(&mut self, color: Color) {
        self.matchable_color = Some(color);
        self.previous_card.color = Some(color);
    }

    /// True while a committed wild play awaits its color declaration.
    pub fn awaiting_color(&self) -> bool {
        self.matchable_color.is_none()
    }

    pub fn matchable_color(&self) -> Option<Color> {
        self.matchable_color
    }

    pub fn set_matchable_color(&mut self, color: Option<Color>) {
        self.matchable_color = color;
    }

    pub fn matchable_number(&self) -> Option<u8> {
        self.matchable_number
    }

    pub fn set_matchable_number(&mut self, number: Option<u8>) {
        self.matchable_number = number;
    }

    pub fn matchable_symbol(&self) -> Option<Face> {
        self.matchable_symbol
    }

    pub fn set_matchable_symbol(&mut self, symbol: Option<Face>) {
        debug_assert!(
            symbol.is_none()
                || matches!(symbol, Some(Face::Skip | Face::Reverse | Face::DrawTwo))
        );
        self.matchable_symbol = symbol;
    }

    pub fn skip_level(&self) -> SkipLevel {
        self.skip_level
    }

    pub fn set_skip_level(&mut self, level: SkipLevel) {
        self.skip_level = level;
    }

    pub fn penalty_draw(&self) -> usize {
        self.penalty_draw
    }

    pub fn increase_penalty_draw(&mut self, amount: usize) {
        self.penalty_draw += amount;
    }

    /// Applied once a player absorbs the stacked penalty.
    pub fn reset_penalty_draw(&mut self) {
        self.penalty_draw = 0;
    }

    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    /// Flips the turn order.
    pub fn toggle_direction(&mut self) {
        self.clockwise = !self.clockwise;
    }

    pub fn previous_card(&self) -> Description {
        self.previous_card
    }

    pub fn set_previous_card(&mut self, desc: Description) {
        self.previous_card = desc;
    }

    pub fn previous_action(&self) -> ActionLabel {
        self.previous_action
    }

    pub fn set_previous_action(&mut self, action: ActionLabel) {
        self.previous_action = action;
    }
}
