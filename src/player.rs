use serde::{Deserialize, Serialize};

use crate::action::{Combine, PlayerId};
use crate::card::{CardId, combine_pair};
use crate::deck::Deck;
use crate::rules::{RuleEngine, SkipLevel};

/// Whether a seat is driven by a human front end or a strategy.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Ai,
}

/// One seat at the table: an identifier plus the owned hand.
///
/// Players hold no references back into the session; the rule engine and
/// deck are passed explicitly into every operation so the session remains
/// the single owner of shared state.
pub struct Player {
    id: PlayerId,
    kind: PlayerKind,
    hand: Vec<CardId>,
}

impl Player {
    pub fn new(id: PlayerId, kind: PlayerKind) -> Self {
        Self {
            id,
            kind,
            hand: Vec::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_human(&self) -> bool {
        matches!(self.kind, PlayerKind::Human)
    }

    pub fn hand(&self) -> &[CardId] {
        &self.hand
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// A player wins when the hand is empty.
    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }

    /// Adds a single card directly to the hand. Setup and test helper.
    pub fn give_card(&mut self, card: CardId) {
        self.hand.push(card);
    }

    /// Draws `n` cards from the deck into the hand, taking as many as the
    /// deck can supply.
    pub fn draw_cards(&mut self, deck: &mut Deck, n: usize) {
        self.hand.extend(deck.draw(n));
    }

    /// All cards in the hand that are currently legal, in hand order.
    pub fn find_legal_cards(&self, rules: &RuleEngine) -> Vec<CardId> {
        self.hand
            .iter()
            .copied()
            .filter(|&card| rules.is_valid_play(&self.hand, card))
            .collect()
    }

    /// Resolves a pending skip obligation before a play attempt.
    ///
    /// Returns true when the player is skipped this turn. An unconditional
    /// skip (level 3) is consumed here. Under a pending penalty the player
    /// is skipped only when holding no counter card, in which case
    /// `draw_if_skipped` forces the stacked penalty immediately.
    pub fn check_skip_and_draw(
        &mut self,
        rules: &mut RuleEngine,
        deck: &mut Deck,
        draw_if_skipped: bool,
    ) -> bool {
        match rules.skip_level() {
            SkipLevel::Skip => {
                debug_assert_eq!(rules.penalty_draw(), 0);
                rules.set_skip_level(SkipLevel::None);
                true
            }
            SkipLevel::None => false,
            SkipLevel::DrawTwo | SkipLevel::WildDrawFour => {
                debug_assert!(rules.penalty_draw() > 0);
                let skipped = self.find_legal_cards(rules).is_empty();
                if skipped && draw_if_skipped {
                    self.draw_stacked_penalty(rules, deck);
                }
                skipped
            }
        }
    }

    /// Clears the stacked penalty by drawing it in full.
    pub fn draw_stacked_penalty(&mut self, rules: &mut RuleEngine, deck: &mut Deck) {
        rules.set_skip_level(SkipLevel::None);
        let penalty = rules.penalty_draw();
        self.draw_cards(deck, penalty);
        rules.reset_penalty_draw();
    }

    /// Attempts to play a single owned card.
    ///
    /// The skip gate runs first and returns false when the player is
    /// skipped. On a committed success the card leaves the hand and enters
    /// the discard pile; a wild-family card leaves the matchable color
    /// undeclared until [`RuleEngine::declare_color`] resolves it.
    pub fn play_owned_card(
        &mut self,
        rules: &mut RuleEngine,
        deck: &mut Deck,
        card: CardId,
        commit: bool,
    ) -> bool {
        if self.check_skip_and_draw(rules, deck, false) {
            return false;
        }
        debug_assert!(self.hand.contains(&card));
        if !commit {
            return rules.is_valid_play(&self.hand, card);
        }
        if !rules.commit_play(&self.hand, card) {
            return false;
        }
        self.remove_from_hand(card);
        deck.discard(card);
        true
    }

    /// Draws exactly one card and attempts to play it immediately.
    ///
    /// Returns whether the drawn card was played; on failure it stays in
    /// the hand. Returns false without drawing when the deck is empty.
    pub fn draw_and_play(&mut self, rules: &mut RuleEngine, deck: &mut Deck) -> bool {
        if self.check_skip_and_draw(rules, deck, false) {
            return false;
        }
        let Some(card) = deck.draw(1).pop() else {
            return false;
        };
        self.hand.push(card);
        // Legality is judged with the drawn card already in hand.
        if rules.commit_play(&self.hand, card) {
            self.remove_from_hand(card);
            deck.discard(card);
            true
        } else {
            false
        }
    }

    /// Passes the turn, absorbing the stacked penalty in full, or as much
    /// of it as the combined pile supply can serve.
    pub fn skip_turn(&mut self, rules: &mut RuleEngine, deck: &mut Deck) {
        let available = deck.total_count();
        if available < rules.penalty_draw() {
            rules.set_skip_level(SkipLevel::None);
            self.draw_cards(deck, available);
            rules.reset_penalty_draw();
        } else {
            self.draw_stacked_penalty(rules, deck);
        }
    }

    /// Attempts a composite play of two same-color rank cards combined by
    /// addition or subtraction. The synthesized description is judged like
    /// any single card; on a committed success both physical cards leave
    /// the hand and enter the discard pile.
    pub fn play_pair(
        &mut self,
        rules: &mut RuleEngine,
        deck: &mut Deck,
        first: CardId,
        second: CardId,
        combine: Combine,
        commit: bool,
    ) -> bool {
        if self.check_skip_and_draw(rules, deck, false) {
            return false;
        }
        debug_assert!(self.hand.contains(&first) && self.hand.contains(&second));
        let Some(desc) = combine_pair(first, second, combine) else {
            return false;
        };
        if !commit {
            return rules.is_valid_description(&self.hand, desc);
        }
        if !rules.commit_description(&self.hand, desc) {
            return false;
        }
        self.remove_from_hand(first);
        self.remove_from_hand(second);
        deck.discard(first);
        deck.discard(second);
        true
    }

    fn remove_from_hand(&mut self, card: CardId) {
        if let Some(position) = self.hand.iter().position(|&held| held == card) {
            self.hand.remove(position);
        }
    }
}
