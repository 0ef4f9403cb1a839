use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::card::{CardId, full_deck};

/// Owns the draw pile and the discard pile.
///
/// The draw pile front (index 0) is the next card to draw; the discard
/// pile front is the most recently played card. When a draw request
/// exceeds the draw pile, the deficit is served from a freshly shuffled
/// discard pile; the remainder stays behind as the discard pile. Requests
/// exceeding the total supply degrade gracefully and return everything
/// available.
pub struct Deck {
    draw_pile: Vec<CardId>,
    discard_pile: Vec<CardId>,
    preserve_discard_top: bool,
    rng: StdRng,
}

impl Deck {
    /// Creates a deck with all 108 cards shuffled into the draw pile.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(mut rng: StdRng) -> Self {
        let mut draw_pile = full_deck();
        draw_pile.shuffle(&mut rng);
        Self {
            draw_pile,
            discard_pile: Vec::new(),
            preserve_discard_top: false,
            rng,
        }
    }

    /// Builds a deck from explicit piles. The caller is responsible for
    /// card uniqueness; intended for tests and replays.
    pub fn from_parts(draw_pile: Vec<CardId>, discard_pile: Vec<CardId>, seed: u64) -> Self {
        Self {
            draw_pile,
            discard_pile,
            preserve_discard_top: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// When set, the most recently played card is kept out of mid-game
    /// reshuffles and only consumed once nothing else can satisfy a draw.
    pub fn set_preserve_discard_top(&mut self, preserve: bool) {
        self.preserve_discard_top = preserve;
    }

    pub fn draw_count(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discard_count(&self) -> usize {
        self.discard_pile.len()
    }

    /// Cards available across both piles.
    pub fn total_count(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    pub fn draw_pile(&self) -> &[CardId] {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &[CardId] {
        &self.discard_pile
    }

    /// Removes and returns up to `n` cards, replenishing from the
    /// shuffled discard pile when the draw pile runs out.
    pub fn draw(&mut self, n: usize) -> Vec<CardId> {
        let from_draw = n.min(self.draw_pile.len());
        let mut drawn: Vec<CardId> = self.draw_pile.drain(..from_draw).collect();
        let deficit = n - from_draw;
        if deficit > 0 && !self.discard_pile.is_empty() {
            let refill = self.draw_from_discard(deficit);
            drawn.extend(refill);
        }
        drawn
    }

    fn draw_from_discard(&mut self, n: usize) -> Vec<CardId> {
        let protected = if self.preserve_discard_top {
            Some(self.discard_pile.remove(0))
        } else {
            None
        };
        self.discard_pile.shuffle(&mut self.rng);
        let take = n.min(self.discard_pile.len());
        let mut drawn: Vec<CardId> = self.discard_pile.drain(..take).collect();
        if let Some(top) = protected {
            if drawn.len() < n {
                // Last resort: the protected card is the only one left.
                drawn.push(top);
            } else {
                self.discard_pile.insert(0, top);
            }
        }
        drawn
    }

    /// Pushes a played card onto the top of the discard pile.
    pub fn discard(&mut self, card: CardId) {
        self.discard_pile.insert(0, card);
    }
}
