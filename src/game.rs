use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::action::{ActionLabel, PlayerId, TurnAction};
use crate::card::{CardId, Color, INITIAL_HAND_SIZE};
use crate::deck::Deck;
use crate::error::{GameError, InvalidAction};
use crate::player::{Player, PlayerKind};
use crate::rules::RuleEngine;
use crate::state::{GameSettings, GameStateView, GameStatus, PlayerPublicState, TurnPhase};
use crate::strategy::Strategy;

const DEFAULT_SEED: u64 = 0x0E0_CA4D_5EED_0108;

/// Configuration required to bootstrap a session.
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    pub human_players: usize,
    pub ai_players: usize,
    pub seed: u64,
}

impl SessionConfig {
    pub fn new(human_players: usize, ai_players: usize, seed: u64) -> Result<Self, GameError> {
        GameSettings::new(human_players, ai_players)?;
        Ok(Self {
            human_players,
            ai_players,
            seed,
        })
    }
}

/// Builder that enables deterministic setup for testing and simulations.
pub struct SessionBuilder {
    config: SessionConfig,
    preserve_discard_top: bool,
    draw_pile: Option<Vec<CardId>>,
    first_player: Option<PlayerId>,
}

impl SessionBuilder {
    pub fn new(human_players: usize, ai_players: usize) -> Result<Self, GameError> {
        Ok(Self {
            config: SessionConfig::new(human_players, ai_players, DEFAULT_SEED)?,
            preserve_discard_top: false,
            draw_pile: None,
            first_player: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Keep the just-played discard top out of mid-game reshuffles.
    /// Defaults to false: the whole discard pile is reshuffled.
    pub fn with_preserve_discard_top(mut self, preserve: bool) -> Self {
        self.preserve_discard_top = preserve;
        self
    }

    /// Inject an explicit draw pile (front = next card to draw) instead of
    /// a shuffled full deck.
    pub fn with_draw_pile(mut self, draw_pile: Vec<CardId>) -> Self {
        self.draw_pile = Some(draw_pile);
        self
    }

    /// Fix the starting player instead of picking one at random.
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = Some(player);
        self
    }

    pub fn build(self) -> Result<GameSession, GameError> {
        GameSession::from_builder(self)
    }
}

/// What a resolved action meant, for front ends.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The play was accepted. When `awaiting_color` is set the turn does
    /// not advance until [`GameSession::declare_color`] is called.
    Played { awaiting_color: bool },
    /// The attempted play was illegal. Nothing changed; the player may
    /// choose differently.
    Rejected,
    /// A card was drawn but could not be played and stays in the hand.
    DrewAndKept,
    /// The player was skipped, absorbing any stacked penalty.
    Skipped,
    /// The play emptied the player's hand and won the game.
    Won,
}

/// A running UNO match: the player list, turn pointer, round counter and
/// winner detection, owning the rule engine and the deck.
pub struct GameSession {
    settings: GameSettings,
    rules: RuleEngine,
    deck: Deck,
    players: Vec<Player>,
    current_player: PlayerId,
    rounds: u32,
    winner: Option<PlayerId>,
    phase: TurnPhase,
}

impl GameSession {
    pub fn builder(human_players: usize, ai_players: usize) -> Result<SessionBuilder, GameError> {
        SessionBuilder::new(human_players, ai_players)
    }

    pub fn new(config: SessionConfig) -> Result<Self, GameError> {
        SessionBuilder {
            config,
            preserve_discard_top: false,
            draw_pile: None,
            first_player: None,
        }
        .build()
    }

    fn from_builder(builder: SessionBuilder) -> Result<Self, GameError> {
        let SessionBuilder {
            config,
            preserve_discard_top,
            draw_pile,
            first_player,
        } = builder;
        let settings = GameSettings::new(config.human_players, config.ai_players)?;
        let total = settings.total_players();
        if let Some(first) = first_player {
            if first >= total {
                return Err(GameError::InvalidConfiguration(
                    "first player index exceeds the player count",
                ));
            }
        }

        let mut rng = StdRng::seed_from_u64(config.seed);

        // Seat order mixes human and AI players.
        let mut kinds = Vec::with_capacity(total);
        kinds.extend(std::iter::repeat(PlayerKind::Human).take(settings.human_players));
        kinds.extend(std::iter::repeat(PlayerKind::Ai).take(settings.ai_players));
        kinds.shuffle(&mut rng);

        let deck_seed = rng.next_u64();
        let mut deck = match draw_pile {
            Some(pile) => Deck::from_parts(pile, Vec::new(), deck_seed),
            None => Deck::with_rng(StdRng::seed_from_u64(deck_seed)),
        };
        deck.set_preserve_discard_top(preserve_discard_top);

        let rules = RuleEngine::new(&mut rng);

        let mut players: Vec<Player> = kinds
            .into_iter()
            .enumerate()
            .map(|(id, kind)| Player::new(id, kind))
            .collect();
        for player in &mut players {
            player.draw_cards(&mut deck, INITIAL_HAND_SIZE);
        }

        let current_player = first_player.unwrap_or_else(|| rng.gen_range(0..total));

        Ok(Self {
            settings,
            rules,
            deck,
            players,
            current_player,
            rounds: 1,
            winner: None,
            phase: TurnPhase::AwaitingAction,
        })
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(winner) => GameStatus::Finished { winner },
            None => GameStatus::Ongoing,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The seat that acts after the current one, following the direction
    /// of play.
    pub fn next_player(&self) -> PlayerId {
        let total = self.players.len();
        if self.rules.is_clockwise() {
            (self.current_player + 1) % total
        } else {
            (self.current_player + total - 1) % total
        }
    }

    pub fn rules(&self) -> &RuleEngine {
        &self.rules
    }

    /// Mutable access to the match state, for front-end setters and test
    /// setup. Mid-turn mutation is the caller's responsibility.
    pub fn rules_mut(&mut self) -> &mut RuleEngine {
        &mut self.rules
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn is_human(&self, player: PlayerId) -> Result<bool, GameError> {
        Ok(self.player(player)?.is_human())
    }

    pub fn hand(&self, player: PlayerId) -> Result<&[CardId], GameError> {
        Ok(self.player(player)?.hand())
    }

    pub fn hand_size(&self, player: PlayerId) -> Result<usize, GameError> {
        Ok(self.player(player)?.hand_size())
    }

    /// Legal single-card plays for a player under the current state.
    pub fn legal_cards(&self, player: PlayerId) -> Result<Vec<CardId>, GameError> {
        Ok(self.player(player)?.find_legal_cards(&self.rules))
    }

    pub fn state_view(&self, perspective: PlayerId) -> Result<GameStateView, GameError> {
        let hand = self.player(perspective)?.hand().to_vec();
        let players = self
            .players
            .iter()
            .map(|player| PlayerPublicState {
                id: player.id(),
                hand_size: player.hand_size(),
                is_human: player.is_human(),
                is_current: player.id() == self.current_player,
                has_won: player.has_won(),
            })
            .collect();

        Ok(GameStateView {
            settings: self.settings,
            phase: self.phase,
            status: self.status(),
            self_player: perspective,
            current_player: self.current_player,
            next_player: self.next_player(),
            rounds: self.rounds,
            clockwise: self.rules.is_clockwise(),
            skip_level: self.rules.skip_level(),
            penalty_draw: self.rules.penalty_draw(),
            matchable_color: self.rules.matchable_color(),
            matchable_number: self.rules.matchable_number(),
            matchable_symbol: self.rules.matchable_symbol(),
            previous_card: self.rules.previous_card(),
            previous_action: self.rules.previous_action(),
            draw_pile_count: self.deck.draw_count(),
            discard_pile_count: self.deck.discard_count(),
            players,
            hand,
        })
    }

    /// The externally driven mutation entry point: resolves one action for
    /// the current player.
    ///
    /// Play attempts while the player is skipped come back as
    /// [`TurnOutcome::Rejected`]; only [`TurnAction::Skip`] resolves the
    /// obligation. A committed wild-family play moves the session into
    /// [`TurnPhase::AwaitingColor`] and the turn holds until
    /// [`GameSession::declare_color`].
    pub fn apply_action(
        &mut self,
        player: PlayerId,
        action: TurnAction,
    ) -> Result<TurnOutcome, GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }
        self.ensure_player(player)?;
        if player != self.current_player {
            return Err(GameError::NotPlayersTurn);
        }
        if matches!(self.phase, TurnPhase::AwaitingColor) {
            return Err(InvalidAction::ColorPending.into());
        }

        match action {
            TurnAction::PlayOwned(card) => {
                if !self.players[player].hand().contains(&card) {
                    return Err(InvalidAction::CardNotInHand(card).into());
                }
                if self.is_skipped(player) {
                    return Ok(TurnOutcome::Rejected);
                }
                if !self.players[player].play_owned_card(&mut self.rules, &mut self.deck, card, true)
                {
                    return Ok(TurnOutcome::Rejected);
                }
                self.rules.set_previous_action(ActionLabel::PlayOwnedSingle);
                Ok(self.finish_successful_play(player))
            }
            TurnAction::PlayPair {
                first,
                second,
                combine,
            } => {
                for card in [first, second] {
                    if !self.players[player].hand().contains(&card) {
                        return Err(InvalidAction::CardNotInHand(card).into());
                    }
                }
                if self.is_skipped(player) {
                    return Ok(TurnOutcome::Rejected);
                }
                if !self.players[player].play_pair(
                    &mut self.rules,
                    &mut self.deck,
                    first,
                    second,
                    combine,
                    true,
                ) {
                    return Ok(TurnOutcome::Rejected);
                }
                self.rules.set_previous_action(ActionLabel::PlayOwnedPair);
                Ok(self.finish_successful_play(player))
            }
            TurnAction::DrawAndPlay => {
                if self.is_skipped(player) {
                    return Ok(TurnOutcome::Rejected);
                }
                // With both piles empty there is nothing to draw; the turn
                // degrades to a plain pass.
                if self.deck.total_count() == 0 {
                    self.players[player].skip_turn(&mut self.rules, &mut self.deck);
                    self.rules.set_previous_action(ActionLabel::Skip);
                    self.advance_turn();
                    return Ok(TurnOutcome::Skipped);
                }
                let played = self.players[player].draw_and_play(&mut self.rules, &mut self.deck);
                self.rules
                    .set_previous_action(ActionLabel::DrawAndPlay { played });
                if played {
                    Ok(self.finish_successful_play(player))
                } else {
                    self.advance_turn();
                    Ok(TurnOutcome::DrewAndKept)
                }
            }
            TurnAction::Skip => {
                self.players[player].skip_turn(&mut self.rules, &mut self.deck);
                self.rules.set_previous_action(ActionLabel::Skip);
                self.advance_turn();
                Ok(TurnOutcome::Skipped)
            }
        }
    }

    /// Resolves the color of a committed wild-family play and advances the
    /// turn. Required exactly once after every outcome with
    /// `awaiting_color` set.
    pub fn declare_color(&mut self, player: PlayerId, color: Color) -> Result<(), GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }
        self.ensure_player(player)?;
        if player != self.current_player {
            return Err(GameError::NotPlayersTurn);
        }
        if !matches!(self.phase, TurnPhase::AwaitingColor) {
            return Err(InvalidAction::NoColorPending.into());
        }
        self.rules.declare_color(color);
        self.phase = TurnPhase::AwaitingAction;
        self.advance_turn();
        Ok(())
    }

    /// Drives one full turn of the current player through a strategy,
    /// including the color declaration when a wild play requires one.
    /// Human-backed strategies block until their decision arrives.
    pub fn play_turn(&mut self, strategy: &mut dyn Strategy) -> Result<TurnOutcome, GameError> {
        let player = self.current_player;
        let view = self.state_view(player)?;
        let legal_cards = self.legal_cards(player)?;
        let action = strategy.choose_turn(&view, &legal_cards);
        let outcome = self.apply_action(player, action)?;
        if matches!(self.phase, TurnPhase::AwaitingColor) {
            let view = self.state_view(player)?;
            let color = strategy.declare_color(&view);
            self.declare_color(player, color)?;
        }
        Ok(outcome)
    }

    fn finish_successful_play(&mut self, player: PlayerId) -> TurnOutcome {
        if self.players[player].has_won() {
            // A winning wild play ends the game with the color moot.
            self.winner = Some(player);
            self.phase = TurnPhase::GameOver;
            return TurnOutcome::Won;
        }
        if self.rules.awaiting_color() {
            self.phase = TurnPhase::AwaitingColor;
            return TurnOutcome::Played {
                awaiting_color: true,
            };
        }
        self.advance_turn();
        TurnOutcome::Played {
            awaiting_color: false,
        }
    }

    fn advance_turn(&mut self) {
        if self.winner.is_some() {
            self.phase = TurnPhase::GameOver;
            return;
        }
        self.current_player = self.next_player();
        self.rounds += 1;
        self.phase = TurnPhase::AwaitingAction;
    }

    /// Read-only form of the skip gate: true when the current obligation
    /// cannot be answered by any held card.
    fn is_skipped(&self, player: PlayerId) -> bool {
        use crate::rules::SkipLevel;
        match self.rules.skip_level() {
            SkipLevel::Skip => true,
            SkipLevel::None => false,
            SkipLevel::DrawTwo | SkipLevel::WildDrawFour => self.players[player]
                .find_legal_cards(&self.rules)
                .is_empty(),
        }
    }

    fn player(&self, player: PlayerId) -> Result<&Player, GameError> {
        self.players
            .get(player)
            .ok_or(GameError::InvalidPlayer(player))
    }

    fn ensure_player(&self, player: PlayerId) -> Result<(), GameError> {
        self.player(player).map(|_| ())
    }
}
