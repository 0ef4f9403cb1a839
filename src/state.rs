use serde::{Deserialize, Serialize};

use crate::action::{ActionLabel, PlayerId};
use crate::card::{CardId, Color, Description, Face};
use crate::error::GameError;
use crate::rules::SkipLevel;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

/// Global constants for a running session.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub human_players: usize,
    pub ai_players: usize,
}

impl GameSettings {
    pub fn new(human_players: usize, ai_players: usize) -> Result<Self, GameError> {
        let total = human_players + ai_players;
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&total) {
            return Err(GameError::InvalidConfiguration(
                "total players must be between 2 and 10",
            ));
        }
        Ok(Self {
            human_players,
            ai_players,
        })
    }

    pub fn total_players(&self) -> usize {
        self.human_players + self.ai_players
    }
}

/// Public portion of a player's state that all opponents may observe.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicState {
    pub id: PlayerId,
    pub hand_size: usize,
    pub is_human: bool,
    pub is_current: bool,
    pub has_won: bool,
}

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: PlayerId },
}

/// Current phase of the active turn.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingAction,
    /// A wild-family play was committed and its color must be declared
    /// before the turn advances.
    AwaitingColor,
    GameOver,
}

/// Game state snapshot tailored for strategies and front ends.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub settings: GameSettings,
    pub phase: TurnPhase,
    pub status: GameStatus,
    pub self_player: PlayerId,
    pub current_player: PlayerId,
    pub next_player: PlayerId,
    pub rounds: u32,
    pub clockwise: bool,
    pub skip_level: SkipLevel,
    pub penalty_draw: usize,
    pub matchable_color: Option<Color>,
    pub matchable_number: Option<u8>,
    pub matchable_symbol: Option<Face>,
    pub previous_card: Description,
    pub previous_action: ActionLabel,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
    pub players: Vec<PlayerPublicState>,
    pub hand: Vec<CardId>,
}
