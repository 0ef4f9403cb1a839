//! UNO rule/state engine with pluggable human and AI players.
//!
//! The engine decides card legality, mutates match state after each
//! play, manages the draw/discard pile lifecycle and drives turn order
//! including reversal and skip/penalty stacking. Presentation is an
//! external collaborator: any front end (graphical, terminal, or test
//! harness) drives the session through its query and action surface.

pub mod action;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod player;
pub mod rules;
pub mod state;
pub mod strategies;
pub mod strategy;
pub mod visualize;

pub use crate::action::{ActionLabel, Combine, PlayerId, TurnAction};
pub use crate::card::{
    CardId, Color, Description, Face, combine_pair, describe, full_deck, is_wild_family,
};
pub use crate::deck::Deck;
pub use crate::error::{GameError, InvalidAction};
pub use crate::game::{GameSession, SessionBuilder, SessionConfig, TurnOutcome};
pub use crate::player::{Player, PlayerKind};
pub use crate::rules::{RuleEngine, SkipLevel};
pub use crate::state::{GameSettings, GameStateView, GameStatus, PlayerPublicState, TurnPhase};
pub use crate::strategies::{
    HeuristicStrategy, HumanStrategy, NaiveStrategy, create_strategy_from_spec, label_for_spec,
};
pub use crate::strategy::Strategy;
pub use crate::visualize::{describe_action, format_card, render_state};
