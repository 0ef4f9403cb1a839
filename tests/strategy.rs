use rand::SeedableRng;
use rand::rngs::StdRng;

use unobot::action::ActionLabel;
use unobot::{
    Color, Description, Face, GameSettings, GameStateView, GameStatus, HeuristicStrategy,
    NaiveStrategy, PlayerPublicState, SkipLevel, Strategy, TurnAction, TurnPhase,
};

/// Minimal two-seat snapshot from player 0's perspective.
fn view_with(hand: Vec<u8>, next_hand_size: usize) -> GameStateView {
    let settings = GameSettings::new(0, 2).expect("valid settings");
    let players = vec![
        PlayerPublicState {
            id: 0,
            hand_size: hand.len(),
            is_human: false,
            is_current: true,
            has_won: false,
        },
        PlayerPublicState {
            id: 1,
            hand_size: next_hand_size,
            is_human: false,
            is_current: false,
            has_won: false,
        },
    ];
    GameStateView {
        settings,
        phase: TurnPhase::AwaitingAction,
        status: GameStatus::Ongoing,
        self_player: 0,
        current_player: 0,
        next_player: 1,
        rounds: 1,
        clockwise: true,
        skip_level: SkipLevel::None,
        penalty_draw: 0,
        matchable_color: Some(Color::Red),
        matchable_number: Some(5),
        matchable_symbol: None,
        previous_card: Description {
            color: Some(Color::Red),
            face: Face::Number(5),
        },
        previous_action: ActionLabel::None,
        draw_pile_count: 80,
        discard_pile_count: 0,
        players,
        hand,
    }
}

#[test]
fn strategies_pass_when_unconditionally_skipped() {
    let mut view = view_with(vec![25, 30], 5);
    view.skip_level = SkipLevel::Skip;
    let mut naive = NaiveStrategy::new(StdRng::seed_from_u64(0));
    let mut heuristic = HeuristicStrategy::new();
    assert_eq!(naive.choose_turn(&view, &[25, 30]), TurnAction::Skip);
    assert_eq!(heuristic.choose_turn(&view, &[25, 30]), TurnAction::Skip);
}

#[test]
fn strategies_pass_when_a_penalty_cannot_be_countered() {
    let mut view = view_with(vec![25, 30], 5);
    view.skip_level = SkipLevel::DrawTwo;
    view.penalty_draw = 2;
    let mut heuristic = HeuristicStrategy::new();
    assert_eq!(heuristic.choose_turn(&view, &[]), TurnAction::Skip);
}

#[test]
fn strategies_draw_when_nothing_is_playable() {
    let view = view_with(vec![44, 69], 5);
    let mut naive = NaiveStrategy::new(StdRng::seed_from_u64(0));
    assert_eq!(naive.choose_turn(&view, &[]), TurnAction::DrawAndPlay);
}

#[test]
fn naive_plays_one_of_the_legal_cards() {
    let view = view_with(vec![25, 30, 101], 5);
    let legal = [25, 30, 101];
    let mut naive = NaiveStrategy::new(StdRng::seed_from_u64(9));
    for _ in 0..10 {
        match naive.choose_turn(&view, &legal) {
            TurnAction::PlayOwned(card) => assert!(legal.contains(&card)),
            other => panic!("unexpected action {other:?}"),
        }
    }
}

#[test]
fn heuristic_sheds_rank_cards_in_the_common_case() {
    // Red 0, red 1, green skip; the next player is comfortable at five
    // cards, so the zero should be shed into the best-stocked color.
    let view = view_with(vec![25, 1, 44], 5);
    let mut heuristic = HeuristicStrategy::new();
    let action = heuristic.choose_turn(&view, &[25, 1, 44]);
    assert_eq!(action, TurnAction::PlayOwned(25));
}

#[test]
fn heuristic_attacks_when_the_next_player_is_almost_out() {
    // Same red-heavy hand with a draw-two available; at two cards left the
    // draw-two outranks shedding the zero.
    let view = view_with(vec![24, 25, 1], 2);
    let mut heuristic = HeuristicStrategy::new();
    let action = heuristic.choose_turn(&view, &[24, 25, 1]);
    assert_eq!(action, TurnAction::PlayOwned(24));
}

#[test]
fn heuristic_declares_the_most_held_color() {
    // Two blue rank cards against one red: blue wins the declaration.
    let view = view_with(vec![52, 56, 1], 5);
    let mut heuristic = HeuristicStrategy::new();
    assert_eq!(heuristic.declare_color(&view), Color::Blue);
}

#[test]
fn heuristic_never_declares_from_the_colorless_bucket() {
    // Four wilds outweigh the lone green card, but the declaration must
    // still name a real color.
    let view = view_with(vec![101, 102, 103, 105, 26], 5);
    let mut heuristic = HeuristicStrategy::new();
    assert_eq!(heuristic.declare_color(&view), Color::Green);
}
