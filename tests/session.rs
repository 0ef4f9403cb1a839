use rand::SeedableRng;
use rand::rngs::StdRng;

use unobot::card::DECK_SIZE;
use unobot::{
    Color, GameError, GameSession, GameStatus, InvalidAction, NaiveStrategy, Strategy, TurnAction,
    TurnOutcome, TurnPhase,
};

fn cards_in_play(session: &GameSession) -> usize {
    let total = session.settings().total_players();
    let in_hands: usize = (0..total)
        .map(|player| session.hand_size(player).expect("valid player"))
        .sum();
    in_hands + session.deck().total_count()
}

/// A draw pile where player 0's opening hand starts with a wild card.
fn wild_opening_pile() -> Vec<u8> {
    let mut pile = vec![101u8];
    pile.extend(1..=20u8);
    pile
}

#[test]
fn rejects_out_of_range_player_counts() {
    assert!(GameSession::builder(0, 1).is_err());
    assert!(GameSession::builder(1, 0).is_err());
    assert!(GameSession::builder(5, 6).is_err());
    assert!(GameSession::builder(1, 1).is_ok());
    assert!(GameSession::builder(0, 10).is_ok());
}

#[test]
fn deals_seven_cards_to_every_seat() -> Result<(), GameError> {
    let session = GameSession::builder(0, 3)?.with_seed(42).build()?;
    for player in 0..3 {
        assert_eq!(session.hand_size(player)?, 7);
    }
    assert_eq!(session.deck().draw_count(), DECK_SIZE - 3 * 7);
    assert_eq!(session.deck().discard_count(), 0);
    assert_eq!(cards_in_play(&session), DECK_SIZE);
    assert_eq!(session.rounds(), 1);
    assert_eq!(session.phase(), TurnPhase::AwaitingAction);
    assert_eq!(session.status(), GameStatus::Ongoing);
    Ok(())
}

#[test]
fn state_view_hides_other_hands() -> Result<(), GameError> {
    let session = GameSession::builder(0, 3)?.with_seed(42).build()?;
    let current = session.current_player();
    let view = session.state_view(current)?;
    assert_eq!(view.self_player, current);
    assert_eq!(view.hand.len(), 7);
    assert_eq!(view.players.len(), 3);
    for player in &view.players {
        assert_eq!(player.hand_size, 7);
        assert_eq!(player.is_current, player.id == current);
        assert!(!player.has_won);
    }
    Ok(())
}

#[test]
fn turn_order_follows_the_direction_of_play() -> Result<(), GameError> {
    let mut session = GameSession::builder(0, 3)?
        .with_seed(42)
        .with_first_player(0)
        .build()?;
    assert_eq!(session.next_player(), 1);
    session.rules_mut().toggle_direction();
    assert_eq!(session.next_player(), 2);
    Ok(())
}

#[test]
fn acting_out_of_turn_is_an_error() -> Result<(), GameError> {
    let mut session = GameSession::builder(0, 2)?
        .with_seed(42)
        .with_first_player(0)
        .build()?;
    let result = session.apply_action(1, TurnAction::Skip);
    assert!(matches!(result, Err(GameError::NotPlayersTurn)));
    Ok(())
}

#[test]
fn playing_an_unowned_card_is_an_error() -> Result<(), GameError> {
    let mut session = GameSession::builder(0, 2)?
        .with_seed(42)
        .with_draw_pile(wild_opening_pile())
        .with_first_player(0)
        .build()?;
    // Player 0 holds the first seven pile cards; 20 is still undealt.
    let result = session.apply_action(0, TurnAction::PlayOwned(20));
    assert!(matches!(
        result,
        Err(GameError::InvalidAction(InvalidAction::CardNotInHand(20)))
    ));
    Ok(())
}

#[test]
fn wild_play_holds_the_turn_until_the_color_is_declared() -> Result<(), GameError> {
    let mut session = GameSession::builder(0, 2)?
        .with_seed(42)
        .with_draw_pile(wild_opening_pile())
        .with_first_player(0)
        .build()?;
    assert!(session.hand(0)?.contains(&101));

    let outcome = session.apply_action(0, TurnAction::PlayOwned(101))?;
    assert_eq!(
        outcome,
        TurnOutcome::Played {
            awaiting_color: true
        }
    );
    assert_eq!(session.phase(), TurnPhase::AwaitingColor);
    assert_eq!(session.current_player(), 0);
    assert_eq!(session.rounds(), 1);

    // No other action may land while the declaration is pending.
    let blocked = session.apply_action(0, TurnAction::DrawAndPlay);
    assert!(matches!(
        blocked,
        Err(GameError::InvalidAction(InvalidAction::ColorPending))
    ));
    // And nobody else may declare.
    assert!(matches!(
        session.declare_color(1, Color::Blue),
        Err(GameError::NotPlayersTurn)
    ));

    session.declare_color(0, Color::Blue)?;
    assert_eq!(session.phase(), TurnPhase::AwaitingAction);
    assert_eq!(session.current_player(), 1);
    assert_eq!(session.rounds(), 2);
    assert_eq!(session.rules().matchable_color(), Some(Color::Blue));
    assert_eq!(session.rules().previous_card().color, Some(Color::Blue));
    Ok(())
}

#[test]
fn declaring_without_a_pending_wild_is_an_error() -> Result<(), GameError> {
    let mut session = GameSession::builder(0, 2)?
        .with_seed(42)
        .with_first_player(0)
        .build()?;
    assert!(matches!(
        session.declare_color(0, Color::Red),
        Err(GameError::InvalidAction(InvalidAction::NoColorPending))
    ));
    Ok(())
}

#[test]
fn naive_games_run_to_a_winner() -> Result<(), GameError> {
    for seed in [3u64, 17, 4242] {
        let mut session = GameSession::builder(0, 2)?.with_seed(seed).build()?;
        let mut strategies: Vec<Box<dyn Strategy>> = (0..2)
            .map(|index| {
                Box::new(NaiveStrategy::new(StdRng::seed_from_u64(
                    seed.wrapping_add(index),
                ))) as Box<dyn Strategy>
            })
            .collect();

        let mut last = TurnOutcome::Rejected;
        while !session.is_finished() {
            assert!(session.rounds() < 20_000, "seed {seed} did not terminate");
            let current = session.current_player();
            last = session.play_turn(strategies[current].as_mut())?;
            assert_eq!(cards_in_play(&session), DECK_SIZE, "seed {seed}");
        }

        assert_eq!(last, TurnOutcome::Won);
        let winner = session.winner().expect("finished game has a winner");
        assert_eq!(session.hand_size(winner)?, 0);
        assert_eq!(session.status(), GameStatus::Finished { winner });
        assert_eq!(session.phase(), TurnPhase::GameOver);

        // The finished session refuses further actions.
        let result = session.apply_action(session.current_player(), TurnAction::Skip);
        assert!(matches!(result, Err(GameError::GameOver)));
    }
    Ok(())
}
