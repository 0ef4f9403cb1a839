use rand::SeedableRng;
use rand::rngs::StdRng;

use unobot::{Color, Combine, Deck, Face, Player, PlayerKind, RuleEngine, SkipLevel};

fn open_state(color: Color, number: u8) -> RuleEngine {
    let mut rules = RuleEngine::new(&mut StdRng::seed_from_u64(0));
    rules.set_matchable_color(Some(color));
    rules.set_matchable_number(Some(number));
    rules.set_matchable_symbol(None);
    rules.set_skip_level(SkipLevel::None);
    rules
}

fn player_with_hand(cards: &[u8]) -> Player {
    let mut player = Player::new(0, PlayerKind::Ai);
    for &card in cards {
        player.give_card(card);
    }
    player
}

#[test]
fn finds_legal_cards_in_hand_order() {
    let rules = open_state(Color::Red, 5);
    // Red 0, green skip, green 5, wild.
    let player = player_with_hand(&[25, 44, 30, 101]);
    assert_eq!(player.find_legal_cards(&rules), vec![25, 30, 101]);
}

#[test]
fn pair_play_is_judged_like_the_synthesized_card() {
    let mut rules = open_state(Color::Red, 8);
    let mut deck = Deck::from_parts(vec![], vec![], 0);
    // Blue 2 and blue 6 combine to blue 8, matching by number.
    let mut player = player_with_hand(&[52, 56, 9]);

    // A probe must not change anything.
    assert!(player.play_pair(&mut rules, &mut deck, 52, 56, Combine::Add, false));
    assert_eq!(player.hand(), &[52, 56, 9]);
    assert_eq!(rules.matchable_number(), Some(8));
    assert_eq!(rules.matchable_color(), Some(Color::Red));

    assert!(player.play_pair(&mut rules, &mut deck, 52, 56, Combine::Add, true));
    assert_eq!(player.hand(), &[9]);
    // Both physical cards land on the discard pile.
    assert_eq!(deck.discard_pile(), &[56, 52]);
    assert_eq!(rules.matchable_color(), Some(Color::Blue));
    assert_eq!(rules.matchable_number(), Some(8));
    assert_eq!(rules.matchable_symbol(), None);
    assert_eq!(rules.skip_level(), SkipLevel::None);
}

#[test]
fn pair_play_rejects_nonmatching_combinations() {
    let mut rules = open_state(Color::Red, 8);
    let mut deck = Deck::from_parts(vec![], vec![], 0);
    let mut player = player_with_hand(&[52, 56]);
    // |2 - 6| = blue 4 matches neither red nor 8.
    assert!(!player.play_pair(&mut rules, &mut deck, 52, 56, Combine::Sub, true));
    assert_eq!(player.hand(), &[52, 56]);
    assert_eq!(deck.discard_count(), 0);
}

#[test]
fn owned_play_moves_the_card_to_the_discard_pile() {
    let mut rules = open_state(Color::Red, 5);
    let mut deck = Deck::from_parts(vec![], vec![], 0);
    let mut player = player_with_hand(&[25, 44]);

    assert!(player.play_owned_card(&mut rules, &mut deck, 25, true));
    assert_eq!(player.hand(), &[44]);
    assert_eq!(deck.discard_pile(), &[25]);

    // The remaining green skip still matches nothing.
    assert!(!player.play_owned_card(&mut rules, &mut deck, 44, true));
    assert_eq!(player.hand(), &[44]);
}

#[test]
fn unconditional_skip_is_consumed_without_drawing() {
    let mut rules = open_state(Color::Red, 5);
    rules.set_skip_level(SkipLevel::Skip);
    let mut deck = Deck::from_parts(vec![1, 2, 3], vec![], 0);
    let mut player = player_with_hand(&[25]);

    assert!(player.check_skip_and_draw(&mut rules, &mut deck, true));
    assert_eq!(rules.skip_level(), SkipLevel::None);
    assert_eq!(player.hand_size(), 1);
    assert_eq!(deck.draw_count(), 3);
}

#[test]
fn pending_penalty_skips_only_without_a_counter() {
    let mut rules = open_state(Color::Red, 5);
    rules.set_skip_level(SkipLevel::DrawTwo);
    rules.set_matchable_symbol(Some(Face::DrawTwo));
    rules.set_matchable_number(None);
    rules.increase_penalty_draw(4);
    let mut deck = Deck::from_parts(vec![1, 2, 3, 4, 5], vec![], 0);

    // Holding a draw-two keeps the player in the game.
    let mut holder = player_with_hand(&[48, 30]);
    assert!(!holder.check_skip_and_draw(&mut rules, &mut deck, true));
    assert_eq!(holder.hand_size(), 2);
    assert_eq!(rules.penalty_draw(), 4);

    // Without one the stacked penalty is drawn in full.
    let mut victim = player_with_hand(&[30]);
    assert!(victim.check_skip_and_draw(&mut rules, &mut deck, true));
    assert_eq!(victim.hand_size(), 1 + 4);
    assert_eq!(rules.penalty_draw(), 0);
    assert_eq!(rules.skip_level(), SkipLevel::None);
}

#[test]
fn skip_turn_degrades_when_the_supply_runs_out() {
    let mut rules = open_state(Color::Red, 5);
    rules.set_skip_level(SkipLevel::DrawTwo);
    rules.set_matchable_symbol(Some(Face::DrawTwo));
    rules.set_matchable_number(None);
    rules.increase_penalty_draw(4);
    let mut deck = Deck::from_parts(vec![1, 2], vec![], 0);
    let mut player = player_with_hand(&[30]);

    player.skip_turn(&mut rules, &mut deck);
    assert_eq!(player.hand_size(), 1 + 2);
    assert_eq!(rules.penalty_draw(), 0);
    assert_eq!(rules.skip_level(), SkipLevel::None);
    assert_eq!(deck.total_count(), 0);
}

#[test]
fn drawn_card_is_played_when_it_fits() {
    let mut rules = open_state(Color::Red, 5);
    // The next draw is red 0, playable by color.
    let mut deck = Deck::from_parts(vec![25, 44], vec![], 0);
    let mut player = player_with_hand(&[44]);

    assert!(player.draw_and_play(&mut rules, &mut deck));
    assert_eq!(player.hand(), &[44]);
    assert_eq!(deck.discard_pile(), &[25]);
    assert_eq!(rules.matchable_number(), Some(0));
}

#[test]
fn drawn_card_stays_in_hand_when_it_does_not_fit() {
    let mut rules = open_state(Color::Red, 5);
    // The next draw is a green skip, which matches nothing.
    let mut deck = Deck::from_parts(vec![44, 25], vec![], 0);
    let mut player = player_with_hand(&[30]);

    assert!(!player.draw_and_play(&mut rules, &mut deck));
    assert_eq!(player.hand(), &[30, 44]);
    assert_eq!(deck.discard_count(), 0);
    assert_eq!(rules.matchable_number(), Some(5));
}

#[test]
fn empty_hand_wins() {
    let mut rules = open_state(Color::Red, 5);
    let mut deck = Deck::from_parts(vec![], vec![], 0);
    let mut player = player_with_hand(&[25]);
    assert!(!player.has_won());
    assert!(player.play_owned_card(&mut rules, &mut deck, 25, true));
    assert!(player.has_won());
}
