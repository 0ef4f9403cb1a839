use std::fmt::Write;

use crate::action::TurnAction;
use crate::card::{CardId, describe};
use crate::state::{GameStateView, GameStatus, TurnPhase};

/// Short textual form of a card, e.g. "red 7" or "wildDraw4".
pub fn format_card(card: CardId) -> String {
    describe(card).to_string()
}

/// Renders the query surface of a state snapshot for CLI front ends.
pub fn render_state(view: &GameStateView) -> String {
    let mut out = String::new();
    let status = match view.status {
        GameStatus::Ongoing => String::from("Ongoing"),
        GameStatus::Finished { winner } => format!("Finished (winner: Player {winner})"),
    };
    let _ = writeln!(out, "Game status: {status}  |  Round {}", view.rounds);
    if matches!(view.phase, TurnPhase::AwaitingColor) {
        let _ = writeln!(out, "Phase: awaiting color declaration");
    }
    let _ = writeln!(
        out,
        "Current player: {}{}  |  Next: {}  |  Order: {}",
        view.current_player,
        if view.current_player == view.self_player {
            " (You)"
        } else {
            ""
        },
        view.next_player,
        if view.clockwise {
            "clockwise"
        } else {
            "counterclockwise"
        }
    );
    let matchable_color = view
        .matchable_color
        .map(|color| color.to_string())
        .unwrap_or_else(|| String::from("(undeclared)"));
    let matchable_number = view
        .matchable_number
        .map(|rank| rank.to_string())
        .unwrap_or_else(|| String::from("none"));
    let matchable_symbol = view
        .matchable_symbol
        .map(|face| face.to_string())
        .unwrap_or_else(|| String::from("none"));
    let _ = writeln!(
        out,
        "Matchable: color {matchable_color}  |  number {matchable_number}  |  symbol {matchable_symbol}"
    );
    let _ = writeln!(
        out,
        "Skip level: {:?}  |  Penalty draw: {}",
        view.skip_level, view.penalty_draw
    );
    let _ = writeln!(
        out,
        "Previous: {} via {}",
        view.previous_card, view.previous_action
    );
    let _ = writeln!(
        out,
        "Draw pile: {}  |  Discard pile: {}",
        view.draw_pile_count, view.discard_pile_count
    );
    let _ = writeln!(out, "Players:");
    for player in &view.players {
        let you = if player.id == view.self_player {
            " (You)"
        } else {
            ""
        };
        let current = if player.is_current { " <- current" } else { "" };
        let _ = writeln!(
            out,
            "  Player {}{} - {} card(s){}",
            player.id, you, player.hand_size, current
        );
    }
    if view.hand.is_empty() {
        let _ = writeln!(out, "Hand: (empty)");
    } else {
        let entries: Vec<String> = view
            .hand
            .iter()
            .enumerate()
            .map(|(index, &card)| format!("{index}:{}", format_card(card)))
            .collect();
        let _ = writeln!(out, "Hand: {}", entries.join("  "));
    }
    out
}

/// One-line description of an action for logs and prompts.
pub fn describe_action(action: &TurnAction) -> String {
    match action {
        TurnAction::PlayOwned(card) => format!("Play {}", format_card(*card)),
        TurnAction::PlayPair {
            first,
            second,
            combine,
        } => format!(
            "Play {} {:?} {}",
            format_card(*first),
            combine,
            format_card(*second)
        ),
        TurnAction::DrawAndPlay => String::from("Draw a card and play it if possible"),
        TurnAction::Skip => String::from("Skip (absorbing any penalty)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Combine;
    use crate::game::GameSession;

    #[test]
    fn render_and_describe_include_expected_phrases() {
        let session = GameSession::builder(0, 3)
            .expect("builder")
            .with_seed(7)
            .build()
            .expect("session");
        let view = session.state_view(0).expect("state view");
        let text = render_state(&view);
        assert!(text.contains("Player 0 (You)"));
        assert!(text.contains("Hand:"));
        assert!(text.contains("Matchable:"));

        assert!(describe_action(&TurnAction::PlayOwned(25)).contains("red 0"));
        let pair = TurnAction::PlayPair {
            first: 2,
            second: 3,
            combine: Combine::Add,
        };
        assert!(describe_action(&pair).contains("Add"));
    }
}
