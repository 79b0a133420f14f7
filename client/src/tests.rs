use fabo_core::{ApiConfig, EquipmentSlot};

use crate::session::GameSession;

const TURN: &str = "a<br>b<br>c<br>wtr002|wtr003|wtr003|cru006|wtr005|wtr153|wtr004";

#[test]
fn test_session_starts_with_game_info() {
    let session = GameSession::new(664, 3, "key".into());
    let info = &session.state().game_info;
    assert_eq!(info.game_id, 664);
    assert_eq!(info.player_id, 3);
    assert_eq!(info.auth_key, "key");
    assert_eq!(session.turns_received(), 0);
}

#[test]
fn test_apply_next_turn_updates_view() {
    let mut session = GameSession::new(664, 3, "key".into());
    assert!(session.apply_next_turn(TURN));
    assert_eq!(session.turns_received(), 1);

    let view = session.view();
    let hero = view
        .player_one
        .slots
        .iter()
        .find(|s| s.slot == EquipmentSlot::Hero)
        .and_then(|s| s.card.as_ref())
        .unwrap();
    assert_eq!(hero.card_number, "WTR002");

    assert!(!session.apply_next_turn("broken"));
    assert_eq!(session.turns_received(), 1);
}

#[test]
fn test_ui_actions_round_trip_through_store() {
    let mut session = GameSession::new(1, 1, String::new());
    session.set_pop_up("WTR002".into(), Some(3), None);
    assert!(session.view().popup.is_some());
    session.clear_pop_up();
    assert!(session.view().popup.is_none());

    session.set_play_card_message();
    assert_eq!(
        session.view().play_card_message.as_deref(),
        Some("Release to play this card")
    );
    session.clear_play_card_message();
    assert!(session.view().play_card_message.is_none());

    session.clear_card_list_focus();
    assert!(session.state().card_list_focus.is_none());
}

#[test]
fn test_failed_fetch_and_rejection() {
    let mut session = GameSession::new(664, 3, "key".into());
    session.apply_next_turn(TURN);
    let board = session.state().game.clone();

    session.next_turn_failed("network down");
    assert_eq!(session.state().game, board);

    session.request_rejected("500".into(), Some("boom".into()));
    let toast = session.state().toasts[0].clone();
    assert_eq!(toast.message, "Error: 500 - boom");
    session.dismiss_toast(toast.id);
    assert!(session.state().toasts.is_empty());
}

#[test]
fn test_next_turn_url_routes_by_game() {
    let mut session = GameSession::new(664, 3, "key".into());
    session.set_dev_mode(false);
    let url = session.next_turn_url().unwrap();
    assert_eq!(
        url,
        format!("{}GetNextTurn3.php?gameName=664&playerID=3", ApiConfig::default().dev_url)
    );

    session.set_game_info(0, 0, String::new());
    assert!(session.next_turn_url().is_err());
}
