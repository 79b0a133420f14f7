use super::turn_text;
use crate::error::GameError;
use crate::parser::*;
use crate::types::{EquipmentSlot, Player};

#[test]
fn test_return_card_takes_first_token() {
    assert_eq!(return_card("WTR002 1 0 extra"), "WTR002");
    assert_eq!(return_card("ARC001"), "ARC001");
    assert_eq!(return_card(""), "");
    assert_eq!(return_card(" leading"), "");
}

#[test]
fn test_parse_seven_field_line_maps_both_weapons() {
    let text = turn_text("wtr002 1|wtr003 0|wtr003 0|cru006|wtr005|wtr153|wtr004");
    let state = parse_game_state(&text).expect("valid turn");
    let p1 = &state.player_one;

    assert_eq!(p1.hero.as_ref().unwrap().card_number, "WTR002");
    assert_eq!(p1.weapon_left.as_ref().unwrap().card_number, "WTR003");
    assert_eq!(p1.weapon_right.as_ref().unwrap().card_number, "WTR003");
    assert_eq!(p1.head.as_ref().unwrap().card_number, "CRU006");
    assert_eq!(p1.chest.as_ref().unwrap().card_number, "WTR005");
    assert_eq!(p1.gloves.as_ref().unwrap().card_number, "WTR153");
    assert_eq!(p1.feet.as_ref().unwrap().card_number, "WTR004");
    assert_eq!(p1.health, Some(20));
    assert_eq!(p1.action_points, Some(0));
    assert_eq!(p1.pitch_remaining, Some(0));
}

#[test]
fn test_parse_six_field_line_has_no_right_weapon() {
    let text = turn_text("ARC001|ARC003|ARC150|ARC151|ARC152|ARC153");
    let state = parse_game_state(&text).unwrap();
    let p1 = &state.player_one;

    assert_eq!(p1.slot(EquipmentSlot::Hero).unwrap().card_number, "ARC001");
    assert_eq!(p1.slot(EquipmentSlot::WeaponL).unwrap().card_number, "ARC003");
    assert!(p1.weapon_right.is_none());
    assert_eq!(p1.slot(EquipmentSlot::Head).unwrap().card_number, "ARC150");
    assert_eq!(p1.slot(EquipmentSlot::Feet).unwrap().card_number, "ARC153");
}

#[test]
fn test_parse_ignores_fields_past_seventh() {
    let text = turn_text("A|B|C|D|E|F|G|H|I");
    let p1 = parse_game_state(&text).unwrap().player_one;
    assert_eq!(p1.feet.unwrap().card_number, "G");
}

#[test]
fn test_separator_match_is_case_insensitive() {
    let mixed = "x<Br>y<bR>z<BR>HERO|W1|H|C|G|F";
    let p1 = parse_game_state(mixed).unwrap().player_one;
    assert_eq!(p1.hero.unwrap().card_number, "HERO");
}

#[test]
fn test_empty_fields_leave_slots_empty() {
    let text = turn_text("WTR001||||WTR005|WTR153");
    let p1 = parse_game_state(&text).unwrap().player_one;
    assert!(p1.weapon_left.is_none());
    assert!(p1.head.is_none());
    assert!(p1.chest.is_none());
    assert_eq!(p1.gloves.unwrap().card_number, "WTR005");
    assert_eq!(p1.feet.unwrap().card_number, "WTR153");
}

#[test]
fn test_opponent_is_placeholder_loadout() {
    let state = parse_game_state(&turn_text("A|B|C|D|E|F|G")).unwrap();
    assert_eq!(state.player_two, Player::placeholder_opponent());
    assert_eq!(state.player_two.equipped_count(), 6);
    assert!(state.active_layers.is_none());
    assert!(state.active_combat_chain.is_none());
    assert!(state.old_combat_chain.is_none());
}

#[test]
fn test_missing_equipment_section_is_an_error() {
    assert_eq!(
        parse_game_state("only<br>three<br>sections"),
        Err(GameError::MissingSection { index: 3 })
    );
    assert!(parse_game_state("").is_err());
}

#[test]
fn test_short_equipment_line_is_an_error() {
    assert_eq!(
        parse_game_state(&turn_text("A|B|C|D|E")),
        Err(GameError::MalformedEquipment { fields: 5 })
    );
}
