//! Turn blob parser
//!
//! The server answers a turn poll with a block of text whose sections are
//! separated by `<BR>`. Only the local player's equipment line is read, by
//! position.

use crate::error::{GameError, GameResult};
use crate::state::GameState;
use crate::types::{Card, Player};

/// Section separator, matched after upper-casing
pub const SECTION_SEPARATOR: &str = "<BR>";
/// Field separator inside a section
pub const FIELD_SEPARATOR: char = '|';
/// Index of the local player's equipment section
pub const EQUIPMENT_SECTION: usize = 3;
/// Fields in an equipment line without a right-hand weapon
const EQUIPMENT_FIELDS_ONE_WEAPON: usize = 6;

/// Parse a full turn response into a board snapshot
pub fn parse_game_state(input: &str) -> GameResult<GameState> {
    let upper = input.to_uppercase();
    let equipment = upper
        .split(SECTION_SEPARATOR)
        .nth(EQUIPMENT_SECTION)
        .ok_or(GameError::MissingSection {
            index: EQUIPMENT_SECTION,
        })?;

    Ok(GameState {
        player_one: parse_equipment(equipment)?,
        player_two: Player::placeholder_opponent(),
        active_combat_chain: None,
        active_layers: None,
        old_combat_chain: None,
    })
}

/// Card number from a field: everything before the first space
pub fn return_card(input: &str) -> &str {
    input.split(' ').next().unwrap_or_default()
}

/// Parse one `|`-separated equipment line.
///
/// Six fields: hero, left weapon, head, chest, gloves, feet.
/// Seven or more: hero, left weapon, right weapon, head, chest, gloves, feet.
pub fn parse_equipment(input: &str) -> GameResult<Player> {
    let fields: Vec<&str> = input.split(FIELD_SEPARATOR).collect();
    if fields.len() < EQUIPMENT_FIELDS_ONE_WEAPON {
        return Err(GameError::MalformedEquipment {
            fields: fields.len(),
        });
    }

    let card = |index: usize| Card::from_number(return_card(fields[index]));

    // The armour block starts after the weapons
    let (weapon_right, armour) = if fields.len() == EQUIPMENT_FIELDS_ONE_WEAPON {
        (None, 2)
    } else {
        (card(2), 3)
    };

    let player = Player {
        hero: card(0),
        weapon_left: card(1),
        weapon_right,
        head: card(armour),
        chest: card(armour + 1),
        gloves: card(armour + 2),
        feet: card(armour + 3),
        ..Player::default()
    };
    Ok(player.with_starting_resources())
}
