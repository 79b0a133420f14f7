//! View types for UI serialization
//!
//! This module maps the store into lightweight view structs. The browser
//! frontend receives them as JS objects; the terminal prints them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::*;
use crate::types::*;

/// Continuous counters the overlay knows how to draw, in render order
pub const COUNTER_RENDER_ORDER: [&str; 7] =
    ["defence", "steam", "attack", "life", "energy", "haunt", "aim"];

/// One counter badge drawn over a card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CounterBadge {
    pub kind: String,
    pub value: i32,
    /// Number drawn inside the badge; aim badges are icon-only
    pub display: Option<i32>,
    pub title: String,
    pub tooltip: Option<String>,
}

/// Badges for every non-zero known counter on a card
pub fn counter_badges(counters: &BTreeMap<String, i32>) -> Vec<CounterBadge> {
    COUNTER_RENDER_ORDER
        .iter()
        .filter_map(|kind| {
            let value = *counters.get(*kind)?;
            if value == 0 {
                return None;
            }
            let badge = if *kind == "aim" {
                CounterBadge {
                    kind: kind.to_string(),
                    value,
                    display: None,
                    title: String::from("aim counter"),
                    tooltip: Some(String::from("Aim counter(s)")),
                }
            } else {
                CounterBadge {
                    kind: kind.to_string(),
                    value,
                    display: Some(value),
                    title: format!("{} {} counter(s)", value, kind),
                    tooltip: None,
                }
            };
            Some(badge)
        })
        .collect()
}

/// Short tooltip: count only when plural, e.g. `"3 steam counters"` or `" steam counter"`
pub fn counter_tooltip(kind: &str, value: i32) -> String {
    if value > 1 {
        format!("{} {} counters", value, kind)
    } else {
        format!(" {} counter", kind)
    }
}

/// View of a single card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub card_number: String,
    pub counters: Vec<CounterBadge>,
    pub border_color: Option<String>,
    pub overlay: Option<String>,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            card_number: card.card_number.clone(),
            counters: card
                .counters_map
                .as_ref()
                .map(counter_badges)
                .unwrap_or_default(),
            border_color: card.border_color.clone(),
            overlay: card.overlay.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SlotView {
    pub slot: EquipmentSlot,
    pub label: String,
    pub card: Option<CardView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    /// Seven slots in board display order
    pub slots: Vec<SlotView>,
    pub health: Option<i32>,
    pub action_points: Option<i32>,
    pub pitch_remaining: Option<i32>,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            slots: EquipmentSlot::ALL
                .iter()
                .map(|slot| SlotView {
                    slot: *slot,
                    label: slot.label().to_string(),
                    card: player.slot(*slot).map(CardView::from),
                })
                .collect(),
            health: player.health,
            action_points: player.action_points,
            pitch_remaining: player.pitch_remaining,
        }
    }
}

/// The layers zone: hidden unless layers are active
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveLayersView {
    pub title: String,
    pub static_cards: Vec<CardView>,
    pub reorderable_cards: Vec<CardView>,
}

impl ActiveLayersView {
    pub fn from_layers(layers: Option<&ActiveLayers>) -> Option<Self> {
        let layers = layers.filter(|l| l.active)?;
        let pick = |flag: bool| -> Vec<CardView> {
            layers
                .card_list
                .iter()
                .filter(|card| card.reorderable == Some(flag))
                .map(CardView::from)
                .collect()
        };
        let mut title = String::from("Active Layers");
        if layers.is_reorderable {
            title.push_str(" (Drag highlighted to reorder)");
        }
        Some(Self {
            title,
            static_cards: pick(false),
            reorderable_cards: pick(true),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PopupView {
    pub card: CardView,
    pub x_coord: Option<i32>,
    pub y_coord: Option<i32>,
}

impl PopupView {
    pub fn from_popup(popup: &Popup) -> Option<Self> {
        if !popup.popup_on {
            return None;
        }
        popup.popup_card.as_ref().map(|card| Self {
            card: CardView::from(card),
            x_coord: popup.x_coord,
            y_coord: popup.y_coord,
        })
    }
}

/// A zone's cards opened for inspection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardListView {
    pub name: Option<String>,
    pub cards: Vec<CardView>,
}

/// The complete board view sent to the frontend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub game_id: u64,
    pub player_id: u32,
    pub player_one: PlayerView,
    pub player_two: PlayerView,
    pub active_layers: Option<ActiveLayersView>,
    pub combat_chain_active: bool,
    pub old_combat_chain: Vec<CardView>,
    pub popup: Option<PopupView>,
    pub play_card_message: Option<String>,
    pub card_list_focus: Option<CardListView>,
    pub toasts: Vec<Toast>,
}

impl GameView {
    pub fn from_state(state: &ClientState) -> Self {
        let game = &state.game;
        Self {
            game_id: state.game_info.game_id,
            player_id: state.game_info.player_id,
            player_one: PlayerView::from(&game.player_one),
            player_two: PlayerView::from(&game.player_two),
            active_layers: ActiveLayersView::from_layers(game.active_layers.as_ref()),
            combat_chain_active: game
                .active_combat_chain
                .as_ref()
                .and_then(|chain| chain.active)
                .unwrap_or(false),
            old_combat_chain: game
                .old_combat_chain
                .iter()
                .flatten()
                .map(CardView::from)
                .collect(),
            popup: PopupView::from_popup(&state.popup),
            play_card_message: if state.play_card_message.popup_on {
                state.play_card_message.message.clone()
            } else {
                None
            },
            card_list_focus: state
                .card_list_focus
                .as_ref()
                .filter(|focus| focus.active)
                .map(|focus| CardListView {
                    name: focus.name.clone(),
                    cards: focus
                        .card_list
                        .iter()
                        .flatten()
                        .map(CardView::from)
                        .collect(),
                }),
            toasts: state.toasts.clone(),
        }
    }
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.card_number)?;
        for badge in &self.counters {
            match badge.display {
                Some(n) => write!(f, " [{} {}]", n, badge.kind)?,
                None => write!(f, " [{}]", badge.kind)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for PlayerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match &slot.card {
                Some(card) => writeln!(f, "  {:<12} {}", slot.label, card)?,
                None => writeln!(f, "  {:<12} -", slot.label)?,
            }
        }
        write!(
            f,
            "  health {}  action points {}  pitch {}",
            self.health.unwrap_or_default(),
            self.action_points.unwrap_or_default(),
            self.pitch_remaining.unwrap_or_default()
        )
    }
}

impl fmt::Display for GameView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "game {} (player {})", self.game_id, self.player_id)?;
        writeln!(f, "opponent:")?;
        writeln!(f, "{}", self.player_two)?;
        if let Some(layers) = &self.active_layers {
            writeln!(f, "{}:", layers.title)?;
            for card in layers.static_cards.iter().chain(&layers.reorderable_cards) {
                writeln!(f, "  {}", card)?;
            }
        }
        if !self.old_combat_chain.is_empty() {
            let cards: Vec<String> = self.old_combat_chain.iter().map(|c| c.to_string()).collect();
            writeln!(f, "previous chain: {}", cards.join(", "))?;
        }
        writeln!(f, "you:")?;
        write!(f, "{}", self.player_one)?;
        for toast in &self.toasts {
            write!(f, "\n! {}", toast.message)?;
        }
        Ok(())
    }
}
