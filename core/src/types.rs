use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Health every player starts a parsed turn with
pub const DEFAULT_HEALTH: i32 = 20;

/// A card as the board renders it
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Set code plus number, e.g. `WTR002`
    pub card_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<u32>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Legacy single counter count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counters: Option<i32>,
    /// Counter kind (`defence`, `steam`, ...) to count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counters_map: Option<BTreeMap<String, i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reorderable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_broken: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_frozen: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_coord: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_coord: Option<i32>,
}

impl Card {
    pub fn new(card_number: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
            ..Self::default()
        }
    }

    pub fn with_counters(mut self, counters: BTreeMap<String, i32>) -> Self {
        self.counters_map = Some(counters);
        self
    }

    /// A card with no number is an empty slot
    pub fn from_number(card_number: &str) -> Option<Self> {
        if card_number.is_empty() {
            None
        } else {
            Some(Self::new(card_number))
        }
    }
}

/// The seven fixed card-holding positions on a player
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum EquipmentSlot {
    Hero,
    WeaponL,
    WeaponR,
    Head,
    Chest,
    Gloves,
    Feet,
}

impl EquipmentSlot {
    /// Board display order
    pub const ALL: [EquipmentSlot; 7] = [
        EquipmentSlot::Head,
        EquipmentSlot::Chest,
        EquipmentSlot::Gloves,
        EquipmentSlot::Feet,
        EquipmentSlot::WeaponL,
        EquipmentSlot::Hero,
        EquipmentSlot::WeaponR,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EquipmentSlot::Hero => "hero",
            EquipmentSlot::WeaponL => "weaponLeft",
            EquipmentSlot::WeaponR => "weaponRight",
            EquipmentSlot::Head => "head",
            EquipmentSlot::Chest => "chest",
            EquipmentSlot::Gloves => "gloves",
            EquipmentSlot::Feet => "feet",
        }
    }
}

/// One side of the table. Every field may be missing from a server snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    #[serde(rename = "HeadEq", default, skip_serializing_if = "Option::is_none")]
    pub head: Option<Card>,
    #[serde(rename = "ChestEq", default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<Card>,
    #[serde(rename = "GlovesEq", default, skip_serializing_if = "Option::is_none")]
    pub gloves: Option<Card>,
    #[serde(rename = "FeetEq", default, skip_serializing_if = "Option::is_none")]
    pub feet: Option<Card>,
    #[serde(rename = "WeaponLEq", default, skip_serializing_if = "Option::is_none")]
    pub weapon_left: Option<Card>,
    #[serde(rename = "Hero", default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<Card>,
    #[serde(rename = "WeaponREq", default, skip_serializing_if = "Option::is_none")]
    pub weapon_right: Option<Card>,
    #[serde(rename = "Health", default, skip_serializing_if = "Option::is_none")]
    pub health: Option<i32>,
    #[serde(rename = "ActionPoints", default, skip_serializing_if = "Option::is_none")]
    pub action_points: Option<i32>,
    #[serde(rename = "PitchRemaining", default, skip_serializing_if = "Option::is_none")]
    pub pitch_remaining: Option<i32>,
}

impl Player {
    pub fn slot(&self, slot: EquipmentSlot) -> Option<&Card> {
        match slot {
            EquipmentSlot::Hero => self.hero.as_ref(),
            EquipmentSlot::WeaponL => self.weapon_left.as_ref(),
            EquipmentSlot::WeaponR => self.weapon_right.as_ref(),
            EquipmentSlot::Head => self.head.as_ref(),
            EquipmentSlot::Chest => self.chest.as_ref(),
            EquipmentSlot::Gloves => self.gloves.as_ref(),
            EquipmentSlot::Feet => self.feet.as_ref(),
        }
    }

    pub fn set_slot(&mut self, slot: EquipmentSlot, card: Option<Card>) {
        let target = match slot {
            EquipmentSlot::Hero => &mut self.hero,
            EquipmentSlot::WeaponL => &mut self.weapon_left,
            EquipmentSlot::WeaponR => &mut self.weapon_right,
            EquipmentSlot::Head => &mut self.head,
            EquipmentSlot::Chest => &mut self.chest,
            EquipmentSlot::Gloves => &mut self.gloves,
            EquipmentSlot::Feet => &mut self.feet,
        };
        *target = card;
    }

    /// Number of occupied equipment slots
    pub fn equipped_count(&self) -> usize {
        EquipmentSlot::ALL
            .iter()
            .filter(|slot| self.slot(**slot).is_some())
            .count()
    }

    /// Fresh-turn resources: full health, nothing spent
    pub fn with_starting_resources(mut self) -> Self {
        self.health = Some(DEFAULT_HEALTH);
        self.action_points = Some(0);
        self.pitch_remaining = Some(0);
        self
    }

    /// Stand-in loadout for the opposing (AI) player.
    ///
    /// The turn blob carries no opponent equipment line, so the board shows
    /// this fixed loadout on the far side.
    pub fn placeholder_opponent() -> Self {
        Self {
            head: Card::from_number("CRU006"),
            chest: Card::from_number("WTR005"),
            gloves: Card::from_number("WTR153"),
            feet: Card::from_number("WTR004"),
            weapon_left: None,
            hero: Card::from_number("WTR002"),
            weapon_right: Card::from_number("WTR003"),
            ..Self::default()
        }
        .with_starting_resources()
    }
}
