mod parser;

use std::collections::BTreeMap;

use crate::types::Card;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

/// A turn blob with `equipment` as section 3
fn turn_text(equipment: &str) -> String {
    format!("1 0 0<br>hand|data<br>arsenal<br>{}<br>trailing", equipment)
}

fn counters(entries: &[(&str, i32)]) -> BTreeMap<String, i32> {
    entries
        .iter()
        .map(|(kind, value)| (kind.to_string(), *value))
        .collect()
}

fn layer_card(number: &str, reorderable: Option<bool>) -> Card {
    let mut card = Card::new(number);
    card.reorderable = reorderable;
    card
}
