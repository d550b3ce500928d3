//! Item effects applied to the player on pickup.

use crate::config::ItemRules;
use crate::state::{ItemKind, PlayerState};

/// What a pickup actually did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    /// Hit points restored; may be less than the nominal amount near the cap.
    Healed { amount: i32 },
    /// Attack bonus gained, and the new total.
    Empowered { bonus: i32, total: i32 },
    /// Dash counter set to `turns`.
    Dashing { turns: u32 },
}

impl ItemEffect {
    /// Event text for the pickup.
    pub fn describe(&self) -> String {
        match self {
            ItemEffect::Healed { amount } => format!("You drink a potion and recover {amount} HP."),
            ItemEffect::Empowered { bonus, total } => {
                format!("Power surges through you! Attack +{bonus} (total +{total}).")
            }
            ItemEffect::Dashing { turns } => {
                format!("You feel light on your feet: dash for {turns} turns.")
            }
        }
    }
}

/// Applies the effect of `kind` to the player.
///
/// - Heal: `hp = min(hp + heal_amount, max_hp)`
/// - Power: `attack_bonus += power_bonus` (cumulative, permanent)
/// - Dash: `dash_turns_remaining = dash_turns` (overwrites, never stacks)
pub fn apply_effect(kind: ItemKind, player: &mut PlayerState, rules: &ItemRules) -> ItemEffect {
    match kind {
        ItemKind::Heal => {
            let before = player.hp;
            player.hp = (player.hp + rules.heal_amount).min(player.max_hp);
            ItemEffect::Healed {
                amount: player.hp - before,
            }
        }
        ItemKind::Power => {
            player.attack_bonus += rules.power_bonus;
            ItemEffect::Empowered {
                bonus: rules.power_bonus,
                total: player.attack_bonus,
            }
        }
        ItemKind::Dash => {
            player.dash_turns_remaining = rules.dash_turns;
            ItemEffect::Dashing {
                turns: rules.dash_turns,
            }
        }
    }
}
