//! Message content rendering for dossier and statistics messages.
//!
//! Pure formatting helpers. Data loading happens in
//! [`PlayerMessageService`](super::player_message::PlayerMessageService); these functions
//! only turn already-loaded records into Discord message content.

use std::collections::HashSet;

use crate::model::{
    player::Player,
    settings::MedalEmotes,
    unit::{UnitStatus, UnitWithUpgrades},
};

/// Known medals drawn per row of the medal block.
const MEDALS_PER_ROW: usize = 5;

/// Builds the medal display for a dossier.
///
/// Repeated awards of the same medal are shown once, in the order the medal was first
/// awarded. Medals with a configured emote are drawn as their three-part token, five to
/// a row. Medals without one are listed by name, one per line, after the emote rows.
///
/// # Arguments
/// - `medals` - Names of every medal awarded to the player, in award order
/// - `emotes` - Medal name to emote token table
///
/// # Returns
/// - `String` - Rendered block, empty if the player has no medals
pub fn medal_block(medals: &[String], emotes: &MedalEmotes) -> String {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();
    let mut unknown = Vec::new();

    for medal in medals {
        if !seen.insert(medal.as_str()) {
            continue;
        }
        match emotes.token(medal) {
            Some(token) => tokens.push(token),
            None => unknown.push(medal.as_str()),
        }
    }

    let mut lines: Vec<String> = tokens
        .chunks(MEDALS_PER_ROW)
        .map(|row| row.join(" "))
        .collect();
    lines.extend(unknown.into_iter().map(str::to_string));

    lines.join("\n")
}

/// Renders the dossier message for a player.
pub fn dossier_content(mention: &str, player: &Player, medal_block: &str) -> String {
    let mut content = format!("# Dossier\n{}\n**Name:** {}\n", mention, player.name);

    if let Some(lore) = player.lore.as_deref().filter(|lore| !lore.is_empty()) {
        content.push_str(&format!("**Lore:**\n{}\n", lore));
    }

    content.push_str("## Medals\n");
    if medal_block.is_empty() {
        content.push_str("None");
    } else {
        content.push_str(medal_block);
    }

    content
}

/// Renders one roster line for a unit.
///
/// The callsign is quoted and only shown when the unit has one.
pub fn unit_line(entry: &UnitWithUpgrades) -> String {
    let unit = &entry.unit;
    let callsign = unit
        .callsign
        .as_deref()
        .map(|callsign| format!(" \"{}\"", callsign))
        .unwrap_or_default();
    let upgrades = if entry.upgrades.is_empty() {
        "none".to_string()
    } else {
        entry.upgrades.join(", ")
    };

    format!(
        "- **{}**{} | {} | {} | Upgrades: {}",
        unit.name,
        callsign,
        unit.unit_type,
        status_label(unit.status),
        upgrades
    )
}

/// Renders the statistics message for a player.
pub fn statistics_content(mention: &str, player: &Player, roster: &[UnitWithUpgrades]) -> String {
    let mut content = format!(
        "# Statistics\n{}\n**Name:** {}\n**Requisition Points:** {}\n**Bonus Pay:** {}\n## Units\n",
        mention, player.name, player.rec_points, player.bonus_pay
    );

    if roster.is_empty() {
        content.push_str("No units");
    } else {
        let lines: Vec<String> = roster.iter().map(unit_line).collect();
        content.push_str(&lines.join("\n"));
    }

    content
}

fn status_label(status: UnitStatus) -> &'static str {
    match status {
        UnitStatus::Inactive => "Inactive",
        UnitStatus::Active => "Active",
        UnitStatus::Mia => "MIA",
        UnitStatus::Kia => "KIA",
    }
}
