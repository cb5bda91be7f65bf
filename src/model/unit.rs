//! Domain models for units and their purchased upgrades.

pub use entity::unit::UnitStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: i32,
    pub player_id: i32,
    pub name: String,
    pub unit_type: String,
    pub status: UnitStatus,
    pub callsign: Option<String>,
}

impl Unit {
    pub fn from_entity(entity: entity::unit::Model) -> Self {
        Self {
            id: entity.id,
            player_id: entity.player_id,
            name: entity.name,
            unit_type: entity.unit_type,
            status: entity.status,
            callsign: entity.callsign,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerUpgrade {
    pub id: i32,
    pub unit_id: i32,
    pub name: String,
}

impl PlayerUpgrade {
    pub fn from_entity(entity: entity::player_upgrade::Model) -> Self {
        Self {
            id: entity.id,
            unit_id: entity.unit_id,
            name: entity.name,
        }
    }
}

/// A unit together with the names of its upgrades, as listed on a statistics message.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitWithUpgrades {
    pub unit: Unit,
    pub upgrades: Vec<String>,
}
