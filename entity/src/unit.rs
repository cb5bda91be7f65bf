use sea_orm::entity::prelude::*;

/// Deployment status of a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum UnitStatus {
    #[sea_orm(string_value = "INACTIVE")]
    Inactive,
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "MIA")]
    Mia,
    #[sea_orm(string_value = "KIA")]
    Kia,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "unit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_id: i32,
    pub name: String,
    pub unit_type: String,
    pub status: UnitStatus,
    pub callsign: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Player,
    #[sea_orm(has_many = "super::player_upgrade::Entity")]
    PlayerUpgrade,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::player_upgrade::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerUpgrade.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
