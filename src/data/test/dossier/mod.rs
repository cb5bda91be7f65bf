use crate::{data::dossier::DossierRepository, error::AppError};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_player_id;
mod upsert;
