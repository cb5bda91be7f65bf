use crate::{data::statistic::StatisticRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod upsert;
