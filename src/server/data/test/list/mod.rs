use crate::server::{
    data::list::ListRepository,
    model::list::{CreateListParam, UpdateListParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod find_by_board;
mod find_by_public_id;
