use crate::server::{
    data::{list::ListRepository, list_position::ListPositionRepository},
    error::{list::ListError, AppError},
    model::list::{CreateListParams, UpdateListParams},
    service::list::ListService,
};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod delete;
mod get_ordered;

fn params(board_public_id: Uuid, title: &str) -> CreateListParams {
    CreateListParams {
        board_public_id,
        public_id: None,
        title: title.to_string(),
        description: None,
    }
}
