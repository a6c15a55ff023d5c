pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_board_table;
mod m20260106_000003_create_list_table;
mod m20260106_000004_create_list_position_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_board_table::Migration),
            Box::new(m20260106_000003_create_list_table::Migration),
            Box::new(m20260106_000004_create_list_position_table::Migration),
        ]
    }
}
