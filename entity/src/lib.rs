//! SeaORM entity definitions for the taskboard schema.
//!
//! Each module mirrors one table created by the `migration` crate. Relations are declared
//! so that `Schema::create_table_from_entity` emits the same foreign keys in test databases.

pub mod prelude;

pub mod board;
pub mod list;
pub mod list_position;
pub mod user;
