//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! table. Repositories use SeaORM entity models internally and return domain models to
//! maintain separation between the data layer and business logic layer.
//!
//! Repositories borrow any `ConnectionTrait` implementor, so the same repository runs
//! against the connection pool or inside a `DatabaseTransaction` opened by a service.

pub mod board;
pub mod list;
pub mod list_position;
pub mod user;
