//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let board = factory::board::create_board(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (user, board) = factory::helpers::create_board_with_owner(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let list = factory::list::ListFactory::new(&db, board.id)
//!     .title("Backlog")
//!     .build()
//!     .await?;
//!
//! let position = factory::list_position::create_list_position(
//!     &db,
//!     board.id,
//!     vec![list.public_id],
//! )
//! .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `board` - Create board entities
//! - `list` - Create list entities (without touching the position record)
//! - `list_position` - Create position records with an explicit order
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod board;
pub mod helpers;
pub mod list;
pub mod list_position;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use board::create_board;
pub use list::create_list;
pub use list_position::create_list_position;
pub use user::create_user;
