//! HTTP request handlers.
//!
//! Controllers parse path ids, convert DTOs into service parameters, call the service
//! layer and convert the returned domain models back into DTOs.

pub mod board;
pub mod list;
pub mod user;
