//! API data transfer objects shared by controllers and the OpenAPI document.

pub mod api;
pub mod board;
pub mod list;
pub mod user;
