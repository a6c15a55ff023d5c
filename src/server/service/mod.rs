//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validating input and resolving public ids to stored records
//! - **Orchestration**: Joining the list store and the position store
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Opening one transaction per multi-step write

pub mod board;
pub mod list;
pub mod user;
