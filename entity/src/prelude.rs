pub use super::board::Entity as Board;
pub use super::list::Entity as List;
pub use super::list_position::Entity as ListPosition;
pub use super::user::Entity as User;
