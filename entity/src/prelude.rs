pub use super::feedback::Entity as Feedback;
pub use super::user::Entity as User;
