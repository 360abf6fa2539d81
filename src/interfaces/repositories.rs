pub mod contact_message;
pub mod project;
pub mod rest_repo;
pub mod sqlx_repo;

pub const PROJECTS_TABLE: &str = "projects";
pub const CONTACT_MESSAGES_TABLE: &str = "contact_messages";
