pub mod project;
pub mod contact_message;
pub mod validation;
