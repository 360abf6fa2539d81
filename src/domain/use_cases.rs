pub mod project;
pub mod contact;
pub mod seed;
