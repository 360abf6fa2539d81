pub mod entities;
pub mod use_cases;
pub mod seed_data;
