pub mod valid_uuid;
