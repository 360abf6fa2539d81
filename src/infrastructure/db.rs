pub mod postgres;
pub mod rest;
