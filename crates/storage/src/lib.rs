//! Persistence for the fitness tracker: the SQLite access layer, row models,
//! request/response DTOs and one repository per resource family.

pub mod db;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;

pub use db::Database;
