//! Persistence model for the employee API: the SeaORM entity, the payload
//! shape accepted over HTTP, and pool/schema helpers.

pub mod db;
pub mod employee;
pub mod errors;
