//! Cross-cutting helpers shared by the server crates: logging setup and
//! small response types.

pub mod types;
pub mod utils;
