//! Service layer for employee records.
//! - `employee::repository` is the storage contract plus its SeaORM implementation.
//! - `employee::service` orchestrates the repository and owns the update merge rule.

pub mod employee;
pub mod errors;
#[cfg(test)]
pub mod test_support;
