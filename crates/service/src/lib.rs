//! Service layer for restaurant and expense records.
//! - Domain documents and their request schemas live in `records`.
//! - `store` defines the `Collection` seam and its PostgreSQL, JSON-file and in-memory backends.
//! - `validation` holds the shared required-field check.

pub mod errors;
pub mod validation;
pub mod records;
pub mod storage;
pub mod store;
#[cfg(test)]
mod test_support;

pub use records::{Document, Expense, Record, RecordService, Restaurant};
pub use store::{Collection, Stores};
