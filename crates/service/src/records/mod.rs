//! Restaurant and expense documents plus the generic service over them.

pub mod domain;
pub mod service;

pub use domain::{CreateExpenseInput, CreateRestaurantInput, Document, Expense, Record, Restaurant};
pub use service::RecordService;
