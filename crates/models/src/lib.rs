pub mod errors;
pub mod db;
pub mod restaurant;
pub mod expense;

#[cfg(test)]
mod tests;
