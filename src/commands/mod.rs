pub mod expenses;
pub mod history;
pub mod identity;
