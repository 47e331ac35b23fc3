pub mod candidates;
pub mod find;
