pub mod book;
pub mod health;
