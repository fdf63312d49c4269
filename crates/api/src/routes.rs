pub mod health;
pub mod slot;
