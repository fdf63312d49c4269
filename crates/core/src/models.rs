pub mod group;
pub mod session_type;
pub mod slot;
