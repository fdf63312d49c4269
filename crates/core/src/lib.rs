//! Domain types shared by the absence service, its database layer and its
//! HTTP client.

pub mod dates;
pub mod errors;
pub mod models;
