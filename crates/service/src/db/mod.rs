//! Free functions over a sea-orm connection. The repository implementation
//! delegates here; tests call them directly.

pub mod labels;
pub mod profile_create;
pub mod profile_queries;
