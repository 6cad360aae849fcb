//! Service layer for the profile directory.
//! - Profile Query Service: ordered, paginated listing and single-profile detail.
//! - Profile Creation Service: field validation, company pre-flight check,
//!   transactional insert of the profile and its labels.
//! - Entities and per-field validators live in the `models` crate.

pub mod errors;
pub mod pagination;
pub mod ordering;
pub mod db;
pub mod profile;
#[cfg(test)]
pub mod test_support;
