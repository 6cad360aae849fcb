//! Profile module: three-layer architecture (domain, repository, service).
//!
//! Listing, detail lookup and creation of profiles. Field validation lives in
//! [`validation`]; the store is reached only through [`repository::ProfileRepository`].

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;
pub mod validation;

pub use service::ProfileService;
