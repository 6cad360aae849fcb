pub mod errors;
pub mod openapi;
pub mod pagination;
pub mod profiles;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::{run, serve};
