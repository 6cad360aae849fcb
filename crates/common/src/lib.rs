//! Pieces shared by every crate in the workspace: tracing setup and the
//! small wire types that are not owned by any one domain.

pub mod types;
pub mod utils;
