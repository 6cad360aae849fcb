pub mod errors;
pub mod db;
pub mod validation;
pub mod company;
pub mod profile;
pub mod label;

#[cfg(test)]
mod tests;
