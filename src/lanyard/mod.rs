pub mod rest;
pub mod socket;
pub mod types;

pub use types::{Presence, Status};
