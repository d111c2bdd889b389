//! DTOs that bridge services with the JSON API.

pub mod reps;
pub mod sales;
pub mod settings;
