//! Business logic services.

pub mod submission;
pub mod upload;
