//! Domain models.

pub mod application;

pub use application::{ActiveBacklogs, Application, GraduationPlan};
