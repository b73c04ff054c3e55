// src/models/mod.rs

//! Domain models for the planner.
//!
//! Entities built from the catalog (degrees, courses, shifts, lessons),
//! the raw DTOs they are built from, and the application configuration.

mod comparable;
mod config;
mod course;
mod degree;
pub mod dto;
mod lesson;
mod shift;
mod term;

// Re-export all public types
pub use comparable::{Comparable, to_unique};
pub use config::{ApiConfig, Config, PlannerConfig};
pub use course::{Course, CourseView};
pub use degree::Degree;
pub use lesson::Lesson;
pub use shift::{Shift, ShiftOccupation, ShiftType};
pub use term::AcademicTerm;
