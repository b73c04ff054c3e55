// src/lib.rs

//! Course-schedule planner library

pub mod error;
pub mod models;
pub mod schedule;
pub mod services;
pub mod utils;

#[cfg(test)]
mod fixtures;
