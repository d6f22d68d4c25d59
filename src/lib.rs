//! Rota Resolution Engine for remote-site medical staffing.
//!
//! This crate computes, for any staff member and calendar date, whether that
//! person is on duty, off, or on leave under a repeating duty/off cycle
//! anchored to a start date, with per-date manual overrides taking precedence
//! over the computed cycle. It also derives travel dates (the first and last
//! day of each duty block) for site travel reporting.

#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod resolution;
pub mod roster;
