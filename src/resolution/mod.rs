//! Resolution logic for the Rota Resolution Engine.
//!
//! This module contains the pure functions that compute duty status from a
//! staff member's cycle and the override set, derive travel dates from block
//! transitions, and aggregate daily staffing statistics. Everything here is
//! side-effect-free and deterministic: the same inputs always produce the
//! same outputs, and no function mutates or retains its arguments.

mod daily_stats;
mod status;
mod travel;

pub use daily_stats::{DailyStats, calculate_daily_stats};
pub use status::resolve_status;
pub use travel::{TravelDates, TravelRow, derive_travel_dates, derive_travel_report};
