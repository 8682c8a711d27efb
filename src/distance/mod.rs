//! Travel time model.
//!
//! Converts a straight-line distance plus two congestion signals (whether a
//! region border is crossed, and how many locations the destination region
//! holds) into an elapsed time.

mod travel_time;

pub use travel_time::{travel_time, TravelTimeModel, DEFAULT_SPEED};
