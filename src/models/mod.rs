//! Domain model types.
//!
//! Provides the core abstractions: immutable polar-coordinate locations,
//! the country that owns them and indexes them by region, and tours as
//! ordered visit sequences with an aggregate travel time.

mod country;
mod location;
mod tour;

pub use country::Country;
pub use location::{title_case, Location};
pub use tour::Tour;
