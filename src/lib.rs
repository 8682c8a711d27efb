//! # polar-routing
//!
//! Models a country as named locations in a polar plane, grouped into
//! regions, with some locations acting as depots and the rest as
//! settlements. Provides region-aware travel times, greedy delivery tours,
//! and selection of the best site for an additional depot.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Country, Tour)
//! - [`distance`] — Travel time model with region-crossing congestion
//! - [`constructive`] — Nearest-trip selection, nearest-neighbor tours, depot-site search
//! - [`evaluation`] — Tour cost re-evaluation and rule checks
//! - [`render`] — Diagram rendering of countries and paths
//! - [`error`] — Error type
//!
//! ## Example
//!
//! ```
//! use polar_routing::models::{Country, Location};
//!
//! let country = Country::new(vec![
//!     Location::new("Central Depot", "Capital", 0.0, 0.0, true)?,
//!     Location::new("Oakford", "Capital", 120.0, 0.4, false)?,
//!     Location::new("Brinemouth", "Coast", 900.0, 2.1, false)?,
//!     Location::new("Saltmarsh", "Coast", 950.0, 2.3, false)?,
//! ])?;
//!
//! let depot = country.location("Central Depot").unwrap();
//! let tour = country.nn_tour(depot)?;
//! assert_eq!(tour.names()[1], "Oakford");
//!
//! let site = country.best_depot_site(false)?;
//! assert!(site.is_settlement());
//! # Ok::<(), polar_routing::error::RoutingError>(())
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod render;
