//! Constructive heuristics over a [`Country`](crate::models::Country).
//!
//! - [`Country::fastest_trip_from`](crate::models::Country::fastest_trip_from) — single fastest next hop
//! - [`Country::nn_tour`](crate::models::Country::nn_tour) — greedy nearest-neighbor tour from a depot, O(S²)
//! - [`Country::best_depot_site`](crate::models::Country::best_depot_site) — settlement whose
//!   nearest-neighbor tour is cheapest as an extra depot, O(S³)
//!
//! Every step breaks ties in favour of the candidate met first, so results
//! are reproducible for a given insertion order.

mod depot_site;
mod nearest_neighbor;

pub use depot_site::DepotSite;
