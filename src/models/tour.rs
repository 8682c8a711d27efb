//! Tour type.

use super::Location;

/// An ordered visit sequence starting at a depot, with its total travel
/// time.
///
/// Tours borrow their stops from the [`Country`](super::Country) that built
/// them. Two tours are equal when they visit the same locations in the same
/// order; cost is not compared.
///
/// # Examples
///
/// ```
/// use polar_routing::models::{Country, Location};
///
/// let country = Country::new(vec![
///     Location::new("Depot", "A", 0.0, 0.0, true).unwrap(),
///     Location::new("Near", "A", 1.0, 0.0, false).unwrap(),
///     Location::new("Far", "A", 5.0, 0.0, false).unwrap(),
/// ])
/// .unwrap();
///
/// let depot = country.location("Depot").unwrap();
/// let tour = country.nn_tour(depot).unwrap();
/// assert_eq!(tour.names(), vec!["Depot", "Near", "Far"]);
/// assert_eq!(tour.num_settlements(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Tour<'a> {
    stops: Vec<&'a Location>,
    total_time: f64,
}

impl<'a> Tour<'a> {
    /// Starts a tour at `depot` with zero cost.
    pub(crate) fn starting_at(depot: &'a Location, capacity: usize) -> Self {
        let mut stops = Vec::with_capacity(capacity + 1);
        stops.push(depot);
        Self {
            stops,
            total_time: 0.0,
        }
    }

    /// Appends a stop reached after `time` hours.
    pub(crate) fn push(&mut self, stop: &'a Location, time: f64) {
        self.stops.push(stop);
        self.total_time += time;
    }

    /// All stops, starting with the depot.
    pub fn stops(&self) -> &[&'a Location] {
        &self.stops
    }

    /// The starting depot.
    pub fn start(&self) -> &'a Location {
        self.stops[0]
    }

    /// Settlements in visit order (every stop after the start).
    pub fn settlements(&self) -> &[&'a Location] {
        &self.stops[1..]
    }

    /// Number of settlements visited.
    pub fn num_settlements(&self) -> usize {
        self.stops.len() - 1
    }

    /// Stop names in visit order.
    pub fn names(&self) -> Vec<&'a str> {
        self.stops.iter().map(|l| l.name()).collect()
    }

    /// Total travel time, in hours.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }
}

impl PartialEq for Tour<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.stops.len() == other.stops.len()
            && self
                .stops
                .iter()
                .zip(&other.stops)
                .all(|(a, b)| a.name() == b.name())
    }
}
