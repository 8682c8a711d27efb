//! Nearest-neighbor tour construction.
//!
//! Starting from a depot, repeatedly travel to the settlement with the
//! smallest travel time from the current position until every settlement
//! has been visited. Depots other than the start are never visited.
//!
//! # Complexity
//!
//! O(S²) where S = number of settlements.
//!
//! # Reference
//!
//! No optimality guarantee; this is the usual greedy TSP construction and
//! typically lands 15-25% above the optimal tour.

use crate::error::{Result, RoutingError};
use crate::models::{Country, Location, Tour};

/// Depot roles seen by one tour construction.
///
/// Either the stored role flags, or the stored flags with one extra
/// location acting as a depot. The country itself is never modified.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DepotRoles {
    promoted: Option<usize>,
}

impl DepotRoles {
    /// The country's own depots.
    pub(crate) fn stored() -> Self {
        Self::default()
    }

    /// The country's own depots plus the location at `index`.
    pub(crate) fn promoting(index: usize) -> Self {
        Self {
            promoted: Some(index),
        }
    }

    fn is_depot(&self, country: &Country, index: usize) -> bool {
        self.promoted == Some(index) || country.locations()[index].is_depot()
    }
}

impl Country {
    /// Picks the candidate reachable fastest from `current_location`.
    ///
    /// Returns the chosen candidate and its travel time. Ties go to the
    /// candidate listed first.
    ///
    /// Fails with [`RoutingError::InvalidArgument`] if `potential_locations`
    /// is empty or contains `current_location`, and with
    /// [`RoutingError::Domain`] if any location is not part of this country.
    ///
    /// # Examples
    ///
    /// ```
    /// use polar_routing::models::{Country, Location};
    ///
    /// let country = Country::new(vec![
    ///     Location::new("Depot", "A", 0.0, 0.0, true).unwrap(),
    ///     Location::new("Far", "A", 9.0, 0.0, false).unwrap(),
    ///     Location::new("Near", "A", 2.0, 0.0, false).unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// let depot = country.location("Depot").unwrap();
    /// let far = country.location("Far").unwrap();
    /// let near = country.location("Near").unwrap();
    ///
    /// let (next, time) = country.fastest_trip_from(depot, &[far, near]).unwrap();
    /// assert_eq!(next.name(), "Near");
    /// assert_eq!(time, country.travel_time(depot, near).unwrap());
    /// ```
    pub fn fastest_trip_from<'a>(
        &self,
        current_location: &Location,
        potential_locations: &[&'a Location],
    ) -> Result<(&'a Location, f64)> {
        if potential_locations.is_empty() {
            return Err(RoutingError::InvalidArgument(
                "no potential locations to travel to".into(),
            ));
        }
        let from = self.index_of(current_location)?;
        let candidates = potential_locations
            .iter()
            .map(|l| self.index_of(l))
            .collect::<Result<Vec<_>>>()?;
        if candidates.contains(&from) {
            return Err(RoutingError::InvalidArgument(format!(
                "current location '{}' is among the potential locations",
                current_location.name()
            )));
        }

        let (pos, time) = self.nearest_from(from, &candidates).ok_or_else(|| {
            RoutingError::InvalidArgument("no potential locations to travel to".into())
        })?;
        Ok((potential_locations[pos], time))
    }

    /// Position in `candidates` of the fastest hop from `from`, and its time.
    ///
    /// First minimum wins. Returns `None` if `candidates` is empty.
    pub(crate) fn nearest_from(&self, from: usize, candidates: &[usize]) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &to) in candidates.iter().enumerate() {
            let time = self.travel_time_between(from, to);
            if best.map_or(true, |(_, best_time)| time < best_time) {
                best = Some((pos, time));
            }
        }
        best
    }

    /// Builds a nearest-neighbor tour from `starting_depot` through every
    /// settlement.
    ///
    /// The tour starts at the depot and lists each settlement once, in
    /// visit order; its total time is the sum of the hop times. With no
    /// settlements the tour is just the depot, at zero cost.
    ///
    /// Fails with [`RoutingError::InvalidArgument`] if `starting_depot` is a
    /// settlement, and with [`RoutingError::Domain`] if it is not part of
    /// this country.
    pub fn nn_tour(&self, starting_depot: &Location) -> Result<Tour<'_>> {
        if !starting_depot.is_depot() {
            return Err(RoutingError::InvalidArgument(format!(
                "'{}' is not a depot",
                starting_depot.name()
            )));
        }
        let start = self.index_of(starting_depot)?;
        let tour = self.build_tour(start, DepotRoles::stored());
        tracing::debug!(
            start = starting_depot.name(),
            settlements = tour.num_settlements(),
            total_time = tour.total_time(),
            "built nearest-neighbor tour"
        );
        Ok(tour)
    }

    /// Nearest-neighbor sweep over every non-depot under `roles`, from the
    /// location at `start`.
    pub(crate) fn build_tour(&self, start: usize, roles: DepotRoles) -> Tour<'_> {
        let locations = self.locations();
        let mut unvisited: Vec<usize> = (0..locations.len())
            .filter(|&i| !roles.is_depot(self, i))
            .collect();

        let mut tour = Tour::starting_at(&locations[start], unvisited.len());
        let mut current = start;
        while let Some((pos, time)) = self.nearest_from(current, &unvisited) {
            // order-preserving removal keeps the tie-break stable
            let next = unvisited.remove(pos);
            tour.push(&locations[next], time);
            current = next;
        }
        tour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{travel_time, DEFAULT_SPEED};
    use std::collections::HashSet;

    fn line_country() -> Country {
        Country::new(vec![
            Location::new("Depot", "Line", 0.0, 0.0, true).expect("valid"),
            Location::new("Three", "Line", 3.0, 0.0, false).expect("valid"),
            Location::new("One", "Line", 1.0, 0.0, false).expect("valid"),
            Location::new("Two", "Line", 2.0, 0.0, false).expect("valid"),
        ])
        .expect("valid")
    }

    fn get<'a>(country: &'a Country, name: &str) -> &'a Location {
        country.location(name).expect("exists")
    }

    #[test]
    fn test_fastest_trip_picks_nearest() {
        let c = line_country();
        let (next, time) = c
            .fastest_trip_from(get(&c, "Depot"), &[get(&c, "Three"), get(&c, "Two")])
            .expect("valid");
        assert_eq!(next.name(), "Two");
        assert_eq!(time, c.travel_time(get(&c, "Depot"), next).expect("members"));
    }

    #[test]
    fn test_fastest_trip_tie_goes_to_first() {
        let c = Country::new(vec![
            Location::new("Depot", "X", 0.0, 0.0, true).expect("valid"),
            Location::new("East", "X", 5.0, 0.0, false).expect("valid"),
            Location::new("West", "X", 5.0, std::f64::consts::PI, false).expect("valid"),
        ])
        .expect("valid");
        let depot = get(&c, "Depot");
        let (a, _) = c
            .fastest_trip_from(depot, &[get(&c, "East"), get(&c, "West")])
            .expect("valid");
        let (b, _) = c
            .fastest_trip_from(depot, &[get(&c, "West"), get(&c, "East")])
            .expect("valid");
        assert_eq!(a.name(), "East");
        assert_eq!(b.name(), "West");
    }

    #[test]
    fn test_fastest_trip_empty_candidates() {
        let c = line_country();
        assert!(matches!(
            c.fastest_trip_from(get(&c, "Depot"), &[]),
            Err(RoutingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_fastest_trip_rejects_current_in_candidates() {
        let c = line_country();
        let one = get(&c, "One");
        assert!(matches!(
            c.fastest_trip_from(one, &[get(&c, "Two"), one]),
            Err(RoutingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_fastest_trip_foreign_locations() {
        let c = line_country();
        let stranger = Location::new("Stranger", "Line", 0.5, 0.0, false).expect("valid");
        assert!(matches!(
            c.fastest_trip_from(get(&c, "Depot"), &[&stranger]),
            Err(RoutingError::Domain(_))
        ));
        assert!(matches!(
            c.fastest_trip_from(&stranger, &[get(&c, "One")]),
            Err(RoutingError::Domain(_))
        ));
    }

    #[test]
    fn test_nn_tour_follows_nearest() {
        let c = line_country();
        let tour = c.nn_tour(get(&c, "Depot")).expect("valid");
        assert_eq!(tour.names(), vec!["Depot", "One", "Two", "Three"]);
        // every hop covers one unit within the same region
        let hop = travel_time(1.0, false, 0, DEFAULT_SPEED);
        let expected = 3.0 * hop;
        assert!((tour.total_time() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_nn_tour_rejects_settlement_start() {
        let c = line_country();
        assert!(matches!(
            c.nn_tour(get(&c, "One")),
            Err(RoutingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_nn_tour_foreign_depot() {
        let c = line_country();
        let other = Location::new("Depot", "Line", 7.0, 0.0, true).expect("valid");
        assert!(matches!(c.nn_tour(&other), Err(RoutingError::Domain(_))));
    }

    #[test]
    fn test_nn_tour_skips_other_depots() {
        let c = Country::new(vec![
            Location::new("North Depot", "N", 10.0, 1.5, true).expect("valid"),
            Location::new("South Depot", "S", 10.0, -1.5, true).expect("valid"),
            Location::new("A", "N", 8.0, 1.4, false).expect("valid"),
            Location::new("B", "S", 8.0, -1.4, false).expect("valid"),
        ])
        .expect("valid");
        let tour = c.nn_tour(get(&c, "North Depot")).expect("valid");
        assert_eq!(tour.start().name(), "North Depot");
        assert_eq!(tour.num_settlements(), 2);
        assert!(tour.settlements().iter().all(|l| l.is_settlement()));
        let unique: HashSet<&str> = tour.names().into_iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_nn_tour_no_settlements() {
        let c = Country::new(vec![
            Location::new("Only", "X", 1.0, 0.0, true).expect("valid"),
        ])
        .expect("valid");
        let tour = c.nn_tour(get(&c, "Only")).expect("valid");
        assert_eq!(tour.names(), vec!["Only"]);
        assert_eq!(tour.total_time(), 0.0);
    }

    #[test]
    fn test_build_tour_with_promoted_settlement() {
        let c = line_country();
        let tour = c.build_tour(2, DepotRoles::promoting(2));
        assert_eq!(tour.names(), vec!["One", "Two", "Three"]);
        assert!(c.locations()[2].is_settlement());
    }
}
