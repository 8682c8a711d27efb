//! Tour evaluator that recomputes cost and checks visit rules.

use std::collections::HashSet;

use crate::error::Result;
use crate::models::{Country, Location, Tour};

/// A way in which a tour breaks the rules of a settlement sweep.
#[derive(Debug, Clone, PartialEq)]
pub enum TourViolation {
    /// A location appears more than once.
    RepeatedStop {
        /// Name of the repeated location.
        name: String,
    },
    /// A settlement other than the start is never visited.
    MissingSettlement {
        /// Name of the skipped settlement.
        name: String,
    },
    /// A depot is visited after the start.
    DepotVisited {
        /// Name of the visited depot.
        name: String,
    },
    /// The reported total differs from the recomputed hop sum.
    CostMismatch {
        /// Total carried by the tour.
        reported: f64,
        /// Sum of consecutive-pair travel times.
        recomputed: f64,
    },
}

/// Recomputes path costs and audits tours against a country.
///
/// # Examples
///
/// ```
/// use polar_routing::models::{Country, Location};
/// use polar_routing::evaluation::TourEvaluator;
///
/// let country = Country::new(vec![
///     Location::new("Depot", "A", 0.0, 0.0, true).unwrap(),
///     Location::new("Farm", "B", 4.0, 1.0, false).unwrap(),
///     Location::new("Mine", "B", 6.0, 2.0, false).unwrap(),
/// ])
/// .unwrap();
///
/// let tour = country.nn_tour(country.location("Depot").unwrap()).unwrap();
/// let evaluator = TourEvaluator::new(&country);
/// assert!(evaluator.violations(&tour).unwrap().is_empty());
/// assert_eq!(evaluator.path_time(tour.stops()).unwrap(), tour.total_time());
/// ```
pub struct TourEvaluator<'a> {
    country: &'a Country,
}

impl<'a> TourEvaluator<'a> {
    /// Creates an evaluator for `country`.
    pub fn new(country: &'a Country) -> Self {
        Self { country }
    }

    /// Sum of travel times between consecutive stops of `path`.
    ///
    /// Fails if any stop is not part of the country.
    pub fn path_time(&self, path: &[&Location]) -> Result<f64> {
        let indices = path
            .iter()
            .map(|l| self.country.index_of(l))
            .collect::<Result<Vec<_>>>()?;
        let mut total = 0.0;
        for hop in indices.windows(2) {
            total += self.country.travel_time_between(hop[0], hop[1]);
        }
        Ok(total)
    }

    /// Checks that `tour` visits every settlement other than its start
    /// exactly once, visits no depot after the start, and reports the cost
    /// its hops add up to.
    pub fn violations(&self, tour: &Tour<'_>) -> Result<Vec<TourViolation>> {
        let mut violations = Vec::new();
        let mut seen = HashSet::new();

        for stop in tour.stops() {
            if !seen.insert(stop.name()) {
                violations.push(TourViolation::RepeatedStop {
                    name: stop.name().to_string(),
                });
            }
        }
        for stop in tour.settlements() {
            if stop.is_depot() {
                violations.push(TourViolation::DepotVisited {
                    name: stop.name().to_string(),
                });
            }
        }
        for settlement in self.country.settlements() {
            if !seen.contains(settlement.name()) {
                violations.push(TourViolation::MissingSettlement {
                    name: settlement.name().to_string(),
                });
            }
        }

        let recomputed = self.path_time(tour.stops())?;
        if recomputed != tour.total_time() {
            violations.push(TourViolation::CostMismatch {
                reported: tour.total_time(),
                recomputed,
            });
        }

        Ok(violations)
    }
}

impl Country {
    /// Sum of travel times between consecutive stops of `path`.
    ///
    /// Shorthand for [`TourEvaluator::path_time`].
    pub fn path_time(&self, path: &[&Location]) -> Result<f64> {
        TourEvaluator::new(self).path_time(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoutingError;

    fn sample() -> Country {
        Country::new(vec![
            Location::new("Depot", "Hub", 0.0, 0.0, true).expect("valid"),
            Location::new("Spare", "Hub", 1.0, 3.0, true).expect("valid"),
            Location::new("A", "East", 3.0, 0.2, false).expect("valid"),
            Location::new("B", "East", 4.0, 0.4, false).expect("valid"),
            Location::new("C", "West", 5.0, 2.8, false).expect("valid"),
        ])
        .expect("valid")
    }

    fn stops<'a>(country: &'a Country, names: &[&str]) -> Vec<&'a Location> {
        names
            .iter()
            .map(|n| country.location(n).expect("exists"))
            .collect()
    }

    #[test]
    fn test_path_time_sums_hops() {
        let c = sample();
        let path = stops(&c, &["Depot", "A", "C"]);
        let expected = c.travel_time(path[0], path[1]).expect("members")
            + c.travel_time(path[1], path[2]).expect("members");
        assert!((c.path_time(&path).expect("members") - expected).abs() < 1e-15);
    }

    #[test]
    fn test_path_time_trivial_paths() {
        let c = sample();
        assert_eq!(c.path_time(&[]).expect("empty"), 0.0);
        assert_eq!(c.path_time(&stops(&c, &["A"])).expect("single"), 0.0);
    }

    #[test]
    fn test_path_time_foreign_stop() {
        let c = sample();
        let stranger = Location::new("Z", "Hub", 1.0, 0.0, false).expect("valid");
        let a = c.location("A").expect("exists");
        assert!(matches!(
            c.path_time(&[a, &stranger]),
            Err(RoutingError::Domain(_))
        ));
    }

    #[test]
    fn test_nn_tour_has_no_violations() {
        let c = sample();
        let tour = c.nn_tour(c.location("Depot").expect("exists")).expect("valid");
        let violations = TourEvaluator::new(&c).violations(&tour).expect("members");
        assert!(violations.is_empty(), "{violations:?}");
    }

    #[test]
    fn test_detects_broken_tours() {
        let c = sample();
        let locations = c.locations();
        let mut tour = Tour::starting_at(&locations[0], 3);
        tour.push(&locations[2], 1.0);
        tour.push(&locations[1], 0.0);
        tour.push(&locations[2], 0.0);

        let violations = TourEvaluator::new(&c).violations(&tour).expect("members");
        assert!(violations.contains(&TourViolation::RepeatedStop { name: "A".into() }));
        assert!(violations.contains(&TourViolation::DepotVisited {
            name: "Spare".into()
        }));
        assert!(violations.contains(&TourViolation::MissingSettlement { name: "B".into() }));
        assert!(violations.contains(&TourViolation::MissingSettlement { name: "C".into() }));
        assert!(violations
            .iter()
            .any(|v| matches!(v, TourViolation::CostMismatch { .. })));
    }
}
