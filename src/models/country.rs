//! Country: the owned collection of locations and its region index.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::Location;
use crate::distance::TravelTimeModel;
use crate::error::{Result, RoutingError};

/// A set of uniquely named locations grouped into regions.
///
/// Insertion order is kept and used as the tie-break order by every
/// routing algorithm. A region index (region name to member indices) is
/// rebuilt whenever a location is added, so region sizes are O(1) lookups
/// inside the routing loops.
///
/// Routing methods live in [`crate::constructive`]; path re-evaluation in
/// [`crate::evaluation`].
///
/// # Examples
///
/// ```
/// use polar_routing::models::{Country, Location};
///
/// let country = Country::new(vec![
///     Location::new("Depot", "Centre", 0.0, 0.0, true).unwrap(),
///     Location::new("Mill", "Centre", 10.0, 0.0, false).unwrap(),
///     Location::new("Quay", "Coast", 10.0, 3.0, false).unwrap(),
/// ])
/// .unwrap();
///
/// assert_eq!(country.len(), 3);
/// assert_eq!(country.region_size("Centre"), 2);
/// assert_eq!(country.depots().count(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CountryRecord", into = "CountryRecord")]
pub struct Country {
    locations: Vec<Location>,
    model: TravelTimeModel,
    by_name: HashMap<String, usize>,
    regions: BTreeMap<String, Vec<usize>>,
    /// Size of each location's own region, by location index.
    region_sizes: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CountryRecord {
    locations: Vec<Location>,
    #[serde(default)]
    model: TravelTimeModel,
}

impl TryFrom<CountryRecord> for Country {
    type Error = RoutingError;

    fn try_from(record: CountryRecord) -> Result<Self> {
        record.model.validate()?;
        Ok(Self::new(record.locations)?.with_model(record.model))
    }
}

impl From<Country> for CountryRecord {
    fn from(country: Country) -> Self {
        Self {
            locations: country.locations,
            model: country.model,
        }
    }
}

impl Country {
    /// Creates a country from `locations`, in order.
    ///
    /// Fails if two locations share a name.
    pub fn new(locations: Vec<Location>) -> Result<Self> {
        let mut country = Self {
            locations: Vec::with_capacity(locations.len()),
            model: TravelTimeModel::default(),
            by_name: HashMap::with_capacity(locations.len()),
            regions: BTreeMap::new(),
            region_sizes: Vec::new(),
        };
        for location in locations {
            country.insert(location)?;
        }
        country.reindex();
        Ok(country)
    }

    /// Replaces the travel time model.
    pub fn with_model(mut self, model: TravelTimeModel) -> Self {
        self.model = model;
        self
    }

    /// Appends a location and rebuilds the region index.
    pub fn add_location(&mut self, location: Location) -> Result<()> {
        self.insert(location)?;
        self.reindex();
        Ok(())
    }

    fn insert(&mut self, location: Location) -> Result<()> {
        if self.by_name.contains_key(location.name()) {
            return Err(RoutingError::Validation(format!(
                "duplicate location name '{}'",
                location.name()
            )));
        }
        self.by_name
            .insert(location.name().to_string(), self.locations.len());
        self.locations.push(location);
        Ok(())
    }

    fn reindex(&mut self) {
        self.regions.clear();
        for (i, location) in self.locations.iter().enumerate() {
            self.regions
                .entry(location.region().to_string())
                .or_default()
                .push(i);
        }
        self.region_sizes = self
            .locations
            .iter()
            .map(|l| self.regions.get(l.region()).map_or(0, Vec::len))
            .collect();
    }

    /// All locations, in insertion order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if the country has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// The travel time model in use.
    pub fn model(&self) -> &TravelTimeModel {
        &self.model
    }

    /// Looks a location up by its (title-cased) name.
    pub fn location(&self, name: &str) -> Option<&Location> {
        self.by_name.get(name).map(|&i| &self.locations[i])
    }

    /// Returns `true` if `location` is one of this country's locations.
    pub fn contains(&self, location: &Location) -> bool {
        self.index_of(location).is_ok()
    }

    /// Index of `location` in insertion order.
    ///
    /// Matching is by name, and the stored location must be equal to the
    /// given one.
    pub(crate) fn index_of(&self, location: &Location) -> Result<usize> {
        match self.by_name.get(location.name()) {
            Some(&i) if self.locations[i] == *location => Ok(i),
            _ => Err(RoutingError::Domain(location.name().to_string())),
        }
    }

    /// Depots, in insertion order.
    pub fn depots(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(|l| l.is_depot())
    }

    /// Settlements, in insertion order.
    pub fn settlements(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(|l| l.is_settlement())
    }

    /// Region names, sorted.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Locations in `region`, in insertion order.
    pub fn locations_in_region<'a>(
        &'a self,
        region: &str,
    ) -> impl Iterator<Item = &'a Location> + 'a {
        self.regions
            .get(region)
            .into_iter()
            .flatten()
            .map(|&i| &self.locations[i])
    }

    /// Number of locations (depots included) in `region`.
    pub fn region_size(&self, region: &str) -> usize {
        self.regions.get(region).map_or(0, Vec::len)
    }

    /// Travel time from `start` to `end`.
    ///
    /// Crossing into another region costs extra in proportion to the size of
    /// the destination region, which counts the destination itself and any
    /// depots there. Fails if either location is not part of this country.
    pub fn travel_time(&self, start: &Location, end: &Location) -> Result<f64> {
        let from = self.index_of(start)?;
        let to = self.index_of(end)?;
        Ok(self.travel_time_between(from, to))
    }

    /// Travel time between two location indices.
    pub(crate) fn travel_time_between(&self, from: usize, to: usize) -> f64 {
        let start = &self.locations[from];
        let end = &self.locations[to];
        self.model.travel_time(
            start.distance_to(end),
            start.region() != end.region(),
            self.region_sizes[to],
        )
    }
}
