//! Location type and name normalisation.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// A named point of a country, in polar coordinates around the country's
/// origin.
///
/// Locations are immutable: every field is validated once in
/// [`Location::new`] and there are no setters. A location is either a
/// depot or a settlement.
///
/// # Examples
///
/// ```
/// use polar_routing::models::Location;
///
/// let depot = Location::new("Port Harbour", "Coast", 0.0, 0.0, true).unwrap();
/// let town = Location::new("Elm Hill", "Coast", 3.0, 0.0, false).unwrap();
/// assert!(depot.is_depot());
/// assert!(town.is_settlement());
/// assert!((depot.distance_to(&town) - 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LocationRecord")]
pub struct Location {
    name: String,
    region: String,
    r: f64,
    theta: f64,
    depot: bool,
}

/// Unvalidated location fields, as found in a dataset.
#[derive(Debug, Deserialize)]
struct LocationRecord {
    name: String,
    region: String,
    r: f64,
    theta: f64,
    depot: bool,
}

impl TryFrom<LocationRecord> for Location {
    type Error = RoutingError;

    fn try_from(record: LocationRecord) -> Result<Self> {
        Location::new(
            &record.name,
            &record.region,
            record.r,
            record.theta,
            record.depot,
        )
    }
}

impl Location {
    /// Creates a location.
    ///
    /// `name` and `region` are converted to title case; a warning is logged
    /// when that changes them. Fails if either is blank, if `r` is negative
    /// or not finite, or if `theta` lies outside `[-π, π]`.
    pub fn new(name: &str, region: &str, r: f64, theta: f64, depot: bool) -> Result<Self> {
        let name = normalise("name", name)?;
        let region = normalise("region", region)?;

        if !r.is_finite() || r < 0.0 {
            return Err(RoutingError::Validation(format!(
                "r should be non-negative, got {r}"
            )));
        }
        if !(-PI..=PI).contains(&theta) {
            return Err(RoutingError::Validation(format!(
                "theta should be between -π and π, got {theta}"
            )));
        }

        Ok(Self {
            name,
            region,
            r,
            theta,
            depot,
        })
    }

    /// Location name, in title case.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Region name, in title case.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Polar radius.
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Polar angle, in `[-π, π]`.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Returns `true` for depots.
    pub fn is_depot(&self) -> bool {
        self.depot
    }

    /// Returns `true` for settlements (every non-depot).
    pub fn is_settlement(&self) -> bool {
        !self.depot
    }

    /// Cartesian `(x, y)` position.
    pub fn cartesian(&self) -> (f64, f64) {
        (self.r * self.theta.cos(), self.r * self.theta.sin())
    }

    /// Straight-line distance to `other`, by the polar law of cosines.
    ///
    /// Both radii are scaled by the larger one first, so very large radii
    /// cannot overflow the squared terms.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let scale = self.r.max(other.r);
        if scale == 0.0 {
            return 0.0;
        }
        let a = self.r / scale;
        let b = other.r / scale;
        let squared = a * a + b * b - 2.0 * a * b * (self.theta - other.theta).cos();
        // cancellation can leave a tiny negative value for coincident points
        scale * squared.max(0.0).sqrt()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = if self.depot { "depot" } else { "settlement" };
        write!(
            f,
            "{} [{}] in {} @ ({:?}m, {:?}pi)",
            self.name,
            role,
            self.region,
            round2(self.r),
            round2(self.theta / PI)
        )
    }
}

/// Rounds to two decimals; `{:?}` then prints the shortest form, `3.0`
/// rather than `3.00`.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn normalise(field: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(RoutingError::Validation(format!("{field} must not be empty")));
    }
    let formatted = title_case(value);
    if formatted != value {
        tracing::warn!(
            field,
            provided = value,
            formatted = formatted.as_str(),
            "reformatted location {field} to title case"
        );
    }
    Ok(formatted)
}

/// Title-cases `text`: a letter that follows a letter is lowercased, any
/// other letter is uppercased.
///
/// # Examples
///
/// ```
/// use polar_routing::models::title_case;
///
/// assert_eq!(title_case("nEW yORK"), "New York");
/// assert_eq!(title_case("st. ives-on-sea"), "St. Ives-On-Sea");
/// ```
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;
    for c in text.chars() {
        if previous_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        previous_cased = c.is_uppercase() || c.is_lowercase();
    }
    out
}
