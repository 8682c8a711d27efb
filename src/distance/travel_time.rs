//! Region-aware travel time.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// Default travel speed, in distance units per second.
pub const DEFAULT_SPEED: f64 = 4.75;

const SECONDS_PER_HOUR: f64 = 3600.0;
const CONGESTION_DIVISOR: f64 = 10.0;

/// Travel time, in hours, to cover `distance` at `speed`.
///
/// When the trip crosses into another region, the time is scaled by
/// `1 + locations_in_dest_region / 10`: bigger regions are slower to enter.
/// Trips within a region ignore the region size entirely.
///
/// # Examples
///
/// ```
/// use polar_routing::distance::{travel_time, DEFAULT_SPEED};
///
/// let local = travel_time(4750.0, false, 30, DEFAULT_SPEED);
/// assert!((local - 1.0 / 3600.0 * 1000.0).abs() < 1e-12);
///
/// let crossing = travel_time(4750.0, true, 5, DEFAULT_SPEED);
/// assert!((crossing - local * 1.5).abs() < 1e-12);
/// ```
pub fn travel_time(
    distance: f64,
    different_regions: bool,
    locations_in_dest_region: usize,
    speed: f64,
) -> f64 {
    let base = distance / speed / SECONDS_PER_HOUR;
    if !different_regions {
        return base;
    }
    base * (1.0 + locations_in_dest_region as f64 / CONGESTION_DIVISOR)
}

/// Travel time parameters carried by a [`Country`](crate::models::Country).
///
/// # Examples
///
/// ```
/// use polar_routing::distance::TravelTimeModel;
///
/// let model = TravelTimeModel::new(9.5).unwrap();
/// let slow = TravelTimeModel::default();
/// assert!(model.travel_time(100.0, true, 3) < slow.travel_time(100.0, true, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelTimeModel {
    speed: f64,
}

impl TravelTimeModel {
    /// Creates a model travelling at `speed`.
    ///
    /// Fails if the speed is not a positive finite number.
    pub fn new(speed: f64) -> Result<Self> {
        let model = Self { speed };
        model.validate()?;
        Ok(model)
    }

    /// Travel speed.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Checks the speed; used after deserialization too.
    pub fn validate(&self) -> Result<()> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(RoutingError::InvalidArgument(format!(
                "speed must be positive and finite, got {}",
                self.speed
            )));
        }
        Ok(())
    }

    /// [`travel_time`] at this model's speed.
    pub fn travel_time(
        &self,
        distance: f64,
        different_regions: bool,
        locations_in_dest_region: usize,
    ) -> f64 {
        travel_time(
            distance,
            different_regions,
            locations_in_dest_region,
            self.speed,
        )
    }
}

impl Default for TravelTimeModel {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
        }
    }
}
