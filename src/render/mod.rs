//! Diagram rendering of a country and, optionally, a path through it.
//!
//! Rendering only reads from the [`Country`]; it never feeds back into
//! routing. [`SvgRenderer`] is the built-in implementation.

mod svg;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::evaluation::TourEvaluator;
use crate::models::{Country, Location};

pub use svg::SvgRenderer;

/// Display toggles for a diagram.
///
/// # Examples
///
/// ```
/// use polar_routing::render::PlotOptions;
///
/// let options = PlotOptions::default()
///     .with_location_names(false)
///     .with_save_to("country.svg");
/// assert!(options.distinguish_regions);
/// assert!(!options.location_names);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Tag each location with its region.
    pub distinguish_regions: bool,
    /// Mark depots differently from settlements and capitalise their names.
    pub distinguish_depots: bool,
    /// Label locations with their names.
    pub location_names: bool,
    /// Report polar `(r, θ)` positions rather than cartesian `(x, y)`.
    pub polar_projection: bool,
    /// Persist the diagram here instead of displaying it.
    pub save_to: Option<PathBuf>,
}

impl PlotOptions {
    /// Sets region tagging.
    pub fn with_distinguish_regions(mut self, on: bool) -> Self {
        self.distinguish_regions = on;
        self
    }

    /// Sets depot marking.
    pub fn with_distinguish_depots(mut self, on: bool) -> Self {
        self.distinguish_depots = on;
        self
    }

    /// Sets name labels.
    pub fn with_location_names(mut self, on: bool) -> Self {
        self.location_names = on;
        self
    }

    /// Sets polar (vs cartesian) coordinates.
    pub fn with_polar_projection(mut self, on: bool) -> Self {
        self.polar_projection = on;
        self
    }

    /// Sets the save target.
    pub fn with_save_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_to = Some(path.into());
        self
    }
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            distinguish_regions: true,
            distinguish_depots: true,
            location_names: true,
            polar_projection: true,
            save_to: None,
        }
    }
}

/// What a renderer draws: the country, plus an optional path through it
/// with its precomputed travel time.
#[derive(Debug, Clone, Copy)]
pub struct PlotView<'a> {
    /// The country being drawn.
    pub country: &'a Country,
    /// Consecutive stops of the path, if any.
    pub path: Option<&'a [&'a Location]>,
    /// Total travel time along `path` (zero without one).
    pub path_time: f64,
}

/// Consumes a country view and produces a diagram.
pub trait PathRenderer {
    /// Draws `view`, displaying it or saving it per `options`.
    fn render(&self, view: &PlotView<'_>, options: &PlotOptions) -> Result<()>;
}

impl Country {
    /// Draws this country.
    pub fn plot_country(&self, renderer: &dyn PathRenderer, options: &PlotOptions) -> Result<()> {
        let view = PlotView {
            country: self,
            path: None,
            path_time: 0.0,
        };
        renderer.render(&view, options)
    }

    /// Draws `path` over this country.
    ///
    /// Fails with [`RoutingError::Domain`](crate::error::RoutingError::Domain)
    /// if a stop is not part of this country.
    pub fn plot_path(
        &self,
        renderer: &dyn PathRenderer,
        path: &[&Location],
        options: &PlotOptions,
    ) -> Result<()> {
        let path_time = TourEvaluator::new(self).path_time(path)?;
        let view = PlotView {
            country: self,
            path: Some(path),
            path_time,
        };
        renderer.render(&view, options)
    }
}
