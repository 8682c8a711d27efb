//! Best site for an additional depot.
//!
//! # Algorithm
//!
//! Each settlement in turn is treated as a depot for one evaluation, and a
//! nearest-neighbor tour is built from it through the remaining settlements.
//! The settlement whose tour has the smallest total time wins; ties go to
//! the settlement inserted first. Role overrides are scoped to a single
//! evaluation, so the country's stored depot flags never change.
//!
//! # Complexity
//!
//! O(S³) where S = number of settlements (one O(S²) tour per candidate).

use super::nearest_neighbor::DepotRoles;
use crate::error::{Result, RoutingError};
use crate::models::{Country, Location, Tour};
use crate::render::{PathRenderer, PlotOptions, SvgRenderer};

/// Outcome of a depot-site search: the winning settlement and the tour
/// that scored it.
#[derive(Debug, Clone)]
pub struct DepotSite<'a> {
    tour: Tour<'a>,
}

impl<'a> DepotSite<'a> {
    /// The winning settlement.
    pub fn site(&self) -> &'a Location {
        self.tour.start()
    }

    /// Tour from the site through every other settlement.
    pub fn tour(&self) -> &Tour<'a> {
        &self.tour
    }

    /// Total time of the winning tour.
    pub fn total_time(&self) -> f64 {
        self.tour.total_time()
    }
}

impl Country {
    /// Finds the settlement that makes the best additional depot.
    ///
    /// With `display` set, the winning tour is drawn by a default [`SvgRenderer`]
    /// with default [`PlotOptions`]; drawing never changes the result.
    ///
    /// Fails with [`RoutingError::InvalidArgument`] if there are no
    /// settlements.
    ///
    /// # Examples
    ///
    /// ```
    /// use polar_routing::models::{Country, Location};
    ///
    /// let country = Country::new(vec![
    ///     Location::new("Depot", "A", 50.0, 0.0, true).unwrap(),
    ///     Location::new("Edge", "A", 10.0, 3.0, false).unwrap(),
    ///     Location::new("Middle", "A", 1.0, 0.0, false).unwrap(),
    ///     Location::new("Far", "B", 10.0, 1.0, false).unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// let site = country.best_depot_site(false).unwrap();
    /// assert!(site.is_settlement());
    ///
    /// let search = country.best_depot_site_with(None).unwrap();
    /// assert_eq!(search.site(), site);
    /// assert_eq!(search.tour().num_settlements(), 2);
    /// ```
    pub fn best_depot_site(&self, display: bool) -> Result<&Location> {
        let renderer = SvgRenderer::default();
        let renderer = display.then_some(&renderer as &dyn PathRenderer);
        Ok(self.best_depot_site_with(renderer)?.site())
    }

    /// Finds the best additional depot site and returns it with its tour.
    ///
    /// When `renderer` is given it draws the winning tour. A rendering
    /// failure is logged and does not affect the result.
    pub fn best_depot_site_with(
        &self,
        renderer: Option<&dyn PathRenderer>,
    ) -> Result<DepotSite<'_>> {
        let mut best: Option<Tour<'_>> = None;
        for (index, candidate) in self.locations().iter().enumerate() {
            if candidate.is_depot() {
                continue;
            }
            let tour = self.build_tour(index, DepotRoles::promoting(index));
            tracing::trace!(
                candidate = candidate.name(),
                total_time = tour.total_time(),
                "evaluated depot site"
            );
            if best
                .as_ref()
                .map_or(true, |b| tour.total_time() < b.total_time())
            {
                best = Some(tour);
            }
        }

        let tour = best.ok_or_else(|| {
            RoutingError::InvalidArgument("no settlements to site a depot at".into())
        })?;
        let site = DepotSite { tour };
        tracing::debug!(
            site = site.site().name(),
            total_time = site.total_time(),
            "selected depot site"
        );

        if let Some(renderer) = renderer {
            if let Err(error) =
                self.plot_path(renderer, site.tour().stops(), &PlotOptions::default())
            {
                tracing::warn!(%error, "failed to draw depot site tour");
            }
        }
        Ok(site)
    }
}
