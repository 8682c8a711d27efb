//! SVG diagrams drawn with plotters.

use std::f64::consts::PI;
use std::fmt::Display;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{PathRenderer, PlotOptions, PlotView};
use crate::error::{Result, RoutingError};
use crate::models::Location;

/// Marker colours cycled over regions, in region-name order.
const REGION_COLOURS: [RGBColor; 8] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(23, 190, 207),
];
const GRID: RGBColor = RGBColor(210, 210, 210);
const PATH: RGBColor = RGBColor(90, 90, 90);
const GRID_RINGS: usize = 4;
const RING_SEGMENTS: usize = 96;

/// Draws a country (and optionally a path) as an SVG scale diagram.
///
/// Locations are placed at their true positions inside a square frame
/// that fits every location and path stop. With a polar projection the
/// background shows range rings and bearing spokes around the origin,
/// otherwise plain x/y axes. The diagram is written to
/// [`PlotOptions::save_to`] when set, and logged otherwise.
///
/// # Examples
///
/// ```
/// use polar_routing::models::{Country, Location};
/// use polar_routing::render::{PlotOptions, PlotView, SvgRenderer};
///
/// let country = Country::new(vec![
///     Location::new("Hub", "Core", 0.0, 0.0, true).unwrap(),
///     Location::new("Farm", "Rim", 2.0, 0.0, false).unwrap(),
/// ])
/// .unwrap();
/// let view = PlotView { country: &country, path: None, path_time: 0.0 };
///
/// let svg = SvgRenderer::default().svg(&view, &PlotOptions::default()).unwrap();
/// assert!(svg.contains("HUB"));
/// assert!(svg.contains("Farm"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgRenderer {
    width: u32,
    height: u32,
}

impl SvgRenderer {
    /// Creates a renderer producing `width` x `height` pixel diagrams.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Draws `view` and returns the SVG document.
    pub fn svg(&self, view: &PlotView<'_>, options: &PlotOptions) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height))
                .into_drawing_area();
            root.fill(&WHITE).map_err(drawing_error)?;

            let extent = extent(view);
            let mut chart = ChartBuilder::on(&root)
                .margin(24)
                .build_cartesian_2d(-extent..extent, -extent..extent)
                .map_err(drawing_error)?;

            if options.polar_projection {
                for ring in 1..=GRID_RINGS {
                    let radius = extent * ring as f64 / GRID_RINGS as f64;
                    let points = (0..=RING_SEGMENTS).map(|i| {
                        let angle = 2.0 * PI * i as f64 / RING_SEGMENTS as f64;
                        (radius * angle.cos(), radius * angle.sin())
                    });
                    chart
                        .draw_series(std::iter::once(PathElement::new(
                            points.collect::<Vec<_>>(),
                            GRID,
                        )))
                        .map_err(drawing_error)?;
                }
                chart
                    .draw_series((0..8).map(|i| {
                        let angle = PI * i as f64 / 4.0;
                        PathElement::new(
                            vec![(0.0, 0.0), (extent * angle.cos(), extent * angle.sin())],
                            GRID,
                        )
                    }))
                    .map_err(drawing_error)?;
            } else {
                chart
                    .draw_series([
                        PathElement::new(vec![(-extent, 0.0), (extent, 0.0)], GRID),
                        PathElement::new(vec![(0.0, -extent), (0.0, extent)], GRID),
                    ])
                    .map_err(drawing_error)?;
            }

            if let Some(path) = view.path {
                chart
                    .draw_series(std::iter::once(PathElement::new(
                        path_points(path),
                        PATH.stroke_width(2),
                    )))
                    .map_err(drawing_error)?;
                let summary = format!("{} stops, {:.4} h", path.len(), view.path_time);
                chart
                    .draw_series(std::iter::once(Text::new(
                        summary,
                        (-extent, extent),
                        ("sans-serif", 14)
                            .into_font()
                            .color(&BLACK)
                            .pos(Pos::new(HPos::Left, VPos::Top)),
                    )))
                    .map_err(drawing_error)?;
            }

            let regions: Vec<&str> = view.country.regions().collect();
            for location in view.country.locations() {
                let colour = if options.distinguish_regions {
                    let tag = regions
                        .iter()
                        .position(|r| *r == location.region())
                        .unwrap_or_default();
                    REGION_COLOURS[tag % REGION_COLOURS.len()]
                } else {
                    REGION_COLOURS[0]
                };
                let point = location.cartesian();
                let depot_marker = options.distinguish_depots && location.is_depot();

                if depot_marker {
                    chart
                        .draw_series(std::iter::once(Cross::new(
                            point,
                            6,
                            colour.stroke_width(2),
                        )))
                        .map_err(drawing_error)?;
                } else {
                    chart
                        .draw_series(std::iter::once(Circle::new(point, 4, colour.filled())))
                        .map_err(drawing_error)?;
                }

                if options.location_names {
                    // depot labels sit under their marker, settlement labels above
                    let (text, v_pos) = if depot_marker {
                        (location.name().to_uppercase(), VPos::Top)
                    } else {
                        (location.name().to_string(), VPos::Bottom)
                    };
                    chart
                        .draw_series(std::iter::once(Text::new(
                            text,
                            point,
                            ("sans-serif", 12)
                                .into_font()
                                .color(&BLACK)
                                .pos(Pos::new(HPos::Center, v_pos)),
                        )))
                        .map_err(drawing_error)?;
                }
            }

            root.present().map_err(drawing_error)?;
        }
        Ok(svg)
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(800, 800)
    }
}

impl PathRenderer for SvgRenderer {
    fn render(&self, view: &PlotView<'_>, options: &PlotOptions) -> Result<()> {
        let svg = self.svg(view, options)?;
        match &options.save_to {
            Some(target) => std::fs::write(target, svg).map_err(|e| RoutingError::Render {
                target: target.display().to_string(),
                message: e.to_string(),
            }),
            None => {
                tracing::info!(
                    locations = view.country.len(),
                    stops = view.path.map_or(0, <[_]>::len),
                    bytes = svg.len(),
                    "rendered country diagram"
                );
                tracing::debug!("\n{svg}");
                Ok(())
            }
        }
    }
}

/// Cartesian positions of `path`, taken from the stops themselves.
fn path_points(path: &[&Location]) -> Vec<(f64, f64)> {
    path.iter().map(|stop| stop.cartesian()).collect()
}

/// Half-width of the square frame: the largest radius among locations
/// and path stops, plus a margin.
fn extent(view: &PlotView<'_>) -> f64 {
    let locations = view.country.locations().iter();
    let stops = view.path.into_iter().flatten().copied();
    let furthest = locations.chain(stops).map(Location::r).fold(0.0, f64::max);
    if furthest > 0.0 {
        furthest * 1.1
    } else {
        1.0
    }
}

fn drawing_error(error: impl Display) -> RoutingError {
    RoutingError::Render {
        target: "svg".into(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Country;

    fn sample() -> Country {
        Country::new(vec![
            Location::new("Hub", "Core", 0.0, 0.0, true).expect("valid"),
            Location::new("Farm", "Rim", 2.0, PI / 2.0, false).expect("valid"),
            Location::new("Mine", "Rim", 3.0, 0.0, false).expect("valid"),
        ])
        .expect("valid")
    }

    fn view(country: &Country) -> PlotView<'_> {
        PlotView {
            country,
            path: None,
            path_time: 0.0,
        }
    }

    #[test]
    fn test_default_diagram_labels() {
        let c = sample();
        let svg = SvgRenderer::default()
            .svg(&view(&c), &PlotOptions::default())
            .expect("renders");
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("HUB"));
        assert!(svg.contains("Farm"));
        assert!(svg.contains("Mine"));
        assert!(!svg.contains("stops,"));
    }

    #[test]
    fn test_toggles() {
        let c = sample();
        let options = PlotOptions::default()
            .with_distinguish_depots(false)
            .with_location_names(false)
            .with_polar_projection(false);
        let svg = SvgRenderer::default().svg(&view(&c), &options).expect("renders");
        assert!(!svg.contains("HUB"));
        assert!(!svg.contains("Hub"));
        assert!(!svg.contains("Farm"));

        let plain_depots = PlotOptions::default().with_distinguish_depots(false);
        let svg = SvgRenderer::default()
            .svg(&view(&c), &plain_depots)
            .expect("renders");
        assert!(svg.contains("Hub"));
        assert!(!svg.contains("HUB"));
    }

    #[test]
    fn test_polar_grid_adds_elements() {
        let c = sample();
        let polar = SvgRenderer::default()
            .svg(&view(&c), &PlotOptions::default())
            .expect("renders");
        let flat = SvgRenderer::default()
            .svg(&view(&c), &PlotOptions::default().with_polar_projection(false))
            .expect("renders");
        assert!(polar.len() > flat.len());
    }

    #[test]
    fn test_path_summary() {
        let c = sample();
        let path: Vec<&Location> = vec![&c.locations()[0], &c.locations()[2]];
        let v = PlotView {
            country: &c,
            path: Some(path.as_slice()),
            path_time: 0.25,
        };
        let svg = SvgRenderer::default()
            .svg(&v, &PlotOptions::default())
            .expect("renders");
        assert!(svg.contains("2 stops, 0.2500 h"));
    }

    #[test]
    fn test_path_points_use_stop_positions() {
        let c = sample();
        let stranger = Location::new("Stranger", "Elsewhere", 5.0, PI, false).expect("valid");
        let path: Vec<&Location> = vec![&c.locations()[0], &stranger];
        let points = path_points(&path);
        assert_eq!(points[0], (0.0, 0.0));
        assert!((points[1].0 + 5.0).abs() < 1e-10);
        assert!(points[1].1.abs() < 1e-10);

        let v = PlotView {
            country: &c,
            path: Some(path.as_slice()),
            path_time: 0.0,
        };
        assert!((extent(&v) - 5.5).abs() < 1e-10);
        let svg = SvgRenderer::default()
            .svg(&v, &PlotOptions::default())
            .expect("renders");
        assert!(!svg.contains("Stranger"));
        assert!(!svg.contains("#0"));
    }

    #[test]
    fn test_extent_of_origin_only_country() {
        let c = Country::new(vec![
            Location::new("Hub", "Core", 0.0, 0.0, true).expect("valid"),
        ])
        .expect("valid");
        assert_eq!(extent(&view(&c)), 1.0);
    }

    #[test]
    fn test_save_to_unwritable_target() {
        let c = sample();
        let options = PlotOptions::default().with_save_to("/nonexistent-dir/diagram.svg");
        let result = SvgRenderer::default().render(&view(&c), &options);
        assert!(matches!(result, Err(RoutingError::Render { .. })));
    }

    #[test]
    fn test_save_to_file() {
        let c = sample();
        let target = std::env::temp_dir().join(format!(
            "polar-routing-diagram-{}.svg",
            std::process::id()
        ));
        let options = PlotOptions::default().with_save_to(&target);
        SvgRenderer::default()
            .render(&view(&c), &options)
            .expect("writable");
        let written = std::fs::read_to_string(&target).expect("exists");
        let _ = std::fs::remove_file(&target);
        assert!(written.contains("<svg"));
        assert!(written.contains("Mine"));
    }
}
