//! Route planner: visiting order and total distance from the user's origin.
//!
//! Stops are sorted once by their distance to the fixed origin. The order is
//! not re-anchored at each visited stop, so this is not a nearest-neighbor
//! tour and makes no optimality claim.

use tracing::{debug, warn};

use crate::error::OriginError;
use crate::haversine::distance_km;
use crate::location::Position;
use crate::polyline::Polyline;
use crate::traits::{Located, OriginProvider};

/// Ordered stops plus total path length from the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan<L> {
    pub origin: Position,
    pub stops: Vec<L>,
    pub total_km: f64,
}

impl<L: Located> RoutePlan<L> {
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Route geometry: the origin followed by every stop.
    ///
    /// Empty when there are no stops, since there is nothing to draw.
    pub fn polyline(&self) -> Polyline {
        if self.stops.is_empty() {
            return Polyline::new(Vec::new());
        }
        std::iter::once(self.origin)
            .chain(self.stops.iter().map(Located::position))
            .collect()
    }

    /// Distance of each leg, the i-th entry ending at `stops[i]`.
    pub fn legs(&self) -> Vec<f64> {
        let mut previous = self.origin;
        self.stops
            .iter()
            .map(|stop| {
                let position = stop.position();
                let leg = distance_km(previous, position);
                previous = position;
                leg
            })
            .collect()
    }
}

/// Orders `locations` by ascending distance to `origin` and measures the path
/// `[origin, stops...]`.
///
/// Equidistant stops keep their input order.
pub fn plan_route<L: Located>(origin: Position, locations: Vec<L>) -> RoutePlan<L> {
    if locations.is_empty() {
        return RoutePlan {
            origin,
            stops: Vec::new(),
            total_km: 0.0,
        };
    }

    let mut keyed: Vec<(f64, L)> = locations
        .into_iter()
        .map(|location| (distance_km(origin, location.position()), location))
        .collect();
    // `sort_by` is stable.
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut total_km = 0.0;
    let mut previous = origin;
    let stops: Vec<L> = keyed
        .into_iter()
        .map(|(_, location)| {
            let position = location.position();
            total_km += distance_km(previous, position);
            previous = position;
            location
        })
        .collect();

    debug!(stops = stops.len(), total_km, "planned route");

    RoutePlan {
        origin,
        stops,
        total_km,
    }
}

/// Whether an origin is known yet.
#[derive(Debug, Clone, PartialEq)]
pub enum OriginState {
    /// No origin yet. `last_error` is set once acquisition has failed.
    AwaitingOrigin { last_error: Option<OriginError> },
    Ready(Position),
}

/// What the planner can show for a set of locations.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteView<L> {
    /// No origin: locations in their input order, no distance.
    Unsorted(Vec<L>),
    Planned(RoutePlan<L>),
}

impl<L> RouteView<L> {
    pub fn stops(&self) -> &[L] {
        match self {
            RouteView::Unsorted(locations) => locations,
            RouteView::Planned(plan) => &plan.stops,
        }
    }

    pub fn total_km(&self) -> Option<f64> {
        match self {
            RouteView::Unsorted(_) => None,
            RouteView::Planned(plan) => Some(plan.total_km),
        }
    }
}

/// Holds the origin state for one route-planning session.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlanner {
    state: OriginState,
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutePlanner {
    pub fn new() -> Self {
        Self {
            state: OriginState::AwaitingOrigin { last_error: None },
        }
    }

    pub fn with_origin(origin: Position) -> Self {
        Self {
            state: OriginState::Ready(origin),
        }
    }

    pub fn state(&self) -> &OriginState {
        &self.state
    }

    pub fn origin(&self) -> Option<Position> {
        match self.state {
            OriginState::Ready(origin) => Some(origin),
            OriginState::AwaitingOrigin { .. } => None,
        }
    }

    /// Applies the outcome of the one-shot origin request.
    ///
    /// Once `Ready`, later results are ignored. A failure, or a position
    /// outside valid ranges, keeps the planner awaiting with the error
    /// recorded.
    pub fn resolve_origin(&mut self, result: Result<Position, OriginError>) -> &OriginState {
        if let OriginState::Ready(_) = self.state {
            debug!("origin already resolved, ignoring result");
            return &self.state;
        }

        let result = result.and_then(|origin| {
            origin.validate()?;
            Ok(origin)
        });

        self.state = match result {
            Ok(origin) => OriginState::Ready(origin),
            Err(err) => {
                warn!(error = %err, "origin unavailable, route stays unsorted");
                OriginState::AwaitingOrigin {
                    last_error: Some(err),
                }
            }
        };
        &self.state
    }

    /// Asks `provider` once and applies the answer.
    pub fn acquire_origin<P: OriginProvider + ?Sized>(&mut self, provider: &P) -> &OriginState {
        if let OriginState::Ready(_) = self.state {
            return &self.state;
        }
        let result = provider.current_position();
        self.resolve_origin(result)
    }

    pub fn plan<L: Located>(&self, locations: Vec<L>) -> RouteView<L> {
        match self.state {
            OriginState::Ready(origin) => RouteView::Planned(plan_route(origin, locations)),
            OriginState::AwaitingOrigin { .. } => RouteView::Unsorted(locations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haversine::path_length_km;
    use crate::origin::FixedOrigin;

    const ORIGIN: Position = Position::new(0.0, 0.0);

    /// Roughly `km` north of the equator origin.
    fn north(km: f64) -> Position {
        Position::new((km / crate::haversine::EARTH_RADIUS_KM).to_degrees(), 0.0)
    }

    #[test]
    fn test_empty_plan() {
        let plan = plan_route::<Position>(ORIGIN, Vec::new());
        assert!(plan.is_empty());
        assert_eq!(plan.total_km, 0.0);
        assert!(plan.polyline().points().is_empty());
        assert!(plan.legs().is_empty());
    }

    #[test]
    fn test_sorts_by_distance_to_origin() {
        let a = north(5.0);
        let b = north(1.0);
        let c = north(3.0);

        let plan = plan_route(ORIGIN, vec![a, b, c]);

        assert_eq!(plan.stops, vec![b, c, a]);
        let expected = distance_km(ORIGIN, b) + distance_km(b, c) + distance_km(c, a);
        assert!((plan.total_km - expected).abs() < 1e-9);
    }

    #[test]
    fn test_does_not_reanchor_on_last_stop() {
        // B is nearest the origin; D is next closest to the origin but far from B.
        // A re-anchoring tour would go B -> C; the fixed-origin sort goes B -> D.
        let b = Position::new(0.0, 0.01);
        let c = Position::new(0.0, 0.03);
        let d = Position::new(0.0, -0.02);

        let plan = plan_route(ORIGIN, vec![c, d, b]);
        assert_eq!(plan.stops, vec![b, d, c]);
    }

    #[test]
    fn test_polyline_and_legs() {
        let a = north(2.0);
        let b = north(4.0);
        let plan = plan_route(ORIGIN, vec![b, a]);

        let polyline = plan.polyline();
        assert_eq!(polyline.points(), &[ORIGIN, a, b]);
        assert!((polyline.length_km() - plan.total_km).abs() < 1e-9);

        let legs = plan.legs();
        assert_eq!(legs.len(), 2);
        assert!((legs.iter().sum::<f64>() - path_length_km(polyline.points())).abs() < 1e-9);
    }

    #[test]
    fn test_awaiting_origin_keeps_input_order() {
        let planner = RoutePlanner::new();
        let input = vec![north(5.0), north(1.0)];

        let view = planner.plan(input.clone());
        assert_eq!(view, RouteView::Unsorted(input));
        assert_eq!(view.total_km(), None);
    }

    #[test]
    fn test_failed_acquisition_records_error() {
        let mut planner = RoutePlanner::new();
        let state = planner.acquire_origin(&FixedOrigin::failing(OriginError::Denied));
        assert_eq!(
            state,
            &OriginState::AwaitingOrigin {
                last_error: Some(OriginError::Denied)
            }
        );
        assert_eq!(planner.origin(), None);
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let mut planner = RoutePlanner::new();
        planner.resolve_origin(Ok(Position::new(120.0, 0.0)));
        assert!(matches!(
            planner.state(),
            OriginState::AwaitingOrigin {
                last_error: Some(OriginError::Invalid(_))
            }
        ));
    }

    #[test]
    fn test_ready_ignores_later_results() {
        let mut planner = RoutePlanner::new();
        planner.acquire_origin(&FixedOrigin::at(ORIGIN));
        planner.resolve_origin(Err(OriginError::Unavailable("timeout".to_string())));
        planner.acquire_origin(&FixedOrigin::at((10.0, 10.0)));

        assert_eq!(planner.state(), &OriginState::Ready(ORIGIN));
        let view = planner.plan(vec![north(3.0), north(1.0)]);
        assert_eq!(view.stops(), &[north(1.0), north(3.0)]);
        assert!(view.total_km().is_some());
    }
}
