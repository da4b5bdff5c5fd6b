use geo::Point;
use uom::si::f64::Length;

/// a traffic sampling point along a route and the distance it accounts for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteSegment {
    pub location: Point<f64>,
    pub distance: Length,
}
