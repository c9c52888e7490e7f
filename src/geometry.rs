use geo::{BoundingRect, Coord, LineString, Polygon as GeoPolygon, Rotate};

/// Scale factor used when interfacing with Clipper
pub const CLIPPER_SCALE: f64 = 10_000_000.0;

/// Single point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<Point> for Coord<f64> {
    fn from(p: Point) -> Self {
        Coord { x: p.x, y: p.y }
    }
}

impl From<Coord<f64>> for Point {
    fn from(c: Coord<f64>) -> Self {
        Point { x: c.x, y: c.y }
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(p: geo::Point<f64>) -> Self {
        Point { x: p.x(), y: p.y() }
    }
}

/// Axis-aligned bounding box. `(x, y)` is the min corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Same size, min corner moved to `origin`.
    pub fn moved_to(&self, origin: Point) -> Bounds {
        Bounds {
            x: origin.x,
            y: origin.y,
            ..*self
        }
    }
}

pub(crate) fn to_linestring(points: &[Point]) -> LineString<f64> {
    points.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>().into()
}

pub(crate) fn to_geo_polygon(points: &[Point]) -> GeoPolygon<f64> {
    GeoPolygon::new(to_linestring(points), vec![])
}

/// Calculate the rectangular bounds of a vertex list.
/// Returns `None` only for an empty list; a single point yields a zero-sized box.
pub fn get_polygon_bounds(points: &[Point]) -> Option<Bounds> {
    let rect = to_linestring(points).bounding_rect()?;
    Some(Bounds {
        x: rect.min().x,
        y: rect.min().y,
        width: rect.width(),
        height: rect.height(),
    })
}

/// Rotate vertices counter-clockwise by `angle_deg` degrees around `pivot`.
/// Vertex order is preserved.
pub fn rotate_polygon(points: &[Point], angle_deg: f64, pivot: Point) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }
    let ls = to_linestring(points);
    let rotated = ls.rotate_around_point(angle_deg, geo::Point::new(pivot.x, pivot.y));
    rotated.points().map(Point::from).collect()
}

/// Translate vertices by `(dx, dy)`.
pub fn translate_polygon(points: &[Point], dx: f64, dy: f64) -> Vec<Point> {
    points
        .iter()
        .map(|p| Point::new(p.x + dx, p.y + dy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn bounds_of_square() {
        let bounds = get_polygon_bounds(&unit_square()).unwrap();
        assert_eq!(bounds.width, 1.0);
        assert_eq!(bounds.height, 1.0);
        assert_eq!(bounds.center(), Point::new(0.5, 0.5));
    }

    #[test]
    fn rotate_preserves_bounds() {
        let rotated = rotate_polygon(&unit_square(), 90.0, Point::new(0.5, 0.5));
        let b = get_polygon_bounds(&rotated).unwrap();
        assert!((b.width - 1.0).abs() < 1e-9);
        assert!((b.height - 1.0).abs() < 1e-9);
        assert!(b.x.abs() < 1e-9 && b.y.abs() < 1e-9);
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        let pts = vec![Point::new(1.0, 0.0)];
        let rotated = rotate_polygon(&pts, 90.0, Point::ORIGIN);
        assert!(rotated[0].x.abs() < 1e-9);
        assert!((rotated[0].y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn single_point_has_zero_bounds() {
        let b = get_polygon_bounds(&[Point::new(3.0, 4.0)]).unwrap();
        assert_eq!(b.origin(), Point::new(3.0, 4.0));
        assert_eq!(b.width, 0.0);
        assert_eq!(b.height, 0.0);
    }

    #[test]
    fn empty_has_no_bounds() {
        assert!(get_polygon_bounds(&[]).is_none());
        assert!(rotate_polygon(&[], 45.0, Point::ORIGIN).is_empty());
    }
}
