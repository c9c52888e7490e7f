use geo::{Area, BoundingRect, Closest, ClosestPoint, InteriorPoint};
use geo_clipper::{Clipper, EndType, JoinType};
use geo_types::{MultiPolygon, Polygon as GeoPolygon};
use log::debug;

use crate::error::{NestError, Result};
use crate::geometry::{CLIPPER_SCALE, Point, to_geo_polygon};

/// Arc tolerance for rounded offset joins, in world units.
const ARC_TOLERANCE: f64 = 0.25;

/// Largest coordinate magnitude that survives the integer conversion done by Clipper.
const MAX_COORDINATE: f64 = i64::MAX as f64 / CLIPPER_SCALE;

/// A point deep inside a polygon and the diameter of the circle centered
/// there that stays inside the polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InlandPoint {
    pub point: Point,
    pub diameter: f64,
}

impl InlandPoint {
    /// Answer for empty or zero-area polygons.
    pub const FALLBACK: InlandPoint = InlandPoint {
        point: Point::ORIGIN,
        diameter: 0.0,
    };
}

/// Approximate the most inland point of `polygon` by repeated erosion.
///
/// The polygon is eroded by `step`, `2 * step`, ... up to half the larger side
/// of its bounding box. Each erosion starts from the (repaired) input, keeps
/// only its largest component, and the last non-empty one wins. The returned
/// point is an interior point of that component, and the diameter is twice its
/// distance to the input's boundary. The error is bounded by `step`.
///
/// Empty, collinear or otherwise zero-area input yields [`InlandPoint::FALLBACK`],
/// as do non-finite coordinates and coordinates too large for Clipper.
/// A non-positive or non-finite `step` is rejected.
pub fn most_inland_point(polygon: &[Point], step: f64) -> Result<InlandPoint> {
    if !step.is_finite() || step <= 0.0 {
        return Err(NestError::InvalidInput(format!(
            "erosion step must be a positive number, got {step}"
        )));
    }
    if !polygon.iter().all(|p| in_clipper_range(p.x) && in_clipper_range(p.y)) {
        debug!("polygon has coordinates out of range, no inland point");
        return Ok(InlandPoint::FALLBACK);
    }
    let Some(region) = repair(polygon) else {
        return Ok(InlandPoint::FALLBACK);
    };
    let Some(bounds) = region.bounding_rect() else {
        return Ok(InlandPoint::FALLBACK);
    };
    let max_radius = bounds.width().max(bounds.height()) / 2.0;

    let mut deepest = largest_component(region.clone());
    // Terminates after ceil(max_radius / step) erosions at most.
    let erosions = (max_radius / step).ceil() as usize;
    for k in 1..=erosions {
        let radius = k as f64 * step;
        let eroded = region.offset(
            -radius,
            JoinType::Round(ARC_TOLERANCE * CLIPPER_SCALE),
            EndType::ClosedPolygon,
            CLIPPER_SCALE,
        );
        match largest_component(eroded) {
            Some(component) => deepest = Some(component),
            None => break,
        }
    }

    let inland = deepest
        .and_then(|component| component.interior_point())
        .or_else(|| region.interior_point());
    let Some(inland) = inland else {
        return Ok(InlandPoint::FALLBACK);
    };
    let point = Point::from(inland);
    let radius = distance_to_boundary(&region, point);
    Ok(InlandPoint {
        point,
        diameter: 2.0 * radius,
    })
}

fn in_clipper_range(v: f64) -> bool {
    v.is_finite() && v.abs() < MAX_COORDINATE
}

/// Normalize a ring into valid polygons. A union with nothing resolves
/// self-intersections and leaves valid rings untouched.
fn repair(polygon: &[Point]) -> Option<MultiPolygon<f64>> {
    if polygon.len() < 3 {
        return None;
    }
    let ring = to_geo_polygon(polygon);
    let repaired = ring.union(&MultiPolygon::<f64>::new(Vec::new()), CLIPPER_SCALE);
    if repaired.0.is_empty() || repaired.unsigned_area() <= 0.0 {
        return None;
    }
    Some(repaired)
}

fn largest_component(shape: MultiPolygon<f64>) -> Option<GeoPolygon<f64>> {
    shape
        .0
        .into_iter()
        .map(|p| (p.unsigned_area(), p))
        .filter(|(area, _)| *area > 0.0)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, p)| p)
}

fn distance_to_boundary(region: &MultiPolygon<f64>, point: Point) -> f64 {
    let target = geo_types::Point::new(point.x, point.y);
    let nearest = region
        .0
        .iter()
        .flat_map(|poly| std::iter::once(poly.exterior()).chain(poly.interiors()))
        .filter_map(|ring| match ring.closest_point(&target) {
            Closest::Intersection(p) | Closest::SinglePoint(p) => {
                Some(point.distance(&Point::from(p)))
            }
            Closest::Indeterminate => None,
        })
        .fold(f64::INFINITY, f64::min);
    if nearest.is_finite() { nearest } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Contains;

    fn square(size: f64) -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(size, 0.0),
            Point::new(size, size),
            Point::new(0.0, size),
        ]
    }

    fn circle(radius: f64, segments: usize) -> Vec<Point> {
        (0..segments)
            .map(|i| {
                let theta = i as f64 * std::f64::consts::TAU / segments as f64;
                Point::new(50.0 + radius * theta.cos(), 20.0 + radius * theta.sin())
            })
            .collect()
    }

    fn l_shape() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(20.0, 5.0),
            Point::new(5.0, 5.0),
            Point::new(5.0, 20.0),
            Point::new(0.0, 20.0),
        ]
    }

    #[test]
    fn square_center() {
        let found = most_inland_point(&square(10.0), 0.1).unwrap();
        assert!((found.point.x - 5.0).abs() < 0.2);
        assert!((found.point.y - 5.0).abs() < 0.2);
        assert!((found.diameter - 10.0).abs() < 0.4);
    }

    #[test]
    fn circle_converges_with_smaller_step() {
        let ring = circle(10.0, 128);
        let coarse = most_inland_point(&ring, 1.0).unwrap();
        let fine = most_inland_point(&ring, 0.05).unwrap();
        assert!((coarse.diameter - 20.0).abs() < 2.5);
        assert!((fine.diameter - 20.0).abs() < 0.2);
        assert!((fine.point.x - 50.0).abs() < 0.1);
        assert!((fine.point.y - 20.0).abs() < 0.1);
    }

    #[test]
    fn concave_point_stays_inside() {
        let shape = l_shape();
        let found = most_inland_point(&shape, 0.25).unwrap();
        let poly = to_geo_polygon(&shape);
        assert!(poly.contains(&geo::Point::new(found.point.x, found.point.y)));
        // The best circle sits in the corner square, wider than an arm.
        assert!(found.diameter > 4.5, "diameter {}", found.diameter);
        assert!(found.diameter < 6.5, "diameter {}", found.diameter);
    }

    #[test]
    fn clockwise_ring_is_accepted() {
        let mut ring = square(4.0);
        ring.reverse();
        let found = most_inland_point(&ring, 0.1).unwrap();
        assert!((found.diameter - 4.0).abs() < 0.3);
    }

    #[test]
    fn self_intersecting_ring_is_repaired() {
        let bow_tie = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ];
        let found = most_inland_point(&bow_tie, 0.1).unwrap();
        assert!(found.diameter > 0.0);
        assert!(found.diameter.is_finite());
        assert!(found.point.x >= 0.0 && found.point.x <= 10.0);
    }

    #[test]
    fn degenerate_input_falls_back() {
        assert_eq!(most_inland_point(&[], 1.0).unwrap(), InlandPoint::FALLBACK);
        let line = vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
        ];
        assert_eq!(most_inland_point(&line, 1.0).unwrap(), InlandPoint::FALLBACK);
    }

    #[test]
    fn step_larger_than_shape_still_answers() {
        let found = most_inland_point(&square(2.0), 50.0).unwrap();
        assert!(found.diameter > 0.0);
        assert!(found.diameter <= 2.0 + 1e-6);
    }

    #[test]
    fn unrepresentable_coordinates_fall_back() {
        let mut ring = square(40.0);
        ring[1].x = f64::INFINITY;
        assert_eq!(most_inland_point(&ring, 1.0).unwrap(), InlandPoint::FALLBACK);
        ring[1].x = f64::NAN;
        assert_eq!(most_inland_point(&ring, 1.0).unwrap(), InlandPoint::FALLBACK);
        let huge = square(1e13);
        assert_eq!(most_inland_point(&huge, 1e12).unwrap(), InlandPoint::FALLBACK);
    }

    #[test]
    fn rejects_bad_step() {
        assert!(matches!(
            most_inland_point(&square(1.0), 0.0),
            Err(NestError::InvalidInput(_))
        ));
        assert!(most_inland_point(&square(1.0), f64::NAN).is_err());
    }
}
