use crate::error::{NestError, Result};
use crate::geometry::{Bounds, Point, get_polygon_bounds, rotate_polygon, translate_polygon};

/// Full turn, in degrees. The optimizer reports angles with a mirrored
/// vertical axis, so the rotation applied on the drawing surface is
/// `FULL_TURN - rotation`.
pub const FULL_TURN: f64 = 360.0;

/// Place a piece's original vertices where the optimizer put it.
///
/// The vertices are rotated about the center of `original_bounds` by
/// `360 - rotation_deg` and then translated so that the min corner of the
/// rotated shape lands on `final_bounds`' origin. The result is always derived
/// from the original geometry; vertex order and winding are kept.
pub fn compute_final_vertices(
    original: &[Point],
    original_bounds: &Bounds,
    rotation_deg: f64,
    final_bounds: &Bounds,
) -> Result<Vec<Point>> {
    if original.is_empty() {
        return Err(NestError::InvalidInput(
            "cannot place a piece without vertices".to_string(),
        ));
    }
    let pivot = original_bounds.center();
    let rotated = rotate_polygon(original, FULL_TURN - rotation_deg, pivot);
    let rotated_bounds = get_polygon_bounds(&rotated)
        .ok_or_else(|| NestError::InvalidInput("rotation produced no vertices".to_string()))?;
    let dx = final_bounds.x - rotated_bounds.x;
    let dy = final_bounds.y - rotated_bounds.y;
    Ok(translate_polygon(&rotated, dx, dy))
}
