//! Straight-segment shapes: line, polyline and polygon

use crate::path::{Code, PathCommand, PathData};
use crate::types::Point;

/// `M` to the first point, `L` to the second
pub fn line_path(from: Point, to: Point) -> PathData {
    PathData::new().m(from.x, from.y).l(to.x, to.y)
}

/// Path through a flat coordinate list, closed for polygons.
///
/// The first pair becomes the move-to and every remaining coordinate goes
/// into a single multi-point line command. An odd or short list is passed
/// through as-is, leaving a partial operand group.
pub fn poly_path(coords: &[f64], closed: bool) -> PathData {
    let split = coords.len().min(2);
    let (head, tail) = coords.split_at(split);

    let path = PathData::new()
        .push(PathCommand::new(Code::MoveTo, false, head.to_vec()))
        .l_many(tail);

    if closed { path.z() } else { path }
}
