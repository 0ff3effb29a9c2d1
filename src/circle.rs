//! Circle and ellipse approximation
//!
//! Every algorithm produces a closed outline of the axis-aligned ellipse
//! centered at `center` with radii `rx`/`ry`:
//!
//! - `TwoArcs`: two half-ellipse arcs from the leftmost point through the
//!   rightmost point and back. Exact.
//! - `CubicBezier`: one cubic per quadrant using [`KAPPA`], starting at the
//!   leftmost point.
//! - `QuadBezier`: `segments` quadratics starting at the rightmost point,
//!   each control point placed where the tangents at both ends meet.

use std::f64::consts::{PI, SQRT_2};

use crate::options::CircleAlgorithm;
use crate::path::{Layout, PathData};
use crate::types::{Point, pt};

/// Control point distance for a quarter circle drawn as one cubic, as a
/// fraction of the radius: 4(√2 − 1)/3
pub const KAPPA: f64 = (SQRT_2 - 1.0) / 3.0 * 4.0;

/// An axis-aligned ellipse; a circle when both radii match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
}

impl Ellipse {
    pub fn new(center: Point, rx: f64, ry: f64) -> Self {
        Self { center, rx, ry }
    }

    pub fn circle(center: Point, r: f64) -> Self {
        Self::new(center, r, r)
    }

    /// Outline this ellipse with the chosen algorithm
    pub fn to_path(&self, algorithm: CircleAlgorithm) -> PathData {
        match algorithm {
            CircleAlgorithm::TwoArcs => self.two_arcs(),
            CircleAlgorithm::CubicBezier => self.cubic_bezier(),
            CircleAlgorithm::QuadBezier { segments } => self.quad_bezier(segments),
        }
    }

    fn two_arcs(&self) -> PathData {
        let Self { center: c, rx, ry } = *self;
        PathData::with_layout(Layout::Spaced)
            .m(c.x - rx, c.y)
            .a(rx, ry, 0.0, true, false, c.x + rx, c.y)
            .a(rx, ry, 0.0, true, false, c.x - rx, c.y)
    }

    fn cubic_bezier(&self) -> PathData {
        let Self { center: c, rx, ry } = *self;
        let kx = KAPPA * rx;
        let ky = KAPPA * ry;
        PathData::with_layout(Layout::Spaced)
            .m(c.x - rx, c.y)
            // left → top
            .c(pt(c.x - rx, c.y - ky), pt(c.x - kx, c.y - ry), pt(c.x, c.y - ry))
            // top → right
            .c(pt(c.x + kx, c.y - ry), pt(c.x + rx, c.y - ky), pt(c.x + rx, c.y))
            // right → bottom
            .c(pt(c.x + rx, c.y + ky), pt(c.x + kx, c.y + ry), pt(c.x, c.y + ry))
            // bottom → left
            .c(pt(c.x - kx, c.y + ry), pt(c.x - rx, c.y + ky), pt(c.x - rx, c.y))
    }

    fn quad_bezier(&self, segments: u32) -> PathData {
        let Self { center: c, rx, ry } = *self;
        let step = 2.0 * PI / f64::from(segments);
        let reach = (step / 2.0).tan();

        let mut path = PathData::with_layout(Layout::Spaced).m(c.x + rx, c.y);
        for index in 1..=segments {
            let theta = f64::from(index) * step;
            // Anchor on the ellipse, relative to the center
            let ax = rx * theta.cos();
            let ay = ry * theta.sin();
            // Walk back along the tangent by tan(step/2) of a radius
            let cx = ax + rx * reach * (theta - PI / 2.0).cos();
            let cy = ay + ry * reach * (theta - PI / 2.0).sin();
            path = path.q(pt(cx + c.x, cy + c.y), pt(ax + c.x, ay + c.y));
        }
        path
    }
}

/// Approximate the ellipse at (`cx`, `cy`) with radii `rx`/`ry`
pub fn approximate(cx: f64, cy: f64, rx: f64, ry: f64, algorithm: CircleAlgorithm) -> PathData {
    Ellipse::new(pt(cx, cy), rx, ry).to_path(algorithm)
}
