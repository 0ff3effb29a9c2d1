//! Rectangle path construction
//!
//! Corner radii are resolved the way SVG user agents of the era did:
//! a missing (or zero) radius borrows the other one, and each is clamped
//! to half of its side. Geometry is not otherwise validated; a radius that
//! eats a whole side leaves a zero-length edge in the output.

use crate::path::{Layout, PathData};
use crate::types::{nan_min, truthy};

/// A rectangle with its corner radii already resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rx: f64,
    pub ry: f64,
}

impl RoundedRect {
    /// Apply the defaulting and clamping rules to raw attribute values.
    ///
    /// Position falls back to 0 when absent, zero or NaN. Radii use
    /// `rx || ry || 0` (and the mirror for `ry`), then `min(r, side / 2)`
    /// with NaN winning the comparison.
    pub fn resolve(
        x: Option<f64>,
        y: Option<f64>,
        width: f64,
        height: f64,
        rx: Option<f64>,
        ry: Option<f64>,
    ) -> Self {
        let ax = rx.and_then(truthy);
        let ay = ry.and_then(truthy);
        Self {
            x: x.and_then(truthy).unwrap_or(0.0),
            y: y.and_then(truthy).unwrap_or(0.0),
            width,
            height,
            rx: nan_min(ax.or(ay).unwrap_or(0.0), width / 2.0),
            ry: nan_min(ay.or(ax).unwrap_or(0.0), height / 2.0),
        }
    }

    /// Whether the corners are square
    pub fn is_square_cornered(&self) -> bool {
        self.rx == 0.0 || self.ry == 0.0
    }

    /// The outline, starting at the top-left and walking clockwise
    pub fn to_path(&self) -> PathData {
        let Self {
            x,
            y,
            width,
            height,
            rx,
            ry,
        } = *self;

        if self.is_square_cornered() {
            return PathData::new()
                .m(x, y)
                .h_rel(width)
                .v_rel(height)
                .h_rel(-width)
                .z();
        }

        PathData::with_layout(Layout::Lines)
            .m(x, y + ry)
            .a_rel(rx, ry, 0.0, false, true, rx, -ry)
            .h_rel(width - rx - rx)
            .a_rel(rx, ry, 0.0, false, true, rx, ry)
            .v_rel(height - ry - ry)
            .a_rel(rx, ry, 0.0, false, true, -rx, ry)
            .h_rel(rx + rx - width)
            .a_rel(rx, ry, 0.0, false, true, -rx, -ry)
            .z()
    }
}

/// Path data for a rect element's attribute values
pub fn rect_path(
    x: Option<f64>,
    y: Option<f64>,
    width: f64,
    height: f64,
    rx: Option<f64>,
    ry: Option<f64>,
) -> PathData {
    RoundedRect::resolve(x, y, width, height, rx, ry).to_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Code;

    #[test]
    fn test_plain_square_at_origin() {
        let d = rect_path(None, None, 100.0, 100.0, None, None);
        insta::assert_snapshot!(d.to_string(), @"M0 0h100v100h-100z");
    }

    #[test]
    fn test_rounded_rect() {
        let d = rect_path(Some(110.0), Some(10.0), 80.0, 80.0, Some(15.0), None);
        assert_eq!(
            d.to_string(),
            [
                "M110 25",
                "a15 15 0 0 1 15 -15",
                "h50",
                "a15 15 0 0 1 15 15",
                "v50",
                "a15 15 0 0 1 -15 15",
                "h-50",
                "a15 15 0 0 1 -15 -15",
                "z",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_rounded_rect_command_counts() {
        let d = rect_path(Some(3.0), Some(4.0), 50.0, 20.0, Some(5.0), Some(2.0));
        let arcs = d.commands().iter().filter(|c| c.code == Code::ArcTo).count();
        // The closing command draws the fourth straight edge
        let edges: Vec<Code> = d
            .commands()
            .iter()
            .map(|c| c.code)
            .filter(|code| matches!(code, Code::HorizontalTo | Code::VerticalTo | Code::Close))
            .collect();
        assert_eq!(arcs, 4);
        assert_eq!(
            edges,
            vec![Code::HorizontalTo, Code::VerticalTo, Code::HorizontalTo, Code::Close]
        );
        assert!(d.is_closed());
    }

    #[test]
    fn test_ry_borrows_rx() {
        let r = RoundedRect::resolve(None, None, 80.0, 80.0, Some(15.0), None);
        assert_eq!((r.rx, r.ry), (15.0, 15.0));
        let r = RoundedRect::resolve(None, None, 80.0, 80.0, Some(0.0), Some(7.0));
        assert_eq!((r.rx, r.ry), (7.0, 7.0));
    }

    #[test]
    fn test_radii_clamped_to_half_side() {
        let r = RoundedRect::resolve(None, None, 20.0, 60.0, Some(50.0), None);
        assert_eq!((r.rx, r.ry), (10.0, 30.0));
    }

    #[test]
    fn test_full_clamp_leaves_zero_edges() {
        let d = rect_path(None, None, 20.0, 20.0, Some(10.0), None);
        let text = d.to_string();
        assert!(text.contains("\nh0\n"));
        assert!(text.contains("\nv0\n"));
    }

    #[test]
    fn test_nan_position_becomes_zero() {
        let d = rect_path(Some(f64::NAN), Some(0.0), 10.0, 5.0, None, None);
        assert_eq!(d.to_string(), "M0 0h10v5h-10z");
    }

    #[test]
    fn test_nan_width_propagates() {
        let d = rect_path(None, None, f64::NAN, 5.0, Some(1.0), None);
        assert!(d.to_string().starts_with("M0 1\naNaN 1 0 0 1 NaN -1\nhNaN"));
    }

    #[test]
    fn test_zero_width_prints_positive_zero() {
        let d = rect_path(None, None, 0.0, 0.0, None, None);
        assert_eq!(d.to_string(), "M0 0h0v0h0z");
    }
}
