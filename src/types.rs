//! Numeric primitives shared by the converters.
//!
//! Geometry works on raw `f64` so that NaN coming out of a bad attribute
//! flows through unchanged; `Num` is the only place numbers become text.

use std::fmt;

use glam::DVec2;

/// A point in user space (SVG y-down coordinates)
pub type Point = DVec2;

/// Shorthand constructor for a [`Point`]
#[inline]
pub fn pt(x: f64, y: f64) -> Point {
    DVec2::new(x, y)
}

/// A number as it appears in path data.
///
/// Rendering follows the JavaScript number-to-string rules so converted
/// documents stay byte-compatible with other shape-to-path tools:
/// - shortest round-trip digits, ties broken the way V8 does
/// - `-0` prints as `0`
/// - `NaN`, `Infinity` and `-Infinity` print by name
/// - magnitudes outside `[1e-6, 1e21)` use exponent form (`1e+21`, `1.5e-7`)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Num(pub f64);

impl Num {
    /// Arc flags are stored as numbers so they render as `0`/`1`
    #[inline]
    pub fn flag(set: bool) -> Num {
        Num(if set { 1.0 } else { 0.0 })
    }
}

impl From<f64> for Num {
    fn from(value: f64) -> Self {
        Num(value)
    }
}

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if value == 0.0 {
            return f.write_str("0");
        }

        // Rust's own shortest-digit output breaks ties differently from V8
        let mut buf = ryu_js::Buffer::new();
        f.write_str(buf.format_finite(value))
    }
}

/// JavaScript `Math.min`: NaN in either operand wins.
///
/// `f64::min` would return the non-NaN operand instead.
#[inline]
pub fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

/// JavaScript truthiness for numbers: zero and NaN count as "not given"
#[inline]
pub fn truthy(value: f64) -> Option<f64> {
    (value != 0.0 && !value.is_nan()).then_some(value)
}
