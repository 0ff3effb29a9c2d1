//! Shape descriptors
//!
//! Each shape kind is its own type that knows how to:
//! - Read its geometry from a document node
//! - Produce its path data
//!
//! [`ShapeDescriptor`] dispatches over them with `enum_dispatch`.

use enum_dispatch::enum_dispatch;

use crate::circle::Ellipse;
use crate::dom::DocumentNode;
use crate::errors::{AttributeSource, ConvertError};
use crate::linear::{line_path, poly_path};
use crate::options::{AttributeCleanup, Options};
use crate::parse;
use crate::path::PathData;
use crate::rect::rect_path;
use crate::types::{Point, pt};

/// The element kinds that get converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rect,
    Circle,
    Ellipse,
    Line,
    Polyline,
    Polygon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Rect,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Line,
        ShapeKind::Polyline,
        ShapeKind::Polygon,
    ];

    /// Classify an element name, ignoring ASCII case
    pub fn from_tag_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Line => "line",
            ShapeKind::Polyline => "polyline",
            ShapeKind::Polygon => "polygon",
        }
    }

    /// Attributes removed from the replacement path
    pub fn stripped_attributes(self, cleanup: AttributeCleanup) -> &'static [&'static str] {
        match (self, cleanup) {
            (ShapeKind::Rect, AttributeCleanup::Compatible) => &["cx", "cy", "r"],
            (ShapeKind::Rect, AttributeCleanup::Consistent) => {
                &["x", "y", "width", "height", "rx", "ry"]
            }
            (ShapeKind::Circle, _) => &["cx", "cy", "r"],
            (ShapeKind::Ellipse, _) => &["cx", "cy", "rx", "ry"],
            (ShapeKind::Line, _) => &["x1", "y1", "x2", "y2"],
            (ShapeKind::Polyline | ShapeKind::Polygon, _) => &["points"],
        }
    }
}

/// Common behavior for all shapes
#[enum_dispatch]
pub trait ToPath {
    fn kind(&self) -> ShapeKind;

    /// Path data drawing the same outline
    fn to_path(&self, options: &Options) -> PathData;
}

/// A `<rect>`; raw attribute values, resolved when the path is built
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectShape {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: f64,
    pub height: f64,
    pub rx: Option<f64>,
    pub ry: Option<f64>,
}

impl ToPath for RectShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rect
    }

    fn to_path(&self, _options: &Options) -> PathData {
        rect_path(self.x, self.y, self.width, self.height, self.rx, self.ry)
    }
}

/// A `<circle>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleShape {
    pub center: Point,
    pub r: f64,
}

impl ToPath for CircleShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn to_path(&self, options: &Options) -> PathData {
        Ellipse::circle(self.center, self.r).to_path(options.circle_algorithm)
    }
}

/// An `<ellipse>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseShape {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
}

impl ToPath for EllipseShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn to_path(&self, options: &Options) -> PathData {
        Ellipse::new(self.center, self.rx, self.ry).to_path(options.circle_algorithm)
    }
}

/// A `<line>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineShape {
    pub from: Point,
    pub to: Point,
}

impl ToPath for LineShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn to_path(&self, _options: &Options) -> PathData {
        line_path(self.from, self.to)
    }
}

/// A `<polyline>` or `<polygon>`
#[derive(Debug, Clone, PartialEq)]
pub struct PolyShape {
    /// Flat `x y x y ...` coordinate list
    pub coords: Vec<f64>,
    pub closed: bool,
}

impl ToPath for PolyShape {
    fn kind(&self) -> ShapeKind {
        if self.closed {
            ShapeKind::Polygon
        } else {
            ShapeKind::Polyline
        }
    }

    fn to_path(&self, _options: &Options) -> PathData {
        poly_path(&self.coords, self.closed)
    }
}

/// Geometry read off one shape node
#[enum_dispatch(ToPath)]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeDescriptor {
    Rect(RectShape),
    Circle(CircleShape),
    Ellipse(EllipseShape),
    Line(LineShape),
    Poly(PolyShape),
}

impl ShapeDescriptor {
    /// Read the descriptor of `node`, `None` if it is not a shape
    pub fn from_node<N: DocumentNode>(
        node: &N,
        options: &Options,
    ) -> Result<Option<Self>, ConvertError> {
        let Some(kind) = node.tag_name().and_then(ShapeKind::from_tag_name) else {
            return Ok(None);
        };
        Self::read(kind, node, options).map(Some)
    }

    /// Read the geometry of a node already known to be `kind`
    pub fn read<N: DocumentNode>(
        kind: ShapeKind,
        node: &N,
        options: &Options,
    ) -> Result<Self, ConvertError> {
        let attrs = Attributes {
            node,
            kind,
            strict: options.strict,
        };

        let shape: ShapeDescriptor = match kind {
            ShapeKind::Rect => RectShape {
                x: attrs.optional("x")?,
                y: attrs.optional("y")?,
                width: attrs.required("width")?,
                height: attrs.required("height")?,
                rx: attrs.optional("rx")?,
                ry: attrs.optional("ry")?,
            }
            .into(),
            ShapeKind::Circle => CircleShape {
                center: pt(attrs.number("cx")?, attrs.number("cy")?),
                r: attrs.number("r")?,
            }
            .into(),
            ShapeKind::Ellipse => EllipseShape {
                center: pt(attrs.number("cx")?, attrs.number("cy")?),
                rx: attrs.number("rx")?,
                ry: attrs.number("ry")?,
            }
            .into(),
            ShapeKind::Line => LineShape {
                from: pt(attrs.number("x1")?, attrs.number("y1")?),
                to: pt(attrs.number("x2")?, attrs.number("y2")?),
            }
            .into(),
            ShapeKind::Polyline | ShapeKind::Polygon => PolyShape {
                coords: attrs.points("points")?,
                closed: kind == ShapeKind::Polygon,
            }
            .into(),
        };
        Ok(shape)
    }
}

/// Attribute access for one node, lenient or strict
struct Attributes<'a, N> {
    node: &'a N,
    kind: ShapeKind,
    strict: bool,
}

impl<N: DocumentNode> Attributes<'_, N> {
    fn source(&self, name: &str, value: &str) -> AttributeSource {
        AttributeSource::new(self.kind.as_str(), name, value)
    }

    /// Present attributes must be numbers in strict mode; absent is `None`
    fn optional(&self, name: &str) -> Result<Option<f64>, ConvertError> {
        match self.node.attribute(name) {
            None => Ok(None),
            Some(value) if self.strict => parse::strict_number(&self.source(name, value)).map(Some),
            Some(value) => Ok(Some(parse::number(value))),
        }
    }

    /// Absent attributes read as zero
    fn number(&self, name: &str) -> Result<f64, ConvertError> {
        Ok(self.optional(name)?.unwrap_or(0.0))
    }

    /// Absent reads as zero, or is an error in strict mode
    fn required(&self, name: &str) -> Result<f64, ConvertError> {
        match self.optional(name)? {
            Some(value) => Ok(value),
            None if self.strict => Err(ConvertError::MissingAttribute {
                element: self.kind.as_str().to_string(),
                attribute: name.to_string(),
            }),
            None => Ok(0.0),
        }
    }

    fn points(&self, name: &str) -> Result<Vec<f64>, ConvertError> {
        let value = self.node.attribute(name).unwrap_or("");
        if self.strict {
            parse::strict_point_list(&self.source(name, value))
        } else {
            parse::point_list(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Element, SvgNode};
    use crate::options::CircleAlgorithm;

    fn node(element: Element) -> SvgNode {
        SvgNode::Element(element)
    }

    #[test]
    fn test_kind_matching_ignores_case() {
        assert_eq!(ShapeKind::from_tag_name("RECT"), Some(ShapeKind::Rect));
        assert_eq!(ShapeKind::from_tag_name("Polygon"), Some(ShapeKind::Polygon));
        assert_eq!(ShapeKind::from_tag_name("path"), None);
        assert_eq!(ShapeKind::from_tag_name("g"), None);
    }

    #[test]
    fn test_non_shapes_have_no_descriptor() {
        let g = node(Element::new("g"));
        assert_eq!(ShapeDescriptor::from_node(&g, &Options::default()).unwrap(), None);
        let text = SvgNode::Text("x".to_string());
        assert_eq!(ShapeDescriptor::from_node(&text, &Options::default()).unwrap(), None);
    }

    #[test]
    fn test_circle_descriptor() {
        let circle = node(Element::new("circle").attr("cx", "250").attr("cy", "50").attr("r", "50"));
        let shape = ShapeDescriptor::from_node(&circle, &Options::default())
            .unwrap()
            .unwrap();
        assert_eq!(shape.kind(), ShapeKind::Circle);
        assert_eq!(
            shape,
            ShapeDescriptor::Circle(CircleShape {
                center: pt(250.0, 50.0),
                r: 50.0
            })
        );
    }

    #[test]
    fn test_missing_attributes_read_as_zero() {
        let circle = node(Element::new("circle").attr("r", "2"));
        let shape = ShapeDescriptor::from_node(&circle, &Options::default())
            .unwrap()
            .unwrap();
        assert_eq!(
            shape.to_path(&Options::default()).to_string(),
            "M -2 0 A 2 2 0 1 0 2 0 A 2 2 0 1 0 -2 0"
        );
    }

    #[test]
    fn test_rect_keeps_absent_as_none() {
        let rect = node(Element::new("rect").attr("width", "10").attr("height", "5").attr("ry", "2"));
        let shape = ShapeDescriptor::from_node(&rect, &Options::default())
            .unwrap()
            .unwrap();
        assert_eq!(
            shape,
            ShapeDescriptor::Rect(RectShape {
                x: None,
                y: None,
                width: 10.0,
                height: 5.0,
                rx: None,
                ry: Some(2.0),
            })
        );
    }

    #[test]
    fn test_bad_number_is_nan_when_lenient() {
        let line = node(
            Element::new("line")
                .attr("x1", "0")
                .attr("y1", "1cm")
                .attr("x2", "3")
                .attr("y2", "4"),
        );
        let shape = ShapeDescriptor::from_node(&line, &Options::default())
            .unwrap()
            .unwrap();
        assert_eq!(shape.to_path(&Options::default()).to_string(), "M0 NaNL3 4");
    }

    #[test]
    fn test_bad_number_is_error_when_strict() {
        let line = node(Element::new("line").attr("x1", "0").attr("y1", "1cm"));
        let err = ShapeDescriptor::from_node(&line, &Options::new().with_strict(true)).unwrap_err();
        match err {
            ConvertError::InvalidNumber {
                element, attribute, ..
            } => {
                assert_eq!(element, "line");
                assert_eq!(attribute, "y1");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_rect_requires_size() {
        let rect = node(Element::new("rect").attr("width", "10"));
        let err = ShapeDescriptor::from_node(&rect, &Options::new().with_strict(true)).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MissingAttribute { ref attribute, .. } if attribute == "height"
        ));
    }

    #[test]
    fn test_polygon_is_closed_poly() {
        let polygon = node(Element::new("polygon").attr("points", "0,0 10,0 10,10"));
        let shape = ShapeDescriptor::from_node(&polygon, &Options::default())
            .unwrap()
            .unwrap();
        assert_eq!(shape.kind(), ShapeKind::Polygon);
        assert_eq!(shape.to_path(&Options::default()).to_string(), "M0 0L10 0 10 10z");
    }

    #[test]
    fn test_missing_points_is_blank_list() {
        let polyline = node(Element::new("polyline"));
        let shape = ShapeDescriptor::from_node(&polyline, &Options::default())
            .unwrap()
            .unwrap();
        assert_eq!(shape.to_path(&Options::default()).to_string(), "M0L");
    }

    #[test]
    fn test_ellipse_uses_selected_algorithm() {
        let ellipse = node(
            Element::new("ellipse")
                .attr("cx", "0")
                .attr("cy", "0")
                .attr("rx", "2")
                .attr("ry", "1"),
        );
        let options = Options::new().with_circle_algorithm(CircleAlgorithm::CubicBezier);
        let shape = ShapeDescriptor::from_node(&ellipse, &options).unwrap().unwrap();
        let d = shape.to_path(&options);
        assert_eq!(d.len(), 5);
    }

    #[test]
    fn test_stripped_attributes() {
        assert_eq!(
            ShapeKind::Rect.stripped_attributes(AttributeCleanup::Compatible),
            &["cx", "cy", "r"]
        );
        assert_eq!(
            ShapeKind::Rect.stripped_attributes(AttributeCleanup::Consistent),
            &["x", "y", "width", "height", "rx", "ry"]
        );
        assert_eq!(
            ShapeKind::Ellipse.stripped_attributes(AttributeCleanup::Consistent),
            &["cx", "cy", "rx", "ry"]
        );
    }
}
