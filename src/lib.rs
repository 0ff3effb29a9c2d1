//! Convert SVG basic shapes into equivalent `path` elements.
//!
//! `rect`, `circle`, `ellipse`, `line`, `polyline` and `polygon` nodes are
//! replaced in place by paths whose `d` attribute draws the same outline.
//! Circles and ellipses can be drawn as two elliptical arcs, four cubic
//! Béziers or N quadratic Béziers; see [`CircleAlgorithm`].
//!
//! The converter works on any tree implementing [`DocumentNode`]. A small
//! owned tree, [`SvgNode`], is included:
//!
//! ```
//! use shape2path::{Element, Options, SvgNode, path_from, shape2path};
//!
//! let mut svg = SvgNode::from(
//!     Element::new("svg").child(Element::new("circle").attr("cx", "250").attr("cy", "50").attr("r", "50")),
//! );
//! let converted = shape2path(&mut svg, path_from, &Options::default()).unwrap();
//! assert_eq!(converted, 1);
//! ```

use pest_derive::Parser;

pub mod circle;
pub mod convert;
pub mod dom;
pub mod errors;
pub mod linear;
pub mod log;
pub mod options;
pub mod parse;
pub mod path;
pub mod rect;
pub mod shapes;
pub mod types;

pub use circle::{Ellipse, KAPPA, approximate};
pub use convert::{convert_node, shape2path};
pub use dom::{DocumentNode, Element, SvgNode, path_from};
pub use errors::ConvertError;
pub use linear::{line_path, poly_path};
pub use options::{AttributeCleanup, CircleAlgorithm, Options};
pub use path::{Layout, PathCommand, PathData};
pub use rect::{RoundedRect, rect_path};
pub use shapes::{ShapeDescriptor, ShapeKind, ToPath};

#[derive(Parser)]
#[grammar = "attrs.pest"]
pub struct AttrParser;

#[cfg(test)]
mod tests {
    use super::*;
    use pest::Parser;

    #[test]
    fn parse_decimal_number() {
        let result = AttrParser::parse(Rule::number, "-12.5e3");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_radix_numbers() {
        for input in ["0x1F", "0o17", "0B101"] {
            let result = AttrParser::parse(Rule::number, input);
            assert!(result.is_ok(), "Failed to parse {input}: {:?}", result.err());
        }
    }

    #[test]
    fn parse_empty_number() {
        let result = AttrParser::parse(Rule::number, "");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn reject_units() {
        assert!(AttrParser::parse(Rule::number, "10px").is_err());
        assert!(AttrParser::parse(Rule::number, "1e").is_err());
        assert!(AttrParser::parse(Rule::number, "-0x10").is_err());
    }

    #[test]
    fn parse_points_with_mixed_separators() {
        let result = AttrParser::parse(Rule::points, "0,300 50 ,225\n50,275");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
        let coordinates = result
            .unwrap()
            .flatten()
            .filter(|pair| pair.as_rule() == Rule::coordinate)
            .count();
        assert_eq!(coordinates, 6);
    }

    #[test]
    fn parse_edge_separators_as_empty_coordinates() {
        let result = AttrParser::parse(Rule::points, ",1,2,");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
        let coordinates: Vec<&str> = result
            .unwrap()
            .flatten()
            .filter(|pair| pair.as_rule() == Rule::coordinate)
            .map(|pair| pair.as_str())
            .collect();
        assert_eq!(coordinates, vec!["", "1", "2", ""]);
    }

    #[test]
    fn parse_blank_points() {
        let result = AttrParser::parse(Rule::points, "");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }
}
