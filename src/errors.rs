//! Error types with rich diagnostics using miette
//!
//! Conversion is permissive by default and never fails on geometry. These
//! errors surface only in strict mode and when settings are parsed strictly.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// An attribute value being read, kept around for error reporting
#[derive(Debug, Clone)]
pub struct AttributeSource {
    /// Element the attribute belongs to, e.g. `rect`
    pub element: String,
    /// Attribute name, e.g. `width`
    pub attribute: String,
    /// The raw attribute value
    pub value: String,
}

impl AttributeSource {
    pub fn new(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Create a NamedSource for miette, named like `<rect width>`
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(
            format!("<{} {}>", self.element, self.attribute),
            self.value.clone(),
        )
    }

    /// Span covering the whole value
    pub fn full_span(&self) -> SourceSpan {
        (0, self.value.len()).into()
    }
}

/// Errors raised while converting shapes or reading options
#[derive(Error, Diagnostic, Debug)]
pub enum ConvertError {
    #[error("invalid number in `{attribute}` of <{element}>")]
    #[diagnostic(
        code(shape2path::attr::invalid_number),
        help("shape attributes must be plain numbers such as `12`, `-0.5` or `1e3`")
    )]
    InvalidNumber {
        element: String,
        attribute: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a number")]
        span: SourceSpan,
    },

    #[error("<{element}> points list has an odd number of coordinates ({count})")]
    #[diagnostic(
        code(shape2path::attr::odd_coordinates),
        help("points are written as `x,y` pairs")
    )]
    OddCoordinateCount {
        element: String,
        count: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("unpaired coordinate")]
        span: SourceSpan,
    },

    #[error("<{element}> is missing required attribute `{attribute}`")]
    #[diagnostic(code(shape2path::attr::missing))]
    MissingAttribute { element: String, attribute: String },

    #[error("unknown circle algorithm: {name}")]
    #[diagnostic(
        code(shape2path::options::unknown_algorithm),
        help("expected one of `TwoArcs`, `CubicBezier` or `QuadBezier`")
    )]
    UnknownCircleAlgorithm { name: String },

    #[error("invalid circle segment count: {value}")]
    #[diagnostic(
        code(shape2path::options::invalid_segments),
        help("circleSegments must be a positive integer")
    )]
    InvalidSegments { value: String },

    #[error("unknown setting: {key}")]
    #[diagnostic(
        code(shape2path::options::unknown_setting),
        help("known settings are `circleAlgorithm`, `circleSegments`, `attributeCleanup` and `strict`")
    )]
    UnknownSetting { key: String },

    #[error("invalid value `{value}` for setting `{key}`")]
    #[diagnostic(code(shape2path::options::invalid_value))]
    InvalidSetting { key: String, value: String },

    #[error("attribute syntax error: {message}")]
    #[diagnostic(code(shape2path::attr::syntax))]
    Syntax { message: String },
}

impl ConvertError {
    pub(crate) fn invalid_number(source: &AttributeSource, span: SourceSpan) -> Self {
        ConvertError::InvalidNumber {
            element: source.element.clone(),
            attribute: source.attribute.clone(),
            src: source.named_source(),
            span,
        }
    }

    pub(crate) fn odd_coordinates(
        source: &AttributeSource,
        count: usize,
        span: SourceSpan,
    ) -> Self {
        ConvertError::OddCoordinateCount {
            element: source.element.clone(),
            count,
            src: source.named_source(),
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_message() {
        let source = AttributeSource::new("rect", "width", "12px");
        let err = ConvertError::invalid_number(&source, source.full_span());
        assert_eq!(err.to_string(), "invalid number in `width` of <rect>");
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("shape2path::attr::invalid_number")
        );
    }

    #[test]
    fn test_named_source_label() {
        let source = AttributeSource::new("polygon", "points", "0,0 1");
        assert_eq!(source.named_source().name(), "<polygon points>");
        let span = source.full_span();
        assert_eq!(span.offset(), 0);
        assert_eq!(span.len(), 5);
    }
}
