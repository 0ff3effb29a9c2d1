//! Conversion options
//!
//! Options travel with each top-level call; nothing is global.

use std::fmt;
use std::str::FromStr;

use crate::errors::ConvertError;
use crate::parse;

/// Segment count used by [`CircleAlgorithm::QuadBezier`] when none is given
pub const DEFAULT_SEGMENTS: u32 = 8;

/// How circles and ellipses are turned into path commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CircleAlgorithm {
    /// Two half-ellipse arc commands; exact
    #[default]
    TwoArcs,
    /// Four cubic Béziers, one per quadrant
    CubicBezier,
    /// `segments` quadratic Béziers tangent to the ellipse at both ends
    QuadBezier { segments: u32 },
}

impl CircleAlgorithm {
    /// Setting name of this algorithm
    pub fn name(self) -> &'static str {
        match self {
            CircleAlgorithm::TwoArcs => "TwoArcs",
            CircleAlgorithm::CubicBezier => "CubicBezier",
            CircleAlgorithm::QuadBezier { .. } => "QuadBezier",
        }
    }

    /// Look up an algorithm by its setting name
    pub fn from_name(name: &str, segments: u32) -> Option<Self> {
        match name {
            "TwoArcs" => Some(CircleAlgorithm::TwoArcs),
            "CubicBezier" => Some(CircleAlgorithm::CubicBezier),
            "QuadBezier" => Some(CircleAlgorithm::QuadBezier {
                segments: non_zero_segments(segments),
            }),
            _ => None,
        }
    }

    /// Look up an algorithm, falling back to `TwoArcs` for anything unknown
    pub fn lenient(name: Option<&str>, segments: u32) -> Self {
        match name.and_then(|n| Self::from_name(n, segments)) {
            Some(algorithm) => algorithm,
            None => {
                crate::log::debug!(requested = ?name, "circle algorithm falls back to TwoArcs");
                CircleAlgorithm::TwoArcs
            }
        }
    }

    /// Same algorithm with a different segment count (QuadBezier only)
    pub fn with_segments(self, segments: u32) -> Self {
        match self {
            CircleAlgorithm::QuadBezier { .. } => CircleAlgorithm::QuadBezier {
                segments: non_zero_segments(segments),
            },
            other => other,
        }
    }
}

impl fmt::Display for CircleAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CircleAlgorithm {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s, DEFAULT_SEGMENTS).ok_or_else(|| ConvertError::UnknownCircleAlgorithm {
            name: s.to_string(),
        })
    }
}

fn non_zero_segments(segments: u32) -> u32 {
    if segments == 0 { DEFAULT_SEGMENTS } else { segments }
}

/// Which attributes are stripped from the replacement `path`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributeCleanup {
    /// Strip what established shape-to-path tools strip. A rect keeps its
    /// geometry attributes and loses `cx`/`cy`/`r` instead.
    #[default]
    Compatible,
    /// Every shape loses exactly its own geometry attributes
    Consistent,
}

impl FromStr for AttributeCleanup {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compatible" => Ok(AttributeCleanup::Compatible),
            "consistent" => Ok(AttributeCleanup::Consistent),
            _ => Err(ConvertError::InvalidSetting {
                key: "attributeCleanup".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Options for one conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub circle_algorithm: CircleAlgorithm,
    pub attribute_cleanup: AttributeCleanup,
    /// Reject non-numeric attributes, missing rect sizes and unpaired points
    /// instead of letting NaN through
    pub strict: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_circle_algorithm(mut self, algorithm: CircleAlgorithm) -> Self {
        self.circle_algorithm = algorithm;
        self
    }

    pub fn with_circle_segments(mut self, segments: u32) -> Self {
        self.circle_algorithm = self.circle_algorithm.with_segments(segments);
        self
    }

    pub fn with_attribute_cleanup(mut self, cleanup: AttributeCleanup) -> Self {
        self.attribute_cleanup = cleanup;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build options from `key=value` style settings.
    ///
    /// Keys: `circleAlgorithm`, `circleSegments`, `attributeCleanup`, `strict`.
    /// Unless `strict=true` is among them, bad values fall back to their
    /// defaults and unknown keys are ignored.
    pub fn from_settings<'a, I>(settings: I) -> Result<Self, ConvertError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let settings: Vec<(&str, &str)> = settings.into_iter().collect();
        let strict = settings
            .iter()
            .any(|(key, value)| *key == "strict" && value.trim() == "true");

        let mut algorithm: Option<&str> = None;
        let mut segments = DEFAULT_SEGMENTS;
        let mut cleanup = AttributeCleanup::default();

        for (key, value) in settings {
            match key {
                "circleAlgorithm" => algorithm = Some(value.trim()),
                "circleSegments" => segments = parse_segments(value, strict)?,
                "attributeCleanup" => match value.parse() {
                    Ok(parsed) => cleanup = parsed,
                    Err(e) if strict => return Err(e),
                    Err(_) => {}
                },
                "strict" => {}
                other => {
                    if strict {
                        return Err(ConvertError::UnknownSetting {
                            key: other.to_string(),
                        });
                    }
                    crate::log::debug!(key = other, "ignoring unknown setting");
                }
            }
        }

        let circle_algorithm = if strict {
            match algorithm {
                Some(name) => CircleAlgorithm::from_name(name, segments).ok_or_else(|| {
                    ConvertError::UnknownCircleAlgorithm {
                        name: name.to_string(),
                    }
                })?,
                None => CircleAlgorithm::default(),
            }
        } else {
            CircleAlgorithm::lenient(algorithm, segments)
        };

        Ok(Options {
            circle_algorithm,
            attribute_cleanup: cleanup,
            strict,
        })
    }
}

fn parse_segments(value: &str, strict: bool) -> Result<u32, ConvertError> {
    let n = parse::number(value);
    if n.is_finite() && n >= 1.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) {
        return Ok(n as u32);
    }
    if strict {
        return Err(ConvertError::InvalidSegments {
            value: value.to_string(),
        });
    }
    Ok(DEFAULT_SEGMENTS)
}
