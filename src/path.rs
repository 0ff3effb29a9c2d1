//! Path data: drawing commands and their serialized `d` attribute form.
//!
//! Converters build a [`PathData`] through the fluent methods (`m`, `l`,
//! `h`, `v`, `a`, `c`, `q`, `z`) in draw order, then render it with
//! `to_string()`. The [`Layout`] decides how commands are joined.

use std::fmt;

use crate::types::{Num, Point};

/// Command code of a path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    MoveTo,
    LineTo,
    HorizontalTo,
    VerticalTo,
    ArcTo,
    CubicTo,
    QuadTo,
    Close,
}

impl Code {
    /// Number of operands in one group of this command
    pub const fn arity(self) -> usize {
        match self {
            Code::MoveTo | Code::LineTo => 2,
            Code::HorizontalTo | Code::VerticalTo => 1,
            Code::ArcTo => 7,
            Code::CubicTo => 6,
            Code::QuadTo => 4,
            Code::Close => 0,
        }
    }

    /// Upper-case letter for absolute commands, lower-case for relative
    pub const fn letter(self, relative: bool) -> char {
        let upper = match self {
            Code::MoveTo => 'M',
            Code::LineTo => 'L',
            Code::HorizontalTo => 'H',
            Code::VerticalTo => 'V',
            Code::ArcTo => 'A',
            Code::CubicTo => 'C',
            Code::QuadTo => 'Q',
            Code::Close => 'Z',
        };
        if relative { upper.to_ascii_lowercase() } else { upper }
    }
}

/// One drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    pub code: Code,
    pub relative: bool,
    /// One or more operand groups of `code.arity()` numbers each.
    /// Converters fed malformed input may leave a partial group.
    pub operands: Vec<f64>,
}

impl PathCommand {
    pub fn new(code: Code, relative: bool, operands: Vec<f64>) -> Self {
        Self {
            code,
            relative,
            operands,
        }
    }

    /// True when the operand count is a whole number of groups
    pub fn is_well_formed(&self) -> bool {
        match self.code.arity() {
            0 => self.operands.is_empty(),
            n => !self.operands.is_empty() && self.operands.len() % n == 0,
        }
    }

    /// Final pen position of an absolute command, if it has one
    pub fn end_point(&self) -> Option<Point> {
        if self.relative || self.code.arity() < 2 {
            return None;
        }
        match self.operands.as_slice() {
            [.., x, y] => Some(Point::new(*x, *y)),
            _ => None,
        }
    }

    fn write_compact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code.letter(self.relative))?;
        for (i, value) in self.operands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", Num(*value))?;
        }
        Ok(())
    }

    fn write_spaced(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code.letter(self.relative))?;
        for value in &self.operands {
            write!(f, " {}", Num(*value))?;
        }
        Ok(())
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_compact(f)
    }
}

/// How commands are joined when rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Letter glued to its operands, commands glued together: `M0 0h100z`
    #[default]
    Compact,
    /// Compact commands, one per line
    Lines,
    /// Every token separated by a space: `M 200 50 A 50 50 0 1 0 300 50`
    Spaced,
}

/// An ordered sequence of path commands
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    commands: Vec<PathCommand>,
    layout: Layout,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: Layout) -> Self {
        Self {
            commands: Vec::new(),
            layout,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether the last command closes the path
    pub fn is_closed(&self) -> bool {
        self.commands
            .last()
            .is_some_and(|cmd| cmd.code == Code::Close)
    }

    /// Append a command as-is, without checking its operand count
    pub fn push(mut self, command: PathCommand) -> Self {
        self.commands.push(command);
        self
    }

    fn abs(self, code: Code, operands: Vec<f64>) -> Self {
        self.push(PathCommand::new(code, false, operands))
    }

    fn rel(self, code: Code, operands: Vec<f64>) -> Self {
        self.push(PathCommand::new(code, true, operands))
    }

    /// Absolute move-to
    pub fn m(self, x: f64, y: f64) -> Self {
        self.abs(Code::MoveTo, vec![x, y])
    }

    /// Absolute line-to
    pub fn l(self, x: f64, y: f64) -> Self {
        self.abs(Code::LineTo, vec![x, y])
    }

    /// Absolute line-to through every coordinate pair in `coords`
    pub fn l_many(self, coords: &[f64]) -> Self {
        self.abs(Code::LineTo, coords.to_vec())
    }

    /// Absolute elliptical arc
    #[allow(clippy::too_many_arguments)]
    pub fn a(
        self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        self.abs(
            Code::ArcTo,
            vec![
                rx,
                ry,
                rotation,
                Num::flag(large_arc).0,
                Num::flag(sweep).0,
                x,
                y,
            ],
        )
    }

    /// Absolute cubic Bézier
    pub fn c(self, c1: Point, c2: Point, to: Point) -> Self {
        self.abs(Code::CubicTo, vec![c1.x, c1.y, c2.x, c2.y, to.x, to.y])
    }

    /// Absolute quadratic Bézier
    pub fn q(self, control: Point, to: Point) -> Self {
        self.abs(Code::QuadTo, vec![control.x, control.y, to.x, to.y])
    }

    /// Relative horizontal line
    pub fn h_rel(self, dx: f64) -> Self {
        self.rel(Code::HorizontalTo, vec![dx])
    }

    /// Relative vertical line
    pub fn v_rel(self, dy: f64) -> Self {
        self.rel(Code::VerticalTo, vec![dy])
    }

    /// Relative elliptical arc
    #[allow(clippy::too_many_arguments)]
    pub fn a_rel(
        self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        dx: f64,
        dy: f64,
    ) -> Self {
        self.rel(
            Code::ArcTo,
            vec![
                rx,
                ry,
                rotation,
                Num::flag(large_arc).0,
                Num::flag(sweep).0,
                dx,
                dy,
            ],
        )
    }

    /// Close path (written as `z`)
    pub fn z(self) -> Self {
        self.rel(Code::Close, Vec::new())
    }

    /// A standalone `<path d="..."/>` element
    pub fn to_svg_element(&self) -> String {
        format!("<path d=\"{}\"/>", self)
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            match self.layout {
                Layout::Compact => cmd.write_compact(f)?,
                Layout::Lines => {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    cmd.write_compact(f)?;
                }
                Layout::Spaced => {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    cmd.write_spaced(f)?;
                }
            }
        }
        Ok(())
    }
}
