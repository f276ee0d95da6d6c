//! Pattern 1: Open/Closed Shapes
//!
//! Each shape knows how to draw itself, so code that draws a collection of
//! shapes never branches on a type tag. Adding a new shape means adding a new
//! `impl Shape`, not editing the code that draws.

use std::io::{self, Write};

// ============================================================================
// Point
// ============================================================================

/// Integer 2D coordinate. Immutable once built; defaults to the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

// ============================================================================
// The Shape capability
// ============================================================================

/// A drawable figure with a center point and a fixed type label.
///
/// `draw` has no default: every variant must say how it is drawn.
pub trait Shape {
    /// Writes one line identifying the variant.
    fn draw(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Type label, fixed for the variant.
    fn type_name(&self) -> &'static str;

    fn center(&self) -> Point;
}

// ============================================================================
// Variants
// ============================================================================

/// Dimensions are not validated; zero and negative radii are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    center: Point,
    radius: i32,
}

impl Circle {
    pub fn new(center: Point, radius: i32) -> Self {
        Circle { center, radius }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }
}

impl Shape for Circle {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Draw Circle!")
    }

    fn type_name(&self) -> &'static str {
        "Circle"
    }

    fn center(&self) -> Point {
        self.center
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    center: Point,
    side: i32,
}

impl Square {
    pub fn new(center: Point, side: i32) -> Self {
        Square { center, side }
    }

    pub fn side(&self) -> i32 {
        self.side
    }
}

impl Shape for Square {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Draw Square!")
    }

    fn type_name(&self) -> &'static str {
        "Square"
    }

    fn center(&self) -> Point {
        self.center
    }
}
