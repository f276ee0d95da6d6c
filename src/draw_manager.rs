//! The manager owns its shapes and draws them in insertion order. It never
//! looks at what kind of shape it holds.

use std::io::{self, Write};

use crate::shapes::{Circle, Point, Shape, Square};

pub const DEFAULT_CENTER: Point = Point::ORIGIN;
pub const DEFAULT_DIMENSION: i32 = 3;

pub struct DrawManager {
    shapes: Vec<Box<dyn Shape>>,
}

impl DrawManager {
    /// Builds the demo lineup: one square, then one circle, both centered at
    /// the origin with dimension 3.
    pub fn new() -> Self {
        let mut manager = DrawManager { shapes: Vec::new() };
        manager.push(Box::new(Square::new(DEFAULT_CENTER, DEFAULT_DIMENSION)));
        manager.push(Box::new(Circle::new(DEFAULT_CENTER, DEFAULT_DIMENSION)));
        tracing::debug!(shapes = manager.len(), "draw manager ready");
        manager
    }

    /// Appends a shape; it is drawn after everything already held.
    pub fn push(&mut self, shape: Box<dyn Shape>) {
        self.shapes.push(shape);
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in draw order.
    pub fn shapes(&self) -> impl Iterator<Item = &dyn Shape> + '_ {
        self.shapes.iter().map(|shape| &**shape)
    }

    /// Draws every shape once. Calling again replays the same output.
    pub fn draw_shapes(&self, out: &mut dyn Write) -> io::Result<()> {
        for shape in &self.shapes {
            tracing::trace!(shape = shape.type_name(), "draw");
            shape.draw(out)?;
        }
        Ok(())
    }
}

impl Default for DrawManager {
    fn default() -> Self {
        Self::new()
    }
}
