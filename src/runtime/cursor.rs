use serde::Serialize;

use crate::lexer::{Heading, Value};

/// Instruction pointer: grid position plus per-step velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cursor {
    x: Value,
    y: Value,
    dx: Value,
    dy: Value,
}

impl Cursor {
    /// Creates a cursor at `(x, y)` moving by `(dx, dy)`
    pub fn new(x: Value, y: Value, dx: Value, dy: Value) -> Self {
        Cursor { x, y, dx, dy }
    }

    /// Current `(x, y)`
    pub fn position(&self) -> (Value, Value) {
        (self.x, self.y)
    }

    /// Current `(dx, dy)`
    pub fn velocity(&self) -> (Value, Value) {
        (self.dx, self.dy)
    }

    /// Replaces the velocity
    pub fn set_velocity(&mut self, dx: Value, dy: Value) {
        self.dx = dx;
        self.dy = dy;
    }

    /// Applies a vowel's velocity change
    pub fn steer(&mut self, heading: Heading) {
        match heading {
            Heading::Velocity { dx, dy } => self.set_velocity(dx, dy),
            Heading::ReflectVertical => {
                if self.dy != 0 {
                    self.reverse_y();
                }
            }
            Heading::ReflectHorizontal => {
                if self.dx != 0 {
                    self.reverse_x();
                }
            }
            Heading::Reverse => self.reverse(),
            Heading::Keep => {}
        }
    }

    /// Negates `dx`
    pub fn reverse_x(&mut self) {
        self.dx = -self.dx;
    }

    /// Negates `dy`
    pub fn reverse_y(&mut self) {
        self.dy = -self.dy;
    }

    /// Negates both components
    pub fn reverse(&mut self) {
        self.reverse_x();
        self.reverse_y();
    }

    /// Moves one step on a `width` x `height` torus.
    ///
    /// A coordinate may rest exactly on the extent (a blank cell); only
    /// going past it wraps. Undershooting resets to `extent - velocity`.
    pub fn advance(&mut self, width: usize, height: usize) {
        self.x = wrap(self.x + self.dx, self.dx, width as Value);
        self.y = wrap(self.y + self.dy, self.dy, height as Value);
    }
}

impl Default for Cursor {
    /// Top-left corner, heading south
    fn default() -> Self {
        Cursor::new(0, 0, 0, 1)
    }
}

fn wrap(coordinate: Value, velocity: Value, extent: Value) -> Value {
    if coordinate > extent {
        coordinate - extent
    } else if coordinate < 0 {
        extent - velocity
    } else {
        coordinate
    }
}
