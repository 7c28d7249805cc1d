use super::Point;
use crate::Intersects;

use num_traits::Float;

///////////////////////////////////////////////////////////////////////////////
// Line

/// Infinite line through two points.
///
/// Non-vertical lines are handled in slope-intercept form, `y = m·x + b`.
/// A line whose two points share an x coordinate (including the case where
/// both points coincide) is vertical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<T> {
  pub origin: Point<T, 2>,
  pub through: Point<T, 2>,
}

impl<T: Float> Line<T> {
  pub fn new_through(origin: Point<T, 2>, through: Point<T, 2>) -> Line<T> {
    Line { origin, through }
  }

  pub fn is_vertical(&self) -> bool {
    self.origin.x_coord() == self.through.x_coord()
  }

  /// Infinite (or NaN) for vertical lines.
  pub fn slope(&self) -> T {
    let [x1, y1] = self.origin.array;
    let [x2, y2] = self.through.array;
    (y1 - y2) / (x1 - x2)
  }

  /// The `b` in `y = m·x + b`.
  pub fn intercept(&self) -> T {
    let [x, y] = self.origin.array;
    -self.slope() * x + y
  }

  pub fn y_at(&self, x: T) -> T {
    self.slope() * x + self.intercept()
  }
}

///////////////////////////////////////////////////////////////////////////////
// Line / Line intersection

// Vertical lines are checked before the general case, `self` first. A
// vertical line pins x to its own coordinate and y is read off the other line.
// Parallel lines, including two vertical ones, have no intersection.
impl<T: Float> Intersects<&Line<T>> for &Line<T> {
  type Result = Point<T, 2>;
  /// In the general case `x = (b2 - b1) / (m1 - m2)` and y is evaluated on
  /// whichever line has the smaller absolute slope, not always on `self`.
  fn intersect(self, other: &Line<T>) -> Option<Self::Result> {
    if self.is_vertical() {
      if other.is_vertical() {
        return None;
      }
      let x = *self.origin.x_coord();
      return Some(Point::new([x, other.y_at(x)]));
    }

    if other.is_vertical() {
      let x = *other.origin.x_coord();
      return Some(Point::new([x, self.y_at(x)]));
    }

    let (m1, b1) = (self.slope(), self.intercept());
    let (m2, b2) = (other.slope(), other.intercept());
    if m1 == m2 {
      return None;
    }
    let x = (b2 - b1) / (m1 - m2);
    // Both lines agree on y. The shallower one loses less precision.
    let y = if m1.abs() <= m2.abs() {
      m1 * x + b1
    } else {
      m2 * x + b2
    };
    Some(Point::new([x, y]))
  }
}

impl<T: Float> Intersects for Line<T> {
  type Result = Point<T, 2>;
  fn intersect(self, other: Line<T>) -> Option<Self::Result> {
    (&self).intersect(&other)
  }
}
