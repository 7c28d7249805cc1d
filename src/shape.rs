use crate::data::Point;
use std::ops::Range;

mod listener;
mod star;

pub use listener::{Dirty, GeometryListener};
pub use star::StarPolygon;

/// Shapes that a host renderer can tessellate.
///
/// The host sizes its vertex buffer with [`vertex_count`](Shape::vertex_count)
/// and then asks for every vertex in increasing index order. The outline is
/// closed: the last vertex connects back to the first.
pub trait Shape {
  type Scalar;

  fn vertex_count(&self) -> usize;

  /// Only indices in `0..vertex_count()` are meaningful.
  fn vertex_at(&self, index: usize) -> Point<Self::Scalar, 2>;

  fn outline(&self) -> Outline<'_, Self>
  where
    Self: Sized,
  {
    Outline {
      shape: self,
      range: 0..self.vertex_count(),
    }
  }

  fn vertices(&self) -> Vec<Point<Self::Scalar, 2>>
  where
    Self: Sized,
  {
    self.outline().collect()
  }
}

/// Lazy walk over a shape's outline, see [`Shape::outline`].
pub struct Outline<'a, S: ?Sized> {
  shape: &'a S,
  range: Range<usize>,
}

impl<S: ?Sized> Clone for Outline<'_, S> {
  fn clone(&self) -> Self {
    Outline {
      shape: self.shape,
      range: self.range.clone(),
    }
  }
}

impl<'a, S: Shape + ?Sized> Iterator for Outline<'a, S> {
  type Item = Point<S::Scalar, 2>;

  fn next(&mut self) -> Option<Self::Item> {
    self.range.next().map(|idx| self.shape.vertex_at(idx))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.range.size_hint()
  }
}

impl<'a, S: Shape + ?Sized> DoubleEndedIterator for Outline<'a, S> {
  fn next_back(&mut self) -> Option<Self::Item> {
    self.range.next_back().map(|idx| self.shape.vertex_at(idx))
  }
}

impl<'a, S: Shape + ?Sized> ExactSizeIterator for Outline<'a, S> {}
