/// Intersection between two geometric objects.
///
/// `None` means the objects do not meet in a single well-defined result.
pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}
