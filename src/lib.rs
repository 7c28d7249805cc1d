#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Star polygon outlines for host shape renderers.
//!
//! A [`StarPolygon`](shape::StarPolygon) exposes its outline one vertex at a
//! time through the [`Shape`](shape::Shape) trait. Outer vertices sit on the
//! circumscribed circle, inner vertices are the crossing points of chords
//! between non-adjacent outer vertices.
//!
//! ```rust
//! use starshape::shape::{Shape, StarPolygon};
//!
//! let star: StarPolygon<f64> = StarPolygon::new(100.0, 10, 4)?;
//! assert_eq!(star.vertex_count(), 20);
//! let top = star.vertex_at(0);
//! assert!((top.x_coord() - 100.0).abs() < 1e-9);
//! assert!(top.y_coord().abs() < 1e-9);
//! # Ok::<(), starshape::Error>(())
//! ```
pub mod data;
mod intersection;
pub mod shape;

pub use intersection::Intersects;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than two outer points. The connect distance is reduced modulo
  /// `points / 2`, which must not be zero.
  InsufficientPoints,
  /// The radius is negative, NaN or infinite.
  InvalidRadius,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientPoints => write!(f, "A star needs at least two points"),
      Error::InvalidRadius => write!(f, "Radius must be finite and non-negative"),
    }
  }
}

impl std::error::Error for Error {}
