use claims::debug_assert_ok;
use log::{debug, trace};
use num_traits::{Float, FloatConst, NumCast, ToPrimitive};
use std::fmt;
use std::fmt::Debug;

use super::{GeometryListener, Shape};
use crate::data::{Line, Point};
use crate::{Error, Intersects};

/// Star-shaped polygon with `points` spikes.
///
/// The outline has `2 * points` vertices, alternating between outer vertices
/// on the circumscribed circle and inner vertices. Inner vertex `2k + 1` is
/// where the chord from outer vertex `k` to `k + connect_distance` crosses the
/// chord from outer vertex `k + 1` to `k + 1 - connect_distance`.
///
/// The circle is centred on `(radius, radius)`, so the local bounding box
/// starts at the origin. Outer vertex 0 is at the top and the rest follow
/// clockwise in screen coordinates (y pointing down).
///
/// ```rust
/// use starshape::shape::{Dirty, StarPolygon};
///
/// let mut star = StarPolygon::with_listener(100.0_f32, 10, 4, Dirty::new())?;
/// assert!(star.listener_mut().take());
///
/// star.set_connect_distance(7);
/// assert_eq!(star.connect_distance(), 2);
/// assert!(star.listener().is_stale());
/// # Ok::<(), starshape::Error>(())
/// ```
#[derive(Clone)]
pub struct StarPolygon<T = f32, L = ()> {
  radius: T,
  points: usize,
  connect_distance: usize,
  listener: L,
}

impl<T> StarPolygon<T, ()>
where
  T: Float + FloatConst + Debug,
{
  pub fn new(radius: T, points: usize, connect_distance: usize) -> Result<Self, Error> {
    StarPolygon::with_listener(radius, points, connect_distance, ())
  }
}

impl<T, L> StarPolygon<T, L>
where
  T: Float + FloatConst + Debug,
  L: GeometryListener,
{
  /// The listener is notified once the star has been built.
  pub fn with_listener(
    radius: T,
    points: usize,
    connect_distance: usize,
    listener: L,
  ) -> Result<Self, Error> {
    check_radius(radius)?;
    check_points(points)?;
    let mut star = StarPolygon {
      radius,
      points,
      connect_distance: reduce(connect_distance, points),
      listener,
    };
    star.geometry_changed();
    Ok(star)
  }

  pub fn radius(&self) -> T {
    self.radius
  }

  /// Number of outer points. The outline has twice as many vertices.
  pub fn points(&self) -> usize {
    self.points
  }

  pub fn connect_distance(&self) -> usize {
    self.connect_distance
  }

  pub fn listener(&self) -> &L {
    &self.listener
  }

  pub fn listener_mut(&mut self) -> &mut L {
    &mut self.listener
  }

  pub fn set_radius(&mut self, radius: T) -> Result<(), Error> {
    if let Err(err) = check_radius(radius) {
      debug!("rejected star radius {:?}: {}", radius, err);
      return Err(err);
    }
    self.radius = radius;
    self.geometry_changed();
    Ok(())
  }

  /// Also re-reduces the stored connect distance against the new count.
  pub fn set_points(&mut self, points: usize) -> Result<(), Error> {
    if let Err(err) = check_points(points) {
      debug!("rejected star point count {}: {}", points, err);
      return Err(err);
    }
    self.points = points;
    self.connect_distance = reduce(self.connect_distance, points);
    self.geometry_changed();
    Ok(())
  }

  /// Stored modulo `points / 2`.
  pub fn set_connect_distance(&mut self, connect_distance: usize) {
    self.connect_distance = reduce(connect_distance, self.points);
    self.geometry_changed();
  }

  pub fn validate(&self) -> Result<(), Error> {
    check_radius(self.radius)?;
    check_points(self.points)?;
    if self.connect_distance >= self.points / 2 {
      // Unreachable through the public API.
      return Err(Error::InsufficientPoints);
    }
    Ok(())
  }

  /// Outer vertex `edge_index`, not reduced modulo `points`.
  pub(crate) fn edge_point(&self, edge_index: i64) -> Point<T, 2> {
    let step = scalar::<T, _>(360) / scalar::<T, _>(self.points);
    let degrees = scalar::<T, _>(90) - scalar::<T, _>(edge_index) * step;
    let angle = degrees * (T::PI() / scalar::<T, _>(180));
    let one = T::one();
    Point::new([
      self.radius * (one + angle.cos()),
      self.radius * (one - angle.sin()),
    ])
  }

  fn geometry_changed(&mut self) {
    debug_assert_ok!(self.validate());
    trace!(
      "star geometry changed: radius={:?} points={} connect_distance={}",
      self.radius,
      self.points,
      self.connect_distance
    );
    self.listener.geometry_changed();
  }
}

impl<T, L> Shape for StarPolygon<T, L>
where
  T: Float + FloatConst + Debug,
  L: GeometryListener,
{
  type Scalar = T;

  fn vertex_count(&self) -> usize {
    2 * self.points
  }

  fn vertex_at(&self, index: usize) -> Point<T, 2> {
    let lower = (index / 2) as i64;
    if index % 2 == 0 {
      return self.edge_point(lower);
    }

    let upper = lower + 1;
    let reach = self.connect_distance as i64;
    let p1 = self.edge_point(lower);
    let p2 = self.edge_point(lower + reach);
    let p3 = self.edge_point(upper);
    let p4 = self.edge_point(upper - reach);

    let outgoing = Line::new_through(p1, p2);
    let incoming = Line::new_through(p3, p4);
    match (&outgoing).intersect(&incoming) {
      Some(pt) => pt,
      // Both chords collapse onto the edge p1-p3 (connect distance 0 or 1).
      None => p1.midpoint(&p3),
    }
  }
}

impl<T: Debug, L> Debug for StarPolygon<T, L> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("StarPolygon")
      .field("radius", &self.radius)
      .field("points", &self.points)
      .field("connect_distance", &self.connect_distance)
      .finish_non_exhaustive()
  }
}

///////////////////////////////////////////////////////////////////////////////
// Helper functions

fn check_radius<T: Float>(radius: T) -> Result<(), Error> {
  if radius.is_finite() && radius >= T::zero() {
    Ok(())
  } else {
    Err(Error::InvalidRadius)
  }
}

fn check_points(points: usize) -> Result<(), Error> {
  if points < 2 {
    Err(Error::InsufficientPoints)
  } else {
    Ok(())
  }
}

// Callers have checked `points >= 2`.
fn reduce(connect_distance: usize, points: usize) -> usize {
  connect_distance % (points / 2)
}

fn scalar<T: Float, N: ToPrimitive>(n: N) -> T {
  <T as NumCast>::from(n).unwrap_or_else(T::nan)
}

///////////////////////////////////////////////////////////////////////////////
// Tests
