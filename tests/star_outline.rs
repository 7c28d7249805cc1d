mod star_outline {
  use starshape::data::*;
  use starshape::shape::*;
  use starshape::*;

  use std::cell::RefCell;

  // Stand-in for a host renderer: rebuilds its vertex buffer on the next
  // draw whenever the shape reported a change.
  struct Host {
    buffer: Vec<Point<f32, 2>>,
    rebuilds: usize,
  }

  impl Host {
    fn new() -> Host {
      Host {
        buffer: Vec::new(),
        rebuilds: 0,
      }
    }

    fn draw<S>(&mut self, shape: &mut S)
    where
      S: Shape<Scalar = f32> + HasDirty,
    {
      if shape.dirty().take() {
        self.buffer.clear();
        self.buffer.reserve(shape.vertex_count());
        for idx in 0..shape.vertex_count() {
          self.buffer.push(shape.vertex_at(idx));
        }
        self.rebuilds += 1;
      }
    }
  }

  trait HasDirty {
    fn dirty(&mut self) -> &mut Dirty;
  }

  impl HasDirty for StarPolygon<f32, Dirty> {
    fn dirty(&mut self) -> &mut Dirty {
      self.listener_mut()
    }
  }

  #[test]
  fn host_rebuilds_only_after_changes() -> Result<(), Error> {
    let mut star = StarPolygon::with_listener(100.0_f32, 10, 4, Dirty::new())?;
    let mut host = Host::new();

    host.draw(&mut star);
    assert_eq!(host.rebuilds, 1);
    assert_eq!(host.buffer.len(), 20);

    host.draw(&mut star);
    assert_eq!(host.rebuilds, 1);

    star.set_points(6)?;
    host.draw(&mut star);
    assert_eq!(host.rebuilds, 2);
    assert_eq!(host.buffer.len(), 12);
    assert_eq!(host.buffer, star.vertices());
    Ok(())
  }

  #[test]
  fn outline_matches_indexed_access() -> Result<(), Error> {
    let star: StarPolygon<f64> = StarPolygon::new(40.0, 7, 2)?;
    let outline: Vec<Point<f64, 2>> = star.outline().collect();
    assert_eq!(outline.len(), star.vertex_count());
    for (idx, pt) in outline.iter().enumerate() {
      assert_eq!(pt, &star.vertex_at(idx));
    }
    let reversed: Vec<Point<f64, 2>> = star.outline().rev().collect();
    assert_eq!(reversed.first(), outline.last());
    Ok(())
  }

  #[test]
  fn outline_stays_inside_the_bounding_square() -> Result<(), Error> {
    let star: StarPolygon<f64> = StarPolygon::new(25.0, 12, 5)?;
    let size = 2.0 * star.radius();
    for pt in star.outline() {
      assert!(*pt.x_coord() >= -1e-9 && *pt.x_coord() <= size + 1e-9);
      assert!(*pt.y_coord() >= -1e-9 && *pt.y_coord() <= size + 1e-9);
    }
    Ok(())
  }

  #[test]
  fn callbacks_see_every_mutation() -> Result<(), Error> {
    let log = RefCell::new(Vec::new());
    let mut star = StarPolygon::with_listener(1.0_f64, 8, 3, || log.borrow_mut().push("changed"))?;
    star.set_radius(2.0)?;
    star.set_connect_distance(10);
    assert_eq!(star.connect_distance(), 2);
    assert!(star.set_points(1).is_err());
    assert_eq!(log.borrow().len(), 3);
    Ok(())
  }

  #[test]
  fn zero_radius_collapses_to_a_point() -> Result<(), Error> {
    let star: StarPolygon<f32> = StarPolygon::new(0.0, 5, 1)?;
    for pt in star.outline() {
      assert_eq!(pt, Point::new([0.0, 0.0]));
    }
    Ok(())
  }
}
