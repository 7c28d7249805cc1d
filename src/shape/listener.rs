/// Hook invoked whenever a shape's geometry changes.
///
/// Hosts cache tessellation, bounds and texture coordinates. A shape calls
/// [`geometry_changed`](GeometryListener::geometry_changed) after construction
/// and after every successful mutation so that the host can rebuild those
/// caches on the next draw.
pub trait GeometryListener {
  fn geometry_changed(&mut self);
}

/// No host attached.
impl GeometryListener for () {
  fn geometry_changed(&mut self) {}
}

impl<F: FnMut()> GeometryListener for F {
  fn geometry_changed(&mut self) {
    (*self)()
  }
}

/// Dirty flag for hosts that poll instead of reacting to callbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dirty {
  stale: bool,
}

impl Dirty {
  pub fn new() -> Dirty {
    Dirty::default()
  }

  pub fn is_stale(&self) -> bool {
    self.stale
  }

  /// Reset the flag, returning whether it was set.
  pub fn take(&mut self) -> bool {
    std::mem::replace(&mut self.stale, false)
  }
}

impl GeometryListener for Dirty {
  fn geometry_changed(&mut self) {
    self.stale = true;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dirty_flag_is_taken_once() {
    let mut dirty = Dirty::new();
    assert!(!dirty.is_stale());
    dirty.geometry_changed();
    dirty.geometry_changed();
    assert!(dirty.is_stale());
    assert!(dirty.take());
    assert!(!dirty.take());
  }

  #[test]
  fn closures_are_listeners() {
    let mut count = 0;
    {
      let mut listener = || count += 1;
      listener.geometry_changed();
      listener.geometry_changed();
    }
    assert_eq!(count, 2);
  }
}
