mod line;
pub(crate) mod point;

pub use line::Line;
pub use point::Point;
