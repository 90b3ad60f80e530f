mod directed_edge;
mod hull;
pub(crate) mod point;

pub use directed_edge::DirectedEdge;
pub use hull::{Degeneracy, Hull};
pub use point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
