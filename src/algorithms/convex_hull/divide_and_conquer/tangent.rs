use log::warn;

use super::arena::{HullArena, NodeId, Rotation, Side, SubHull};
use crate::data::Point;
use crate::{Orientation, PolygonScalar};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Tangent {
  Upper,
  Lower,
}

impl Tangent {
  /// Which way the left and right endpoints travel around their hulls.
  fn rotations(self) -> (Rotation, Rotation) {
    match self {
      Tangent::Upper => (Rotation::CounterClockWise, Rotation::ClockWise),
      Tangent::Lower => (Rotation::ClockWise, Rotation::CounterClockWise),
    }
  }

  /// Points on this side of a candidate `left -> right` are not yet below
  /// (upper) or above (lower) it.
  fn outward(self) -> Orientation {
    match self {
      Tangent::Upper => Orientation::CounterClockWise,
      Tangent::Lower => Orientation::ClockWise,
    }
  }
}

/// Candidate bridge between a left and a right sub-hull.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct HullEdge {
  pub left: NodeId,
  pub right: NodeId,
}

impl HullEdge {
  /// True if moving the endpoint on `side` to `candidate` rotates the edge
  /// further outwards. A co-linear candidate only counts when it lengthens
  /// the edge, so the finished tangent never ends on a co-linear vertex.
  fn rotates_to<T>(&self, arena: &HullArena<'_, T>, candidate: NodeId, side: Side, kind: Tangent) -> bool
  where
    T: PolygonScalar,
  {
    let orientation = Point::orient(
      arena.point(self.left),
      arena.point(self.right),
      arena.point(candidate),
    );
    if orientation == kind.outward() {
      return true;
    }
    orientation.is_colinear()
      && match side {
        Side::Left => candidate < self.left,
        Side::Right => candidate > self.right,
      }
  }
}

/// Find the upper or lower tangent of two sub-hulls.
///
/// Starts from the two pivots and alternately walks each endpoint around its
/// hull while that rotates the bridge outwards, until neither side can move.
/// Each endpoint takes at most one step per vertex of its hull.
pub(crate) fn find_tangent<T>(
  arena: &HullArena<'_, T>,
  left: &SubHull,
  right: &SubHull,
  kind: Tangent,
) -> HullEdge
where
  T: PolygonScalar,
{
  debug_assert_eq!(left.side, Side::Left);
  debug_assert_eq!(right.side, Side::Right);
  let (left_rotation, right_rotation) = kind.rotations();
  let mut edge = HullEdge {
    left: left.pivot,
    right: right.pivot,
  };
  let mut left_budget = left.len;
  let mut right_budget = right.len;
  loop {
    let mut moved = false;
    while left_budget > 0 {
      let next = arena.step(edge.left, left_rotation);
      if !edge.rotates_to(arena, next, Side::Left, kind) {
        break;
      }
      edge.left = next;
      left_budget -= 1;
      moved = true;
    }
    while right_budget > 0 {
      let next = arena.step(edge.right, right_rotation);
      if !edge.rotates_to(arena, next, Side::Right, kind) {
        break;
      }
      edge.right = next;
      right_budget -= 1;
      moved = true;
    }
    if !moved {
      break;
    }
  }
  if left_budget == 0 || right_budget == 0 {
    let left_open = edge.rotates_to(arena, arena.step(edge.left, left_rotation), Side::Left, kind);
    let right_open = edge.rotates_to(
      arena,
      arena.step(edge.right, right_rotation),
      Side::Right,
      kind,
    );
    if left_open || right_open {
      warn!("{:?} tangent walk stopped at its bound on {:?}", kind, edge);
    }
  }
  edge
}
