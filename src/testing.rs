// Strategies and generators for:
//  * points
//  * point clouds
// A Strategy is a way to generate a shrinkable value.
use crate::data::Point;

use num_bigint::BigInt;
use num_traits::*;
use ordered_float::NotNan;
use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;
use std::convert::TryInto;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl<T: Arbitrary> Arbitrary for Point<T>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
  T: Clone,
{
  type Strategy = Mapped<(T, T), Point<T>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    any_with::<(T, T)>((params.clone(), params)).prop_map(|(x, y)| Point::new([x, y]))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Convenience functions

pub fn any_64() -> impl Strategy<Value = Point<i64>> {
  any::<Point<i64>>()
}

// Arbitrary isn't defined for NotNan.
pub fn any_nn() -> impl Strategy<Value = Point<NotNan<f64>>> {
  any::<Point<f64>>().prop_filter_map("Check for NaN", |pt| pt.cast(rem_float).try_into().ok())
}

// Float representation: mantissa * 2^exponent * sign
// This function changes the exponent modulo 250. This rules out extreme
// numbers (very large, very small, very close to zero). Such extremes
// are likely to overflow since the arbitrary precision machinery we're
// using cannot compute answers with an exponent larger than 1024.
fn rem_float(f: f64) -> f64 {
  let (mantissa, exponent, sign) = f.integer_decode();
  ((mantissa as f64) * 2f64.powi(exponent as i32 % 250)).copysign(sign as f64)
}

// Arbitrary isn't defined for BigInt.
pub fn any_r() -> impl Strategy<Value = Point<BigInt>> {
  any::<Point<isize>>().prop_map(|pt| pt.cast(BigInt::from))
}

// Points on a 9x9 grid. Lots of duplicates and co-linear runs.
pub fn any_grid() -> impl Strategy<Value = Point<i32>> {
  (-4i32..=4, -4i32..=4).prop_map(|(x, y)| Point::new([x, y]))
}

///////////////////////////////////////////////////////////////////////////////
// Point clouds

const DISK_RADIUS: i64 = 1_000_000;

/// `n` points drawn uniformly from a disk centered on the origin.
pub fn points_in_disk<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point<i64>> {
  let mut pts = Vec::with_capacity(n);
  while pts.len() < n {
    let x = rng.gen_range(-DISK_RADIUS..=DISK_RADIUS);
    let y = rng.gen_range(-DISK_RADIUS..=DISK_RADIUS);
    if x * x + y * y <= DISK_RADIUS * DISK_RADIUS {
      pts.push(Point::new([x, y]));
    }
  }
  pts
}

/// `n` distinct points on the parabola `y = x^2`, shuffled. Every point is a
/// hull vertex.
pub fn points_in_convex_position<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point<i64>> {
  let mut xs = BTreeSet::new();
  while xs.len() < n {
    xs.insert(rng.gen_range(-DISK_RADIUS..=DISK_RADIUS));
  }
  let mut pts: Vec<Point<i64>> = xs.into_iter().map(|x| Point::new([x, x * x])).collect();
  pts.shuffle(rng);
  pts
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::SeedableRng;

  #[test]
  fn disk_points_stay_in_disk() {
    let rng = &mut rand::rngs::SmallRng::seed_from_u64(1);
    let pts = points_in_disk(500, rng);
    assert_eq!(pts.len(), 500);
    for pt in pts {
      let [x, y] = pt.array;
      assert!(x * x + y * y <= DISK_RADIUS * DISK_RADIUS);
    }
  }

  #[test]
  fn convex_position_is_distinct() {
    let rng = &mut rand::rngs::SmallRng::seed_from_u64(2);
    let pts = points_in_convex_position(300, rng);
    let set: BTreeSet<_> = pts.iter().cloned().collect();
    assert_eq!(set.len(), 300);
  }
}
