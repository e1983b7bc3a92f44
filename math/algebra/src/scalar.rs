use std::fmt::Debug;

use num_traits::{Float, FloatConst};

use crate::StructuralOrd;

/// The real number type every vector space here is built on.
pub trait Scalar:
  Float + FloatConst + StructuralOrd + Debug + Default + Send + Sync + 'static
{
  #[inline(always)]
  fn two() -> Self {
    Self::one() + Self::one()
  }

  #[inline(always)]
  fn three() -> Self {
    Self::two() + Self::one()
  }

  #[inline(always)]
  fn half() -> Self {
    Self::one() / Self::two()
  }

  fn by_usize(v: usize) -> Self;

  #[inline]
  fn by_usize_div(a: usize, b: usize) -> Self {
    Self::by_usize(a) / Self::by_usize(b)
  }

  /// absolute and relative tolerant compare, for results that went through rounding
  #[inline]
  fn approx_eq(self, other: Self, epsilon: Self) -> bool {
    if self == other {
      return true;
    }
    let diff = (self - other).abs();
    let largest = self.abs().max(other.abs());
    diff <= epsilon || diff <= largest * epsilon
  }
}

impl Scalar for f32 {
  #[inline(always)]
  fn by_usize(v: usize) -> Self {
    v as f32
  }
}

impl Scalar for f64 {
  #[inline(always)]
  fn by_usize(v: usize) -> Self {
    v as f64
  }
}

#[test]
fn approx() {
  assert!(0.1_f64.approx_eq(0.1 + 1e-12, 1e-9));
  assert!(!1_f64.approx_eq(1.1, 1e-9));
  assert!(f32::INFINITY.approx_eq(f32::INFINITY, 1e-6));
  assert_eq!(f64::by_usize_div(1, 4), 0.25);
}
