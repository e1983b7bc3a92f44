use std::ops::*;

use crate::*;

/// https://en.wikipedia.org/wiki/Vector_space
///
/// free displacements; a position in the space is a [`Point`] over the vector instead.
pub trait VectorSpace<T>:
  Add<Self, Output = Self>
  + Sub<Self, Output = Self>
  + Neg<Output = Self>
  + Mul<T, Output = Self>
  + Div<T, Output = Self>
  + Sized
  + Copy
{
  #[must_use]
  fn zero() -> Self;

  fn is_finite(&self) -> bool;

  #[inline]
  #[must_use]
  fn sum(iter: impl IntoIterator<Item = Self>) -> Self {
    iter.into_iter().fold(Self::zero(), |acc, v| acc + v)
  }
}

/// https://en.wikipedia.org/wiki/Inner_product
///
/// inner space define the length and angle based on vector space
pub trait InnerProductSpace<T: Scalar>: VectorSpace<T> {
  fn dot(&self, b: Self) -> T;

  #[inline]
  fn length2(&self) -> T {
    self.dot(*self)
  }

  #[inline]
  fn length(&self) -> T {
    self.length2().sqrt()
  }

  #[inline]
  #[must_use]
  fn normalize(&self) -> Self {
    let mag_sq = self.length2();
    if mag_sq > T::zero() {
      let inv_sqrt = T::one() / mag_sq.sqrt();
      return *self * inv_sqrt;
    }
    *self
  }
}
