use crate::Point;

/// An affine map acting on the vector space `V` and its points.
///
/// Vectors only see the linear part, points see the whole map including translation.
pub trait AffineTransform<V> {
  fn apply_vector(&self, v: V) -> V;
  fn apply_point(&self, p: Point<V>) -> Point<V>;
}

impl<V, M: AffineTransform<V>> AffineTransform<V> for &M {
  #[inline(always)]
  fn apply_vector(&self, v: V) -> V {
    (**self).apply_vector(v)
  }
  #[inline(always)]
  fn apply_point(&self, p: Point<V>) -> Point<V> {
    (**self).apply_point(p)
  }
}
