use std::cmp::Ordering;
use std::ops::Add;

use strand_algebra::*;
use strand_geometry::*;

use crate::Trail;

/// A trail pinned to the absolute position of its first vertex.
///
/// Equality and ordering are structural over the anchor and the trail (see [`StructuralOrd`]),
/// which is what lets a [`crate::Path`] keep its trails in an ordered set.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone)]
pub struct Located<V> {
  pub trail: Trail<V>,
  pub anchor: Point<V>,
}

impl<V> Located<V> {
  pub fn new(trail: Trail<V>, anchor: Point<V>) -> Self {
    Self { trail, anchor }
  }

  #[must_use]
  pub fn close(self) -> Self {
    Self::new(self.trail.close(), self.anchor)
  }

  #[must_use]
  pub fn open(self) -> Self {
    Self::new(self.trail.open(), self.anchor)
  }
}

impl<V: Copy> Located<V> {
  pub fn vertices(&self) -> Vec<Point<V>>
  where
    V: Add<Output = V>,
  {
    self.trail.vertices_from(self.anchor)
  }

  pub fn bounding_extent<T>(&self) -> Extent<T, V>
  where
    T: Scalar,
    V: InnerProductSpace<T>,
  {
    self.trail.bounding_extent(self.anchor)
  }

  /// The anchor takes the whole map, the trail only its linear part.
  #[must_use]
  pub fn transform(&self, mat: &impl AffineTransform<V>) -> Self {
    Self::new(self.trail.transform(mat), mat.apply_point(self.anchor))
  }

  #[must_use]
  pub fn translate(&self, by: V) -> Self
  where
    V: Add<Output = V>,
  {
    Self::new(self.trail.clone(), self.anchor + by)
  }
}

impl<V: StructuralOrd> StructuralOrd for Located<V> {
  fn structural_cmp(&self, other: &Self) -> Ordering {
    self
      .anchor
      .structural_cmp(&other.anchor)
      .then_with(|| self.trail.structural_cmp(&other.trail))
  }
}

impl<V: StructuralOrd> PartialEq for Located<V> {
  fn eq(&self, other: &Self) -> bool {
    self.structural_eq(other)
  }
}

impl<V: StructuralOrd> Eq for Located<V> {}

impl<V: StructuralOrd> PartialOrd for Located<V> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<V: StructuralOrd> Ord for Located<V> {
  fn cmp(&self, other: &Self) -> Ordering {
    self.structural_cmp(other)
  }
}

#[test]
fn transform_splits_point_and_vector() {
  let located = Located::new(Trail::from_offsets([vec2(1., 0.)]), point2(0., 0.));
  let moved = located.transform(&Mat3::translate((5., 0.)));
  assert_eq!(moved.anchor, point2(5., 0.));
  assert_eq!(moved.trail, located.trail);

  let turned = located.transform(&(Mat3::translate((1., 0.)) * Mat3::scale((2., 2.))));
  assert_eq!(turned.anchor, point2(1., 0.));
  assert_eq!(turned.vertices(), vec![point2(1., 0.), point2(3., 0.)]);

  assert_eq!(located.translate(vec2(0., 2.)).anchor, point2(0., 2.));
}
