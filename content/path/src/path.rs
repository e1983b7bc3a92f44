use std::collections::{btree_set, BTreeSet};
use std::ops::{Add, Sub};

use strand_algebra::*;
use strand_geometry::*;

use crate::{Located, Trail};

/// A set of anchored trails.
///
/// Trails are kept in a [`BTreeSet`] ordered by [`StructuralOrd`], so the same trail at the
/// same anchor appears once and iteration order never depends on how the path was assembled.
/// Union is the set union, which makes paths a commutative, idempotent monoid with
/// [`Path::empty`] as identity.
#[derive(Serialize, Deserialize)]
#[serde(bound(
  serialize = "V: Serialize",
  deserialize = "V: Deserialize<'de> + StructuralOrd"
))]
#[derive(Debug, Clone)]
pub struct Path<V> {
  trails: BTreeSet<Located<V>>,
}

pub type Path2<T> = Path<Vec2<T>>;

impl<V> Default for Path<V> {
  fn default() -> Self {
    Self {
      trails: BTreeSet::new(),
    }
  }
}

impl<V> Path<V> {
  pub fn empty() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.trails.len()
  }

  pub fn is_empty(&self) -> bool {
    self.trails.is_empty()
  }

  pub fn iter(&self) -> btree_set::Iter<'_, Located<V>> {
    self.trails.iter()
  }
}

impl<V: Copy + StructuralOrd> Path<V> {
  /// A single open trail through the given points, anchored at the first of them.
  ///
  /// No points at all give the empty path. A lone point gives a trail with no segments
  /// sitting at that point.
  pub fn from_vertices(points: impl IntoIterator<Item = Point<V>>) -> Self
  where
    V: Sub<Output = V>,
  {
    let points: Vec<_> = points.into_iter().collect();
    match points.first() {
      None => Self::empty(),
      Some(&anchor) => Self::from_trail_at(Trail::from_vertices(points), anchor),
    }
  }

  /// one open trail of straight segments starting at `start`
  pub fn from_offsets(start: Point<V>, offsets: impl IntoIterator<Item = V>) -> Self {
    Self::from_trail_at(Trail::from_offsets(offsets), start)
  }

  pub fn from_trail_at(trail: Trail<V>, anchor: Point<V>) -> Self {
    Located::new(trail, anchor).into()
  }

  /// `self ∪ other`, with duplicates collapsed
  #[must_use]
  pub fn union(mut self, mut other: Self) -> Self {
    let before = self.len() + other.len();
    self.trails.append(&mut other.trails);
    log::trace!(
      "path union kept {} trails, collapsed {} duplicates",
      self.len(),
      before - self.len()
    );
    self
  }

  /// Close every trail. Trails that only differed by their closed flag merge.
  #[must_use]
  pub fn close_path(self) -> Self {
    self.trails.into_iter().map(Located::close).collect()
  }

  /// Open every trail. Trails that only differed by their closed flag merge.
  #[must_use]
  pub fn open_path(self) -> Self {
    self.trails.into_iter().map(Located::open).collect()
  }

  /// Apply `mat` to every trail: anchors move with the whole map, trails with its linear part.
  #[must_use]
  pub fn transform(&self, mat: &impl AffineTransform<V>) -> Self {
    self.iter().map(|located| located.transform(mat)).collect()
  }

  #[must_use]
  pub fn translate(&self, by: V) -> Self
  where
    V: Add<Output = V>,
  {
    self.iter().map(|located| located.translate(by)).collect()
  }

  /// the absolute vertices of every trail, in the path's iteration order
  pub fn vertices(&self) -> Vec<Vec<Point<V>>>
  where
    V: Add<Output = V>,
  {
    self.iter().map(Located::vertices).collect()
  }

  /// Union of the extents of all trails. The empty path has the empty extent.
  pub fn bounding_extent<T>(&self) -> Extent<T, V>
  where
    T: Scalar,
    V: InnerProductSpace<T>,
  {
    Extent::unions(self.iter().map(Located::bounding_extent))
  }

  /// [`Path::bounding_extent`] with the trail extents built on the rayon pool.
  #[cfg(feature = "parallel")]
  pub fn par_bounding_extent<T>(&self) -> Extent<T, V>
  where
    T: Scalar,
    V: InnerProductSpace<T> + Send + Sync,
  {
    use rayon::prelude::*;

    let pieces: Vec<_> = self
      .trails
      .par_iter()
      .map(Located::bounding_extent)
      .collect();
    Extent::unions(pieces)
  }
}

impl<V: StructuralOrd> PartialEq for Path<V> {
  fn eq(&self, other: &Self) -> bool {
    self.trails == other.trails
  }
}

impl<V: StructuralOrd> Eq for Path<V> {}

impl<V: StructuralOrd> From<Located<V>> for Path<V> {
  fn from(located: Located<V>) -> Self {
    Self {
      trails: BTreeSet::from([located]),
    }
  }
}

impl<V: StructuralOrd> FromIterator<Located<V>> for Path<V> {
  fn from_iter<I: IntoIterator<Item = Located<V>>>(iter: I) -> Self {
    Self {
      trails: iter.into_iter().collect(),
    }
  }
}

impl<V: StructuralOrd> Extend<Located<V>> for Path<V> {
  fn extend<I: IntoIterator<Item = Located<V>>>(&mut self, iter: I) {
    self.trails.extend(iter)
  }
}

impl<V> IntoIterator for Path<V> {
  type Item = Located<V>;
  type IntoIter = btree_set::IntoIter<Located<V>>;

  fn into_iter(self) -> Self::IntoIter {
    self.trails.into_iter()
  }
}

impl<'a, V> IntoIterator for &'a Path<V> {
  type Item = &'a Located<V>;
  type IntoIter = btree_set::Iter<'a, Located<V>>;

  fn into_iter(self) -> Self::IntoIter {
    self.trails.iter()
  }
}

impl<V: Copy + StructuralOrd> Add for Path<V> {
  type Output = Self;

  fn add(self, rhs: Self) -> Self {
    self.union(rhs)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn unit_square() -> Path2<f64> {
    Path::from_offsets(
      point2(0., 0.),
      [vec2(1., 0.), vec2(0., 1.), vec2(-1., 0.)],
    )
    .close_path()
  }

  #[test]
  fn vertices_of_a_single_trail() {
    let p = Path::from_vertices([point2(0., 0.), point2(1., 0.), point2(1., 2.)]);
    assert_eq!(p.len(), 1);
    assert_eq!(
      p.vertices(),
      vec![vec![point2(0., 0.), point2(1., 0.), point2(1., 2.)]]
    );

    assert!(Path2::<f64>::from_vertices([]).is_empty());

    let lone = Path::from_vertices([point2(3., 4.)]);
    assert_eq!(lone.vertices(), vec![vec![point2(3., 4.)]]);
  }

  #[test]
  fn duplicates_collapse() {
    let a = Path::from_vertices([point2(0., 0.), point2(1., 0.)]);
    let b = Path::from_vertices([point2(0., 0.), point2(1., 0.)]);
    let u = a.clone() + b;
    assert_eq!(u.len(), 1);
    assert_eq!(u, a);

    let moved = Path::from_vertices([point2(0., 1.), point2(1., 1.)]);
    assert_eq!((u + moved).len(), 2);
  }

  #[test]
  fn signed_zero_offsets_dedupe() {
    let reversed = Trail::from_offsets([vec2(0., 1.)]).reverse();
    let direct = Trail::from_offsets([vec2(0., -1.)]);
    assert_eq!(reversed, direct);

    let p = Path::from_trail_at(reversed, point2(0., 0.))
      + Path::from_trail_at(direct, point2(-0., 0.));
    assert_eq!(p.len(), 1);
  }

  #[test]
  fn path_is_a_serde_value() {
    fn serde_value<T: Serialize + serde::de::DeserializeOwned>() {}
    serde_value::<Path2<f64>>();
    serde_value::<Path2<f32>>();
  }

  #[test]
  fn close_then_open_merges_flags() {
    let open = Path::from_offsets(point2(0., 0.), [vec2(1., 0.)]);
    let closed = open.clone().close_path();
    assert_ne!(open, closed);

    let both = open.clone() + closed.clone();
    assert_eq!(both.len(), 2);
    assert_eq!(both.clone().close_path(), closed);
    assert_eq!(both.open_path(), open);
  }

  #[test]
  fn transform_moves_anchors_only_by_translation() {
    let square = unit_square();
    let moved = square.transform(&Mat3::translate((5., 0.)));
    let located = moved.iter().next().unwrap();
    assert_eq!(located.anchor, point2(5., 0.));
    assert_eq!(located.trail, square.iter().next().unwrap().trail);
    assert_eq!(moved, square.translate(vec2(5., 0.)));
  }

  #[test]
  fn bounding_extent_of_union() {
    let square = unit_square();
    let far = Path::from_offsets(point2(4., -2.), [vec2(0., 1.)]);
    let e: Extent<f64, Vec2<f64>> = (square + far).bounding_extent();
    let b = e.bounding_box().unwrap();
    assert_eq!(b.min, point2(0., -2.));
    assert_eq!(b.max, point2(4., 1.));
  }

  #[test]
  fn empty_path_has_empty_extent() {
    let e: Extent<f64, Vec2<f64>> = Path2::<f64>::empty().bounding_extent();
    assert!(e.is_empty());
    assert_eq!(e.query(vec2(0., 1.)), f64::NEG_INFINITY);
  }

  #[cfg(feature = "parallel")]
  #[test]
  fn parallel_extent_matches() {
    let path: Path2<f64> = (0..32)
      .map(|i| {
        let x = f64::by_usize(i);
        Located::new(
          Trail::from_offsets([vec2(1., x), vec2(-x, 0.5)]),
          point2(x, -x),
        )
      })
      .collect();
    let serial: Extent<f64, Vec2<f64>> = path.bounding_extent();
    let parallel: Extent<f64, Vec2<f64>> = path.par_bounding_extent();
    for i in 0..16 {
      let d = Vec2::unit_x().rotate(f64::by_usize_div(i, 16) * std::f64::consts::TAU);
      assert_eq!(serial.query(d), parallel.query(d));
    }
  }
}
