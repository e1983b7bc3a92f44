//! Packages a path as a primitive a rendering layer can place and measure.

use std::collections::BTreeMap;

use strand_algebra::*;
use strand_geometry::*;
use strand_path::*;

/// Named anchor points a diagram can refer to. Strokes never name anything, so the table
/// they carry is empty; it exists so a renderer can merge tables of many primitives.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct NameTable<V> {
  names: BTreeMap<String, Vec<Point<V>>>,
}

impl<V> Default for NameTable<V> {
  fn default() -> Self {
    Self {
      names: BTreeMap::new(),
    }
  }
}

impl<V> NameTable<V> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }

  pub fn len(&self) -> usize {
    self.names.len()
  }

  pub fn get(&self, name: &str) -> Option<&[Point<V>]> {
    self.names.get(name).map(Vec::as_slice)
  }
}

/// A stroked path: the path itself, its extent, and no names.
#[derive(Debug, Clone)]
pub struct StrokePrimitive<T, V> {
  pub path: Path<V>,
  pub extent: Extent<T, V>,
  pub names: NameTable<V>,
}

impl<T, V> StrokePrimitive<T, V> {
  /// Strokes are infinitely thin, so no point is ever inside one.
  pub fn hit_test(&self, _point: Point<V>) -> bool {
    false
  }
}

impl<T: Scalar> StrokePrimitive<T, Vec2<T>> {
  pub fn bounding_box(&self) -> Option<Box2<T>> {
    self.extent.bounding_box()
  }
}

pub fn stroke<T, V>(path: Path<V>) -> StrokePrimitive<T, V>
where
  T: Scalar,
  V: InnerProductSpace<T> + StructuralOrd,
{
  let extent = path.bounding_extent();
  log::debug!("stroked a path of {} trails", path.len());
  StrokePrimitive {
    path,
    extent,
    names: NameTable::new(),
  }
}

/// stroke a trail that starts at the origin
pub fn stroke_trail<T, V>(trail: Trail<V>) -> StrokePrimitive<T, V>
where
  T: Scalar,
  V: InnerProductSpace<T> + StructuralOrd,
{
  stroke(Path::from_trail_at(trail, Point::origin()))
}
