use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

use strand_algebra::*;
use strand_geometry::*;

/// An ordered run of segments, each starting where the previous one ended.
///
/// A trail stores no position: it is pinned down only when paired with an anchor point (see
/// [`crate::Located`]). Translating a trail is therefore the identity, and only the linear part
/// of an affine map changes it.
///
/// Trails concatenate into a monoid: [`Trail::empty`] is the identity and [`Trail::concat`]
/// is associative. The result of a concatenation is closed when either side was closed.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct Trail<V> {
  segments: Vec<Segment<V>>,
  closed: bool,
}

impl<V> Default for Trail<V> {
  fn default() -> Self {
    Self::empty()
  }
}

impl<V> Trail<V> {
  pub fn new(segments: Vec<Segment<V>>, closed: bool) -> Self {
    Self { segments, closed }
  }

  pub fn empty() -> Self {
    Self::new(Vec::new(), false)
  }

  pub fn from_segments(segments: impl IntoIterator<Item = Segment<V>>) -> Self {
    Self::new(segments.into_iter().collect(), false)
  }

  /// an open trail of straight segments, one per offset
  pub fn from_offsets(offsets: impl IntoIterator<Item = V>) -> Self {
    Self::from_segments(offsets.into_iter().map(Segment::linear))
  }

  #[must_use]
  pub fn close(mut self) -> Self {
    self.closed = true;
    self
  }

  #[must_use]
  pub fn open(mut self) -> Self {
    self.closed = false;
    self
  }

  pub fn is_closed(&self) -> bool {
    self.closed
  }

  pub fn segments(&self) -> &[Segment<V>] {
    &self.segments
  }

  pub fn len(&self) -> usize {
    self.segments.len()
  }

  pub fn is_empty(&self) -> bool {
    self.segments.is_empty()
  }
}

impl<V: Copy> Trail<V> {
  /// [`Trail::from_offsets`], refusing offsets with a NaN or infinite component
  pub fn try_from_offsets<T>(offsets: impl IntoIterator<Item = V>) -> Result<Self, GeometryError>
  where
    V: VectorSpace<T>,
  {
    let segments = offsets
      .into_iter()
      .enumerate()
      .map(|(index, offset)| {
        if offset.is_finite() {
          Ok(Segment::linear(offset))
        } else {
          Err(GeometryError::NonFiniteOffset { index })
        }
      })
      .collect::<Result<Vec<_>, _>>()?;
    Ok(Self::new(segments, false))
  }

  /// Straight segments between consecutive points.
  ///
  /// Only the relative geometry survives: the first point is not stored, so callers that need
  /// the trail in place pair it with that point again. Fewer than two points give the empty
  /// trail.
  pub fn from_vertices(points: impl IntoIterator<Item = Point<V>>) -> Self
  where
    V: Sub<Output = V>,
  {
    let mut points = points.into_iter();
    let Some(mut previous) = points.next() else {
      return Self::empty();
    };
    Self::from_offsets(points.map(|p| {
      let offset = p - previous;
      previous = p;
      offset
    }))
  }

  /// each segment's own offset, in order
  pub fn offsets(&self) -> impl Iterator<Item = V> + '_ {
    self.segments.iter().map(Segment::offset)
  }

  /// Net displacement from the start of the trail to its end.
  ///
  /// Closing a trail does not add a closing segment, so this ignores the closed flag.
  pub fn total_offset<T>(&self) -> V
  where
    V: VectorSpace<T>,
  {
    VectorSpace::sum(self.offsets())
  }

  /// `self • other`
  #[must_use]
  pub fn concat(&self, other: &Self) -> Self {
    let mut segments = Vec::with_capacity(self.len() + other.len());
    segments.extend_from_slice(&self.segments);
    segments.extend_from_slice(&other.segments);
    Self::new(segments, self.closed || other.closed)
  }

  #[must_use]
  pub fn transform(&self, mat: &impl AffineTransform<V>) -> Self {
    Self::new(
      self.segments.iter().map(|s| s.transformed(mat)).collect(),
      self.closed,
    )
  }

  /// A trail has no position, so there is nothing to move.
  #[must_use]
  pub fn translate(self, _by: V) -> Self {
    self
  }

  /// the same trail walked from its end back to its start
  #[must_use]
  pub fn reverse(&self) -> Self
  where
    V: Sub<Output = V> + Neg<Output = V>,
  {
    Self::new(
      self.segments.iter().rev().map(Segment::reverse).collect(),
      self.closed,
    )
  }

  /// every vertex the trail visits when it starts at `start`, `start` included
  pub fn vertices_from(&self, start: Point<V>) -> Vec<Point<V>>
  where
    V: Add<Output = V>,
  {
    let mut vertices = Vec::with_capacity(self.len() + 1);
    vertices.push(start);
    let mut at = start;
    for offset in self.offsets() {
      at = at + offset;
      vertices.push(at);
    }
    vertices
  }

  /// The extent of the trail when its first vertex sits at `start`.
  ///
  /// Each segment's own extent is rebased by the running offset at which the segment begins,
  /// the pieces are unioned, and the union is moved to `start`. The segments are visited once,
  /// in order. A trail without segments is just its start vertex.
  pub fn bounding_extent<T>(&self, start: Point<V>) -> Extent<T, V>
  where
    T: Scalar,
    V: InnerProductSpace<T>,
  {
    if self.segments.is_empty() {
      return Extent::Point(start.to_vector());
    }

    let mut at = V::zero();
    let mut pieces = Vec::with_capacity(self.segments.len());
    for segment in &self.segments {
      pieces.push(Extent::Segment(*segment).rebase(at));
      at = at + segment.offset();
    }
    log::trace!("trail extent built from {} segments", pieces.len());

    Extent::unions(pieces).rebase(start.to_vector())
  }
}

impl<V: Copy> Add for Trail<V> {
  type Output = Self;

  fn add(mut self, rhs: Self) -> Self {
    self.segments.extend(rhs.segments);
    self.closed |= rhs.closed;
    self
  }
}

impl<V: Copy> Sum for Trail<V> {
  fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
    iter.fold(Self::empty(), Add::add)
  }
}

impl<V: StructuralOrd> StructuralOrd for Trail<V> {
  fn structural_cmp(&self, other: &Self) -> Ordering {
    self
      .segments
      .structural_cmp(&other.segments)
      .then_with(|| self.closed.cmp(&other.closed))
  }
}
