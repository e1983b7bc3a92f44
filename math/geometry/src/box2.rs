use strand_algebra::*;

#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Box2<T> {
  pub min: Point2<T>,
  pub max: Point2<T>,
}

impl<T: Scalar> Box2<T> {
  pub fn new(min: Point2<T>, max: Point2<T>) -> Self {
    Self { min, max }
  }

  pub fn width(&self) -> T {
    self.max.x() - self.min.x()
  }

  pub fn height(&self) -> T {
    self.max.y() - self.min.y()
  }

  pub fn size(&self) -> Vec2<T> {
    self.max - self.min
  }

  pub fn center(&self) -> Point2<T> {
    self.min + self.size() * T::half()
  }

  pub fn contains(&self, p: Point2<T>) -> bool {
    p.x() >= self.min.x() && p.x() <= self.max.x() && p.y() >= self.min.y() && p.y() <= self.max.y()
  }

  #[must_use]
  pub fn union(&self, other: &Self) -> Self {
    Self {
      min: Point(self.min.0.min(other.min.0)),
      max: Point(self.max.0.max(other.max.0)),
    }
  }
}

#[test]
fn box_ops() {
  let a = Box2::new(point2(0., 0.), point2(2., 1.));
  let b = Box2::new(point2(-1., 0.5), point2(1., 3.));
  assert_eq!(a.width(), 2.);
  assert_eq!(a.height(), 1.);
  assert_eq!(a.center(), point2(1., 0.5));
  assert!(a.contains(point2(2., 0.)));
  assert!(!a.contains(point2(2.1, 0.)));
  assert_eq!(a.union(&b), Box2::new(point2(-1., 0.), point2(2., 3.)));
}
