#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
  #[error("segment {component} is not finite")]
  NonFiniteComponent { component: &'static str },
  #[error("offset at index {index} is not finite")]
  NonFiniteOffset { index: usize },
}
