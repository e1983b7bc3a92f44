mod box2;
mod error;
mod extent;
mod segment;

pub use box2::*;
pub use error::*;
pub use extent::*;
pub use segment::*;
