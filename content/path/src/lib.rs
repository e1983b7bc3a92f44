//! Trails and paths: the position free and the anchored halves of a vector drawing.
//!
//! A [`Trail`] is a run of segments that knows nothing about where it sits, so translating it
//! changes nothing. A [`Path`] places trails at absolute anchor points and keeps them as a set:
//! the same trail at the same anchor is stored once.

mod located;
mod path;
mod trail;

pub use located::*;
pub use path::*;
pub use trail::*;
