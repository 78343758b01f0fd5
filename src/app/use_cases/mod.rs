//! Use-Cases auf unveränderlichen Kurven.

pub mod point_editing;
pub mod sampling;
pub mod timed_values;
