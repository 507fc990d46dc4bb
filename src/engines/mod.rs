//! Leaf computation engines. Neither module performs I/O or keeps state; both
//! are safe to call concurrently from any number of tasks.

pub mod matching;
pub mod tax;
