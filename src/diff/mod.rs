//! Diff module - Structural comparison of two documents.
//!
//! The comparator is a pure function: it never fails, never mutates its
//! inputs and holds no state between calls.

mod comparator;
mod render;
mod report;

#[cfg(test)]
mod compare_test;

pub use comparator::*;
pub use render::*;
pub use report::*;
