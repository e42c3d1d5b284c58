//! Console rendering of quiz state

pub mod console;
