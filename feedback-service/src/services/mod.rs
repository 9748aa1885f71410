//! Core request pipeline: prompt rendering, model invocation, output recovery.

pub mod extract;
pub mod prompt;
pub mod providers;
