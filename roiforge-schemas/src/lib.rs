//! Value records shared by the roiforge engine and its callers.
//!
//! Every type here is plain data: constructed once from validated input,
//! read by the engine, and discarded. Nothing in this crate computes.

pub mod calculation;
pub mod file_formats;
pub mod revenue;
pub mod task;
pub mod team;
pub mod tool;
