#![allow(missing_docs)]
pub mod grabbing;
pub mod hands;

pub use grabbing::grabbing_system;
pub use hands::{hands_system, HandSamples};
