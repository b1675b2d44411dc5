pub mod curve;
pub mod generator;
pub mod phase;
