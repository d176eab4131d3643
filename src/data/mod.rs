pub mod generator;
pub mod observation;
pub mod region;

pub use generator::{YEAR_END, YEAR_START, generate, generate_with, trend};
pub use observation::{Dataset, Observation};
pub use region::{Baseline, Region, RegionSelection};
