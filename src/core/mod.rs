pub mod aggregator;
pub mod calculator;
pub mod logic;
pub mod normalizer;

pub use logic::{Core, PipelineStats};
