// Domain services
pub mod aggregation;

pub use aggregation::*;
