// Domain entities
pub mod anomaly;
pub mod model;

pub use anomaly::*;
pub use model::*;
