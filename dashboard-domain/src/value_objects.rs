// Domain value objects
pub mod average_basis;
pub mod identifiers;
pub mod risk_level;

pub use average_basis::*;
pub use identifiers::*;
pub use risk_level::*;
