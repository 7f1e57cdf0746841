pub mod dashboard_page;
pub mod stylesheet;

pub use dashboard_page::*;
pub use stylesheet::*;
