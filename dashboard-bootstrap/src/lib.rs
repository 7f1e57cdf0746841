pub mod context;
pub mod lifecycle;

pub use lifecycle::{render_standalone, render_to, run_standalone, serve};
