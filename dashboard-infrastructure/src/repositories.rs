pub mod fixture_files;
pub mod in_memory;
pub mod sample_data;

pub use fixture_files::*;
pub use in_memory::*;
pub use sample_data::*;
