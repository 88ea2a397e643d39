pub mod human_size;
pub mod measure;

pub use human_size::*;
pub use measure::*;

pub use binsize_domain::{SizeEntry, SizeReport};
