pub mod data;
pub mod render;

pub use data::*;
pub use render::*;

pub use binsize_domain::BinRow;
