pub mod relay_data;

pub use relay_data::*;
