pub mod admin;
pub mod bundle;
pub mod fill;
pub mod slow_fill;

pub use admin::*;
pub use bundle::*;
pub use fill::*;
pub use slow_fill::*;
