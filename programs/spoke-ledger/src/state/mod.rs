pub mod fill;
pub mod root_bundle;
pub mod state;
pub mod transfer_liability;

pub use fill::*;
pub use root_bundle::*;
pub use state::*;
pub use transfer_liability::*;
