pub mod bitmap_utils;
pub mod fee_utils;
pub mod merkle_proof_utils;
pub mod merkle_tree;
pub mod message_utils;
pub mod relay_hash_utils;
pub mod transfer_utils;

pub use bitmap_utils::*;
pub use fee_utils::*;
pub use merkle_proof_utils::*;
pub use merkle_tree::*;
pub use message_utils::*;
pub use relay_hash_utils::*;
pub use transfer_utils::*;
