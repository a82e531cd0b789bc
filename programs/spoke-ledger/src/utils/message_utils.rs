use crate::utils::keccak256;

// Empty message is not hashed and emits zeroed bytes32 for easier human observability.
pub fn hash_non_empty_message(message: &[u8]) -> [u8; 32] {
    match message.len() {
        0 => [0u8; 32],
        _ => keccak256(message),
    }
}
