pub fn is_claimed(claimed_bitmap: &[u8], index: u32) -> bool {
    let byte_index = (index / 8) as usize; // Index of the byte in the array
    if byte_index >= claimed_bitmap.len() {
        return false; // Out of bounds, treat as not claimed
    }
    let bit_in_byte_index = (index % 8) as usize; // Index of the bit within the byte
    let claimed_byte = claimed_bitmap[byte_index];
    let mask = 1 << bit_in_byte_index;
    claimed_byte & mask == mask
}

pub fn set_claimed(claimed_bitmap: &mut Vec<u8>, index: u32) {
    let byte_index = (index / 8) as usize; // Index of the byte in the array
    if byte_index >= claimed_bitmap.len() {
        claimed_bitmap.resize(byte_index + 1, 0); // Grow the bitmap to cover the new leaf id
    }
    let bit_in_byte_index = (index % 8) as usize; // Index of the bit within the byte
    claimed_bitmap[byte_index] |= 1 << bit_in_byte_index;
}
