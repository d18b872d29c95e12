/// `dst[i] ^= src[i]` over the common prefix.
#[inline]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= *s;
    }
}

/// XORs `block` with `keystream` and leaves the original `block` bytes in
/// `keystream`. Used by feedback modes whose next state is the input block.
#[inline]
pub fn xor_swap(block: &mut [u8], keystream: &mut [u8]) {
    for (b, k) in block.iter_mut().zip(keystream.iter_mut()) {
        let input = *b;
        *b ^= *k;
        *k = input;
    }
}

/// Adds `value` to `block` read as a big-endian integer, wrapping on
/// overflow of the whole block.
#[inline]
pub fn increment_block(block: &mut [u8], value: u64) {
    let mut carry = value;
    for byte in block.iter_mut().rev() {
        if carry == 0 {
            break;
        }
        let sum = *byte as u64 + (carry & 0xFF);
        *byte = sum as u8;
        carry = (carry >> 8) + (sum >> 8);
    }
}
