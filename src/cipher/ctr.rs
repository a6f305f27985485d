//! Low-level AES-CTR primitives.
//!
//! `ctr_xor` is the naive reference implementation: one AES block is
//! encrypted at a time and XORed into the buffer in place. The hot path in
//! [`crate::cipher::cipher_aes_cm_hmac_sha1`] instead uses the `ctr` crate,
//! which may batch several counter blocks through a single AES call; the
//! unit tests below check the two agree byte-for-byte.

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::Aes128;

const BLOCK_LEN: usize = 16;

/// XORs `buf` in place with the AES-CTR keystream generated from `key` and
/// the 16-byte initial counter block `iv`. The counter is incremented as a
/// big-endian 128-bit integer for each subsequent block.
///
/// `iv` must be exactly one AES block (16 bytes); any other length is a
/// programmer error and this function panics.
pub(crate) fn ctr_xor(key: &[u8; 16], iv: &[u8], buf: &mut [u8]) {
    assert_eq!(iv.len(), BLOCK_LEN, "CTR IV must be exactly one AES block");

    let cipher = Aes128::new_from_slice(key).expect("AES-128 key is always 16 bytes");
    let mut counter: [u8; BLOCK_LEN] = iv.try_into().unwrap();

    for chunk in buf.chunks_mut(BLOCK_LEN) {
        let mut block = counter.into();
        cipher.encrypt_block(&mut block);
        for (b, k) in chunk.iter_mut().zip(block.iter()) {
            *b ^= k;
        }
        increment_be(&mut counter);
    }
}

fn increment_be(counter: &mut [u8; BLOCK_LEN]) {
    for byte in counter.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}

/// Writes `min(dst.len(), a.len(), b.len())` XORed bytes into `dst` and
/// returns that count. Never reads or writes past any slice's end.
pub(crate) fn xor_bytes(dst: &mut [u8], a: &[u8], b: &[u8]) -> usize {
    let n = dst.len().min(a.len()).min(b.len());
    for i in 0..n {
        dst[i] = a[i] ^ b[i];
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::ctr::cipher::{KeyIvInit, StreamCipher};

    type Aes128Ctr = ::ctr::Ctr128BE<Aes128>;

    fn reference_xor(key: &[u8; 16], iv: &[u8; 16], data: &[u8]) -> Vec<u8> {
        let mut buf = data.to_vec();
        ctr_xor(key, iv, &mut buf);
        buf
    }

    fn optimised_xor(key: &[u8; 16], iv: &[u8; 16], data: &[u8]) -> Vec<u8> {
        let mut buf = data.to_vec();
        let mut stream = Aes128Ctr::new(key.into(), iv.into());
        stream.apply_keystream(&mut buf);
        buf
    }

    #[test]
    fn naive_matches_optimised_for_all_lengths_up_to_1500() {
        let key = [0x2bu8; 16];
        let iv = [0x7au8; 16];
        let data: Vec<u8> = (0..1500u32).map(|i| (i % 251) as u8).collect();

        for len in 0..=1500 {
            let input = &data[..len];
            assert_eq!(
                reference_xor(&key, &iv, input),
                optimised_xor(&key, &iv, input),
                "mismatch at length {len}"
            );
        }
    }

    #[test]
    fn ctr_xor_supports_in_place_overlap() {
        let key = [0x11u8; 16];
        let iv = [0x22u8; 16];
        let plaintext = b"the quick brown fox jumps".to_vec();

        let mut roundtrip = plaintext.clone();
        ctr_xor(&key, &iv, &mut roundtrip);
        ctr_xor(&key, &iv, &mut roundtrip);

        assert_eq!(roundtrip, plaintext);
    }

    #[test]
    #[should_panic(expected = "CTR IV must be exactly one AES block")]
    fn ctr_xor_traps_on_wrong_iv_length() {
        let key = [0u8; 16];
        let mut buf = [0u8; 4];
        ctr_xor(&key, &[0u8; 15], &mut buf);
    }

    #[test]
    fn xor_bytes_uses_shortest_input_and_stays_in_bounds() {
        let a = [0xffu8; 5];
        let b = [0x0fu8; 3];
        let mut dst = [0u8; 10];

        let n = xor_bytes(&mut dst, &a, &b);

        assert_eq!(n, 3);
        assert_eq!(&dst[..3], &[0xf0, 0xf0, 0xf0]);
        assert_eq!(&dst[3..], &[0u8; 7]);
    }
}
