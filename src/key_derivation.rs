//! AES-CM key derivation (RFC 3711 §4.3, key derivation rate 0).
//!
//! Expands a master key and master salt into the six session keys/salts a
//! [`crate::context::Context`] needs, by AES-CTR "encrypting" an all-zero
//! buffer under an IV built from the salt and a one-byte label.

use crate::cipher::ctr::ctr_xor;
use crate::error::{Error, Result};

pub const LABEL_SRTP_ENCRYPTION: u8 = 0x00;
pub const LABEL_SRTP_AUTHENTICATION_TAG: u8 = 0x01;
pub const LABEL_SRTP_SALT: u8 = 0x02;
pub const LABEL_SRTCP_ENCRYPTION: u8 = 0x03;
pub const LABEL_SRTCP_AUTHENTICATION_TAG: u8 = 0x04;
pub const LABEL_SRTCP_SALT: u8 = 0x05;

/// Derives `out_len` bytes of key material for `label` from `master_key`
/// and `master_salt`, per RFC 3711 Appendix B.3.
pub(crate) fn aes_cm_key_derivation(
    label: u8,
    master_key: &[u8],
    master_salt: &[u8],
    out_len: usize,
) -> Result<Vec<u8>> {
    let key: [u8; 16] = master_key
        .try_into()
        .map_err(|_| Error::SrtpMasterKeyLength(16, master_key.len()))?;

    // IV = (master_salt || 0x0000) XOR (0^48 || label || 0^48): the salt is
    // zero-padded on the right to one AES block and the label is folded in
    // at byte 7, leaving the final two bytes as the per-block counter.
    let mut iv = [0u8; 16];
    iv[..master_salt.len()].copy_from_slice(master_salt);
    iv[7] ^= label;

    let mut out = vec![0u8; out_len];
    ctr_xor(&key, &iv, &mut out);
    Ok(out)
}

/// Builds the 16-byte CTR IV for an RTP or RTCP packet (RFC 3711 §4.1.1):
/// `IV = (0^32 || ssrc || roc || seq << 16) XOR (session_salt || 0^16)`.
pub(crate) fn generate_counter(
    sequence_number: u16,
    rollover_counter: u32,
    ssrc: u32,
    session_salt: &[u8],
) -> [u8; 16] {
    let mut counter = [0u8; 16];
    counter[4..8].copy_from_slice(&ssrc.to_be_bytes());
    counter[8..12].copy_from_slice(&rollover_counter.to_be_bytes());
    counter[12..16].copy_from_slice(&((sequence_number as u32) << 16).to_be_bytes());

    for (c, s) in counter.iter_mut().zip(session_salt.iter()) {
        *c ^= s;
    }

    counter
}
