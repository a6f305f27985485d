pub mod cipher_aes_cm_hmac_sha1;
pub(crate) mod ctr;

use bytes::Bytes;

use crate::error::Result;

/// Cipher represents an implementation of one of the SRTP-specific ciphers.
///
/// Only AES-CM-128/HMAC-SHA1-80 ([`cipher_aes_cm_hmac_sha1::CipherAesCmHmacSha1`])
/// is implemented; the trait stays separate from its one implementor so a
/// future AEAD profile can be added without touching [`crate::context::Context`].
pub(crate) trait Cipher {
    /// Get RTP authenticated tag length.
    fn rtp_auth_tag_len(&self) -> usize;

    /// Get RTCP authenticated tag length.
    fn rtcp_auth_tag_len(&self) -> usize;

    /// Retrieve the SRTCP index carried on the wire.
    fn get_rtcp_index(&self, input: &[u8]) -> usize;

    /// Encrypt RTP payload.
    fn encrypt_rtp(
        &mut self,
        payload: &[u8],
        header: &rtp::header::Header,
        roc: u32,
    ) -> Result<Bytes>;

    /// Decrypt RTP payload.
    fn decrypt_rtp(
        &mut self,
        payload: &[u8],
        header: &rtp::header::Header,
        roc: u32,
    ) -> Result<Bytes>;

    /// Encrypt RTCP payload.
    fn encrypt_rtcp(&mut self, payload: &[u8], srtcp_index: usize, ssrc: u32) -> Result<Bytes>;

    /// Decrypt RTCP payload.
    fn decrypt_rtcp(&mut self, payload: &[u8], srtcp_index: usize, ssrc: u32) -> Result<Bytes>;
}
