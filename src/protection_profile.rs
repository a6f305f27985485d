use crate::cipher::cipher_aes_cm_hmac_sha1::CIPHER_AES_CM_HMAC_SHA1AUTH_TAG_LEN;

#[cfg(test)]
mod protection_profile_test;

/// ProtectionProfile specifies the cipher and authentication tag combination
/// for a session, similar to a TLS cipher suite.
///
/// Only AES-CM-128/HMAC-SHA1-80 is implemented. The enum is kept open in
/// shape (rather than collapsed to a constant) so a later profile can be
/// added as a new variant without an API break; this crate does not
/// implement any alternative profile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ProtectionProfile {
    #[default]
    Aes128CmHmacSha1_80,
}

impl ProtectionProfile {
    /// Master (and session) encryption key length in bytes.
    pub fn key_len(&self) -> usize {
        match self {
            ProtectionProfile::Aes128CmHmacSha1_80 => 16,
        }
    }

    /// Master (and session) salt length in bytes.
    pub fn salt_len(&self) -> usize {
        match self {
            ProtectionProfile::Aes128CmHmacSha1_80 => 14,
        }
    }

    /// HMAC authentication key length in bytes.
    pub fn auth_key_len(&self) -> usize {
        match self {
            ProtectionProfile::Aes128CmHmacSha1_80 => 20,
        }
    }

    /// Authentication tag length appended to an SRTP packet, in bytes.
    pub fn rtp_auth_tag_len(&self) -> usize {
        match self {
            ProtectionProfile::Aes128CmHmacSha1_80 => CIPHER_AES_CM_HMAC_SHA1AUTH_TAG_LEN,
        }
    }

    /// Authentication tag length appended to an SRTCP packet, in bytes.
    pub fn rtcp_auth_tag_len(&self) -> usize {
        match self {
            ProtectionProfile::Aes128CmHmacSha1_80 => CIPHER_AES_CM_HMAC_SHA1AUTH_TAG_LEN,
        }
    }
}
