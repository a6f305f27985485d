use super::*;

#[test]
fn default_profile_is_aes128_cm_hmac_sha1_80() {
    assert_eq!(ProtectionProfile::default(), ProtectionProfile::Aes128CmHmacSha1_80);
}

#[test]
fn aes128_cm_hmac_sha1_80_lengths_match_rfc3711() {
    let p = ProtectionProfile::Aes128CmHmacSha1_80;
    assert_eq!(p.key_len(), 16);
    assert_eq!(p.salt_len(), 14);
    assert_eq!(p.auth_key_len(), 20);
    assert_eq!(p.rtp_auth_tag_len(), 10);
    assert_eq!(p.rtcp_auth_tag_len(), 10);
}
