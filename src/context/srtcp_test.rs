use bytes::Bytes;
use rtcp::goodbye::Goodbye;
use util::marshal::{Marshal, Unmarshal};

use super::*;

fn build_test_context() -> Result<Context> {
    let master_key = Bytes::from_static(&[
        0x0d, 0xcd, 0x21, 0x3e, 0x4c, 0xbc, 0xf2, 0x8f, 0x01, 0x7f, 0x69, 0x94, 0x40, 0x1e, 0x28,
        0x89,
    ]);
    let master_salt = Bytes::from_static(&[
        0x62, 0x77, 0x60, 0x38, 0xc0, 0x6d, 0xc9, 0x41, 0x9f, 0x6d, 0xd9, 0x43, 0x3e, 0x7c,
    ]);

    Context::new(
        &master_key,
        &master_salt,
        ProtectionProfile::Aes128CmHmacSha1_80,
        None,
        None,
    )
}

#[test]
fn test_rtcp_lifecycle() -> Result<()> {
    let mut encrypt_context = build_test_context()?;
    let mut decrypt_context = build_test_context()?;

    for i in 0..4u32 {
        let pkt = Goodbye {
            sources: vec![5000 + i],
            reason: Bytes::new(),
        };
        let decrypted_raw = pkt.marshal()?;

        let encrypted = encrypt_context.encrypt_rtcp(&decrypted_raw)?;
        assert_ne!(
            &encrypted[..decrypted_raw.len()],
            &decrypted_raw[..],
            "RTCP packet was not encrypted"
        );

        let decrypted = decrypt_context.decrypt_rtcp(&encrypted)?;
        assert_eq!(
            decrypted, decrypted_raw,
            "RTCP round-trip produced a different packet for source {}",
            5000 + i
        );
    }

    Ok(())
}

#[test]
fn test_rtcp_invalid_auth() -> Result<()> {
    let master_key = Bytes::from_static(&[
        0x0d, 0xcd, 0x21, 0x3e, 0x4c, 0xbc, 0xf2, 0x8f, 0x01, 0x7f, 0x69, 0x94, 0x40, 0x1e, 0x28,
        0x89,
    ]);
    let invalid_salt = Bytes::from_static(&[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ]);

    let mut encrypt_context = build_test_context()?;
    let mut invalid_context = Context::new(
        &master_key,
        &invalid_salt,
        ProtectionProfile::Aes128CmHmacSha1_80,
        None,
        None,
    )?;

    let pkt = Goodbye {
        sources: vec![5000],
        reason: Bytes::new(),
    };
    let encrypted = encrypt_context.encrypt_rtcp(&pkt.marshal()?)?;

    assert!(
        invalid_context.decrypt_rtcp(&encrypted).is_err(),
        "Managed to decrypt with incorrect salt"
    );

    Ok(())
}

#[test]
fn test_rtcp_index_exhausted_is_fatal() -> Result<()> {
    let mut encrypt_context = build_test_context()?;

    let pkt = Goodbye {
        sources: vec![9000],
        reason: Bytes::new(),
    };
    let decrypted_raw = pkt.marshal()?;

    encrypt_context.set_index(9000, MAX_SRTCP_INDEX);

    let result = encrypt_context.encrypt_rtcp(&decrypted_raw);
    assert_eq!(result, Err(Error::SrtcpIndexExhausted(9000)));
    assert_eq!(encrypt_context.get_index(9000), Some(MAX_SRTCP_INDEX));

    // The session stays open: other SSRCs, and this one's replay state, are untouched.
    let other_pkt = Goodbye {
        sources: vec![9001],
        reason: Bytes::new(),
    };
    let other_raw = other_pkt.marshal()?;
    assert!(encrypt_context.encrypt_rtcp(&other_raw).is_ok());
    assert_eq!(encrypt_context.get_index(9001), Some(1));

    Ok(())
}

#[test]
fn test_rtcp_unmarshals_after_decrypt() -> Result<()> {
    let mut encrypt_context = build_test_context()?;
    let mut decrypt_context = build_test_context()?;

    let pkt = Goodbye {
        sources: vec![42],
        reason: Bytes::from_static(b"bye"),
    };
    let encrypted = encrypt_context.encrypt_rtcp(&pkt.marshal()?)?;
    let decrypted = decrypt_context.decrypt_rtcp(&encrypted)?;

    let mut buf = &decrypted[..];
    let roundtripped = Goodbye::unmarshal(&mut buf)?;
    assert_eq!(roundtripped, pkt);

    Ok(())
}
