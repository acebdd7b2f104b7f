//! Reference vectors checked through every public entry point, plus
//! end-to-end challenge-response runs.

use std::sync::Arc;
use std::thread;

use keymac::{
    compute_mac, compute_mac_into, compute_mac_status, sign_challenge, AuthConfig, AuthError,
    Challenge, EncodingMode, MacError, MacStatus,
};
use keymac_testkit::{all_vectors, multi_user_fixture, AuthFixture};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

const MODES: [EncodingMode; 2] = [EncodingMode::Hex, EncodingMode::Base64];

#[test]
fn vectors_owned_output() {
    for v in all_vectors() {
        for mode in MODES {
            let mac = compute_mac(&v.key, &v.message, mode);
            assert_eq!(mac.as_str(), v.expected(mode), "{} ({})", v.name, mode);
        }
    }
}

#[test]
fn vectors_into_buffer() {
    for v in all_vectors() {
        for mode in MODES {
            let mut buf = [0u8; 100];
            let n = compute_mac_into(&v.key, &v.message, &mut buf, mode).unwrap();
            assert_eq!(&buf[..n], v.expected(mode).as_bytes(), "{} ({})", v.name, mode);
        }
    }
}

#[test]
fn vectors_status_boundary() {
    init_tracing();
    for v in all_vectors() {
        for mode in MODES {
            let mut buf = [0u8; 64];
            let mut len = 0;
            let status = compute_mac_status(&v.key, &v.message, &mut buf, &mut len, mode.as_raw());
            assert_eq!(status, MacStatus::InsufficientBuffer);
            assert_eq!(len, mode.required_len());

            // Retry with the reported size.
            let status = compute_mac_status(&v.key, &v.message, &mut buf, &mut len, mode.as_raw());
            assert_eq!(status, MacStatus::Success);
            assert_eq!(&buf[..len], v.expected(mode).as_bytes(), "{}", v.name);
        }
    }
}

#[test]
fn one_byte_short_is_rejected() {
    let v = &all_vectors()[0];
    for mode in MODES {
        let mut buf = vec![0u8; mode.required_len() - 1];
        let err = compute_mac_into(&v.key, &v.message, &mut buf, mode).unwrap_err();
        assert_eq!(err.required_len(), Some(mode.required_len()));
        assert!(matches!(err, MacError::InsufficientBuffer { .. }));
        assert!(buf.iter().all(|&b| b == 0));
    }
}

#[test]
fn concurrent_calls_agree() {
    let vectors = Arc::new(all_vectors());
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let vectors = Arc::clone(&vectors);
            thread::spawn(move || {
                for i in 0..50 {
                    let v = &vectors[(t + i) % vectors.len()];
                    let mac = compute_mac(&v.key, &v.message, EncodingMode::Hex);
                    assert_eq!(mac.as_str(), v.hex);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn fixed_challenge_signature() {
    let mac = sign_challenge(b"secret", r#"{"nonce":"abc"}"#, EncodingMode::Base64);
    assert_eq!(mac.as_str(), "KgM1S8zsWzheLNlOasKUM1Th08uiNvI6lDclS/FM5fk=");
    let mac = sign_challenge(b"secret", r#"{"nonce":"abc"}"#, EncodingMode::Hex);
    assert_eq!(
        mac.as_str(),
        "2a03354bccec5b385e2cd94e6ac2943354e1d3cba236f23a9437254bf14ce5f9"
    );
}

#[test]
fn handshake_round_trip() {
    init_tracing();
    let fixture = AuthFixture::new();
    let issued = fixture.issue("peter", 99);

    // The client only sees the JSON text.
    let received = Challenge::from_json(issued.json()).unwrap();
    assert_eq!(received.session, 99);
    assert_eq!(received.authid, "peter");

    let signature = fixture.sign(&issued);
    fixture
        .authenticator
        .verify(&issued, signature.as_str())
        .unwrap();
}

#[test]
fn handshake_signature_tolerates_surrounding_whitespace() {
    let fixture = AuthFixture::new();
    let issued = fixture.issue("peter", 1);
    let signature = format!("  {}\n", fixture.sign(&issued));
    fixture.authenticator.verify(&issued, &signature).unwrap();
}

#[test]
fn handshake_rejects_signature_for_other_challenge() {
    init_tracing();
    let fixture = multi_user_fixture(2);
    let first = fixture.issue("user0", 1);
    let second = fixture.issue("user0", 2);
    let signature = fixture.sign(&first);

    assert!(matches!(
        fixture.authenticator.verify(&second, signature.as_str()),
        Err(AuthError::SignatureMismatch { .. })
    ));
}

#[test]
fn handshake_hex_mode() {
    let config = AuthConfig {
        encoding: EncodingMode::Hex,
        ..AuthConfig::default()
    };
    let fixture = AuthFixture::with_config(config, &[("alice", &b"wonderland"[..])]);
    let issued = fixture.issue("alice", 5);
    let signature = fixture.sign(&issued);
    assert_eq!(signature.len(), 64);
    fixture
        .authenticator
        .verify(&issued, signature.as_str())
        .unwrap();
}
