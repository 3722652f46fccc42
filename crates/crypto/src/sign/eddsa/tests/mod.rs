use super::*;

#[test]
fn test_sign_and_verify() {
    let keypair = Ed25519KeyPair::from_seed(&[7u8; 32]);
    let message = b"Test message";

    let signature = keypair.sign(message);
    assert_eq!(signature.len(), 64);

    let public_key = keypair.public_key();
    assert!(public_key.verify(message, &signature).is_ok());
}

#[test]
fn test_signatures_are_deterministic() {
    let a = Ed25519KeyPair::from_seed(&[9u8; 32]);
    let b = Ed25519KeyPair::from_seed(&[9u8; 32]);
    assert_eq!(a.sign(b"same"), b.sign(b"same"));
}

#[test]
fn test_public_key_roundtrip() {
    let keypair = Ed25519KeyPair::from_seed(&[7u8; 32]);
    let bytes = keypair.public_key().to_bytes();
    assert_eq!(bytes.len(), 32);
    assert_eq!(Ed25519PublicKey::from_bytes(&bytes).unwrap(), keypair.public_key());
}

#[test]
fn test_tampered_message_fails() {
    let keypair = Ed25519KeyPair::from_seed(&[7u8; 32]);
    let signature = keypair.sign(b"original");
    assert_eq!(
        keypair.public_key().verify(b"tampered", &signature),
        Err(CryptoError::VerificationFailed)
    );
}

#[test]
fn test_malformed_material() {
    assert!(matches!(
        Ed25519PublicKey::from_bytes(&[0u8; 31]),
        Err(CryptoError::InvalidKey(_))
    ));
    let keypair = Ed25519KeyPair::from_seed(&[7u8; 32]);
    assert!(matches!(
        keypair.public_key().verify(b"m", &[0u8; 10]),
        Err(CryptoError::InvalidSignature(_))
    ));
}
