use super::*;

#[test]
fn test_sign_and_verify() {
    let keypair = Secp256k1KeyPair::from_seed(&[3u8; 32]).unwrap();
    let message = b"Test message";

    let signature = keypair.sign(message).unwrap();
    assert_eq!(signature.len(), 64);
    assert!(keypair.public_key().verify(message, &signature).is_ok());
}

#[test]
fn test_public_key_is_compressed() {
    let keypair = Secp256k1KeyPair::from_seed(&[3u8; 32]).unwrap();
    let bytes = keypair.public_key().to_bytes();
    assert_eq!(bytes.len(), 33);
    assert!(bytes[0] == 0x02 || bytes[0] == 0x03);
    assert_eq!(Secp256k1PublicKey::from_bytes(&bytes).unwrap(), keypair.public_key());
}

#[test]
fn test_tampered_message_fails() {
    let keypair = Secp256k1KeyPair::from_seed(&[3u8; 32]).unwrap();
    let signature = keypair.sign(b"original").unwrap();
    assert_eq!(
        keypair.public_key().verify(b"tampered", &signature),
        Err(CryptoError::VerificationFailed)
    );
}

#[test]
fn test_zero_scalar_is_rejected() {
    assert!(matches!(
        Secp256k1KeyPair::from_seed(&[0u8; 32]),
        Err(CryptoError::InvalidKey(_))
    ));
}
