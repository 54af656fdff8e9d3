//!
//! RSA 加密集成测试
//!
//! 使用 `rsa` crate 生成的真实密钥对验证 PKCS#1 v1.5 加密结果可以被标准实现解密。
//!

mod common;

use base64::{Engine, engine::general_purpose};
use codebook_kit::asymmetric::systems::traditional::rsa as codebook_rsa;
use codebook_kit::{Error, encrypt_pkcs1v15};
use common::setup_rsa_keys;
use rsa::traits::{PrivateKeyParts, PublicKeyParts};
use rsa::{BigUint, Pkcs1v15Encrypt};

#[test]
fn test_rsa_roundtrip_with_reference_decrypt() {
    let (private_key, public_numbers) = setup_rsa_keys(1024);
    let message = "Clifford Cocks";

    let encoded = encrypt_pkcs1v15(message, public_numbers.n(), public_numbers.e()).unwrap();
    let ciphertext = general_purpose::STANDARD.decode(encoded).unwrap();
    assert_eq!(ciphertext.len(), private_key.size());

    let plaintext = private_key.decrypt(Pkcs1v15Encrypt, &ciphertext).unwrap();
    assert_eq!(plaintext, message.as_bytes());
}

#[test]
fn test_rsa_roundtrip_utf8_and_empty() {
    let (private_key, public_numbers) = setup_rsa_keys(1024);
    for message in ["", "Ωμέγα ☂", "a"] {
        let encoded = codebook_rsa::rsa(message, &public_numbers).unwrap();
        let ciphertext = general_purpose::STANDARD.decode(encoded).unwrap();
        let plaintext = private_key.decrypt(Pkcs1v15Encrypt, &ciphertext).unwrap();
        assert_eq!(String::from_utf8(plaintext).unwrap(), message);
    }
}

#[test]
fn test_rsa_padding_structure() {
    let (private_key, public_numbers) = setup_rsa_keys(1024);
    let k = public_numbers.size();
    let message = b"attack at dawn";

    let ciphertext = codebook_rsa::encrypt_pkcs1v15_with_rng(
        &mut rsa::rand_core::OsRng,
        message,
        &public_numbers,
    )
    .unwrap();
    assert_eq!(ciphertext.len(), k);

    // 用私钥指数做原始 RSA 运算，取回编码后的消息
    let c = BigUint::from_bytes_be(&ciphertext);
    let m = c.modpow(private_key.d(), private_key.n());
    let m = m.to_bytes_be();
    let mut em = vec![0u8; k - m.len()];
    em.extend_from_slice(&m);

    let ps_len = k - message.len() - 3;
    assert_eq!(&em[..2], &[0x00, 0x02]);
    assert!(ps_len >= 8);
    assert!(em[2..2 + ps_len].iter().all(|&b| b != 0));
    assert_eq!(em[2 + ps_len], 0x00);
    assert_eq!(&em[3 + ps_len..], message);
}

#[test]
fn test_rsa_message_length_limit() {
    let (private_key, public_numbers) = setup_rsa_keys(1024);
    let limit = public_numbers.size() - 11;
    assert_eq!(public_numbers.max_message_len(), limit);

    let longest = "m".repeat(limit);
    let encoded = codebook_rsa::rsa(&longest, &public_numbers).unwrap();
    let ciphertext = general_purpose::STANDARD.decode(encoded).unwrap();
    let plaintext = private_key.decrypt(Pkcs1v15Encrypt, &ciphertext).unwrap();
    assert_eq!(plaintext, longest.as_bytes());

    let too_long = "m".repeat(limit + 1);
    assert_eq!(
        codebook_rsa::rsa(&too_long, &public_numbers),
        Err(Error::MessageTooLong {
            length: limit + 1,
            limit
        })
    );
}

#[test]
fn test_rsa_ciphertexts_differ_per_call() {
    let (_, public_numbers) = setup_rsa_keys(1024);
    let first = codebook_rsa::rsa("same", &public_numbers).unwrap();
    let second = codebook_rsa::rsa("same", &public_numbers).unwrap();
    assert_ne!(first, second);
}
