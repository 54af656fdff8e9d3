//! RSA 公钥加密，只实现加密方向。
//!
//! 与书中的示例不同，实际使用 RSA 需要填充方案；这里实现 RFC 8017 §7.2 定义的
//! RSAES-PKCS1-v1_5 加密操作，然后把密文做 Base64 编码。
//! 不包含密钥生成和解密。

use crate::common::errors::{Error, InputError, Result};
use base64::{Engine, engine::general_purpose};
use rsa::rand_core::{CryptoRngCore, OsRng, RngCore};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPublicKey};
use zeroize::Zeroizing;

/// 0x00 || 0x02 || PS (至少 8 字节) || 0x00
const PADDING_OVERHEAD: usize = 11;

/// RSA 公钥参数 `(n, e)`，由调用方提供
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicNumbers {
    n: BigUint,
    e: BigUint,
}

impl RsaPublicNumbers {
    pub fn new(n: BigUint, e: BigUint) -> Result<Self> {
        if n.bits() == 0 {
            return Err(InputError::InvalidModulus.into());
        }
        Ok(Self { n, e })
    }

    /// 公共模数
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// 公共指数
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// 模数的字节长度 `k`
    pub fn size(&self) -> usize {
        self.n.bits().div_ceil(8)
    }

    /// 可加密的最大消息长度 `k - 11`
    pub fn max_message_len(&self) -> usize {
        self.size().saturating_sub(PADDING_OVERHEAD)
    }
}

impl From<&RsaPublicKey> for RsaPublicNumbers {
    fn from(key: &RsaPublicKey) -> Self {
        Self {
            n: key.n().clone(),
            e: key.e().clone(),
        }
    }
}

/// 用非零随机字节填满 `data`，遇到 0 就重新抽取
fn non_zero_random_bytes<R: CryptoRngCore + ?Sized>(rng: &mut R, data: &mut [u8]) {
    rng.fill_bytes(data);
    for byte in data.iter_mut() {
        while *byte == 0 {
            let mut fresh = [0u8; 1];
            rng.fill_bytes(&mut fresh);
            *byte = fresh[0];
        }
    }
}

/// RSAES-PKCS1-v1_5 加密操作，返回长度恰好为 `k` 的密文字节
pub fn encrypt_pkcs1v15_with_rng<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    message: &[u8],
    public_key: &RsaPublicNumbers,
) -> Result<Vec<u8>> {
    let k = public_key.size();
    if k < PADDING_OVERHEAD || message.len() > k - PADDING_OVERHEAD {
        return Err(Error::MessageTooLong {
            length: message.len(),
            limit: public_key.max_message_len(),
        });
    }

    // EM = 0x00 || 0x02 || PS || 0x00 || M
    let ps_len = k - message.len() - 3;
    let mut em = Zeroizing::new(vec![0u8; k]);
    em[1] = 0x02;
    non_zero_random_bytes(rng, &mut em[2..2 + ps_len]);
    em[3 + ps_len..].copy_from_slice(message);

    let m = BigUint::from_bytes_be(&em);
    let c = m.modpow(&public_key.e, &public_key.n);

    // c < n，大端编码后左侧补零到 k 字节
    let c = c.to_bytes_be();
    let mut ciphertext = vec![0u8; k];
    ciphertext[k - c.len()..].copy_from_slice(&c);
    Ok(ciphertext)
}

/// RSA 公钥加密（PKCS#1 v1.5 填充），返回 Base64 编码的密文
///
/// 每次调用都从操作系统随机源重新生成填充。
pub fn rsa(plaintext: &str, public_key: &RsaPublicNumbers) -> Result<String> {
    let ciphertext = encrypt_pkcs1v15_with_rng(&mut OsRng, plaintext.as_bytes(), public_key)?;
    Ok(general_purpose::STANDARD.encode(ciphertext))
}

/// 以原始 `(n, e)` 调用 [`rsa`]
pub fn encrypt_pkcs1v15(plaintext: &str, n: &BigUint, e: &BigUint) -> Result<String> {
    let public_key = RsaPublicNumbers::new(n.clone(), e.clone())?;
    rsa(plaintext, &public_key)
}
