//! 维吉尼亚密码（多表代换）

use crate::common::alphabet::shifted_alphabet;
use crate::common::errors::Result;
use crate::common::normalize::{normalize_key, normalize_plaintext};
use crate::common::traits::ClassicalCipher;

/// 维吉尼亚密码
///
/// 密钥的每个字母对应一张移位字母表，明文的第 i 个字母使用第 `i mod 密钥长度` 张。
/// 数字原样输出，且不消耗密钥位置。
pub fn vigenere(plaintext: &str, key: &str) -> Result<String> {
    let plaintext = normalize_plaintext(plaintext)?;
    let key = normalize_key(key)?.non_empty()?;

    let alphabets: Vec<_> = key
        .offsets()
        .map(|offset| shifted_alphabet(i64::from(offset)))
        .collect();

    let mut position = 0;
    let ciphertext = plaintext
        .chars()
        .map(|c| match alphabets[position % alphabets.len()].substitute(c) {
            Some(substituted) => {
                position += 1;
                substituted
            }
            None => c,
        })
        .collect();
    Ok(ciphertext)
}

/// 维吉尼亚密码
#[derive(Debug)]
pub struct Vigenere;

impl ClassicalCipher for Vigenere {
    const NAME: &'static str = "vigenere";
    type Key = str;

    fn encrypt(plaintext: &str, key: &str) -> Result<String> {
        vigenere(plaintext, key)
    }
}
