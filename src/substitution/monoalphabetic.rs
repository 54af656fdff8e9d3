//! 单表代换密码：`caesar`、`substitute`（通用单表代换）、`keyphrase`

use crate::common::alphabet::{keyed_alphabet, shifted_alphabet};
use crate::common::errors::Result;
use crate::common::normalize::{
    CipherAlphabet, Plaintext, normalize_cipher_alphabet, normalize_key, normalize_plaintext,
};
use crate::common::traits::ClassicalCipher;

/// 按字母表逐字母代换；数字在规范化后保留，原样输出
pub(crate) fn substitute_with(plaintext: &Plaintext, alphabet: &CipherAlphabet) -> String {
    plaintext
        .chars()
        .map(|c| alphabet.substitute(c).unwrap_or(c))
        .collect()
}

/// 凯撒密码：明文字母表整体右移 `shift` 位
pub fn caesar(plaintext: &str, shift: i64) -> Result<String> {
    let plaintext = normalize_plaintext(plaintext)?;
    Ok(substitute_with(&plaintext, &shifted_alphabet(shift)))
}

/// 通用单表代换，`cipher_alphabet` 的第 0 位对应明文 `a`
pub fn substitute(plaintext: &str, cipher_alphabet: &str) -> Result<String> {
    let plaintext = normalize_plaintext(plaintext)?;
    let alphabet = normalize_cipher_alphabet(cipher_alphabet)?;
    Ok(substitute_with(&plaintext, &alphabet))
}

/// 关键词单表代换
///
/// 剩余字母从关键词结束处继续，`JULIUS CAESAR` 生成的是
/// `JULISCAERTVWXYZBDFGHKMNOPQ`，而不是常见的 `JULISCAERBDFGHKMNOPQTVWXYZ`。
pub fn keyphrase(plaintext: &str, key: &str) -> Result<String> {
    let plaintext = normalize_plaintext(plaintext)?;
    let key = normalize_key(key)?.non_empty()?;
    Ok(substitute_with(&plaintext, &keyed_alphabet(&key, false)))
}

/// 凯撒密码
#[derive(Debug)]
pub struct Caesar;

impl ClassicalCipher for Caesar {
    const NAME: &'static str = "caesar";
    type Key = i64;

    fn encrypt(plaintext: &str, shift: &i64) -> Result<String> {
        caesar(plaintext, *shift)
    }
}

/// 通用单表代换密码
#[derive(Debug)]
pub struct Generic;

impl ClassicalCipher for Generic {
    const NAME: &'static str = "generic";
    type Key = str;

    fn encrypt(plaintext: &str, cipher_alphabet: &str) -> Result<String> {
        substitute(plaintext, cipher_alphabet)
    }
}

/// 关键词代换密码
#[derive(Debug)]
pub struct Keyphrase;

impl ClassicalCipher for Keyphrase {
    const NAME: &'static str = "keyphrase";
    type Key = str;

    fn encrypt(plaintext: &str, key: &str) -> Result<String> {
        keyphrase(plaintext, key)
    }
}
