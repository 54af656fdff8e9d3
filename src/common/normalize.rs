//! 输入规范化
//!
//! 所有密码在执行之前都先把参数转换为这里的值类型。值类型只能通过校验函数构造，
//! 因此下游代码不会拿到未经规范化的输入。

use crate::common::errors::{InputError, Result};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// 规范化后的明文：只包含 ASCII 小写字母与数字
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plaintext(String);

impl Plaintext {
    /// 只保留字母部分（丢弃数字）
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().filter(char::is_ascii_alphabetic)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 规范化后的密钥：大写字母，按首次出现顺序去重
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key(String);

impl Key {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 密钥中每个字母在字母表中的偏移量 (A = 0)
    pub fn offsets(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'A')
    }

    /// 要求密钥至少包含一个字母
    pub(crate) fn non_empty(self) -> Result<Self> {
        if self.0.is_empty() {
            return Err(InputError::EmptyKey.into());
        }
        Ok(self)
    }
}

/// 26 个大写字母的一个排列
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CipherAlphabet([u8; 26]);

impl CipherAlphabet {
    /// 已知合法的排列由内部的字母表构造函数直接使用
    pub(crate) fn from_permutation(letters: [u8; 26]) -> Self {
        debug_assert!(is_permutation(&letters));
        Self(letters)
    }

    /// 明文字母 `a..z` 对应的密文字母
    pub fn substitute(&self, c: char) -> Option<char> {
        c.is_ascii_lowercase()
            .then(|| self.0[(c as u8 - b'a') as usize] as char)
    }

    pub fn as_str(&self) -> &str {
        // 内部只存放 ASCII 大写字母
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

/// 校验并规范化明文
///
/// 含有任何大写字母时失败；否则去掉所有非字母数字字符。
/// 只保留 ASCII 字母和数字，非 ASCII 的小写字母同样被去掉（`"café"` 得到 `"caf"`）。
pub fn normalize_plaintext(s: &str) -> Result<Plaintext> {
    if s.chars().any(char::is_uppercase) {
        return Err(InputError::UppercasePlaintext.into());
    }
    Ok(Plaintext(
        s.chars().filter(char::is_ascii_alphanumeric).collect(),
    ))
}

/// 校验并规范化密钥
///
/// 含有任何小写字母时失败；否则只保留字母，并按首次出现顺序去重，
/// 例如 `"JULIUS CAESAR"` 得到 `"JULISCAER"`。
pub fn normalize_key(s: &str) -> Result<Key> {
    if s.chars().any(char::is_lowercase) {
        return Err(InputError::LowercaseKey.into());
    }

    let mut seen = [false; 26];
    let key = s
        .chars()
        .filter(char::is_ascii_uppercase)
        .filter(|&c| !std::mem::replace(&mut seen[(c as u8 - b'A') as usize], true))
        .collect();
    Ok(Key(key))
}

/// 校验密码字母表
///
/// 字符集合必须恰好是 26 个大写字母，不多不少，区分大小写。
pub fn normalize_cipher_alphabet(s: &str) -> Result<CipherAlphabet> {
    let letters: [u8; 26] = s
        .as_bytes()
        .try_into()
        .map_err(|_| InputError::InvalidCipherAlphabet)?;
    if !is_permutation(&letters) {
        return Err(InputError::InvalidCipherAlphabet.into());
    }
    Ok(CipherAlphabet(letters))
}

fn is_permutation(letters: &[u8; 26]) -> bool {
    let mut seen = [false; 26];
    letters.iter().all(|&b| {
        b.is_ascii_uppercase() && !std::mem::replace(&mut seen[(b - b'A') as usize], true)
    })
}

macro_rules! impl_str_newtype {
    ($ty:ty, $normalize:path) => {
        impl Deref for $ty {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = crate::common::errors::Error;

            fn from_str(s: &str) -> Result<Self> {
                $normalize(s)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = crate::common::errors::Error;

            fn try_from(s: &str) -> Result<Self> {
                $normalize(s)
            }
        }
    };
}

impl_str_newtype!(Plaintext, normalize_plaintext);
impl_str_newtype!(Key, normalize_key);
impl_str_newtype!(CipherAlphabet, normalize_cipher_alphabet);
