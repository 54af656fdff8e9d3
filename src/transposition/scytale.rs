//! 斯巴达密码棒

use crate::common::errors::{InputError, Result};
use crate::common::normalize::normalize_plaintext;
use crate::common::traits::ClassicalCipher;

/// 斯巴达密码棒
///
/// `diameter` 是密码棒一圈能容纳的字母数。明文按行写成 `diameter` 行、
/// `ceil(len / diameter)` 列，再按列读出：第 i 组是位置 i、i+cols、i+2·cols… 上的字母。
pub fn scytale(plaintext: &str, diameter: usize) -> Result<String> {
    let plaintext = normalize_plaintext(plaintext)?;
    if diameter == 0 {
        return Err(InputError::ZeroDiameter.into());
    }

    let letters: Vec<char> = plaintext
        .letters()
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let cols = letters.len().div_ceil(diameter);

    let ciphertext = (0..cols)
        .flat_map(|i| letters.iter().skip(i).step_by(cols))
        .collect();
    Ok(ciphertext)
}

/// 斯巴达密码棒
#[derive(Debug)]
pub struct Scytale;

impl ClassicalCipher for Scytale {
    const NAME: &'static str = "scytale";
    type Key = usize;

    fn encrypt(plaintext: &str, diameter: &usize) -> Result<String> {
        scytale(plaintext, *diameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::errors::Error;

    #[test]
    fn test_scytale() {
        assert_eq!(
            scytale("send more troops to southern flank and", 4).unwrap(),
            "STSFEROLNOUADOTNMPHKOSEARTRNEOND"
        );
    }

    #[test]
    fn test_scytale_uneven_length() {
        // 3 行 3 列，最后一行不满
        assert_eq!(scytale("abcdefg", 3).unwrap(), "ADGBECF");
    }

    #[test]
    fn test_scytale_unit_diameter_is_identity() {
        assert_eq!(scytale("attack at dawn", 1).unwrap(), "ATTACKATDAWN");
    }

    #[test]
    fn test_scytale_diameter_longer_than_text() {
        assert_eq!(scytale("abc", 8).unwrap(), "ABC");
        assert_eq!(scytale("", 8).unwrap(), "");
    }

    #[test]
    fn test_scytale_rejects_zero_diameter() {
        assert_eq!(
            scytale("abc", 0),
            Err(Error::InvalidInput(InputError::ZeroDiameter))
        );
    }
}
