//! 栅栏密码

use crate::common::errors::{InputError, Result};
use crate::common::normalize::normalize_plaintext;
use crate::common::traits::ClassicalCipher;

/// 第 `i` 个字母所在的栅栏：按 0,1,…,n-1,n-2,…,1 的锯齿顺序循环
fn rail_of(i: usize, rails: usize) -> usize {
    if rails == 1 {
        return 0;
    }
    let period = 2 * (rails - 1);
    let phase = i % period;
    if phase < rails { phase } else { period - phase }
}

/// 栅栏密码：按锯齿把字母分配到 `n` 条栅栏上，再逐条读出
pub fn rail_fence(plaintext: &str, n: usize) -> Result<String> {
    let plaintext = normalize_plaintext(plaintext)?;
    if n == 0 {
        return Err(InputError::ZeroRails.into());
    }

    let letters: Vec<char> = plaintext
        .letters()
        .map(|c| c.to_ascii_uppercase())
        .collect();
    // 多于字母数的栅栏永远是空的
    let n = n.min(letters.len().max(1));

    let mut rails = vec![String::new(); n];
    for (i, c) in letters.into_iter().enumerate() {
        rails[rail_of(i, n)].push(c);
    }
    Ok(rails.concat())
}

/// 栅栏密码
#[derive(Debug)]
pub struct RailFence;

impl ClassicalCipher for RailFence {
    const NAME: &'static str = "rail_fence";
    type Key = usize;

    fn encrypt(plaintext: &str, n: &usize) -> Result<String> {
        rail_fence(plaintext, *n)
    }
}
