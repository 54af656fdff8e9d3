//! 字母表构造：移位字母表与带密钥字母表，供多种代换密码共用。

use crate::common::normalize::{CipherAlphabet, Key};

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 向左旋转 `n mod 26` 位的字母表，位置 0 是偏移 `n` 处的字母
pub fn shifted_alphabet(n: i64) -> CipherAlphabet {
    let start = n.rem_euclid(26) as usize;
    CipherAlphabet::from_permutation(std::array::from_fn(|i| ALPHABET[(start + i) % 26]))
}

/// 由密钥字母打头、其余字母补齐的字母表
///
/// - `from_start = true`：剩余字母按 A–Z 自然顺序补齐；
/// - `from_start = false`：剩余字母从密钥最后一个字母的下一个字母开始循环补齐，
///   例如 `JULIUS CAESAR` 得到 `JULISCAERTVWXYZBDFGHKMNOPQ`。
///
/// 密钥中的重复字母已在规范化时去除，空密钥时两种方式都退化为 A–Z。
pub fn keyed_alphabet(key: &Key, from_start: bool) -> CipherAlphabet {
    let start = match key.as_bytes().last() {
        Some(&last) if !from_start => (last - b'A' + 1) as usize,
        _ => 0,
    };

    let mut seen = [false; 26];
    let mut letters = Vec::with_capacity(26);
    let remaining = (0..26).map(|i| ALPHABET[(start + i) % 26]);
    for b in key.bytes().chain(remaining) {
        if !std::mem::replace(&mut seen[(b - b'A') as usize], true) {
            letters.push(b);
        }
    }

    let mut permutation = [0u8; 26];
    permutation.copy_from_slice(&letters);
    CipherAlphabet::from_permutation(permutation)
}
