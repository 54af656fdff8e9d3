//! ADFGVX 密码（分组代换 + 列移位）
//!
//! 6x6 代换表固定为以下取值：
//!
//! |       | **A** | **D** | **F** | **G** | **V** | **X** |
//! | ----- | ----- | ----- | ----- | ----- | ----- | ----- |
//! | **A** |   8   |   p   |   3   |   d   |   1   |   n   |
//! | **D** |   l   |   t   |   4   |   o   |   a   |   h   |
//! | **F** |   7   |   k   |   b   |   c   |   5   |   z   |
//! | **G** |   j   |   u   |   6   |   w   |   g   |   m   |
//! | **V** |   x   |   s   |   v   |   i   |   r   |   2   |
//! | **X** |   9   |   e   |   y   |   0   |   f   |   q   |

use crate::common::errors::Result;
use crate::common::normalize::{Plaintext, normalize_key, normalize_plaintext};
use crate::common::traits::ClassicalCipher;

const SYMBOLS: &[u8; 36] = b"8p3d1nlt4oah7kbc5zju6wgmxsvir29ey0fq";
const LABELS: &[u8; 6] = b"ADFGVX";

/// 符号到行列标签的查找表
struct Polybius {
    codes: [[u8; 2]; 128],
}

impl Polybius {
    fn new() -> Self {
        let mut codes = [[0u8; 2]; 128];
        for (i, &symbol) in SYMBOLS.iter().enumerate() {
            codes[symbol as usize] = [LABELS[i / 6], LABELS[i % 6]];
        }
        Self { codes }
    }

    /// 第一阶段：每个符号替换为两个标签字母
    fn fractionate(&self, plaintext: &Plaintext) -> Vec<u8> {
        plaintext
            .bytes()
            .flat_map(|b| self.codes[b as usize])
            .collect()
    }
}

/// 第二阶段：按密钥字母循环写入各列，再按密钥字母排序后逐列读出
///
/// 排序是稳定的，相同字母的列保持原有顺序。经过 `normalize_key` 的密钥已去重，
/// 所以只有直接传入带重复字母的列标签时才会出现并列。
fn columnar_transpose(stream: &[u8], labels: &[u8]) -> String {
    let mut columns = vec![Vec::new(); labels.len()];
    for (i, &b) in stream.iter().enumerate() {
        columns[i % labels.len()].push(b);
    }

    let mut order: Vec<usize> = (0..labels.len()).collect();
    order.sort_by_key(|&column| labels[column]);

    order
        .into_iter()
        .flat_map(|column| columns[column].iter().copied())
        .map(char::from)
        .collect()
}

/// ADFGVX 密码
///
/// 明文中的字母和数字都参与代换，`key` 只用于列移位阶段。
pub fn adfgvx(plaintext: &str, key: &str) -> Result<String> {
    let plaintext = normalize_plaintext(plaintext)?;
    let key = normalize_key(key)?.non_empty()?;

    let stream = Polybius::new().fractionate(&plaintext);
    Ok(columnar_transpose(&stream, key.as_bytes()))
}

/// ADFGVX 密码
#[derive(Debug)]
pub struct Adfgvx;

impl ClassicalCipher for Adfgvx {
    const NAME: &'static str = "adfgvx";
    type Key = str;

    fn encrypt(plaintext: &str, key: &str) -> Result<String> {
        adfgvx(plaintext, key)
    }
}
