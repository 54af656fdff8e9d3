//! 普莱费尔密码（双字母代换）
//!
//! `I` 与 `J` 共用表中的一个格子；相同字母组成的双字母组以及末尾落单的字母都用 `X` 填充，
//! 需要填充的字母本身是 `X` 时改用 `Q`。

use crate::common::alphabet::keyed_alphabet;
use crate::common::errors::Result;
use crate::common::normalize::{normalize_key, normalize_plaintext};
use crate::common::traits::ClassicalCipher;

const SIDE: usize = 5;
const FILLER: u8 = b'X';
const ALT_FILLER: u8 = b'Q';

fn filler_for(letter: u8) -> u8 {
    if letter == FILLER { ALT_FILLER } else { FILLER }
}

/// 由密钥构造的 5x5 表，同时保存字母到坐标、坐标到字母的映射
struct Grid {
    cells: [[u8; SIDE]; SIDE],
    // 按字母索引，值为 (列, 行)
    coords: [(usize, usize); 26],
}

impl Grid {
    fn new(alphabet: &[u8]) -> Self {
        let mut cells = [[0u8; SIDE]; SIDE];
        let mut coords = [(0, 0); 26];
        for (i, &letter) in alphabet.iter().filter(|&&b| b != b'J').enumerate() {
            let (y, x) = (i / SIDE, i % SIDE);
            cells[y][x] = letter;
            coords[(letter - b'A') as usize] = (x, y);
        }
        coords[(b'J' - b'A') as usize] = coords[(b'I' - b'A') as usize];
        Self { cells, coords }
    }

    fn locate(&self, letter: u8) -> (usize, usize) {
        self.coords[(letter - b'A') as usize]
    }

    fn at(&self, x: usize, y: usize) -> u8 {
        self.cells[y % SIDE][x % SIDE]
    }

    fn encrypt_digraph(&self, a: u8, b: u8) -> [u8; 2] {
        let (x, y) = self.locate(a);
        let (v, w) = self.locate(b);
        if y == w {
            [self.at(x + 1, y), self.at(v + 1, y)]
        } else if x == v {
            [self.at(x, y + 1), self.at(x, w + 1)]
        } else {
            [self.at(v, y), self.at(x, w)]
        }
    }
}

/// 将字母序列拆分为双字母组
///
/// 两个字母相同时输出 (字母, X) 并只前进一位，末尾落单的字母补 X。
/// 调用方需先把 `J` 并入 `I`。
fn digraphs(letters: &[u8]) -> Vec<(u8, u8)> {
    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i + 1 < letters.len() {
        let (a, b) = (letters[i], letters[i + 1]);
        if a != b {
            pairs.push((a, b));
            i += 2;
        } else {
            pairs.push((a, filler_for(a)));
            i += 1;
        }
    }
    if i < letters.len() {
        pairs.push((letters[i], filler_for(letters[i])));
    }
    pairs
}

/// 普莱费尔密码
pub fn playfair(plaintext: &str, key: &str) -> Result<String> {
    let plaintext = normalize_plaintext(plaintext)?;
    let key = normalize_key(key)?;

    let grid = Grid::new(keyed_alphabet(&key, true).as_bytes());
    let letters: Vec<u8> = plaintext
        .letters()
        .map(|c| match c.to_ascii_uppercase() as u8 {
            b'J' => b'I',
            b => b,
        })
        .collect();

    let ciphertext = digraphs(&letters)
        .into_iter()
        .flat_map(|(a, b)| grid.encrypt_digraph(a, b))
        .map(char::from)
        .collect();
    Ok(ciphertext)
}

/// 普莱费尔密码
#[derive(Debug)]
pub struct Playfair;

impl ClassicalCipher for Playfair {
    const NAME: &'static str = "playfair";
    type Key = str;

    fn encrypt(plaintext: &str, key: &str) -> Result<String> {
        playfair(plaintext, key)
    }
}
