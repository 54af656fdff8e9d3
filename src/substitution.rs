//! # Substitution Cipher Module
//!
//! This module gathers the classical substitution ciphers:
//!
//! - Monoalphabetic: `caesar`, `substitute`, `keyphrase`
//! - Polyalphabetic: `vigenere`
//! - Polygraphic: `playfair`
//!
//! ---
//!
//! # 代换密码模块
//!
//! 单表代换、多表代换与双字母代换密码的统一入口。
//! 每种密码既提供自由函数，也提供实现 `ClassicalCipher` 的单元结构体。

pub mod monoalphabetic;
pub mod playfair;
pub mod vigenere;

pub use monoalphabetic::{Caesar, Generic, Keyphrase, caesar, keyphrase, substitute};
pub use playfair::{Playfair, playfair};
pub use vigenere::{Vigenere, vigenere};
