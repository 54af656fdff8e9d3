//! # Transposition Cipher Module
//!
//! Simple transposition ciphers (`rail_fence`, `scytale`) and the fractionating
//! transposition cipher `adfgvx`.
//!
//! ---
//!
//! # 移位密码模块
//!
//! 栅栏密码、斯巴达密码棒，以及先分组代换再列移位的 ADFGVX 密码。

pub mod adfgvx;
pub mod rail_fence;
pub mod scytale;

pub use adfgvx::{Adfgvx, adfgvx};
pub use rail_fence::{RailFence, rail_fence};
pub use scytale::{Scytale, scytale};
