//! # Traditional Public-Key Module
//!
//! This module contains the RSA public-key algorithm. Only the encryption
//! operation is provided, padded with PKCS#1 v1.5.
//!
//! ---
//!
//! # 传统公钥算法模块
//!
//! 本模块包含 RSA 公钥算法，只提供使用 PKCS#1 v1.5 填充的加密操作。

pub mod rsa;

// Re-export the encryption entry points so callers can use `traditional::rsa`
// without knowing the internal file structure.
//
// ---
//
// 重新导出加密入口，调用方无需关心内部的文件结构。
pub use self::rsa::{RsaPublicNumbers, encrypt_pkcs1v15, encrypt_pkcs1v15_with_rng, rsa};
