//! 算法系统集合
//!
//! 目前只包含传统公钥算法 (RSA)
#[cfg(feature = "traditional")]
pub mod traditional;
