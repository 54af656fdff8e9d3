//! 通用模块，包含错误处理、输入规范化、字母表构造、输出配置和共享的 trait

pub mod alphabet;
pub mod config;
pub mod errors;
pub mod normalize;
pub mod traits;
pub mod utils;

pub use self::alphabet::{keyed_alphabet, shifted_alphabet};
pub use self::config::OutputConfig;
pub use self::errors::{Error, InputError, Result};
pub use self::normalize::{
    CipherAlphabet, Key, Plaintext, normalize_cipher_alphabet, normalize_key, normalize_plaintext,
};
pub use self::traits::ClassicalCipher;
pub use self::utils::codegroup;
