use thiserror::Error;

/// 输入不满足规范化约定的具体原因
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("plaintext should be lowercase")]
    UppercasePlaintext,

    #[error("key should be uppercase")]
    LowercaseKey,

    #[error("cipher alphabet should be uppercase and contain all 26 letters exactly once")]
    InvalidCipherAlphabet,

    #[error("key should contain at least one letter")]
    EmptyKey,

    #[error("rail fence needs at least one rail")]
    ZeroRails,

    #[error("scytale diameter should be at least one")]
    ZeroDiameter,

    #[error("public modulus should be non-zero")]
    InvalidModulus,
}

/// 加密操作可能遇到的错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("message too long: {length} bytes, modulus allows at most {limit}")]
    MessageTooLong { length: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
