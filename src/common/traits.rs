//! 定义了古典密码的核心 Trait。
use crate::common::config::OutputConfig;
use crate::common::errors::Result;

/// `ClassicalCipher` 定义了每种古典密码必须实现的加密操作。
///
/// 只有加密方向；输入在算法执行前完成规范化，失败时不会产生任何部分输出。
pub trait ClassicalCipher {
    /// 密码名称
    const NAME: &'static str;

    /// 密钥（或参数）类型
    type Key: ?Sized;

    /// 加密一段明文，返回未分组的大写密文
    fn encrypt(plaintext: &str, key: &Self::Key) -> Result<String>;

    /// 加密并按输出配置分组
    fn encrypt_with(plaintext: &str, key: &Self::Key, config: &OutputConfig) -> Result<String> {
        Self::encrypt(plaintext, key).map(|ciphertext| config.apply(&ciphertext))
    }
}
