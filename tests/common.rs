//!
//! 集成测试的通用辅助函数
//!

/// 覆盖全部 26 个字母的样本明文
#[allow(dead_code)]
pub const PANGRAMS: &[&str] = &[
    "the quick brown fox jumps over the lazy dog",
    "pack my box with five dozen liquor jugs",
    "sphinx of black quartz, judge my vow!",
];

/// 只保留字母并转为大写，作为转置密码的参照
#[allow(dead_code)]
pub fn letters_upper(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// 对一段字母排序，用于比较转置前后的字母多重集合
#[allow(dead_code)]
pub fn sorted(text: &str) -> Vec<char> {
    let mut chars: Vec<char> = text.chars().collect();
    chars.sort_unstable();
    chars
}

/// 直接生成一对 RSA 密钥，返回私钥及其公钥参数
#[cfg(feature = "traditional")]
#[allow(dead_code)]
pub fn setup_rsa_keys(bits: usize) -> (rsa::RsaPrivateKey, codebook_kit::RsaPublicNumbers) {
    let private_key = rsa::RsaPrivateKey::new(&mut rsa::rand_core::OsRng, bits).unwrap();
    let public_numbers = codebook_kit::RsaPublicNumbers::from(&private_key.to_public_key());
    (private_key, public_numbers)
}
