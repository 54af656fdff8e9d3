use std::num::NonZeroUsize;

/// 把密文切分为固定宽度的码组，便于抄写和阅读
///
/// 最后一组可能不足 `width` 个字符。
pub fn codegroup(text: &str, width: NonZeroUsize, separator: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width.get())
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(separator)
}
