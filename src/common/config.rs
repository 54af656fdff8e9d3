//!
//! # 输出配置
//!
//! 密文的展示方式。分组只影响呈现，不影响算法本身的结果。
//!
use crate::common::utils::codegroup;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// 密文输出配置
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// 码组宽度，`None` 表示不分组
    #[serde(default = "default_group_width")]
    pub group_width: Option<NonZeroUsize>,
    /// 码组之间的分隔符
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_group_width() -> Option<NonZeroUsize> {
    NonZeroUsize::new(5)
}

fn default_separator() -> String {
    " ".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            group_width: default_group_width(),
            separator: default_separator(),
        }
    }
}

impl OutputConfig {
    /// 原样输出，不分组
    pub fn ungrouped() -> Self {
        Self {
            group_width: None,
            ..Self::default()
        }
    }

    /// 将配置应用到一段密文
    pub fn apply(&self, ciphertext: &str) -> String {
        match self.group_width {
            Some(width) => codegroup(ciphertext, width, &self.separator),
            None => ciphertext.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_default() {
        let config = OutputConfig::default();
        assert_eq!(config.group_width.map(NonZeroUsize::get), Some(5));
        assert_eq!(config.separator, " ");
        assert_eq!(config.apply("YHQLYLGLYLFL"), "YHQLY LGLYL FL");
    }

    #[test]
    fn test_output_config_ungrouped() {
        assert_eq!(OutputConfig::ungrouped().apply("YHQLYLGLYLFL"), "YHQLYLGLYLFL");
    }

    #[test]
    fn test_output_config_deserialize_with_defaults() {
        let config: OutputConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, OutputConfig::default());

        let config: OutputConfig =
            serde_json::from_str(r#"{"group_width": null, "separator": "-"}"#).unwrap();
        assert_eq!(config.group_width, None);
        assert_eq!(config.separator, "-");
    }

    #[test]
    fn test_output_config_rejects_zero_width() {
        let result = serde_json::from_str::<OutputConfig>(r#"{"group_width": 0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_config_roundtrip() {
        let config = OutputConfig {
            group_width: NonZeroUsize::new(4),
            separator: "/".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<OutputConfig>(&json).unwrap(), config);
    }
}
