//! 编解码配置
//!
//! 启动时构造一次，之后只读。启用 `config` feature 时可从 TOML 读写。

use crate::base32::Policy;
use crate::charset::{Alias, CHARSET, DEFAULT_ALIASES};
use crate::escape::{default_rules, EscapeRule};
use crate::normalize::NormalizeOptions;

/// 全部可配置项.
///
/// 字段顺序即 TOML 输出顺序：标量在前，表在后。
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct CodecConfig {
    /// 32 字符字母表，最多一个小写字符
    pub alphabet: String,
    /// 解码遇到非法字符时的策略
    pub policy: Policy,
    /// 解码失败时在错误里附带规范化后的载荷
    pub show_payload_on_error: bool,
    pub normalize: NormalizeOptions,
    pub aliases: Vec<Alias>,
    /// 有序转义规则，自转义规则必须在最前
    pub escapes: Vec<EscapeRule>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            alphabet: String::from_utf8_lossy(CHARSET).into_owned(),
            policy: Policy::default(),
            show_payload_on_error: false,
            normalize: NormalizeOptions::default(),
            aliases: DEFAULT_ALIASES.to_vec(),
            escapes: default_rules(),
        }
    }
}

impl CodecConfig {
    #[must_use]
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }
}
