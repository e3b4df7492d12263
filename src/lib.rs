//! pincode32 - 32 进制文本 / 大整数互转
//!
//! 把任意短文本（或 URL 提取出的文本）可逆地映射为非负大整数，再映射回来。
//!
//! # 流程
//!
//! ```text
//! 文本 ──提取载荷──▶ 正向转义 ──折叠/过滤──▶ 编码串 ──32 进制解码──▶ 整数
//! 整数 ──32 进制编码──▶ 编码串 ──反向转义──▶ 近似原文（大小写、分隔符、形近字符有损）
//! ```
//!
//! # 字符集
//!
//! `0123456789ABCDEFGHJKMNPQRSTuVWXY`：去掉 I/L/O/Z，U 以小写 `u` 输出。
//!
//! # Example
//!
//! ```
//! use pincode32::{Codec, Mode, Policy};
//!
//! let codec = Codec::standard();
//!
//! // 十进制 -> 编码串（最短 2 位）
//! assert_eq!(codec.encode_decimal("10").unwrap(), "0A");
//!
//! // 编码串 -> 十进制（大小写不敏感，U 视为 u）
//! assert_eq!(codec.decode("0a", Policy::Reject).unwrap().to_string(), "10");
//!
//! // 任意文本 -> 整数 -> 文本
//! let number = codec.convert("Help me", Mode::Decode).unwrap().output;
//! let text = codec.convert(&number, Mode::Recover).unwrap().output;
//! assert_eq!(text, "HE1P ME");
//! ```

use std::sync::LazyLock;

use num_bigint::{BigInt, BigUint};

pub mod base32;
pub mod charset;
pub mod config;
pub mod convert;
pub mod error;
pub mod escape;
pub mod normalize;

#[cfg(feature = "config")]
pub mod settings;

// Re-exports
pub use base32::Policy;
pub use charset::{Alias, AliasTable, Alphabet, DecodeMap, CHARSET};
pub use config::CodecConfig;
pub use convert::{Conversion, Mode};
pub use error::{Error, Result};
pub use escape::{EscapeRule, EscapeTable};
pub use normalize::{NormalizeOptions, UrlMode};

static STANDARD: LazyLock<Codec> = LazyLock::new(Codec::build_standard);

/// 编解码器：启动时由配置构造一次，之后只读，可在线程间共享.
#[derive(Debug, Clone)]
pub struct Codec {
    alphabet: Alphabet,
    aliases: AliasTable,
    decode_map: DecodeMap,
    escapes: EscapeTable,
    options: NormalizeOptions,
    policy: Policy,
    show_payload_on_error: bool,
}

impl Codec {
    /// 由配置构造，校验字母表、形近字符表与转义表.
    ///
    /// # Errors
    /// 任一表不满足不变式时返回对应的 `Invalid*` 错误。
    pub fn new(config: &CodecConfig) -> Result<Self> {
        let alphabet = Alphabet::new(&config.alphabet)?;
        let aliases = AliasTable::new(&alphabet, &config.aliases)?;
        let escapes = EscapeTable::new(&alphabet, config.escapes.clone())?;
        let decode_map = DecodeMap::new(&alphabet, &aliases);
        Ok(Self {
            alphabet,
            aliases,
            decode_map,
            escapes,
            options: config.normalize.clone(),
            policy: config.policy,
            show_payload_on_error: config.show_payload_on_error,
        })
    }

    /// 默认配置的全局实例
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    fn build_standard() -> Self {
        let config = CodecConfig::default();
        let alphabet = Alphabet::standard();
        let aliases = AliasTable::standard();
        let decode_map = DecodeMap::new(&alphabet, &aliases);
        Self {
            alphabet,
            aliases,
            decode_map,
            escapes: EscapeTable::standard(),
            options: config.normalize,
            policy: config.policy,
            show_payload_on_error: config.show_payload_on_error,
        }
    }

    /// 整数 -> 编码串.
    ///
    /// # Errors
    /// 负数返回 [`Error::InvalidInput`]。
    pub fn encode(&self, number: &BigInt) -> Result<String> {
        base32::encode_signed(&self.alphabet, number)
    }

    /// 非负整数 -> 编码串
    #[must_use]
    pub fn encode_unsigned(&self, number: &BigUint) -> String {
        base32::encode(&self.alphabet, number)
    }

    /// 十进制字符串 -> 编码串.
    ///
    /// # Errors
    /// 非十进制整数或负数时返回错误。
    pub fn encode_decimal(&self, decimal: &str) -> Result<String> {
        base32::encode_decimal(&self.alphabet, decimal)
    }

    /// 编码串 -> 整数.
    ///
    /// # Errors
    /// `Policy::Reject` 下遇到非法字符返回 [`Error::InvalidCharacter`]。
    pub fn decode(&self, code: &str, policy: Policy) -> Result<BigUint> {
        base32::decode(&self.decode_map, code, policy)
    }

    /// 使用配置中的策略解码.
    ///
    /// # Errors
    /// 同 [`Codec::decode`]。
    pub fn decode_with_default(&self, code: &str) -> Result<BigUint> {
        self.decode(code, self.policy)
    }

    #[must_use]
    pub fn escape(&self, text: &str) -> String {
        self.escapes.forward(text)
    }

    #[must_use]
    pub fn unescape(&self, escaped: &str) -> String {
        self.escapes.reverse(escaped)
    }

    #[must_use]
    pub fn extract_payload(&self, raw: &str) -> String {
        normalize::extract_payload(raw, &self.options)
    }

    #[must_use]
    pub fn fold(&self, input: &str) -> String {
        normalize::fold(input, &self.alphabet, &self.aliases, &self.options)
    }

    #[must_use]
    pub fn fold_code(&self, input: &str) -> String {
        normalize::fold_code(input, &self.alphabet, &self.aliases)
    }

    /// 完整规范化，结果只含字母表字符（`keep_alphanumeric` 关闭时除外）
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        normalize::normalize_for_decode(
            raw,
            &self.escapes,
            &self.alphabet,
            &self.aliases,
            &self.options,
        )
    }

    /// # Errors
    /// 见 [`convert::convert`]。
    pub fn convert(&self, input: &str, mode: Mode) -> Result<Conversion> {
        convert::convert(self, input, mode)
    }

    /// # Errors
    /// 见 [`convert::convert_auto`]。
    pub fn convert_auto(&self, input: &str) -> Result<Conversion> {
        convert::convert_auto(self, input)
    }

    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[must_use]
    pub const fn policy(&self) -> Policy {
        self.policy
    }

    #[must_use]
    pub const fn show_payload_on_error(&self) -> bool {
        self.show_payload_on_error
    }

    #[must_use]
    pub const fn options(&self) -> &NormalizeOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api() {
        let codec_result = Codec::new(&CodecConfig::default());
        assert!(codec_result.is_ok());
        let Ok(codec) = codec_result else {
            return;
        };

        let code_result = codec.encode(&BigInt::from(1_000_000));
        assert!(code_result.is_ok());
        let Ok(code) = code_result else {
            return;
        };
        let decoded_result = codec.decode_with_default(&code);
        assert!(decoded_result.is_ok());
        let Ok(decoded) = decoded_result else {
            return;
        };
        assert_eq!(decoded, BigUint::from(1_000_000u32));
    }

    #[test]
    fn test_standard_matches_default_config() {
        let built = Codec::new(&CodecConfig::default());
        assert!(built.is_ok());
        let Ok(built) = built else {
            return;
        };
        let standard = Codec::standard();
        for input in ["", "Hello, World!", "https://example.com/a?b#c", "qQuU"] {
            assert_eq!(built.normalize(input), standard.normalize(input));
            assert_eq!(built.escape(input), standard.escape(input));
        }
        assert_eq!(built.alphabet(), standard.alphabet());
    }

    #[test]
    fn test_codec_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Codec>();
    }
}
