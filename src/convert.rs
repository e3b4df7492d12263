//! 统一转换入口
//!
//! - 末尾 `b32`（大小写不敏感）：去掉后缀，按编码串解码为十进制
//! - 纯数字：十进制 -> 编码串
//! - 其它：规范化后解码为十进制

use crate::error::{Error, Result};
use crate::Codec;

/// 转换方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum Mode {
    /// 十进制整数 -> 编码串
    Encode,
    /// 任意文本 / URL -> 十进制整数（完整规范化）
    Decode,
    /// 已是编码串 -> 十进制整数（只做大小写和形近折叠）
    DecodeCode,
    /// 十进制整数 -> 编码串 -> 反向转义后的文本
    Recover,
}

impl Mode {
    /// 按输入内容判断方向，返回方向与实际要转换的部分.
    #[must_use]
    pub fn detect(input: &str) -> (Self, &str) {
        let trimmed = input.trim();
        if let Some(code) = strip_b32_suffix(trimmed) {
            return (Self::DecodeCode, code);
        }
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            (Self::Encode, trimmed)
        } else {
            (Self::Decode, trimmed)
        }
    }
}

fn strip_b32_suffix(s: &str) -> Option<&str> {
    let split = s.len().checked_sub(3)?;
    let suffix = s.get(split..)?;
    if suffix.eq_ignore_ascii_case("b32") {
        s.get(..split)
    } else {
        None
    }
}

/// 一次转换的结果
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize))]
pub struct Conversion {
    pub mode: Mode,
    pub input: String,
    /// 解码时为规范化后的编码串，`Recover` 时为中间编码串
    pub payload: Option<String>,
    pub output: String,
}

/// 按指定方向转换.
///
/// # Errors
/// - `Encode` / `Recover`：输入不是非负十进制整数
/// - `Decode` / `DecodeCode`：规范化后为空（[`Error::EmptyPayload`]）或解码失败；
///   配置了 `show_payload_on_error` 时解码失败包装为 [`Error::Undecodable`]
pub fn convert(codec: &Codec, input: &str, mode: Mode) -> Result<Conversion> {
    let input = input.trim();
    match mode {
        Mode::Encode => Ok(Conversion {
            mode,
            input: input.to_string(),
            payload: None,
            output: codec.encode_decimal(input)?,
        }),
        Mode::Recover => {
            let code = codec.encode_decimal(input)?;
            let output = codec.unescape(&code);
            Ok(Conversion {
                mode,
                input: input.to_string(),
                payload: Some(code),
                output,
            })
        }
        Mode::Decode => decode_payload(codec, mode, input, codec.normalize(input)),
        Mode::DecodeCode => decode_payload(codec, mode, input, codec.fold_code(input)),
    }
}

/// 自动判断方向后转换.
///
/// # Errors
/// 同 [`convert`]。
pub fn convert_auto(codec: &Codec, input: &str) -> Result<Conversion> {
    let (mode, body) = Mode::detect(input);
    let mut conversion = convert(codec, body, mode)?;
    input.trim().clone_into(&mut conversion.input);
    Ok(conversion)
}

fn decode_payload(codec: &Codec, mode: Mode, input: &str, payload: String) -> Result<Conversion> {
    if payload.is_empty() {
        return Err(Error::EmptyPayload);
    }
    match codec.decode(&payload, codec.policy()) {
        Ok(number) => Ok(Conversion {
            mode,
            input: input.to_string(),
            payload: Some(payload),
            output: number.to_string(),
        }),
        Err(source) if codec.show_payload_on_error() => Err(Error::Undecodable {
            payload,
            source: Box::new(source),
        }),
        Err(err) => Err(err),
    }
}
