//! 32 进制任意精度编解码
//!
//! - 编码：十进制大整数 -> 字母表字符串，最短 2 位（`0 -> "00"`, `10 -> "0A"`）
//! - 解码：逐字符累加 `total = total * 32 + digit`，非法字符按 [`Policy`] 处理

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::charset::{Alphabet, DecodeMap, BASE};
use crate::error::{Error, Result};

/// 最短输出长度
pub const MIN_LEN: usize = 2;

/// 解码时遇到字典外字符的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum Policy {
    /// 立即报错
    #[default]
    Reject,
    /// 跳过，不参与累加
    Skip,
    /// 视为数值 0
    #[cfg_attr(feature = "config", serde(alias = "substitute_zero"))]
    Zero,
}

impl std::str::FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "skip" => Ok(Self::Skip),
            "zero" | "substitute-zero" | "substitute_zero" => Ok(Self::Zero),
            other => Err(Error::InvalidInput(format!("unknown policy '{other}'"))),
        }
    }
}

/// 非负整数 -> 字母表字符串.
#[must_use]
pub fn encode(alphabet: &Alphabet, number: &BigUint) -> String {
    // to_radix_be(32) 对 0 返回 [0]
    let digits = number.to_radix_be(BASE);
    let mut out = String::with_capacity(digits.len().max(MIN_LEN));
    for _ in digits.len()..MIN_LEN {
        out.push(alphabet.zero());
    }
    out.extend(digits.into_iter().map(|d| alphabet.symbol(d)));
    out
}

/// 有符号入口：负数返回 [`Error::InvalidInput`].
///
/// # Errors
/// `number < 0` 时返回错误。
pub fn encode_signed(alphabet: &Alphabet, number: &BigInt) -> Result<String> {
    if number.sign() == Sign::Minus {
        return Err(Error::InvalidInput(format!(
            "cannot encode negative number {number}"
        )));
    }
    Ok(encode(alphabet, number.magnitude()))
}

/// 十进制字符串入口.
///
/// # Errors
/// 非十进制整数返回 [`Error::InvalidNumber`]，负数返回 [`Error::InvalidInput`]。
pub fn encode_decimal(alphabet: &Alphabet, decimal: &str) -> Result<String> {
    let trimmed = decimal.trim();
    let number: BigInt = trimmed
        .parse()
        .map_err(|_| Error::InvalidNumber(trimmed.to_string()))?;
    encode_signed(alphabet, &number)
}

/// 字母表字符串 -> 非负整数.
///
/// 空串返回 0。
///
/// # Errors
/// `Policy::Reject` 下遇到字典外字符返回 [`Error::InvalidCharacter`]（位置按字符计）。
pub fn decode(map: &DecodeMap, input: &str, policy: Policy) -> Result<BigUint> {
    let mut total = BigUint::zero();
    for (index, character) in input.chars().enumerate() {
        let digit = match (map.get(character), policy) {
            (Some(d), _) => d,
            (None, Policy::Reject) => return Err(Error::InvalidCharacter { character, index }),
            (None, Policy::Skip) => continue,
            (None, Policy::Zero) => 0,
        };
        total <<= 5u32;
        total += u32::from(digit);
    }
    Ok(total)
}
