//! 字符集定义
//!
//! 32 字符自定义字母表：`0-9` + `A-Y`（去掉易混淆的 I/L/O/Z），
//! 其中 U 固定以小写 `u` 输出，用来和 V 区分（哨兵小写字符）。

use std::collections::HashMap;

use crate::error::{Error, Result};

/// 默认字符集，下标即数值 (0-31)
pub const CHARSET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTuVWXY";

/// 进制
pub const BASE: u32 = 32;

/// 默认形近字符映射（在大小写折叠之后应用，键区分大小写）
pub const DEFAULT_ALIASES: [Alias; 5] = [
    Alias::new('U', 'u'),
    Alias::new('O', '0'),
    Alias::new('I', '1'),
    Alias::new('L', '1'),
    Alias::new('Z', '2'),
];

/// 形近字符 -> 规范字符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub struct Alias {
    pub from: char,
    pub to: char,
}

impl Alias {
    #[must_use]
    pub const fn new(from: char, to: char) -> Self {
        Self { from, to }
    }
}

/// 有序 32 字符字母表.
///
/// 不变式：32 个 ASCII 字母或数字，忽略大小写后互不相同，
/// 最多一个小写字母（哨兵）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; 32],
    sentinel: Option<u8>,
}

impl Alphabet {
    /// 默认字母表 [`CHARSET`]，哨兵为 `u`
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            symbols: *CHARSET,
            sentinel: Some(b'u'),
        }
    }

    /// 从字符串构造并校验字母表.
    ///
    /// # Errors
    /// 长度不是 32、含非 ASCII 字母数字、大小写折叠后重复、
    /// 或出现多个小写字母时返回 [`Error::InvalidAlphabet`]。
    pub fn new(symbols: &str) -> Result<Self> {
        if let Some(c) = symbols.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidAlphabet(format!(
                "'{c}' is not an ASCII letter or digit"
            )));
        }
        let count = symbols.len();
        let symbols: [u8; 32] = symbols.as_bytes().try_into().map_err(|_| {
            Error::InvalidAlphabet(format!("expected 32 symbols, got {count}"))
        })?;

        let mut sentinel = None;
        for (i, &c) in symbols.iter().enumerate() {
            if symbols.iter().take(i).any(|p| p.eq_ignore_ascii_case(&c)) {
                return Err(Error::InvalidAlphabet(format!(
                    "'{}' appears more than once (case-insensitive)",
                    char::from(c)
                )));
            }
            if c.is_ascii_lowercase() {
                if let Some(prev) = sentinel {
                    return Err(Error::InvalidAlphabet(format!(
                        "only one lower-case symbol allowed, found '{}' and '{}'",
                        char::from(prev),
                        char::from(c)
                    )));
                }
                sentinel = Some(c);
            }
        }

        Ok(Self { symbols, sentinel })
    }

    /// 数值 -> 字符（只取低 5 位）
    #[inline]
    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub fn symbol(&self, digit: u8) -> char {
        // & 0x1F 保证下标 < 32
        char::from(self.symbols[usize::from(digit & 0x1F)])
    }

    /// 数值 0 对应的字符，用于补位
    #[must_use]
    pub const fn zero(&self) -> char {
        self.symbols[0] as char
    }

    /// 哨兵小写字符
    #[must_use]
    pub fn sentinel(&self) -> Option<char> {
        self.sentinel.map(char::from)
    }

    /// 精确匹配（区分大小写）时的数值
    #[must_use]
    pub fn position(&self, c: char) -> Option<u8> {
        let c = u8::try_from(c).ok()?;
        self.symbols
            .iter()
            .position(|&x| x == c)
            .and_then(|i| u8::try_from(i).ok())
    }

    /// 是否为字母表字符（区分大小写）
    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.position(c).is_some()
    }

    /// 按数值顺序遍历 `(digit, symbol)`
    pub fn iter(&self) -> impl Iterator<Item = (u8, char)> + '_ {
        (0u8..).zip(self.symbols.iter().map(|&b| char::from(b)))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (_, c) in self.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// 有序形近字符表，第一条命中的规则生效.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    rules: Vec<Alias>,
}

impl AliasTable {
    /// 默认表 [`DEFAULT_ALIASES`]，目标均在默认字母表内
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rules: DEFAULT_ALIASES.to_vec(),
        }
    }

    /// # Errors
    /// 任一规则的目标字符不在字母表中，或源字符本身就是字母表字符
    /// （会改写转义记号）时返回 [`Error::InvalidAlias`]。
    pub fn new(alphabet: &Alphabet, rules: &[Alias]) -> Result<Self> {
        if let Some(bad) = rules
            .iter()
            .find(|a| alphabet.contains(a.from) || !alphabet.contains(a.to))
        {
            return Err(Error::InvalidAlias {
                from: bad.from,
                to: bad.to,
            });
        }
        Ok(Self {
            rules: rules.to_vec(),
        })
    }

    #[inline]
    #[must_use]
    pub fn apply(&self, c: char) -> char {
        self.rules
            .iter()
            .find(|a| a.from == c)
            .map_or(c, |a| a.to)
    }

    #[must_use]
    pub fn rules(&self) -> &[Alias] {
        &self.rules
    }
}

/// 解码字典：所有可接受的输入字符 -> 数值.
///
/// 包含字母表本身、各字母的大小写变体（哨兵接受大写）以及形近字符。
#[derive(Debug, Clone)]
pub struct DecodeMap {
    map: HashMap<char, u8>,
}

impl DecodeMap {
    #[must_use]
    pub fn new(alphabet: &Alphabet, aliases: &AliasTable) -> Self {
        let mut map = HashMap::with_capacity(96);
        for (digit, c) in alphabet.iter() {
            map.insert(c, digit);
        }
        // 字母表字符优先，变体和别名不覆盖已有项
        for (digit, c) in alphabet.iter() {
            let variant = if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            map.entry(variant).or_insert(digit);
        }
        for alias in aliases.rules() {
            // AliasTable 已保证目标在字母表内
            if let Some(digit) = alphabet.position(alias.to) {
                map.entry(alias.from).or_insert(digit);
                map.entry(alias.from.to_ascii_lowercase()).or_insert(digit);
            }
        }
        Self { map }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, c: char) -> Option<u8> {
        self.map.get(&c).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
